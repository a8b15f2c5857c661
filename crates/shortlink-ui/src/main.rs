#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Entry point for the Shortlink settings page; native builds only print how to serve it.

#[cfg(target_arch = "wasm32")]
fn main() {
    shortlink_ui::run_app();
}

#[cfg(not(target_arch = "wasm32"))]
const NATIVE_HINT: &str = "shortlink-ui renders the account settings page (language and color \
theme) in the browser.\nServe it from crates/shortlink-ui with `trunk serve`, or build it with \
`cargo build --target wasm32-unknown-unknown`.";

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::io::Result<()> {
    use std::io::Write;

    writeln!(std::io::stderr().lock(), "{NATIVE_HINT}")
}
