//! Page-level feature slices.

pub(crate) mod settings;
