//! Shared presentational atoms.

pub(crate) mod badge;
pub(crate) mod select;

pub(crate) use badge::BetaBadge;
pub(crate) use select::Select;
