//! Small helpers shared across the crate.
//!
//! - [`path`]: filesystem path normalization (`normalize_path`, `resolve_config_path`)
//! - [`plural`]: count formatting for reports

pub mod path;
mod plural;

pub use plural::{plural_count, plural_s};
