//! Command-line interface module.

mod args;
pub mod check;
pub mod common;
pub mod dump;
pub mod plan;

pub use args::{Cli, Commands, PlanArgs};
