//! `check` command.

use std::path::Path;

use anyhow::{Result, bail};

use super::common::{render_report, resolve_config};
use crate::log;
use crate::utils::plural_count;

/// Validate the configuration file and print the report.
pub fn check_config(path: &Path) -> Result<()> {
    let resolved = resolve_config(path);
    eprintln!("{}", render_report(&resolved.validation, resolved.ok));

    if !resolved.ok {
        bail!(
            "configuration invalid: {}",
            plural_count(resolved.validation.error_count(), "error")
        );
    }

    let config = &resolved.config;
    log!(
        "config";
        "{}, {}, {}",
        plural_count(config.worlds().len(), "world"),
        plural_count(config.maps().len(), "map"),
        plural_count(config.markers().len(), "marker group")
    );
    Ok(())
}
