//! `dump` command.

use std::io::{Write, stdout};
use std::path::Path;

use anyhow::{Result, bail};

use super::common::{render_report, resolve_config};

/// Print the resolved configuration to stdout.
pub fn dump_config(path: &Path) -> Result<()> {
    let resolved = resolve_config(path);
    if !resolved.ok {
        eprintln!("{}", render_report(&resolved.validation, false));
        bail!("configuration invalid");
    }

    let mut out = stdout().lock();
    out.write_all(resolved.config.dump().as_bytes())?;
    out.flush()?;
    Ok(())
}
