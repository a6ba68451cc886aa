//! Configuration utility functions.

use std::path::{Path, PathBuf};

use super::types::{Field, ValidationList};
use crate::utils::path::resolve_config_path;

/// Environment variable pointing at a data directory with `template/` and `textures/`.
pub const DATA_DIR_ENV: &str = "MAPSMITH_DATA_DIR";

/// Default locations of the shipped resources.
///
/// Used as defaults for `template_dir` and `texture_dir`. When a directory is
/// not found, the matching key becomes mandatory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceDirs {
    pub template_dir: Option<PathBuf>,
    pub texture_dir: Option<PathBuf>,
}

impl ResourceDirs {
    /// No defaults: both keys must be set in the document.
    pub fn none() -> Self {
        Self::default()
    }

    /// Search the usual install locations.
    pub fn discover() -> Self {
        Self {
            template_dir: find_resource_dir("template"),
            texture_dir: find_resource_dir("textures"),
        }
    }
}

/// Find a resource directory by searching, in order:
///
/// ```text
/// $MAPSMITH_DATA_DIR/<name>
/// <exe dir>/data/<name>
/// <exe dir>/../share/mapsmith/<name>
/// ~/.local/share/mapsmith/<name>
/// /usr/local/share/mapsmith/<name>
/// /usr/share/mapsmith/<name>
/// ```
pub fn find_resource_dir(name: &str) -> Option<PathBuf> {
    resource_candidates(name).into_iter().find(|dir| dir.is_dir())
}

fn resource_candidates(name: &str) -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(data_dir) = std::env::var_os(DATA_DIR_ENV) {
        candidates.push(PathBuf::from(data_dir).join(name));
    }

    if let Ok(exe) = std::env::current_exe()
        && let Some(exe_dir) = exe.parent()
    {
        candidates.push(exe_dir.join("data").join(name));
        candidates.push(exe_dir.join("../share/mapsmith").join(name));
    }

    candidates.push(PathBuf::from(shellexpand::tilde("~/.local/share/mapsmith").into_owned()).join(name));
    candidates.push(Path::new("/usr/local/share/mapsmith").join(name));
    candidates.push(Path::new("/usr/share/mapsmith").join(name));
    candidates
}

/// Resolve a just-loaded directory field against `config_dir` and check it exists.
///
/// Records an error naming `key` if the directory is missing.
pub fn resolve_dir_field(
    field: &mut Field<PathBuf>,
    key: &str,
    config_dir: &Path,
    validation: &mut ValidationList,
) -> bool {
    let Some(raw) = field.value().cloned() else {
        return false;
    };
    let resolved = resolve_config_path(&raw, config_dir);
    let exists = resolved.is_dir();
    if !exists {
        validation.error(format!(
            "'{key}' must be an existing directory! '{}' does not exist!",
            resolved.display()
        ));
    }
    field.set_value(resolved);
    exists
}
