//! Path normalization utilities.
//!
//! - `normalize_path` - file system paths (canonicalize + fallback)
//! - `resolve_config_path` - resolve a configured path against the config directory

use std::path::{Path, PathBuf};

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first (resolves symlinks, `.`, `..`).
/// Falls back to:
/// - Return as-is if already absolute
/// - Join with current directory if relative
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

/// Resolve a path value from the configuration file.
///
/// `~` is expanded first. Relative paths are taken relative to `config_dir`
/// (the directory holding the configuration file), never the working directory.
///
/// # Example
/// ```ignore
/// // config at /srv/maps/render.conf, value "worlds/main"
/// resolve_config_path(Path::new("worlds/main"), Path::new("/srv/maps"))
///     // -> /srv/maps/worlds/main
/// ```
pub fn resolve_config_path(path: &Path, config_dir: &Path) -> PathBuf {
    let expanded = match path.to_str() {
        Some(raw) => PathBuf::from(shellexpand::tilde(raw).into_owned()),
        None => path.to_path_buf(),
    };

    if expanded.is_absolute() {
        normalize_path(&expanded)
    } else {
        normalize_path(&config_dir.join(expanded))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path_relative() {
        let normalized = normalize_path(Path::new("relative/path/file.txt"));
        assert!(normalized.is_absolute());
    }

    #[test]
    fn test_resolve_config_path_absolute() {
        let resolved = resolve_config_path(Path::new("/absolute/missing"), Path::new("/config"));
        assert_eq!(resolved, PathBuf::from("/absolute/missing"));
    }

    #[test]
    fn test_resolve_config_path_relative_to_config_dir() {
        let resolved = resolve_config_path(Path::new("worlds/main"), Path::new("/config"));
        assert_eq!(resolved, PathBuf::from("/config/worlds/main"));
    }

    #[test]
    fn test_resolve_config_path_existing_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("world")).unwrap();

        let resolved = resolve_config_path(Path::new("world"), dir.path());
        assert_eq!(resolved, dir.path().canonicalize().unwrap().join("world"));
    }
}
