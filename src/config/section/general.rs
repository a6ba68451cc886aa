//! Root section (keys before the first `[...]` header).
//!
//! # Example
//!
//! ```text
//! output_dir = output           # Where tiles and the viewer are written
//! template_dir = template       # Viewer template, defaults to the installed one
//! ```

use std::path::{Path, PathBuf};

use super::unknown_option;
use crate::config::document::ConfigSection;
use crate::config::types::{Field, ValidationList};
use crate::config::util::resolve_dir_field;
use crate::utils::path::resolve_config_path;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneralSection {
    output_dir: Field<PathBuf>,
    template_dir: Field<PathBuf>,
}

impl GeneralSection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installed template, used when `template_dir` is absent.
    pub fn set_default_template_dir(&mut self, dir: PathBuf) {
        self.template_dir.set_default(dir);
    }

    /// Parse the root section.
    ///
    /// `output_dir` is always required; it is resolved but may not exist yet.
    /// `template_dir` must be an existing directory and is only required when
    /// no default was set.
    pub fn parse(
        &mut self,
        section: &ConfigSection,
        config_dir: &Path,
        validation: &mut ValidationList,
    ) -> bool {
        let errors_before = validation.error_count();

        for (key, value) in section.entries() {
            match key.as_str() {
                "output_dir" => {
                    if self.output_dir.load(key, value, validation) {
                        let resolved = resolve_config_path(self.output_dir.get(), config_dir);
                        self.output_dir.set_value(resolved);
                    }
                }
                "template_dir" => {
                    if self.template_dir.load(key, value, validation) {
                        resolve_dir_field(&mut self.template_dir, key, config_dir, validation);
                    }
                }
                _ => unknown_option(key, validation),
            }
        }

        self.output_dir.require(
            validation,
            "You have to specify an output directory ('output_dir')!",
        );
        self.template_dir.require(
            validation,
            "You have to specify a template directory ('template_dir')!",
        );

        validation.error_count() == errors_before
    }

    pub fn output_dir(&self) -> Option<&Path> {
        self.output_dir.value().map(PathBuf::as_path)
    }

    pub fn template_dir(&self) -> Option<&Path> {
        self.template_dir.value().map(PathBuf::as_path)
    }

    /// `path` inside the output directory.
    pub fn output_path(&self, path: impl AsRef<Path>) -> Option<PathBuf> {
        self.output_dir().map(|dir| dir.join(path))
    }

    /// `path` inside the template directory.
    pub fn template_path(&self, path: impl AsRef<Path>) -> Option<PathBuf> {
        self.template_dir().map(|dir| dir.join(path))
    }
}
