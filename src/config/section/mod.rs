//! Section models.
//!
//! | Section          | Model            | Purpose                                   |
//! |------------------|------------------|-------------------------------------------|
//! | root             | `GeneralSection` | `output_dir`, `template_dir`              |
//! | `[world:<name>]` | `WorldSection`   | input world, world name, crop             |
//! | `[map:<name>]`   | `MapSection`     | world reference, rotations, render flags  |
//! | `[marker:<name>]`| `MarkerSection`  | sign prefix and title/text formats        |
//!
//! World, map and marker sections share the [`Section`] protocol: a `global:*`
//! section is parsed first and every instance section inherits from it via
//! [`Section::merge`].

mod general;
mod map;
mod marker;
mod world;

pub use general::GeneralSection;
pub use map::{MapSection, Rendermode};
pub use marker::{MarkerSection, Sign};
pub use world::WorldSection;

use std::path::Path;

use super::document::ConfigSection;
use super::types::ValidationList;

/// Shared parse protocol of world, map and marker sections.
pub trait Section: Clone {
    /// An empty section named `name`. Global sections relax required keys.
    fn blank(name: &str, global: bool) -> Self;

    fn is_global(&self) -> bool;

    /// Read the keys of `section` in file order.
    ///
    /// Coerces values, resolves paths against `config_dir` and warns about
    /// unknown keys.
    fn load(&mut self, section: &ConfigSection, config_dir: &Path, validation: &mut ValidationList);

    /// Field-wise combination of inherited `defaults` and an instance's own keys.
    ///
    /// Identity (name, global flag) comes from `overrides`.
    fn merge(defaults: &Self, overrides: &Self) -> Self;

    /// Cross-field checks, required keys, derived state.
    fn validate(&mut self, validation: &mut ValidationList);

    /// Copy of this section to use as the defaults of an instance section.
    fn inherit(&self) -> Self;

    /// Parse `section` on top of the values already held by `self`.
    ///
    /// Returns false if any error was recorded. Warnings are recorded either way.
    fn parse(
        &mut self,
        section: &ConfigSection,
        config_dir: &Path,
        validation: &mut ValidationList,
    ) -> bool {
        let errors_before = validation.error_count();

        let mut own = Self::blank(section.name(), self.is_global());
        own.load(section, config_dir, validation);
        *self = Self::merge(self, &own);
        self.validate(validation);

        validation.error_count() == errors_before
    }
}

/// Warning for a key no section model knows.
pub(crate) fn unknown_option(key: &str, validation: &mut ValidationList) {
    validation.warning(format!("Unknown configuration option '{key}'!"));
}
