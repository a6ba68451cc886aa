//! Render configuration: worlds, maps and markers.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── document       # Raw INI-like document (sections + ordered entries)
//! ├── section/       # Section models
//! │   ├── general    # root keys (output_dir, template_dir)
//! │   ├── world      # [world:*]
//! │   ├── map        # [map:*]
//! │   └── marker     # [marker:*]
//! ├── types/         # Field<T>, validation messages, ConfigError
//! ├── util           # resource discovery, directory checks
//! └── mod.rs         # RenderConfig (this file)
//! ```
//!
//! # Resolution order
//!
//! 1. root section
//! 2. `[global:worlds]`, `[global:maps]`, `[global:marker]` (a failure stops here)
//! 3. warnings for unknown section types
//! 4. `[world:*]`, then `[map:*]`, then `[marker:*]`, each inheriting its global
//!
//! Every step records its messages in a [`ValidationMap`] under a context
//! label such as `World section 'overworld'`.

pub mod document;
pub mod section;
pub mod types;
mod util;

pub use document::{ConfigDocument, ConfigSection, GlobalKind, SectionKind};
pub use section::{GeneralSection, MapSection, MarkerSection, Rendermode, Section, Sign, WorldSection};
pub use types::{ConfigError, Field, Level, ValidationList, ValidationMap, ValidationMessage};
pub use util::{DATA_DIR_ENV, ResourceDirs, find_resource_dir};

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::debug;

/// Context label of root-level messages.
pub const CONTEXT_CONFIG_FILE: &str = "Configuration file";

/// Fully resolved configuration file.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    resources: ResourceDirs,

    general: GeneralSection,
    world_global: WorldSection,
    map_global: MapSection,
    marker_global: MarkerSection,

    worlds: BTreeMap<String, WorldSection>,
    maps: Vec<MapSection>,
    markers: Vec<MarkerSection>,
}

impl RenderConfig {
    /// Empty configuration using `resources` as defaults for
    /// `template_dir` and `texture_dir`.
    pub fn new(resources: ResourceDirs) -> Self {
        let mut general = GeneralSection::new();
        if let Some(dir) = &resources.template_dir {
            general.set_default_template_dir(dir.clone());
        }

        let mut map_global = MapSection::global();
        if let Some(dir) = &resources.texture_dir {
            map_global.set_default_texture_dir(dir.clone());
        }

        Self {
            resources,
            general,
            world_global: WorldSection::global(),
            map_global,
            marker_global: MarkerSection::global(),
            worlds: BTreeMap::new(),
            maps: Vec::new(),
            markers: Vec::new(),
        }
    }

    /// Read and resolve a configuration file.
    ///
    /// Relative paths inside the file are resolved against its directory.
    /// Returns false if any error was recorded; the messages are in `validation`.
    pub fn parse(&mut self, filename: &Path, validation: &mut ValidationMap) -> bool {
        let document = match ConfigDocument::load(filename) {
            Ok(document) => document,
            Err(err) => {
                validation.push(CONTEXT_CONFIG_FILE, ValidationMessage::error(err.to_string()).into());
                return false;
            }
        };

        let config_dir = match filename.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        self.parse_document(&document, &config_dir, validation)
    }

    /// Resolve an already tokenized document.
    pub fn parse_document(
        &mut self,
        document: &ConfigDocument,
        config_dir: &Path,
        validation: &mut ValidationMap,
    ) -> bool {
        *self = Self::new(self.resources.clone());

        let mut general_msgs = ValidationList::new();
        let mut ok = self.general.parse(document.root(), config_dir, &mut general_msgs);
        validation.push(CONTEXT_CONFIG_FILE, general_msgs);

        // a failed global section hides everything after it
        if let Some(section) = document.global_section(GlobalKind::Worlds) {
            let mut msgs = ValidationList::new();
            ok = self.world_global.parse(section, config_dir, &mut msgs) && ok;
            validation.push("Global world configuration", msgs);
            if !ok {
                return false;
            }
        }

        if let Some(section) = document.global_section(GlobalKind::Maps) {
            let mut msgs = ValidationList::new();
            ok = self.map_global.parse(section, config_dir, &mut msgs) && ok;
            validation.push("Global map configuration", msgs);
            if !ok {
                return false;
            }
        }

        if let Some(section) = document.global_section(GlobalKind::Marker) {
            let mut msgs = ValidationList::new();
            ok = self.marker_global.parse(section, config_dir, &mut msgs) && ok;
            validation.push("Global marker configuration", msgs);
            if !ok {
                return false;
            }
        }

        for section in document.sections() {
            if section.kind() == SectionKind::Unknown {
                validation.push(
                    format!(
                        "Section '{}' with type '{}'",
                        section.name(),
                        section.type_name()
                    ),
                    ValidationMessage::warning("Unknown section type!").into(),
                );
            }
        }

        for section in document.sections() {
            ok = match section.kind() {
                SectionKind::World => self.add_world(section, config_dir, validation),
                _ => true,
            } && ok;
        }

        for section in document.sections() {
            ok = match section.kind() {
                SectionKind::Map => self.add_map(section, config_dir, validation),
                _ => true,
            } && ok;
        }

        for section in document.sections() {
            ok = match section.kind() {
                SectionKind::Marker => self.add_marker(section, config_dir, validation),
                _ => true,
            } && ok;
        }

        debug!(
            "config";
            "resolved {} worlds, {} maps, {} markers",
            self.worlds.len(),
            self.maps.len(),
            self.markers.len()
        );
        ok
    }

    fn add_world(
        &mut self,
        section: &ConfigSection,
        config_dir: &Path,
        validation: &mut ValidationMap,
    ) -> bool {
        let mut msgs = ValidationList::new();
        let mut world = self.world_global.inherit();
        let mut ok = world.parse(section, config_dir, &mut msgs);

        if self.has_world(section.name()) {
            msgs.error(format!("World name '{}' already used!", section.name()));
            ok = false;
        } else {
            self.worlds.insert(section.name().to_string(), world);
        }

        validation.push(format!("World section '{}'", section.name()), msgs);
        ok
    }

    fn add_map(
        &mut self,
        section: &ConfigSection,
        config_dir: &Path,
        validation: &mut ValidationMap,
    ) -> bool {
        let mut msgs = ValidationList::new();
        let mut map = self.map_global.inherit();
        let mut ok = map.parse(section, config_dir, &mut msgs);

        if self.has_map(section.name()) {
            msgs.error(format!("Map name '{}' already used!", section.name()));
            ok = false;
        } else if !map.world().is_empty() && !self.has_world(map.world()) {
            msgs.error(format!("World '{}' does not exist!", map.world()));
            ok = false;
        } else {
            self.maps.push(map);
        }

        validation.push(format!("Map section '{}'", section.name()), msgs);
        ok
    }

    fn add_marker(
        &mut self,
        section: &ConfigSection,
        config_dir: &Path,
        validation: &mut ValidationMap,
    ) -> bool {
        let mut msgs = ValidationList::new();
        let mut marker = self.marker_global.inherit();
        let mut ok = marker.parse(section, config_dir, &mut msgs);

        if self.has_marker(section.name()) {
            msgs.error(format!("Marker name '{}' already used!", section.name()));
            ok = false;
        } else if ok {
            self.markers.push(marker);
        }

        validation.push(format!("Marker section '{}'", section.name()), msgs);
        ok
    }

    // ========================================================================
    // accessors
    // ========================================================================

    pub fn general(&self) -> &GeneralSection {
        &self.general
    }

    pub fn output_dir(&self) -> Option<&Path> {
        self.general.output_dir()
    }

    pub fn template_dir(&self) -> Option<&Path> {
        self.general.template_dir()
    }

    pub fn output_path(&self, path: impl AsRef<Path>) -> Option<PathBuf> {
        self.general.output_path(path)
    }

    pub fn template_path(&self, path: impl AsRef<Path>) -> Option<PathBuf> {
        self.general.template_path(path)
    }

    pub fn world_global(&self) -> &WorldSection {
        &self.world_global
    }

    pub fn map_global(&self) -> &MapSection {
        &self.map_global
    }

    pub fn marker_global(&self) -> &MarkerSection {
        &self.marker_global
    }

    pub fn has_world(&self, name: &str) -> bool {
        self.worlds.contains_key(name)
    }

    /// Worlds keyed by section name.
    pub fn worlds(&self) -> &BTreeMap<String, WorldSection> {
        &self.worlds
    }

    pub fn world(&self, name: &str) -> Option<&WorldSection> {
        self.worlds.get(name)
    }

    pub fn has_map(&self, short_name: &str) -> bool {
        self.map(short_name).is_some()
    }

    /// Maps in document order.
    pub fn maps(&self) -> &[MapSection] {
        &self.maps
    }

    pub fn map(&self, short_name: &str) -> Option<&MapSection> {
        self.maps.iter().find(|m| m.short_name() == short_name)
    }

    pub fn has_marker(&self, name: &str) -> bool {
        self.marker(name).is_some()
    }

    /// Marker groups in document order.
    pub fn markers(&self) -> &[MarkerSection] {
        &self.markers
    }

    pub fn marker(&self, name: &str) -> Option<&MarkerSection> {
        self.markers.iter().find(|m| m.name() == name)
    }

    // ========================================================================
    // dump
    // ========================================================================

    /// Human readable listing of the resolved configuration.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        let path = |p: Option<&Path>| p.map(|p| p.display().to_string()).unwrap_or_default();

        writeln!(out, "General:").ok();
        writeln!(out, "  output_dir = {}", path(self.output_dir())).ok();
        writeln!(out, "  template_dir = {}", path(self.template_dir())).ok();
        writeln!(out).ok();

        writeln!(out, "Global world configuration:").ok();
        dump_world(&mut out, &self.world_global);
        writeln!(out).ok();

        writeln!(out, "Global map configuration:").ok();
        dump_map(&mut out, &self.map_global);
        writeln!(out).ok();

        for (name, world) in &self.worlds {
            writeln!(out, "World '{name}':").ok();
            dump_world(&mut out, world);
            writeln!(out).ok();
        }

        for map in &self.maps {
            writeln!(out, "Map '{}':", map.short_name()).ok();
            dump_map(&mut out, map);
            writeln!(out).ok();
        }

        for marker in &self.markers {
            writeln!(out, "Marker '{}':", marker.name()).ok();
            writeln!(out, "  prefix = {}", marker.prefix()).ok();
            writeln!(out, "  title_format = {}", marker.title_format()).ok();
            writeln!(out, "  text_format = {}", marker.text_format()).ok();
            writeln!(out, "  icon = {}", marker.icon()).ok();
            writeln!(out, "  icon_size = {}", marker.icon_size()).ok();
            writeln!(out).ok();
        }

        out
    }
}

fn dump_world(out: &mut String, world: &WorldSection) {
    let input = world
        .input_dir()
        .map(|p| p.display().to_string())
        .unwrap_or_default();
    writeln!(out, "  input_dir = {input}").ok();
    writeln!(out, "  world_name = {}", world.world_name()).ok();
}

fn dump_map(out: &mut String, map: &MapSection) {
    let texture_dir = map
        .texture_dir()
        .map(|p| p.display().to_string())
        .unwrap_or_default();
    writeln!(out, "  name = {}", map.long_name()).ok();
    writeln!(out, "  world = {}", map.world()).ok();
    writeln!(out, "  texture_dir = {texture_dir}").ok();
    writeln!(out, "  rotations = {}", map.rotations()).ok();
    writeln!(out, "  rendermode = {}", map.rendermode()).ok();
    writeln!(out, "  texture_size = {}", map.texture_size()).ok();
    writeln!(out, "  render_unknown_blocks = {}", map.render_unknown_blocks()).ok();
    writeln!(out, "  render_leaves_transparent = {}", map.render_leaves_transparent()).ok();
    writeln!(out, "  render_biomes = {}", map.render_biomes()).ok();
    writeln!(out, "  use_image_timestamps = {}", map.use_image_timestamps()).ok();
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_support`)
// ============================================================================


// ============================================================================
// tests
// ============================================================================
