//! `[map:<name>]` section.
//!
//! # Example
//!
//! ```text
//! [map:overworld_day]
//! name = Overworld (day)        # Long name shown in the viewer
//! world = overworld             # Name of a [world:*] section
//! texture_dir = textures        # Defaults to the installed textures
//! rotations = top-left bottom-right
//! rendermode = daylight         # daylight | nightlight | cave
//! texture_size = 12             # 1..=32, a tile is 32 * texture_size pixels
//! render_unknown_blocks = false
//! render_leaves_transparent = true
//! render_biomes = true
//! use_image_timestamps = true
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use super::{Section, unknown_option};
use crate::config::document::ConfigSection;
use crate::config::types::{ConfigValue, Field, ValidationList};
use crate::config::util::resolve_dir_field;
use crate::core::{Rotation, RotationSet};

/// Blocks along a tile edge; the tile width in pixels is this times `texture_size`.
pub const TILE_WIDTH_BLOCKS: i32 = 32;

const DEFAULT_TEXTURE_SIZE: i32 = 12;

/// Lighting/visibility mode of a map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Rendermode {
    #[default]
    Daylight,
    Nightlight,
    Cave,
}

impl Rendermode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Daylight => "daylight",
            Self::Nightlight => "nightlight",
            Self::Cave => "cave",
        }
    }
}

impl fmt::Display for Rendermode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ConfigValue for Rendermode {
    fn parse_value(raw: &str) -> Option<Self> {
        match raw {
            "daylight" => Some(Self::Daylight),
            "nightlight" => Some(Self::Nightlight),
            "cave" => Some(Self::Cave),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapSection {
    global: bool,
    short_name: String,

    long_name: Field<String>,
    world: Field<String>,
    texture_dir: Field<PathBuf>,
    rotations: Field<RotationSet>,
    rendermode: Field<Rendermode>,
    texture_size: Field<i32>,

    render_unknown_blocks: Field<bool>,
    render_leaves_transparent: Field<bool>,
    render_biomes: Field<bool>,
    use_image_timestamps: Field<bool>,
}

impl MapSection {
    /// The `[global:maps]` defaults.
    pub fn global() -> Self {
        Self::blank("maps", true)
    }

    /// Default for `texture_dir` when the key is absent.
    pub fn set_default_texture_dir(&mut self, dir: PathBuf) {
        self.texture_dir.set_default(dir);
    }

    /// Section name, the identifier used on the command line and in the manifest.
    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    pub fn long_name(&self) -> &str {
        self.long_name
            .value()
            .map_or(self.short_name.as_str(), String::as_str)
    }

    /// Referenced world section, empty if unset.
    pub fn world(&self) -> &str {
        self.world.value().map_or("", String::as_str)
    }

    pub fn texture_dir(&self) -> Option<&Path> {
        self.texture_dir.value().map(PathBuf::as_path)
    }

    pub fn rotations(&self) -> &RotationSet {
        self.rotations.get()
    }

    pub fn has_rotation(&self, rotation: Rotation) -> bool {
        self.rotations().contains(rotation)
    }

    pub fn rendermode(&self) -> Rendermode {
        *self.rendermode.get()
    }

    pub fn texture_size(&self) -> i32 {
        *self.texture_size.get()
    }

    /// Tile edge in pixels.
    pub fn tile_size(&self) -> i32 {
        TILE_WIDTH_BLOCKS * self.texture_size()
    }

    pub fn render_unknown_blocks(&self) -> bool {
        *self.render_unknown_blocks.get()
    }

    pub fn render_leaves_transparent(&self) -> bool {
        *self.render_leaves_transparent.get()
    }

    pub fn render_biomes(&self) -> bool {
        *self.render_biomes.get()
    }

    pub fn use_image_timestamps(&self) -> bool {
        *self.use_image_timestamps.get()
    }
}

impl Section for MapSection {
    fn blank(name: &str, global: bool) -> Self {
        Self {
            global,
            short_name: name.to_string(),
            long_name: Field::with_default(name.to_string()),
            world: Field::new(),
            texture_dir: Field::new(),
            rotations: Field::with_default([Rotation::TopLeft].into_iter().collect()),
            rendermode: Field::with_default(Rendermode::Daylight),
            texture_size: Field::with_default(DEFAULT_TEXTURE_SIZE),
            render_unknown_blocks: Field::with_default(false),
            render_leaves_transparent: Field::with_default(true),
            render_biomes: Field::with_default(true),
            use_image_timestamps: Field::with_default(true),
        }
    }

    fn is_global(&self) -> bool {
        self.global
    }

    fn load(&mut self, section: &ConfigSection, config_dir: &Path, validation: &mut ValidationList) {
        for (key, value) in section.entries() {
            let value = value.as_str();
            match key.as_str() {
                "name" => {
                    self.long_name.load(key, value, validation);
                }
                "world" => {
                    self.world.load(key, value, validation);
                }
                "texture_dir" => {
                    if self.texture_dir.load(key, value, validation) {
                        resolve_dir_field(&mut self.texture_dir, key, config_dir, validation);
                    }
                }
                "rotations" => {
                    self.rotations.load(key, value, validation);
                }
                "rendermode" => {
                    self.rendermode.load(key, value, validation);
                }
                "texture_size" => {
                    self.texture_size.load(key, value, validation);
                }
                "render_unknown_blocks" => {
                    self.render_unknown_blocks.load(key, value, validation);
                }
                "render_leaves_transparent" => {
                    self.render_leaves_transparent.load(key, value, validation);
                }
                "render_biomes" => {
                    self.render_biomes.load(key, value, validation);
                }
                "use_image_timestamps" => {
                    self.use_image_timestamps.load(key, value, validation);
                }
                _ => unknown_option(key, validation),
            }
        }
    }

    fn merge(defaults: &Self, overrides: &Self) -> Self {
        Self {
            global: overrides.global,
            short_name: overrides.short_name.clone(),
            long_name: Field::merge(&defaults.long_name, &overrides.long_name),
            world: Field::merge(&defaults.world, &overrides.world),
            texture_dir: Field::merge(&defaults.texture_dir, &overrides.texture_dir),
            rotations: Field::merge(&defaults.rotations, &overrides.rotations),
            rendermode: Field::merge(&defaults.rendermode, &overrides.rendermode),
            texture_size: Field::merge(&defaults.texture_size, &overrides.texture_size),
            render_unknown_blocks: Field::merge(
                &defaults.render_unknown_blocks,
                &overrides.render_unknown_blocks,
            ),
            render_leaves_transparent: Field::merge(
                &defaults.render_leaves_transparent,
                &overrides.render_leaves_transparent,
            ),
            render_biomes: Field::merge(&defaults.render_biomes, &overrides.render_biomes),
            use_image_timestamps: Field::merge(
                &defaults.use_image_timestamps,
                &overrides.use_image_timestamps,
            ),
        }
    }

    fn validate(&mut self, validation: &mut ValidationList) {
        if !(1..=32).contains(self.texture_size.get()) {
            validation.error("'texture_size' must be a number between 1 and 32!");
        }

        if self.rotations.get().is_empty() {
            validation.error("You have to specify at least one rotation ('rotations')!");
        }

        if !self.global {
            self.world
                .require(validation, "You have to specify a world ('world')!");
            self.texture_dir.require(
                validation,
                "You have to specify a texture directory ('texture_dir')!",
            );
        }
    }

    fn inherit(&self) -> Self {
        let mut section = self.clone();
        section.global = false;
        section
    }
}
