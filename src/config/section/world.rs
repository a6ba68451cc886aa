//! `[world:<name>]` section.
//!
//! # Example
//!
//! ```text
//! [world:overworld]
//! input_dir = worlds/overworld
//! world_name = world
//! crop_min_y = 0
//! crop_center_x = 0
//! crop_center_z = 0
//! crop_radius = 1000
//! ```
//!
//! Rectangular (`crop_min_x`, `crop_max_x`, `crop_min_z`, `crop_max_z`) and
//! circular (`crop_center_x`, `crop_center_z`, `crop_radius`) cropping are
//! mutually exclusive. `crop_min_y`/`crop_max_y` combine with either.

use std::path::{Path, PathBuf};

use super::{Section, unknown_option};
use crate::config::document::ConfigSection;
use crate::config::types::{Field, ValidationList};
use crate::config::util::resolve_dir_field;
use crate::world::{BlockPos, WorldCrop};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorldSection {
    global: bool,
    name: String,

    input_dir: Field<PathBuf>,
    world_name: Field<String>,

    min_y: Field<i32>,
    max_y: Field<i32>,
    min_x: Field<i32>,
    max_x: Field<i32>,
    min_z: Field<i32>,
    max_z: Field<i32>,
    center_x: Field<i32>,
    center_z: Field<i32>,
    radius: Field<i32>,

    crop: WorldCrop,
}

impl WorldSection {
    /// The `[global:worlds]` defaults.
    pub fn global() -> Self {
        Self::blank("worlds", true)
    }

    /// Section name (the key in `[world:<name>]`).
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn input_dir(&self) -> Option<&Path> {
        self.input_dir.value().map(PathBuf::as_path)
    }

    /// Name of the world directory inside the save, defaults to the section name.
    pub fn world_name(&self) -> &str {
        self.world_name.value().map_or(self.name.as_str(), String::as_str)
    }

    pub const fn world_crop(&self) -> &WorldCrop {
        &self.crop
    }

    /// Whether tiles should be re-centered on the cropped area.
    ///
    /// True for circular crops and for rectangular crops bounded on all four sides.
    pub fn needs_world_centering(&self) -> bool {
        let fully_bounded = self.min_x.is_loaded()
            && self.max_x.is_loaded()
            && self.min_z.is_loaded()
            && self.max_z.is_loaded();
        fully_bounded || self.is_crop_circular()
    }

    fn is_crop_rectangular(&self) -> bool {
        self.min_x.is_loaded()
            || self.max_x.is_loaded()
            || self.min_z.is_loaded()
            || self.max_z.is_loaded()
    }

    fn is_crop_circular(&self) -> bool {
        self.center_x.is_loaded() || self.center_z.is_loaded() || self.radius.is_loaded()
    }

    /// Loaded bounds of one axis. With `check`, inverted bounds are an error.
    fn axis_bounds(
        min: &Field<i32>,
        max: &Field<i32>,
        axis: &str,
        check: bool,
        validation: &mut ValidationList,
    ) -> (Option<i32>, Option<i32>) {
        let min = min.is_loaded().then(|| *min.get());
        let max = max.is_loaded().then(|| *max.get());
        if let (Some(lo), Some(hi)) = (min, max)
            && check
            && lo > hi
        {
            validation.error(format!(
                "min_{axis} must be smaller than or equal to max_{axis}!"
            ));
        }
        (min, max)
    }
}

impl Section for WorldSection {
    fn blank(name: &str, global: bool) -> Self {
        let mut section = Self {
            global,
            name: name.to_string(),
            ..Self::default()
        };
        section.world_name.set_default(name.to_string());
        section
    }

    fn is_global(&self) -> bool {
        self.global
    }

    fn load(&mut self, section: &ConfigSection, config_dir: &Path, validation: &mut ValidationList) {
        for (key, value) in section.entries() {
            match key.as_str() {
                "input_dir" => {
                    if self.input_dir.load(key, value, validation) {
                        resolve_dir_field(&mut self.input_dir, key, config_dir, validation);
                    }
                }
                "world_name" => {
                    self.world_name.load(key, value, validation);
                }
                "crop_min_y" => {
                    self.min_y.load(key, value, validation);
                }
                "crop_max_y" => {
                    self.max_y.load(key, value, validation);
                }
                "crop_min_x" => {
                    self.min_x.load(key, value, validation);
                }
                "crop_max_x" => {
                    self.max_x.load(key, value, validation);
                }
                "crop_min_z" => {
                    self.min_z.load(key, value, validation);
                }
                "crop_max_z" => {
                    self.max_z.load(key, value, validation);
                }
                "crop_center_x" => {
                    self.center_x.load(key, value, validation);
                }
                "crop_center_z" => {
                    self.center_z.load(key, value, validation);
                }
                "crop_radius" => {
                    self.radius.load(key, value, validation);
                }
                _ => unknown_option(key, validation),
            }
        }
    }

    fn merge(defaults: &Self, overrides: &Self) -> Self {
        Self {
            global: overrides.global,
            name: overrides.name.clone(),
            input_dir: Field::merge(&defaults.input_dir, &overrides.input_dir),
            world_name: Field::merge(&defaults.world_name, &overrides.world_name),
            min_y: Field::merge(&defaults.min_y, &overrides.min_y),
            max_y: Field::merge(&defaults.max_y, &overrides.max_y),
            min_x: Field::merge(&defaults.min_x, &overrides.min_x),
            max_x: Field::merge(&defaults.max_x, &overrides.max_x),
            min_z: Field::merge(&defaults.min_z, &overrides.min_z),
            max_z: Field::merge(&defaults.max_z, &overrides.max_z),
            center_x: Field::merge(&defaults.center_x, &overrides.center_x),
            center_z: Field::merge(&defaults.center_z, &overrides.center_z),
            radius: Field::merge(&defaults.radius, &overrides.radius),
            // derived again in validate()
            crop: WorldCrop::new(),
        }
    }

    fn validate(&mut self, validation: &mut ValidationList) {
        let mut crop = WorldCrop::new();

        let rectangular = self.is_crop_rectangular();
        let circular = self.is_crop_circular();

        if rectangular && circular {
            validation.error("You can not use both world cropping types at the same time!");
        }

        if rectangular {
            // with both types set only the conflict is reported
            let check = !circular;
            let (min_x, max_x) =
                Self::axis_bounds(&self.min_x, &self.max_x, "x", check, validation);
            let (min_z, max_z) =
                Self::axis_bounds(&self.min_z, &self.max_z, "z", check, validation);
            if let Some(v) = min_x {
                crop.set_min_x(v);
            }
            if let Some(v) = max_x {
                crop.set_max_x(v);
            }
            if let Some(v) = min_z {
                crop.set_min_z(v);
            }
            if let Some(v) = max_z {
                crop.set_max_z(v);
            }
        } else if circular {
            let message = "You have to specify crop_center_x, crop_center_z \
                           and crop_radius for circular world cropping!";
            let complete = self.center_x.require(validation, message)
                && self.center_z.require(validation, message)
                && self.radius.require(validation, message);
            if complete {
                crop.set_center(BlockPos::new(*self.center_x.get(), *self.center_z.get(), 0));
                crop.set_radius(*self.radius.get());
            }
        }

        let (min_y, max_y) = Self::axis_bounds(&self.min_y, &self.max_y, "y", true, validation);
        if let Some(v) = min_y {
            crop.set_min_y(v);
        }
        if let Some(v) = max_y {
            crop.set_max_y(v);
        }

        if !self.global {
            self.input_dir.require(
                validation,
                "You have to specify an input directory ('input_dir')!",
            );
        }

        self.crop = crop;
    }

    fn inherit(&self) -> Self {
        let mut section = self.clone();
        section.global = false;
        section
    }
}
