//! Mapsmith - configuration resolver and render planning core for
//! isometric world map renderers.
//!
//! | Module    | Purpose                                                       |
//! |-----------|---------------------------------------------------------------|
//! | `config`  | INI document, world/map/marker sections, validation messages  |
//! | `world`   | block/chunk/region coordinates and the crop filter            |
//! | `render`  | per-run render scope and the viewer manifest                  |
//! | `core`    | rotations and render behaviors                                |
//! | `cli`     | `check`, `dump` and `plan` commands                           |
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use mapsmith::config::{RenderConfig, ResourceDirs, ValidationMap};
//! use mapsmith::render::RenderScope;
//!
//! let mut config = RenderConfig::new(ResourceDirs::discover());
//! let mut validation = ValidationMap::new();
//! if !config.parse(Path::new("render.conf"), &mut validation) {
//!     eprintln!("{validation}");
//!     return;
//! }
//!
//! let scope = RenderScope::new(&config);
//! for map in scope.generate_manifest() {
//!     println!("{} -> {}", map.short_name, map.world_name);
//! }
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod logger;
pub mod render;
pub mod utils;
pub mod world;
