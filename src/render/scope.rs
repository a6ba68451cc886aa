//! Run-scoped render state.
//!
//! [`RenderScope`] is filled in during planning (zoom levels, tile offsets,
//! render behaviors from the command line) and only read afterwards, when
//! tiles are rendered. Nothing here is synchronized; planning happens on one
//! thread before any rendering starts.

use std::collections::BTreeSet;

use rustc_hash::FxHashMap;

use crate::config::{MapSection, RenderConfig, ValidationList};
use crate::core::{PerRotation, RenderBehavior, Rotation};
use crate::debug;
use crate::world::TilePos;

/// Per-run planning state for every map and world of a [`RenderConfig`].
#[derive(Debug, Clone)]
pub struct RenderScope<'a> {
    config: &'a RenderConfig,

    map_zoomlevel: FxHashMap<String, i32>,
    render_behavior: FxHashMap<String, PerRotation<RenderBehavior>>,

    world_zoomlevel: FxHashMap<String, i32>,
    world_used_rotations: FxHashMap<String, BTreeSet<Rotation>>,
    world_tile_offset: FxHashMap<String, PerRotation<TilePos>>,
}

impl<'a> RenderScope<'a> {
    /// Every map starts at zoom level 0 with all rotations on auto, every
    /// world at zoom level 0 with no used rotations and zero tile offsets.
    pub fn new(config: &'a RenderConfig) -> Self {
        let mut scope = Self {
            config,
            map_zoomlevel: FxHashMap::default(),
            render_behavior: FxHashMap::default(),
            world_zoomlevel: FxHashMap::default(),
            world_used_rotations: FxHashMap::default(),
            world_tile_offset: FxHashMap::default(),
        };

        for map in config.maps() {
            let name = map.short_name().to_string();
            scope.map_zoomlevel.insert(name.clone(), 0);
            scope
                .render_behavior
                .insert(name, PerRotation::splat(RenderBehavior::Auto));
        }

        for name in config.worlds().keys() {
            scope.world_zoomlevel.insert(name.clone(), 0);
            scope.world_used_rotations.insert(name.clone(), BTreeSet::new());
            scope
                .world_tile_offset
                .insert(name.clone(), PerRotation::splat(TilePos::default()));
        }

        scope
    }

    pub fn config(&self) -> &'a RenderConfig {
        self.config
    }

    // ========================================================================
    // worlds
    // ========================================================================

    /// Record rotations rendered for `world`. The set only grows.
    pub fn set_used_rotations(&mut self, world: &str, rotations: impl IntoIterator<Item = Rotation>) {
        self.world_used_rotations
            .entry(world.to_string())
            .or_default()
            .extend(rotations);
    }

    pub fn used_rotations(&self, world: &str) -> BTreeSet<Rotation> {
        self.world_used_rotations
            .get(world)
            .cloned()
            .unwrap_or_default()
    }

    pub fn world_zoomlevel(&self, world: &str) -> i32 {
        self.world_zoomlevel.get(world).copied().unwrap_or_default()
    }

    pub fn set_world_zoomlevel(&mut self, world: &str, zoomlevel: i32) {
        self.world_zoomlevel.insert(world.to_string(), zoomlevel);
    }

    /// Pixel offset aligning the tiles of `world` in `rotation`.
    pub fn world_tile_offset(&self, world: &str, rotation: Rotation) -> TilePos {
        self.world_tile_offset
            .get(world)
            .map(|offsets| offsets[rotation])
            .unwrap_or_default()
    }

    pub fn set_world_tile_offset(&mut self, world: &str, rotation: Rotation, offset: TilePos) {
        self.world_tile_offset
            .entry(world.to_string())
            .or_insert_with(|| PerRotation::splat(TilePos::default()))[rotation] = offset;
    }

    /// Offsets of all four rotations, in rotation index order.
    pub fn world_tile_offsets(&self, world: &str) -> PerRotation<TilePos> {
        self.world_tile_offset
            .get(world)
            .copied()
            .unwrap_or_default()
    }

    // ========================================================================
    // maps
    // ========================================================================

    pub fn map_zoomlevel(&self, map: &str) -> i32 {
        self.map_zoomlevel.get(map).copied().unwrap_or_default()
    }

    pub fn set_map_zoomlevel(&mut self, map: &str, zoomlevel: i32) {
        self.map_zoomlevel.insert(map.to_string(), zoomlevel);
    }

    pub fn render_behavior(&self, map: &str, rotation: Rotation) -> RenderBehavior {
        self.render_behavior
            .get(map)
            .map(|behaviors| behaviors[rotation])
            .unwrap_or_default()
    }

    /// Set the behavior of one rotation, or of all four with `None`.
    pub fn set_render_behavior(&mut self, map: &str, rotation: Option<Rotation>, behavior: RenderBehavior) {
        let behaviors = self
            .render_behavior
            .entry(map.to_string())
            .or_insert_with(|| PerRotation::splat(RenderBehavior::Auto));
        match rotation {
            Some(rotation) => behaviors[rotation] = behavior,
            None => behaviors.fill(behavior),
        }
    }

    /// Every rotation the map declares is skipped.
    pub fn is_complete_render_skip(&self, map: &str) -> bool {
        self.all_declared(map, RenderBehavior::Skip)
    }

    /// Every rotation the map declares is forced.
    pub fn is_complete_render_force(&self, map: &str) -> bool {
        self.all_declared(map, RenderBehavior::Force)
    }

    fn all_declared(&self, map: &str, behavior: RenderBehavior) -> bool {
        self.config.map(map).is_some_and(|section| {
            section
                .rotations()
                .iter()
                .all(|rotation| self.render_behavior(map, rotation) == behavior)
        })
    }

    /// Apply `behavior` to `map[:rotation]` specs, e.g. `day` or `day:tl`.
    ///
    /// Specs naming an unknown map, an unknown rotation or a rotation the map
    /// does not render are skipped with a warning.
    pub fn set_render_behaviors<S: AsRef<str>>(&mut self, specs: &[S], behavior: RenderBehavior) -> ValidationList {
        let config = self.config;
        let mut warnings = ValidationList::new();

        for spec in specs {
            let spec = spec.as_ref();
            let (name, rotation) = match spec.split_once(':') {
                Some((name, rotation)) => (name, Some(rotation)),
                None => (spec, None),
            };

            let Some(map) = config.map(name) else {
                warnings.warning(format!("Unknown map '{name}'."));
                continue;
            };

            let rotation = match rotation {
                None => None,
                Some(short) => match parse_declared_rotation(map, short) {
                    Ok(rotation) => Some(rotation),
                    Err(message) => {
                        warnings.warning(message);
                        continue;
                    }
                },
            };

            debug!("plan"; "{spec} -> {behavior}");
            self.set_render_behavior(name, rotation, behavior);
        }

        warnings
    }

    /// Apply the command line lists in order of precedence.
    ///
    /// `skip_all` (or else the `skip` list) goes first, then `auto`, then
    /// `force`, so a slot named in several lists ends up with the last one.
    pub fn parse_render_behaviors<S: AsRef<str>>(
        &mut self,
        skip_all: bool,
        skip: &[S],
        auto: &[S],
        force: &[S],
    ) -> ValidationList {
        let mut warnings = ValidationList::new();

        if skip_all {
            for behaviors in self.render_behavior.values_mut() {
                behaviors.fill(RenderBehavior::Skip);
            }
        } else {
            warnings.extend(self.set_render_behaviors(skip, RenderBehavior::Skip));
        }

        warnings.extend(self.set_render_behaviors(auto, RenderBehavior::Auto));
        warnings.extend(self.set_render_behaviors(force, RenderBehavior::Force));
        warnings
    }
}

fn parse_declared_rotation(map: &MapSection, short: &str) -> Result<Rotation, String> {
    let rotation = Rotation::from_short_name(short)
        .ok_or_else(|| format!("Unknown rotation '{short}'."))?;

    if !map.has_rotation(rotation) {
        return Err(format!(
            "Map '{}' does not have rotation '{}'.",
            map.short_name(),
            short
        ));
    }
    Ok(rotation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_support::Fixture;

    const CONFIG: &str = "\
output_dir = output

[world:overworld]
input_dir = world

[world:nether]
input_dir = nether

[map:map1]
world = overworld
rotations = top-left top-right

[map:map2]
world = nether
";

    fn resolve(fixture: &Fixture) -> RenderConfig {
        let (config, validation, ok) = fixture.resolve(CONFIG);
        assert!(ok, "{validation}");
        config
    }

    fn behaviors(scope: &RenderScope, map: &str) -> Vec<RenderBehavior> {
        Rotation::ALL
            .into_iter()
            .map(|r| scope.render_behavior(map, r))
            .collect()
    }

    #[test]
    fn test_initial_state() {
        let fixture = Fixture::new();
        let config = resolve(&fixture);
        let scope = RenderScope::new(&config);

        assert_eq!(behaviors(&scope, "map1"), vec![RenderBehavior::Auto; 4]);
        assert_eq!(scope.map_zoomlevel("map1"), 0);
        assert_eq!(scope.world_zoomlevel("nether"), 0);
        assert!(scope.used_rotations("overworld").is_empty());
        assert_eq!(
            scope.world_tile_offset("overworld", Rotation::BottomLeft),
            TilePos::new(0, 0)
        );
        assert!(!scope.is_complete_render_skip("map1"));
        assert!(!scope.is_complete_render_force("map1"));
    }

    #[test]
    fn test_used_rotations_accumulate() {
        let fixture = Fixture::new();
        let config = resolve(&fixture);
        let mut scope = RenderScope::new(&config);

        scope.set_used_rotations("overworld", [Rotation::TopRight]);
        scope.set_used_rotations("overworld", [Rotation::TopLeft, Rotation::TopRight]);
        assert_eq!(
            scope.used_rotations("overworld").into_iter().collect::<Vec<_>>(),
            vec![Rotation::TopLeft, Rotation::TopRight]
        );
        assert!(scope.used_rotations("nether").is_empty());
    }

    #[test]
    fn test_zoomlevels_and_offsets() {
        let fixture = Fixture::new();
        let config = resolve(&fixture);
        let mut scope = RenderScope::new(&config);

        scope.set_map_zoomlevel("map1", 7);
        scope.set_world_zoomlevel("overworld", 9);
        scope.set_world_tile_offset("overworld", Rotation::TopRight, TilePos::new(3, -2));

        assert_eq!(scope.map_zoomlevel("map1"), 7);
        assert_eq!(scope.map_zoomlevel("map2"), 0);
        assert_eq!(scope.world_zoomlevel("overworld"), 9);
        assert_eq!(
            scope.world_tile_offset("overworld", Rotation::TopRight),
            TilePos::new(3, -2)
        );
        assert_eq!(
            scope.world_tile_offsets("overworld")[Rotation::TopLeft],
            TilePos::new(0, 0)
        );
    }

    #[test]
    fn test_complete_skip_only_checks_declared_rotations() {
        let fixture = Fixture::new();
        let config = resolve(&fixture);
        let mut scope = RenderScope::new(&config);

        scope.set_render_behavior("map1", Some(Rotation::TopLeft), RenderBehavior::Skip);
        assert!(!scope.is_complete_render_skip("map1"));
        scope.set_render_behavior("map1", Some(Rotation::TopRight), RenderBehavior::Skip);
        // bottom rotations are still auto but map1 does not render them
        assert!(scope.is_complete_render_skip("map1"));

        scope.set_render_behavior("map2", None, RenderBehavior::Force);
        assert!(scope.is_complete_render_force("map2"));
        assert!(!scope.is_complete_render_force("missing"));
    }

    #[test]
    fn test_skip_all_with_force_override() {
        let fixture = Fixture::new();
        let config = resolve(&fixture);
        let mut scope = RenderScope::new(&config);

        let none: [&str; 0] = [];
        let warnings = scope.parse_render_behaviors(true, &none, &none, &["map1"]);
        assert!(warnings.is_empty());
        assert_eq!(behaviors(&scope, "map1"), vec![RenderBehavior::Force; 4]);
        assert_eq!(behaviors(&scope, "map2"), vec![RenderBehavior::Skip; 4]);
        assert!(scope.is_complete_render_skip("map2"));
    }

    #[test]
    fn test_single_rotation_spec() {
        let fixture = Fixture::new();
        let config = resolve(&fixture);
        let mut scope = RenderScope::new(&config);

        let warnings = scope.set_render_behaviors(&["map1:tl"], RenderBehavior::Force);
        assert!(warnings.is_empty());
        assert_eq!(scope.render_behavior("map1", Rotation::TopLeft), RenderBehavior::Force);
        assert_eq!(scope.render_behavior("map1", Rotation::TopRight), RenderBehavior::Auto);

        let warnings = scope.set_render_behaviors(&["map1:bogus"], RenderBehavior::Skip);
        assert_eq!(warnings.warning_count(), 1);
        assert_eq!(warnings.error_count(), 0);
        assert_eq!(
            behaviors(&scope, "map1"),
            vec![
                RenderBehavior::Force,
                RenderBehavior::Auto,
                RenderBehavior::Auto,
                RenderBehavior::Auto
            ]
        );
    }

    #[test]
    fn test_undeclared_rotation_and_unknown_map_warn() {
        let fixture = Fixture::new();
        let config = resolve(&fixture);
        let mut scope = RenderScope::new(&config);

        let warnings = scope.set_render_behaviors(&["map1:br", "nope", "map2"], RenderBehavior::Skip);
        let messages: Vec<_> = warnings.iter().map(|m| m.message.as_str()).collect();
        assert_eq!(
            messages,
            vec!["Map 'map1' does not have rotation 'br'.", "Unknown map 'nope'."]
        );
        assert_eq!(behaviors(&scope, "map1"), vec![RenderBehavior::Auto; 4]);
        assert_eq!(behaviors(&scope, "map2"), vec![RenderBehavior::Skip; 4]);
    }

    #[test]
    fn test_list_precedence() {
        let fixture = Fixture::new();
        let config = resolve(&fixture);
        let mut scope = RenderScope::new(&config);

        let warnings = scope.parse_render_behaviors(
            false,
            &["map1", "map2"],
            &["map1:tr", "map2"],
            &["map1:tr"],
        );
        assert!(warnings.is_empty());
        assert_eq!(scope.render_behavior("map1", Rotation::TopLeft), RenderBehavior::Skip);
        assert_eq!(scope.render_behavior("map1", Rotation::TopRight), RenderBehavior::Force);
        assert_eq!(behaviors(&scope, "map2"), vec![RenderBehavior::Auto; 4]);
    }
}
