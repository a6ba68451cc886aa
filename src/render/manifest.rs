//! Map descriptors handed to the web viewer.
//!
//! One [`MapDescriptor`] per map in document order. The viewer reads them as a
//! JSON object keyed by map short name:
//!
//! ```json
//! {
//!   "day": {
//!     "name": "Day",
//!     "worldName": "overworld",
//!     "textureSize": 12,
//!     "tileSize": 384,
//!     "maxZoom": 7,
//!     "rotations": [0, 1],
//!     "tileOffsets": [[0, 0], [3, -2], [0, 0], [0, 0]]
//!   }
//! }
//! ```

use serde::Serialize;
use serde_json::{Map, Value};

use super::RenderScope;

/// Tiling geometry of one map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapDescriptor {
    #[serde(skip)]
    pub short_name: String,
    #[serde(rename = "name")]
    pub long_name: String,
    /// World name inside the save directory, not the section name.
    pub world_name: String,
    pub texture_size: i32,
    pub tile_size: i32,
    pub max_zoom: i32,
    /// Rotation indices in the order the map declares them.
    pub rotations: Vec<usize>,
    /// `[x, y]` pixel offset of the owning world, indexed by rotation.
    pub tile_offsets: [[i32; 2]; 4],
}

impl RenderScope<'_> {
    /// Descriptors of all maps in document order.
    pub fn generate_manifest(&self) -> Vec<MapDescriptor> {
        let config = self.config();

        config
            .maps()
            .iter()
            .map(|map| {
                let world_name = config
                    .world(map.world())
                    .map_or(map.world(), |world| world.world_name());
                let offsets = self.world_tile_offsets(map.world());

                MapDescriptor {
                    short_name: map.short_name().to_string(),
                    long_name: map.long_name().to_string(),
                    world_name: world_name.to_string(),
                    texture_size: map.texture_size(),
                    tile_size: map.tile_size(),
                    max_zoom: self.map_zoomlevel(map.short_name()),
                    rotations: map.rotations().iter().map(|r| r.index()).collect(),
                    tile_offsets: offsets.map(|pos| [pos.x, pos.y]).into_array(),
                }
            })
            .collect()
    }
}

/// JSON object keyed by short name, preserving descriptor order.
pub fn manifest_json(descriptors: &[MapDescriptor]) -> serde_json::Result<Value> {
    let mut object = Map::new();
    for descriptor in descriptors {
        object.insert(descriptor.short_name.clone(), serde_json::to_value(descriptor)?);
    }
    Ok(Value::Object(object))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_support::Fixture;
    use crate::core::Rotation;
    use crate::world::TilePos;
    use serde_json::json;

    const CONFIG: &str = "\
output_dir = output

[world:overworld]
input_dir = world
world_name = Survival

[world:nether]
input_dir = nether

[map:night]
name = Night
world = overworld
rotations = bottom-right top-left
texture_size = 16

[map:day]
world = nether
";

    #[test]
    fn test_manifest_follows_document_order() {
        let fixture = Fixture::new();
        let (config, validation, ok) = fixture.resolve(CONFIG);
        assert!(ok, "{validation}");

        let mut scope = RenderScope::new(&config);
        scope.set_map_zoomlevel("night", 6);
        scope.set_world_tile_offset("overworld", Rotation::BottomRight, TilePos::new(5, -7));

        let manifest = scope.generate_manifest();
        let names: Vec<_> = manifest.iter().map(|d| d.short_name.as_str()).collect();
        assert_eq!(names, vec!["night", "day"]);

        let night = &manifest[0];
        assert_eq!(night.long_name, "Night");
        assert_eq!(night.world_name, "Survival");
        assert_eq!(night.texture_size, 16);
        assert_eq!(night.tile_size, 512);
        assert_eq!(night.max_zoom, 6);
        assert_eq!(night.rotations, vec![2, 0]);
        assert_eq!(night.tile_offsets, [[0, 0], [0, 0], [5, -7], [0, 0]]);

        let day = &manifest[1];
        assert_eq!(day.long_name, "day");
        assert_eq!(day.world_name, "nether");
        assert_eq!(day.tile_size, 384);
        assert_eq!(day.max_zoom, 0);
    }

    #[test]
    fn test_manifest_json_shape() {
        let fixture = Fixture::new();
        let (config, _, ok) = fixture.resolve(CONFIG);
        assert!(ok);

        let scope = RenderScope::new(&config);
        let value = manifest_json(&scope.generate_manifest()).unwrap();

        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["night", "day"]);
        assert_eq!(
            value["day"],
            json!({
                "name": "day",
                "worldName": "nether",
                "textureSize": 12,
                "tileSize": 384,
                "maxZoom": 0,
                "rotations": [0],
                "tileOffsets": [[0, 0], [0, 0], [0, 0], [0, 0]],
            })
        );
    }
}
