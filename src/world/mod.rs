//! World geometry: coordinates and the crop filter.

mod crop;
mod pos;

pub use crop::{Bounds, CropShape, WorldCrop};
pub use pos::{BlockPos, CHUNK_SIZE, ChunkPos, REGION_SIZE, RegionPos, TilePos};
