//! World coordinates at block, chunk and region granularity, plus tile positions.
//!
//! 1 region = 32x32 chunks = 512x512 blocks, 1 chunk = 16x16 blocks.
//! Conversions floor towards negative infinity so block -1 is in chunk -1.

use std::ops::Add;

/// Blocks per chunk edge.
pub const CHUNK_SIZE: i32 = 16;
/// Blocks per region edge.
pub const REGION_SIZE: i32 = 512;

/// A single block. `y` is the vertical axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BlockPos {
    pub x: i32,
    pub z: i32,
    pub y: i32,
}

impl BlockPos {
    pub const fn new(x: i32, z: i32, y: i32) -> Self {
        Self { x, z, y }
    }

    pub const fn chunk(&self) -> ChunkPos {
        ChunkPos::new(self.x.div_euclid(CHUNK_SIZE), self.z.div_euclid(CHUNK_SIZE))
    }
}

impl Add for BlockPos {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.z + other.z, self.y + other.y)
    }
}

/// A 16x16 column of blocks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ChunkPos {
    pub x: i32,
    pub z: i32,
}

impl ChunkPos {
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    pub const fn region(&self) -> RegionPos {
        let per_region = REGION_SIZE / CHUNK_SIZE;
        RegionPos::new(self.x.div_euclid(per_region), self.z.div_euclid(per_region))
    }

    /// Block with the lowest x/z inside this chunk, at y = 0.
    pub const fn origin(&self) -> BlockPos {
        BlockPos::new(self.x * CHUNK_SIZE, self.z * CHUNK_SIZE, 0)
    }
}

/// A 32x32 group of chunks, one region file on disk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RegionPos {
    pub x: i32,
    pub z: i32,
}

impl RegionPos {
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }
}

/// Position of a rendered tile (or a pixel offset in tile space).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TilePos {
    pub x: i32,
    pub y: i32,
}

impl TilePos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_to_chunk_floors_negative() {
        assert_eq!(BlockPos::new(15, 16, 0).chunk(), ChunkPos::new(0, 1));
        assert_eq!(BlockPos::new(-1, -16, 0).chunk(), ChunkPos::new(-1, -1));
        assert_eq!(BlockPos::new(-17, 0, 0).chunk(), ChunkPos::new(-2, 0));
    }

    #[test]
    fn test_chunk_to_region() {
        assert_eq!(ChunkPos::new(31, 32).region(), RegionPos::new(0, 1));
        assert_eq!(ChunkPos::new(-1, -33).region(), RegionPos::new(-1, -2));
    }

    #[test]
    fn test_chunk_origin() {
        assert_eq!(ChunkPos::new(-2, 3).origin(), BlockPos::new(-32, 48, 0));
    }
}
