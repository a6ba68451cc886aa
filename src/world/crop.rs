//! Spatial filter deciding which parts of a world are rendered.
//!
//! A crop is either rectangular (independent, optionally open x/z bounds) or
//! circular (center and radius in block units). The vertical y bound applies
//! in both modes.
//!
//! Containment is answered at three granularities. Coarser answers never
//! exclude something a finer answer includes: if a block is contained, so are
//! its chunk and region. Circular crops over-approximate at chunk and region
//! level so partially covered chunks/regions are still visited.

use super::pos::{BlockPos, CHUNK_SIZE, ChunkPos, REGION_SIZE, RegionPos};

/// Closed interval with optional ends. A missing end is unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bounds {
    pub min: Option<i32>,
    pub max: Option<i32>,
}

impl Bounds {
    pub const fn unbounded() -> Self {
        Self {
            min: None,
            max: None,
        }
    }

    pub const fn new(min: i32, max: i32) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    #[inline]
    pub fn contains(&self, value: i32) -> bool {
        self.min.is_none_or(|min| value >= min) && self.max.is_none_or(|max| value <= max)
    }

    pub const fn is_bounded(&self) -> bool {
        self.min.is_some() || self.max.is_some()
    }
}

/// Bounds along one horizontal axis, kept at all three granularities.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct AxisBounds {
    block: Bounds,
    chunk: Bounds,
    region: Bounds,
}

impl AxisBounds {
    fn set_min(&mut self, value: i32) {
        self.block.min = Some(value);
        self.chunk.min = Some(value.div_euclid(CHUNK_SIZE));
        self.region.min = Some(value.div_euclid(REGION_SIZE));
    }

    fn set_max(&mut self, value: i32) {
        self.block.max = Some(value);
        self.chunk.max = Some(value.div_euclid(CHUNK_SIZE));
        self.region.max = Some(value.div_euclid(REGION_SIZE));
    }
}

/// Which crop geometry is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CropShape {
    #[default]
    Rectangular,
    Circular,
}

/// World crop with rectangular and circular modes.
///
/// Setting a rectangular bound switches to [`CropShape::Rectangular`],
/// setting the center or radius switches to [`CropShape::Circular`]. The last
/// setter wins; the world section never mixes both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorldCrop {
    shape: CropShape,
    x: AxisBounds,
    z: AxisBounds,
    y: Bounds,
    center: BlockPos,
    radius: i32,
}

impl WorldCrop {
    /// A crop that contains everything.
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn shape(&self) -> CropShape {
        self.shape
    }

    // ------------------------------------------------------------------------
    // setters
    // ------------------------------------------------------------------------

    pub fn set_min_x(&mut self, value: i32) {
        self.x.set_min(value);
        self.shape = CropShape::Rectangular;
    }

    pub fn set_max_x(&mut self, value: i32) {
        self.x.set_max(value);
        self.shape = CropShape::Rectangular;
    }

    pub fn set_min_z(&mut self, value: i32) {
        self.z.set_min(value);
        self.shape = CropShape::Rectangular;
    }

    pub fn set_max_z(&mut self, value: i32) {
        self.z.set_max(value);
        self.shape = CropShape::Rectangular;
    }

    pub fn set_min_y(&mut self, value: i32) {
        self.y.min = Some(value);
    }

    pub fn set_max_y(&mut self, value: i32) {
        self.y.max = Some(value);
    }

    /// Center of a circular crop. Only x and z are used.
    pub fn set_center(&mut self, center: BlockPos) {
        self.center = center;
        self.shape = CropShape::Circular;
    }

    pub fn set_radius(&mut self, radius: i32) {
        self.radius = radius;
        self.shape = CropShape::Circular;
    }

    // ------------------------------------------------------------------------
    // getters
    // ------------------------------------------------------------------------

    /// Block-scale x bounds.
    pub const fn bounds_x(&self) -> Bounds {
        self.x.block
    }

    /// Block-scale z bounds.
    pub const fn bounds_z(&self) -> Bounds {
        self.z.block
    }

    pub const fn bounds_y(&self) -> Bounds {
        self.y
    }

    pub const fn bounds_chunk_x(&self) -> Bounds {
        self.x.chunk
    }

    pub const fn bounds_chunk_z(&self) -> Bounds {
        self.z.chunk
    }

    pub const fn bounds_region_x(&self) -> Bounds {
        self.x.region
    }

    pub const fn bounds_region_z(&self) -> Bounds {
        self.z.region
    }

    pub const fn center(&self) -> BlockPos {
        self.center
    }

    pub const fn radius(&self) -> i32 {
        self.radius
    }

    // ------------------------------------------------------------------------
    // containment
    // ------------------------------------------------------------------------

    /// Whether any part of the region may be inside the crop.
    pub fn is_region_contained(&self, region: &RegionPos) -> bool {
        match self.shape {
            CropShape::Rectangular => {
                self.x.region.contains(region.x) && self.z.region.contains(region.z)
            }
            CropShape::Circular => {
                let size = i64::from(REGION_SIZE);
                self.within_radius(
                    i64::from(region.x) * size + size / 2,
                    i64::from(region.z) * size + size / 2,
                    size,
                )
            }
        }
    }

    /// Whether any part of the chunk may be inside the crop.
    pub fn is_chunk_contained(&self, chunk: &ChunkPos) -> bool {
        match self.shape {
            CropShape::Rectangular => {
                self.x.chunk.contains(chunk.x) && self.z.chunk.contains(chunk.z)
            }
            CropShape::Circular => {
                let size = i64::from(CHUNK_SIZE);
                self.within_radius(
                    i64::from(chunk.x) * size + size / 2,
                    i64::from(chunk.z) * size + size / 2,
                    size,
                )
            }
        }
    }

    /// Whether all four x/z corners of the chunk are inside the crop.
    ///
    /// The y bound is not considered.
    pub fn is_chunk_completely_contained(&self, chunk: &ChunkPos) -> bool {
        let corner = chunk.origin();
        let last = CHUNK_SIZE - 1;
        [(0, 0), (last, 0), (0, last), (last, last)]
            .into_iter()
            .all(|(dx, dz)| self.is_block_contained_xz(&(corner + BlockPos::new(dx, dz, 0))))
    }

    /// Exact horizontal test for a single block.
    pub fn is_block_contained_xz(&self, block: &BlockPos) -> bool {
        match self.shape {
            CropShape::Rectangular => self.x.block.contains(block.x) && self.z.block.contains(block.z),
            CropShape::Circular => self.within_radius(i64::from(block.x), i64::from(block.z), 0),
        }
    }

    /// Vertical test, independent of the crop shape.
    pub fn is_block_contained_y(&self, block: &BlockPos) -> bool {
        self.y.contains(block.y)
    }

    /// `(radius + slack)^2 >= dx^2 + dz^2`.
    ///
    /// Region centers reach about 2^40 blocks, so the squares are taken in 128 bits.
    fn within_radius(&self, x: i64, z: i64, slack: i64) -> bool {
        let dx = i128::from(x - i64::from(self.center.x));
        let dz = i128::from(z - i64::from(self.center.z));
        let reach = i128::from(i64::from(self.radius) + slack);
        reach * reach >= dx * dx + dz * dz
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rectangular(min_x: i32, max_x: i32, min_z: i32, max_z: i32) -> WorldCrop {
        let mut crop = WorldCrop::new();
        crop.set_min_x(min_x);
        crop.set_max_x(max_x);
        crop.set_min_z(min_z);
        crop.set_max_z(max_z);
        crop
    }

    fn circular(x: i32, z: i32, radius: i32) -> WorldCrop {
        let mut crop = WorldCrop::new();
        crop.set_center(BlockPos::new(x, z, 0));
        crop.set_radius(radius);
        crop
    }

    #[test]
    fn test_default_contains_everything() {
        let crop = WorldCrop::new();
        assert_eq!(crop.shape(), CropShape::Rectangular);
        assert!(crop.is_region_contained(&RegionPos::new(-100, 100)));
        assert!(crop.is_chunk_contained(&ChunkPos::new(5000, -5000)));
        assert!(crop.is_block_contained_xz(&BlockPos::new(i32::MAX, i32::MIN, 0)));
        assert!(crop.is_block_contained_y(&BlockPos::new(0, 0, -64)));
    }

    #[test]
    fn test_rectangular_single_region() {
        let crop = rectangular(0, 511, 0, 511);

        assert!(crop.is_region_contained(&RegionPos::new(0, 0)));
        assert!(!crop.is_region_contained(&RegionPos::new(1, 0)));
        assert!(!crop.is_region_contained(&RegionPos::new(0, -1)));

        assert!(crop.is_block_contained_xz(&BlockPos::new(511, 511, 0)));
        assert!(!crop.is_block_contained_xz(&BlockPos::new(512, 0, 0)));
        assert!(!crop.is_block_contained_xz(&BlockPos::new(-1, 0, 0)));
    }

    #[test]
    fn test_rectangular_derived_bounds_floor() {
        let mut crop = WorldCrop::new();
        crop.set_min_x(-1);
        crop.set_max_x(16);

        assert_eq!(crop.bounds_chunk_x(), Bounds::new(-1, 1));
        assert_eq!(crop.bounds_region_x(), Bounds::new(-1, 0));
        // z stays open
        assert!(!crop.bounds_z().is_bounded());
        assert!(crop.is_chunk_contained(&ChunkPos::new(-1, 1_000)));
        assert!(!crop.is_chunk_contained(&ChunkPos::new(2, 0)));
    }

    #[test]
    fn test_rectangular_half_open() {
        let mut crop = WorldCrop::new();
        crop.set_min_z(100);

        assert!(crop.is_block_contained_xz(&BlockPos::new(-9999, 100, 0)));
        assert!(!crop.is_block_contained_xz(&BlockPos::new(0, 99, 0)));
        assert!(crop.is_region_contained(&RegionPos::new(0, 0)));
        assert!(!crop.is_region_contained(&RegionPos::new(0, -1)));
    }

    #[test]
    fn test_inverted_bounds_are_stored() {
        let mut crop = WorldCrop::new();
        crop.set_min_x(10);
        crop.set_max_x(5);
        assert_eq!(crop.bounds_x(), Bounds::new(10, 5));
        assert!(!crop.is_block_contained_xz(&BlockPos::new(7, 0, 0)));
    }

    #[test]
    fn test_circular_block_boundary() {
        let crop = circular(0, 0, 100);
        assert_eq!(crop.shape(), CropShape::Circular);

        assert!(crop.is_block_contained_xz(&BlockPos::new(100, 0, 0)));
        assert!(!crop.is_block_contained_xz(&BlockPos::new(101, 0, 0)));
        assert!(crop.is_block_contained_xz(&BlockPos::new(70, 70, 0)));
        assert!(!crop.is_block_contained_xz(&BlockPos::new(71, 71, 0)));

        // coarser granularity over-approximates
        let chunk = BlockPos::new(101, 0, 0).chunk();
        assert!(crop.is_chunk_contained(&chunk));
        assert!(crop.is_region_contained(&chunk.region()));
    }

    #[test]
    fn test_circular_far_chunks_and_regions_excluded() {
        let crop = circular(0, 0, 100);
        assert!(!crop.is_chunk_contained(&ChunkPos::new(10, 0)));
        assert!(!crop.is_region_contained(&RegionPos::new(3, 0)));
        assert!(crop.is_region_contained(&RegionPos::new(-1, -1)));
    }

    #[test]
    fn test_circular_large_radius_does_not_overflow() {
        let crop = circular(0, 0, 2_000_000_000);
        assert!(crop.is_block_contained_xz(&BlockPos::new(1_000_000_000, 0, 0)));
        assert!(crop.is_region_contained(&RegionPos::new(1_000_000, 0)));
    }

    #[test]
    fn test_circular_extreme_coordinates() {
        let crop = circular(0, 0, 100);
        assert!(!crop.is_region_contained(&RegionPos::new(5_000_000, 0)));
        assert!(!crop.is_region_contained(&RegionPos::new(i32::MAX, i32::MIN)));
        assert!(!crop.is_chunk_contained(&ChunkPos::new(200_000_000, 0)));
        assert!(!crop.is_chunk_contained(&ChunkPos::new(i32::MIN, i32::MAX)));
        assert!(!crop.is_block_contained_xz(&BlockPos::new(i32::MAX, i32::MIN, 0)));

        let wide = circular(i32::MIN, i32::MAX, i32::MAX);
        assert!(wide.is_region_contained(&RegionPos::new(i32::MIN / REGION_SIZE, i32::MAX / REGION_SIZE)));
        assert!(wide.is_block_contained_xz(&BlockPos::new(i32::MIN, i32::MAX, 0)));
    }

    #[test]
    fn test_last_setter_wins() {
        let mut crop = rectangular(0, 15, 0, 15);
        crop.set_radius(5);
        assert_eq!(crop.shape(), CropShape::Circular);
        crop.set_max_x(20);
        assert_eq!(crop.shape(), CropShape::Rectangular);
    }

    #[test]
    fn test_chunk_completely_contained() {
        let crop = rectangular(0, 31, 0, 15);
        assert!(crop.is_chunk_completely_contained(&ChunkPos::new(0, 0)));
        assert!(crop.is_chunk_completely_contained(&ChunkPos::new(1, 0)));
        assert!(!crop.is_chunk_completely_contained(&ChunkPos::new(1, 1)));

        let crop = rectangular(0, 30, 0, 15);
        assert!(!crop.is_chunk_completely_contained(&ChunkPos::new(1, 0)));
    }

    #[test]
    fn test_chunk_completely_contained_ignores_y() {
        let mut crop = rectangular(0, 15, 0, 15);
        crop.set_min_y(200);
        crop.set_max_y(100);
        assert!(crop.is_chunk_completely_contained(&ChunkPos::new(0, 0)));
    }

    #[test]
    fn test_y_bounds_independent_of_shape() {
        let mut crop = circular(0, 0, 10);
        crop.set_min_y(10);
        crop.set_max_y(20);

        assert!(crop.is_block_contained_y(&BlockPos::new(5000, 5000, 15)));
        assert!(!crop.is_block_contained_y(&BlockPos::new(0, 0, 21)));
        assert!(!crop.is_block_contained_y(&BlockPos::new(0, 0, 9)));
        assert_eq!(crop.shape(), CropShape::Circular);
    }

    #[test]
    fn test_monotonic_containment() {
        let crops = [
            rectangular(-37, 1100, -600, 15),
            circular(-300, 250, 777),
            circular(5, -5, 0),
        ];

        for crop in &crops {
            for x in (-1200..1200).step_by(13) {
                for z in (-1200..1200).step_by(17) {
                    let block = BlockPos::new(x, z, 0);
                    if !crop.is_block_contained_xz(&block) {
                        continue;
                    }
                    let chunk = block.chunk();
                    assert!(crop.is_chunk_contained(&chunk), "{crop:?} chunk of {block:?}");
                    assert!(
                        crop.is_region_contained(&chunk.region()),
                        "{crop:?} region of {block:?}"
                    );
                }
            }
        }
    }
}
