//! Map viewing orientations.
//!
//! A map is rendered from up to four fixed orientations. Each has a long
//! name used in the configuration file (`top-left`) and a short name used on
//! the command line (`tl`). The numeric index is what the viewer sees.

use std::fmt;
use std::ops::{Index, IndexMut};

/// One of the four viewing orientations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rotation {
    TopLeft = 0,
    TopRight = 1,
    BottomRight = 2,
    BottomLeft = 3,
}

impl Rotation {
    /// All rotations in index order.
    pub const ALL: [Rotation; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomRight,
        Self::BottomLeft,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::TopLeft),
            1 => Some(Self::TopRight),
            2 => Some(Self::BottomRight),
            3 => Some(Self::BottomLeft),
            _ => None,
        }
    }

    /// Name used in configuration files.
    pub const fn name(self) -> &'static str {
        match self {
            Self::TopLeft => "top-left",
            Self::TopRight => "top-right",
            Self::BottomRight => "bottom-right",
            Self::BottomLeft => "bottom-left",
        }
    }

    /// Name used in `map:rotation` command line specs.
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::TopLeft => "tl",
            Self::TopRight => "tr",
            Self::BottomRight => "br",
            Self::BottomLeft => "bl",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.name() == name)
    }

    pub fn from_short_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.short_name() == name)
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// RotationSet
// ============================================================================

/// Rotations declared by a map, in the order they were written.
///
/// Duplicates are dropped on insert.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RotationSet {
    items: Vec<Rotation>,
}

impl RotationSet {
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Insert a rotation. Returns false if it was already present.
    pub fn insert(&mut self, rotation: Rotation) -> bool {
        if self.contains(rotation) {
            return false;
        }
        self.items.push(rotation);
        true
    }

    #[inline]
    pub fn contains(&self, rotation: Rotation) -> bool {
        self.items.contains(&rotation)
    }

    pub fn iter(&self) -> impl Iterator<Item = Rotation> + '_ {
        self.items.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Parse a whitespace separated list of rotation names.
    ///
    /// Returns the first unknown name on failure.
    pub fn parse_names(raw: &str) -> Result<Self, String> {
        let mut set = Self::new();
        for name in raw.split_whitespace() {
            let rotation = Rotation::from_name(name).ok_or_else(|| name.to_string())?;
            set.insert(rotation);
        }
        Ok(set)
    }
}

impl fmt::Display for RotationSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<_> = self.items.iter().map(|r| r.name()).collect();
        f.write_str(&names.join(" "))
    }
}

impl FromIterator<Rotation> for RotationSet {
    fn from_iter<I: IntoIterator<Item = Rotation>>(iter: I) -> Self {
        let mut set = Self::new();
        for rotation in iter {
            set.insert(rotation);
        }
        set
    }
}

// ============================================================================
// PerRotation
// ============================================================================

/// One value per rotation, indexed by [`Rotation`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerRotation<T>([T; 4]);

impl<T: Copy> PerRotation<T> {
    pub const fn splat(value: T) -> Self {
        Self([value; 4])
    }

    pub fn fill(&mut self, value: T) {
        self.0 = [value; 4];
    }

    pub fn iter(&self) -> impl Iterator<Item = (Rotation, T)> + '_ {
        Rotation::ALL.into_iter().map(|r| (r, self.0[r.index()]))
    }
}

impl<T> PerRotation<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PerRotation<U> {
        PerRotation(self.0.map(f))
    }

    /// Values in rotation index order.
    pub fn into_array(self) -> [T; 4] {
        self.0
    }
}

impl<T> Index<Rotation> for PerRotation<T> {
    type Output = T;

    fn index(&self, rotation: Rotation) -> &T {
        &self.0[rotation.index()]
    }
}

impl<T> IndexMut<Rotation> for PerRotation<T> {
    fn index_mut(&mut self, rotation: Rotation) -> &mut T {
        &mut self.0[rotation.index()]
    }
}
