//! Per-map, per-rotation render decision.

use std::fmt;

/// What the renderer does with one (map, rotation) pair.
///
/// Ordered by precedence when the CLI lists are applied:
/// `Force` overrides `Auto`, which overrides `Skip`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RenderBehavior {
    /// Leave existing tiles untouched.
    Skip,
    /// Render tiles whose inputs changed since the last run.
    #[default]
    Auto,
    /// Render every tile.
    Force,
}

impl RenderBehavior {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Skip => "skip",
            Self::Auto => "auto",
            Self::Force => "force",
        }
    }
}

impl fmt::Display for RenderBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
