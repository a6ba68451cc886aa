//! Core types - pure abstractions shared by the config and render modules.

mod behavior;
mod rotation;

pub use behavior::RenderBehavior;
pub use rotation::{PerRotation, Rotation, RotationSet};
