//! Render planning state and the viewer manifest.
//!
//! | Module     | Purpose                                                   |
//! |------------|-----------------------------------------------------------|
//! | `scope`    | zoom levels, tile offsets, per-rotation render behavior   |
//! | `manifest` | map descriptors for the web viewer                        |

mod manifest;
mod scope;

pub use manifest::{MapDescriptor, manifest_json};
pub use scope::RenderScope;
