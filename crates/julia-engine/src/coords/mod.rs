//! Coordinate and geometry types shared across the renderer and the studio.
//!
//! Canonical CPU space for pointer input:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down
//!
//! The fractal plane is +Y up; conversion lives with the view transform.

mod vec2;
mod viewport;

pub use vec2::Vec2;
pub use viewport::Viewport;
