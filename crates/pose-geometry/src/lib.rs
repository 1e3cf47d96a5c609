//! Pose Geometry Primitives
//!
//! Small value types shared by the smoothing and bearing evaluation crates:
//! - `Point` in image space
//! - `Angle` (yaw/pitch head pose)
//! - `Rect` face bounds

mod angle;
mod rect;

pub use angle::{Angle, Axis};
pub use rect::{Point, Rect};
