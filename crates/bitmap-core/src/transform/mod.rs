//! Pixel grid transforms: mirror, rotation, crop and colour filters.
//!
//! Every transform takes its [`PixelGrid`](crate::pixels::PixelGrid) by
//! value and returns a new one. Transforms that change the image shape
//! report the new dimensions through the returned grid.
//!
//! # Coordinate System
//!
//! - Origin is the top-left corner, `y` grows downward
//! - Rotation angles are clockwise
//! - Crop offsets and sizes are whole pixels

mod blur;
mod crop;
mod filter;
mod mirror;
mod rotation;

pub use blur::{box_blur, pixelate};
pub use crop::{apply_crop, CropWindow};
pub use filter::{apply_filter, apply_filter_with, FilterKind, FilterSettings};
pub use mirror::{apply_mirror, MirrorAxis};
pub use rotation::{apply_rotation, RightAngle};
