//! Pixel raster codec.
//!
//! The file stores rows bottom to top, three bytes per pixel in (B, G, R)
//! order, each row padded to a multiple of four bytes. In memory the crate
//! works with a [`PixelGrid`]: top-down, row-major, (R, G, B).

mod codec;
mod types;

pub use codec::{decode_pixels, encode_pixels, row_stride};
pub use types::{Pixel, PixelGrid};
