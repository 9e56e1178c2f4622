//! Bitmap Core - 24-bit BMP codec and pixel transforms
//!
//! This crate reads and writes uncompressed 24-bit bitmaps with version 3, 4
//! or 5 info headers, and applies mirror, rotation, crop and colour filter
//! transforms to the decoded pixels.
//!
//! ```ignore
//! use bitmap_core::{Bitmap, ImageOption};
//!
//! let options: Vec<ImageOption> = ["--crop=10-10-50-50", "--filter=grayscale"]
//!     .iter()
//!     .map(|s| s.parse())
//!     .collect::<Result<_, _>>()?;
//! Bitmap::open("in.bmp")?.apply_all(&options)?.save("out.bmp")?;
//! ```

pub mod error;
pub mod header;
pub mod io;
pub mod luminance;
pub mod pipeline;
pub mod pixels;
pub mod transform;

#[cfg(test)]
mod testing;

pub use error::{BitmapError, ErrorKind, Result};
pub use header::{FileHeader, HeaderSummary, HeaderVersion, InfoHeader};
pub use io::{read_headers, read_pixels, write_pixels, Bitmap};
pub use pipeline::{apply_option, apply_option_with, apply_options, apply_options_with, ImageOption};
pub use pixels::{Pixel, PixelGrid};
pub use transform::{FilterKind, FilterSettings, MirrorAxis, RightAngle};
