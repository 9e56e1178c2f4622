//! Luma calculation using ITU-R BT.601 coefficients.
//!
//! The grayscale filter replaces every channel with this value.

/// BT.601 weight of the red channel, in thousandths.
pub const LUMA_R: u32 = 299;

/// BT.601 weight of the green channel, in thousandths.
pub const LUMA_G: u32 = 587;

/// BT.601 weight of the blue channel, in thousandths.
pub const LUMA_B: u32 = 114;

/// Luma of an 8-bit RGB triple, truncated toward zero.
///
/// Equal to `floor(0.299 * r + 0.587 * g + 0.114 * b)`. The weighted sum is
/// an integer that `f64` holds exactly, so the single division cannot land
/// on the wrong side of an integer and gray input maps to itself.
#[inline]
pub fn luma_u8(r: u8, g: u8, b: u8) -> u8 {
    let weighted = LUMA_R * r as u32 + LUMA_G * g as u32 + LUMA_B * b as u32;
    (weighted as f64 / 1000.0) as u8
}
