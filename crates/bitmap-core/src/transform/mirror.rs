//! Horizontal and vertical mirroring.

use crate::error::BitmapError;
use crate::pixels::PixelGrid;
use std::str::FromStr;

/// Axis to mirror across.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MirrorAxis {
    /// Swap left and right.
    Horizontal,
    /// Swap top and bottom.
    Vertical,
}

impl FromStr for MirrorAxis {
    type Err = BitmapError;

    /// Case-insensitive; accepts `horizontal`, `horizontally`, `hor`, `h`
    /// and the matching vertical spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "horizontal" | "horizontally" | "hor" | "h" => Ok(MirrorAxis::Horizontal),
            "vertical" | "vertically" | "ver" | "v" => Ok(MirrorAxis::Vertical),
            _ => Err(BitmapError::invalid(format!("invalid mirror mode - '{}'", s))),
        }
    }
}

/// Mirror a grid across the given axis.
///
/// Horizontal: `dst(x, y) = src(w-1-x, y)`. Vertical: `dst(x, y) =
/// src(x, h-1-y)`. Applying the same mirror twice restores the input.
pub fn apply_mirror(grid: PixelGrid, axis: MirrorAxis) -> PixelGrid {
    let width = grid.width as usize;
    let mut pixels = grid.pixels;

    if width > 0 {
        match axis {
            MirrorAxis::Horizontal => {
                for row in pixels.chunks_exact_mut(width) {
                    row.reverse();
                }
            }
            MirrorAxis::Vertical => {
                pixels = pixels
                    .chunks_exact(width)
                    .rev()
                    .flatten()
                    .copied()
                    .collect();
            }
        }
    }

    PixelGrid::new(grid.width, grid.height, pixels)
}
