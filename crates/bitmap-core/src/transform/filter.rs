//! Colour filters.
//!
//! | name        | effect |
//! |-------------|--------|
//! | `blue`      | keep blue, zero red and green |
//! | `red`       | keep red, zero green and blue |
//! | `green`     | keep green, zero red and blue |
//! | `grayscale` | BT.601 luma into all three channels |
//! | `negative`  | `255 - c` per channel |
//! | `pixelate`  | mean colour of 20x20 blocks |
//! | `blur`      | box blur, 25x25 kernel |

use super::blur::{box_blur, pixelate};
use crate::error::BitmapError;
use crate::luminance::luma_u8;
use crate::pixels::{Pixel, PixelGrid};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A colour filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    Blue,
    Red,
    Green,
    Grayscale,
    Negative,
    Pixelate,
    Blur,
}

impl FromStr for FilterKind {
    type Err = BitmapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "blue" => Ok(FilterKind::Blue),
            "red" => Ok(FilterKind::Red),
            "green" => Ok(FilterKind::Green),
            "grayscale" => Ok(FilterKind::Grayscale),
            "negative" => Ok(FilterKind::Negative),
            "pixelate" => Ok(FilterKind::Pixelate),
            "blur" => Ok(FilterKind::Blur),
            _ => Err(BitmapError::invalid(format!("invalid filter type - '{}'", s))),
        }
    }
}

/// Tunable sizes for the neighbourhood filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSettings {
    /// Edge length of pixelation blocks.
    pub pixelate_block_size: u32,
    /// Edge length of the blur kernel (radius is half of this).
    pub blur_kernel_size: u32,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            pixelate_block_size: 20,
            blur_kernel_size: 25,
        }
    }
}

/// Apply a filter with the default [`FilterSettings`].
pub fn apply_filter(grid: PixelGrid, kind: FilterKind) -> PixelGrid {
    apply_filter_with(grid, kind, &FilterSettings::default())
}

/// Apply a filter with explicit settings.
pub fn apply_filter_with(grid: PixelGrid, kind: FilterKind, settings: &FilterSettings) -> PixelGrid {
    match kind {
        FilterKind::Pixelate => pixelate(grid, settings.pixelate_block_size),
        FilterKind::Blur => box_blur(grid, settings.blur_kernel_size),
        FilterKind::Blue => map_pixels(grid, |p| Pixel::new(0, 0, p.blue)),
        FilterKind::Red => map_pixels(grid, |p| Pixel::new(p.red, 0, 0)),
        FilterKind::Green => map_pixels(grid, |p| Pixel::new(0, p.green, 0)),
        FilterKind::Grayscale => map_pixels(grid, |p| {
            let gray = luma_u8(p.red, p.green, p.blue);
            Pixel::new(gray, gray, gray)
        }),
        FilterKind::Negative => map_pixels(grid, |p| {
            Pixel::new(255 - p.red, 255 - p.green, 255 - p.blue)
        }),
    }
}

fn map_pixels(mut grid: PixelGrid, f: impl Fn(Pixel) -> Pixel) -> PixelGrid {
    for p in &mut grid.pixels {
        *p = f(*p);
    }
    grid
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::testing::grid_strategy;
    use proptest::prelude::*;

    proptest! {
        /// Property: grayscale is idempotent.
        #[test]
        fn prop_grayscale_idempotent(grid in grid_strategy(20, 20)) {
            let once = apply_filter(grid, FilterKind::Grayscale);
            let twice = apply_filter(once.clone(), FilterKind::Grayscale);
            prop_assert_eq!(twice, once);
        }

        /// Property: negative is an involution.
        #[test]
        fn prop_negative_involutive(grid in grid_strategy(20, 20)) {
            let twice = apply_filter(apply_filter(grid.clone(), FilterKind::Negative), FilterKind::Negative);
            prop_assert_eq!(twice, grid);
        }

        /// Property: channel filters zero exactly the other two channels.
        #[test]
        fn prop_blue_keeps_only_blue(grid in grid_strategy(20, 20)) {
            let result = apply_filter(grid.clone(), FilterKind::Blue);
            for (before, after) in grid.pixels.iter().zip(&result.pixels) {
                prop_assert_eq!(*after, Pixel::new(0, 0, before.blue));
            }
        }

        /// Property: averaging filters keep the grid shape.
        #[test]
        fn prop_averaging_filters_keep_shape(grid in grid_strategy(30, 30), blur in any::<bool>()) {
            let kind = if blur { FilterKind::Blur } else { FilterKind::Pixelate };
            let result = apply_filter(grid.clone(), kind);
            prop_assert_eq!((result.width, result.height), (grid.width, grid.height));
            prop_assert_eq!(result.pixels.len(), grid.pixels.len());
        }
    }
}
