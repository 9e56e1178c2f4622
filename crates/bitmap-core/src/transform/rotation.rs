//! Lossless clockwise rotation by right angles.
//!
//! Each source pixel `(x, y)` of a `w x h` image moves to `(new_x, new_y)`
//! in the rotated image:
//!
//! ```text
//! angle  new size  new_x      new_y
//!  90    h x w     h - 1 - y  x
//! 180    w x h     w - 1 - x  h - 1 - y
//! 270    h x w     y          w - 1 - x
//! ```

use crate::error::BitmapError;
use crate::pixels::{Pixel, PixelGrid};
use std::str::FromStr;

/// A clockwise rotation angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RightAngle {
    Deg90,
    Deg180,
    Deg270,
}

impl RightAngle {
    /// The angle in degrees.
    pub fn degrees(self) -> u32 {
        match self {
            RightAngle::Deg90 => 90,
            RightAngle::Deg180 => 180,
            RightAngle::Deg270 => 270,
        }
    }

    /// Returns true if this rotation swaps width and height.
    #[inline]
    pub fn swaps_dimensions(self) -> bool {
        !matches!(self, RightAngle::Deg180)
    }
}

impl TryFrom<i32> for RightAngle {
    type Error = BitmapError;

    /// Only 90, 180 and 270 are accepted.
    fn try_from(degrees: i32) -> Result<Self, Self::Error> {
        match degrees {
            90 => Ok(RightAngle::Deg90),
            180 => Ok(RightAngle::Deg180),
            270 => Ok(RightAngle::Deg270),
            _ => Err(BitmapError::invalid(format!(
                "'{}' is not a valid angle value",
                degrees
            ))),
        }
    }
}

impl FromStr for RightAngle {
    type Err = BitmapError;

    /// Normalize an angle string. `right` is a quarter turn clockwise and
    /// `left` a quarter turn counter-clockwise; negative angles turn
    /// counter-clockwise.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "right" | "90" | "-270" => Ok(RightAngle::Deg90),
            "left" | "270" | "-90" => Ok(RightAngle::Deg270),
            "180" | "-180" => Ok(RightAngle::Deg180),
            _ => Err(BitmapError::invalid(format!(
                "'{}' is not a valid angle value",
                s
            ))),
        }
    }
}

/// Rotate a grid clockwise. The result has swapped dimensions for 90 and
/// 270 degrees.
pub fn apply_rotation(grid: PixelGrid, angle: RightAngle) -> PixelGrid {
    let (w, h) = (grid.width, grid.height);
    let (new_w, new_h) = if angle.swaps_dimensions() {
        (h, w)
    } else {
        (w, h)
    };

    let mut rotated = vec![Pixel::BLACK; grid.pixels.len()];
    for y in 0..h {
        for x in 0..w {
            let (new_x, new_y) = match angle {
                RightAngle::Deg90 => (h - 1 - y, x),
                RightAngle::Deg180 => (w - 1 - x, h - 1 - y),
                RightAngle::Deg270 => (y, w - 1 - x),
            };
            rotated[new_y as usize * new_w as usize + new_x as usize] = grid.get(x, y);
        }
    }

    PixelGrid::new(new_w, new_h, rotated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::position_grid;

    /// 3x2 grid labelled a..f in reading order.
    fn letters() -> PixelGrid {
        let labels = b"abcdef";
        PixelGrid::from_fn(3, 2, |x, y| {
            let v = labels[(y * 3 + x) as usize];
            Pixel::new(v, v, v)
        })
    }

    fn labels(grid: &PixelGrid) -> String {
        grid.pixels.iter().map(|p| p.red as char).collect()
    }

    #[test]
    fn test_normalize_angle_strings() {
        for (input, angle) in [
            ("right", RightAngle::Deg90),
            ("RIGHT", RightAngle::Deg90),
            ("90", RightAngle::Deg90),
            ("-270", RightAngle::Deg90),
            ("left", RightAngle::Deg270),
            ("270", RightAngle::Deg270),
            ("-90", RightAngle::Deg270),
            ("180", RightAngle::Deg180),
            ("-180", RightAngle::Deg180),
        ] {
            assert_eq!(input.parse::<RightAngle>().unwrap(), angle, "input {}", input);
        }
    }

    #[test]
    fn test_invalid_angle_strings() {
        for input in ["45", "360", "0", "up", ""] {
            assert!(input.parse::<RightAngle>().is_err(), "input {:?}", input);
        }
    }

    #[test]
    fn test_try_from_degrees() {
        assert_eq!(RightAngle::try_from(90).unwrap(), RightAngle::Deg90);
        assert_eq!(RightAngle::try_from(270).unwrap().degrees(), 270);
        let err = RightAngle::try_from(45).unwrap_err();
        assert_eq!(err.to_string(), "'45' is not a valid angle value");
    }

    #[test]
    fn test_rotate_90() {
        // abc      da
        // def  ->  eb
        //          fc
        let result = apply_rotation(letters(), RightAngle::Deg90);
        assert_eq!((result.width, result.height), (2, 3));
        assert_eq!(labels(&result), "daebfc");
    }

    #[test]
    fn test_rotate_180() {
        let result = apply_rotation(letters(), RightAngle::Deg180);
        assert_eq!((result.width, result.height), (3, 2));
        assert_eq!(labels(&result), "fedcba");
    }

    #[test]
    fn test_rotate_270() {
        // abc      cf
        // def  ->  be
        //          ad
        let result = apply_rotation(letters(), RightAngle::Deg270);
        assert_eq!((result.width, result.height), (2, 3));
        assert_eq!(labels(&result), "cfbead");
    }

    #[test]
    fn test_90_then_270_is_identity() {
        let img = position_grid(7, 4);
        let result = apply_rotation(apply_rotation(img.clone(), RightAngle::Deg90), RightAngle::Deg270);
        assert_eq!(result, img);
    }

    #[test]
    fn test_1x1_rotation() {
        let img = PixelGrid::filled(1, 1, Pixel::new(1, 2, 3));
        for angle in [RightAngle::Deg90, RightAngle::Deg180, RightAngle::Deg270] {
            assert_eq!(apply_rotation(img.clone(), angle), img);
        }
    }

    #[test]
    fn test_very_thin_image_rotation() {
        let img = position_grid(100, 1);
        let result = apply_rotation(img, RightAngle::Deg90);
        assert_eq!((result.width, result.height), (1, 100));
        assert_eq!(result.get(0, 99), Pixel::new(99, 0, 99));
    }
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
        /// Property: four quarter turns restore pixels and dimensions.
        #[test]
        fn prop_four_quarter_turns_identity(grid in grid_strategy(24, 24)) {
            let mut result = grid.clone();
            for _ in 0..4 {
                result = apply_rotation(result, RightAngle::Deg90);
            }
            prop_assert_eq!(result, grid);
        }

        /// Property: two half turns restore the grid.
        #[test]
        fn prop_two_half_turns_identity(grid in grid_strategy(24, 24)) {
            let result = apply_rotation(apply_rotation(grid.clone(), RightAngle::Deg180), RightAngle::Deg180);
            prop_assert_eq!(result, grid);
        }

        /// Property: rotation permutes pixels without losing any.
        #[test]
        fn prop_rotation_preserves_pixel_multiset(grid in grid_strategy(16, 16)) {
            let mut before = grid.pixels.clone();
            let mut after = apply_rotation(grid, RightAngle::Deg270).pixels;
            before.sort_by_key(|p| (p.red, p.green, p.blue));
            after.sort_by_key(|p| (p.red, p.green, p.blue));
            prop_assert_eq!(before, after);
        }
    }
}
