//! Ordered application of named transforms.
//!
//! A pipeline is a list of [`ImageOption`]s such as `--rotate=right` or
//! `--crop=10-10-50-50`. Options are applied strictly in list order, each
//! step consuming the previous grid and info header and producing new ones:
//!
//! ```text
//! (grid, info) -> apply_option -> (grid', info') -> apply_option -> ...
//! ```
//!
//! The file header is never touched here; it is refreshed when the result
//! is written out.

use crate::error::{BitmapError, Result};
use crate::header::InfoHeader;
use crate::pixels::PixelGrid;
use crate::transform::{
    apply_crop, apply_filter_with, apply_mirror, apply_rotation, CropWindow, FilterKind,
    FilterSettings, MirrorAxis, RightAngle,
};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The transform an option refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionName {
    Mirror,
    Filter,
    Rotate,
    Crop,
}

impl FromStr for OptionName {
    type Err = BitmapError;

    /// Accepts the bare name or the `--name` flag form.
    fn from_str(s: &str) -> Result<Self> {
        match s.strip_prefix("--").unwrap_or(s) {
            "mirror" => Ok(OptionName::Mirror),
            "filter" => Ok(OptionName::Filter),
            "rotate" => Ok(OptionName::Rotate),
            "crop" => Ok(OptionName::Crop),
            _ => Err(BitmapError::invalid(format!("undefined option - {}", s))),
        }
    }
}

/// One requested transform: a name and its unparsed value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageOption {
    pub name: String,
    pub value: String,
}

impl ImageOption {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl FromStr for ImageOption {
    type Err = BitmapError;

    /// Parse `--name=value`, splitting at the first `=`.
    fn from_str(s: &str) -> Result<Self> {
        s.split_once('=')
            .map(|(name, value)| ImageOption::new(name, value))
            .ok_or_else(|| BitmapError::invalid(format!("invalid option format: {}", s)))
    }
}

impl fmt::Display for ImageOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

/// Apply one named transform with the default filter settings.
///
/// Rotation updates the header's width and height. Cropping also sets the
/// declared image size to `width * height * 3`.
pub fn apply_option(
    grid: PixelGrid,
    info: InfoHeader,
    name: &str,
    value: &str,
) -> Result<(PixelGrid, InfoHeader)> {
    apply_option_with(grid, info, name, value, &FilterSettings::default())
}

/// Apply one named transform with explicit filter settings.
pub fn apply_option_with(
    grid: PixelGrid,
    mut info: InfoHeader,
    name: &str,
    value: &str,
    settings: &FilterSettings,
) -> Result<(PixelGrid, InfoHeader)> {
    debug!(
        "Applying {}={} to {}x{} image",
        name, value, grid.width, grid.height
    );

    let grid = match name.parse::<OptionName>()? {
        OptionName::Mirror => apply_mirror(grid, value.parse::<MirrorAxis>()?),
        OptionName::Filter => apply_filter_with(grid, value.parse::<FilterKind>()?, settings),
        OptionName::Rotate => {
            let rotated = apply_rotation(grid, value.parse::<RightAngle>()?);
            info.set_dimensions(rotated.width, rotated.height);
            rotated
        }
        OptionName::Crop => {
            let cropped = apply_crop(grid, value.parse::<CropWindow>()?)?;
            info.set_dimensions(cropped.width, cropped.height);
            info.common.image_size = packed_image_size(cropped.width, cropped.height);
            cropped
        }
    };

    Ok((grid, info))
}

/// Unpadded raster size `width * height * 3`, saturated to the `u32` field.
fn packed_image_size(width: u32, height: u32) -> u32 {
    (width as u64 * height as u64 * 3).min(u32::MAX as u64) as u32
}

/// Apply every option in order, stopping at the first error.
pub fn apply_options(
    grid: PixelGrid,
    info: InfoHeader,
    options: &[ImageOption],
) -> Result<(PixelGrid, InfoHeader)> {
    apply_options_with(grid, info, options, &FilterSettings::default())
}

/// [`apply_options`] with explicit filter settings.
pub fn apply_options_with(
    grid: PixelGrid,
    info: InfoHeader,
    options: &[ImageOption],
    settings: &FilterSettings,
) -> Result<(PixelGrid, InfoHeader)> {
    options
        .iter()
        .try_fold((grid, info), |(grid, info), option| {
            apply_option_with(grid, info, &option.name, &option.value, settings)
        })
}
