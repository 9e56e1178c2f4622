//! Whole-file reading and writing.
//!
//! Every function opens its file, does all of its work and closes it before
//! returning, on success and on error alike.
//!
//! # Examples
//!
//! ```ignore
//! use bitmap_core::io::{read_headers, read_pixels, write_pixels};
//! use bitmap_core::pipeline::{apply_options, ImageOption};
//!
//! let (file, info) = read_headers("in.bmp")?;
//! let grid = read_pixels("in.bmp", &file, &info)?;
//! let options = ["--rotate=right".parse::<ImageOption>()?];
//! let (grid, info) = apply_options(grid, info, &options)?;
//! write_pixels("out.bmp", &file, &info, &grid)?;
//! ```

use crate::error::{BitmapError, Result};
use crate::header::{
    decode_headers, encode_headers, read_headers_from, validate, FileHeader, HeaderSummary,
    InfoHeader, MIN_FILE_SIZE,
};
use crate::pipeline::{apply_option, apply_options, ImageOption};
use crate::pixels::{decode_pixels, encode_pixels, row_stride, Pixel, PixelGrid};
use log::{debug, error};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Seek, SeekFrom, Write};
use std::path::Path;

/// Read and validate both headers of a bitmap file.
///
/// # Errors
///
/// [`BitmapError::TooShort`] for files under 54 bytes, any error from
/// [`decode_headers`] or [`validate`], and [`BitmapError::Io`] if the file
/// cannot be opened or read.
pub fn read_headers(path: impl AsRef<Path>) -> Result<(FileHeader, InfoHeader)> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let len = file.metadata()?.len();
    if len < MIN_FILE_SIZE {
        error!("{} is only {} bytes long", path.display(), len);
        return Err(BitmapError::TooShort { len });
    }

    let (file_header, info) = read_headers_from(&mut BufReader::new(file))?;
    validate(&file_header, &info, len)?;
    Ok((file_header, info))
}

/// Read the pixel raster of a file whose headers were already validated.
///
/// # Errors
///
/// [`BitmapError::TruncatedData`] if the file ends before the last row.
pub fn read_pixels(
    path: impl AsRef<Path>,
    file_header: &FileHeader,
    info: &InfoHeader,
) -> Result<PixelGrid> {
    let (width, height) = info.dimensions();
    let expected = row_stride(width) * height as usize;

    let mut file = File::open(path)?;
    file.seek(SeekFrom::Start(file_header.data_offset as u64))?;

    let mut data = Vec::with_capacity(expected);
    file.take(expected as u64).read_to_end(&mut data)?;
    decode_pixels(&data, width, height)
}

/// Write headers and pixels to a new file, replacing any existing one.
///
/// The file size in the written header is recomputed from the grid; all
/// other file header fields are written as given.
///
/// # Errors
///
/// [`BitmapError::DimensionMismatch`] if the grid does not have the shape
/// the info header declares, [`BitmapError::InvalidArgument`] if its pixel
/// buffer does not hold `width * height` pixels, [`BitmapError::Io`] if
/// writing fails.
pub fn write_pixels(
    path: impl AsRef<Path>,
    file_header: &FileHeader,
    info: &InfoHeader,
    grid: &PixelGrid,
) -> Result<()> {
    let bytes = encode_file(file_header, info, grid)?;

    let mut writer = BufWriter::new(File::create(path.as_ref())?);
    writer.write_all(&bytes)?;
    writer.flush()?;

    debug!("Wrote {} bytes to {}", bytes.len(), path.as_ref().display());
    Ok(())
}

fn encode_file(file_header: &FileHeader, info: &InfoHeader, grid: &PixelGrid) -> Result<Vec<u8>> {
    if info.dimensions() != (grid.width, grid.height) {
        return Err(BitmapError::DimensionMismatch {
            width: info.common.width,
            height: info.common.height,
            grid_width: grid.width,
            grid_height: grid.height,
        });
    }

    if grid.pixels.len() as u64 != grid.width as u64 * grid.height as u64 {
        return Err(BitmapError::invalid(format!(
            "pixel buffer holds {} pixels but the grid is {}x{}",
            grid.pixels.len(),
            grid.width,
            grid.height
        )));
    }

    let raster = encode_pixels(grid);
    let file_header = FileHeader {
        file_size: (file_header.data_offset as usize + raster.len()).min(u32::MAX as usize) as u32,
        ..*file_header
    };

    let mut bytes = encode_headers(&file_header, info)?;
    // Any gap between the headers and the declared data offset is zero-filled.
    bytes.resize(bytes.len().max(file_header.data_offset as usize), 0);
    bytes.extend_from_slice(&raster);
    Ok(bytes)
}

/// A fully decoded bitmap held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    pub file_header: FileHeader,
    pub info_header: InfoHeader,
    pub pixels: PixelGrid,
}

impl Bitmap {
    /// A new black image with version 3 headers.
    pub fn new(width: u32, height: u32) -> Self {
        Self::from_grid(PixelGrid::filled(width, height, Pixel::BLACK))
    }

    /// Wrap a grid in freshly built version 3 headers.
    pub fn from_grid(pixels: PixelGrid) -> Self {
        let info_header = InfoHeader::new(pixels.width, pixels.height);
        Self {
            file_header: FileHeader::for_info(&info_header),
            info_header,
            pixels,
        }
    }

    /// Decode and validate a complete file image.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let (file_header, info_header) = decode_headers(bytes)?;
        validate(&file_header, &info_header, bytes.len() as u64)?;

        let (width, height) = info_header.dimensions();
        let data = bytes
            .get(file_header.data_offset as usize..)
            .unwrap_or_default();
        let pixels = decode_pixels(data, width, height)?;

        Ok(Self {
            file_header,
            info_header,
            pixels,
        })
    }

    /// Read a bitmap from disk.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let (file_header, info_header) = read_headers(path)?;
        let pixels = read_pixels(path, &file_header, &info_header)?;
        Ok(Self {
            file_header,
            info_header,
            pixels,
        })
    }

    /// Encode the bitmap into a complete file image.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        encode_file(&self.file_header, &self.info_header, &self.pixels)
    }

    /// Write the bitmap to disk.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        write_pixels(path, &self.file_header, &self.info_header, &self.pixels)
    }

    pub fn summary(&self) -> HeaderSummary {
        HeaderSummary::new(&self.file_header, &self.info_header)
    }

    /// Apply one named transform, producing a new bitmap.
    pub fn apply(self, name: &str, value: &str) -> Result<Self> {
        let (pixels, info_header) = apply_option(self.pixels, self.info_header, name, value)?;
        Ok(Self {
            file_header: self.file_header,
            info_header,
            pixels,
        })
    }

    /// Apply a list of transforms in order.
    pub fn apply_all(self, options: &[ImageOption]) -> Result<Self> {
        let (pixels, info_header) = apply_options(self.pixels, self.info_header, options)?;
        Ok(Self {
            file_header: self.file_header,
            info_header,
            pixels,
        })
    }
}
