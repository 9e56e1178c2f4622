//! Little-endian header decoding, validation and encoding.

use super::types::{
    CoreFields, FileHeader, HeaderVersion, InfoHeader, V4Fields, V5Fields, FILE_HEADER_SIZE,
    MAX_DIMENSION, MIN_FILE_SIZE, SIGNATURE,
};
use crate::error::{BitmapError, Result};
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use log::{debug, error};
use std::io::{Cursor, Read, Write};

/// Decode the file header and info header from the start of a bitmap file.
///
/// `bytes` may contain the whole file; anything after the info header is
/// ignored. The result is not yet checked for consistency: call
/// [`validate`] before touching the pixel raster.
///
/// # Errors
///
/// - [`BitmapError::TooShort`] if `bytes` is shorter than 54 bytes
/// - [`BitmapError::BadSignature`] if the file does not start with "BM"
/// - [`BitmapError::UnsupportedHeaderSize`] if the info header is not 40,
///   108 or 124 bytes
/// - [`BitmapError::Io`] if the input ends inside the info header
pub fn decode_headers(bytes: &[u8]) -> Result<(FileHeader, InfoHeader)> {
    if (bytes.len() as u64) < MIN_FILE_SIZE {
        error!("Input of {} bytes is too short for a bitmap", bytes.len());
        return Err(BitmapError::TooShort {
            len: bytes.len() as u64,
        });
    }
    read_headers_from(&mut Cursor::new(bytes))
}

/// Decode both headers from a reader positioned at the start of the file.
///
/// Unlike [`decode_headers`] this does not check the total length first;
/// a short input surfaces as [`BitmapError::Io`].
pub fn read_headers_from<R: Read>(reader: &mut R) -> Result<(FileHeader, InfoHeader)> {
    let file_header = read_file_header(reader)?;
    if file_header.signature != SIGNATURE {
        error!("Bad signature {:?}", file_header.signature);
        return Err(BitmapError::BadSignature(file_header.signature));
    }

    let size = reader.read_u32::<LittleEndian>()?;
    if !matches!(
        size,
        InfoHeader::V3_SIZE | InfoHeader::V4_SIZE | InfoHeader::V5_SIZE
    ) {
        error!("Unsupported DIB header size {}", size);
        return Err(BitmapError::UnsupportedHeaderSize(size));
    }

    let common = read_core_fields(reader)?;
    let version = match size {
        InfoHeader::V3_SIZE => HeaderVersion::V3,
        InfoHeader::V4_SIZE => HeaderVersion::V4(read_v4_fields(reader)?),
        _ => {
            let v4 = read_v4_fields(reader)?;
            HeaderVersion::V5(v4, read_v5_fields(reader)?)
        }
    };

    debug!(
        "Decoded headers: {}x{} ({}-byte info header, {} bpp, data at {})",
        common.width, common.height, size, common.bit_count, file_header.data_offset
    );

    Ok((file_header, InfoHeader { common, version }))
}

fn read_file_header<R: Read>(r: &mut R) -> Result<FileHeader> {
    let mut signature = [0u8; 2];
    r.read_exact(&mut signature)?;
    Ok(FileHeader {
        signature,
        file_size: r.read_u32::<LittleEndian>()?,
        reserved: r.read_u32::<LittleEndian>()?,
        data_offset: r.read_u32::<LittleEndian>()?,
    })
}

fn read_core_fields<R: Read>(r: &mut R) -> Result<CoreFields> {
    Ok(CoreFields {
        width: r.read_i32::<LittleEndian>()?,
        height: r.read_i32::<LittleEndian>()?,
        planes: r.read_u16::<LittleEndian>()?,
        bit_count: r.read_u16::<LittleEndian>()?,
        compression: r.read_u32::<LittleEndian>()?,
        image_size: r.read_u32::<LittleEndian>()?,
        x_pixels_per_meter: r.read_i32::<LittleEndian>()?,
        y_pixels_per_meter: r.read_i32::<LittleEndian>()?,
        colors_used: r.read_u32::<LittleEndian>()?,
        colors_important: r.read_u32::<LittleEndian>()?,
    })
}

fn read_v4_fields<R: Read>(r: &mut R) -> Result<V4Fields> {
    let red_mask = r.read_u32::<LittleEndian>()?;
    let green_mask = r.read_u32::<LittleEndian>()?;
    let blue_mask = r.read_u32::<LittleEndian>()?;
    let alpha_mask = r.read_u32::<LittleEndian>()?;
    let color_space = r.read_u32::<LittleEndian>()?;
    let mut endpoints = [0i32; 9];
    r.read_i32_into::<LittleEndian>(&mut endpoints)?;
    Ok(V4Fields {
        red_mask,
        green_mask,
        blue_mask,
        alpha_mask,
        color_space,
        endpoints,
        gamma_red: r.read_u32::<LittleEndian>()?,
        gamma_green: r.read_u32::<LittleEndian>()?,
        gamma_blue: r.read_u32::<LittleEndian>()?,
    })
}

fn read_v5_fields<R: Read>(r: &mut R) -> Result<V5Fields> {
    Ok(V5Fields {
        intent: r.read_u32::<LittleEndian>()?,
        profile_data: r.read_u32::<LittleEndian>()?,
        profile_size: r.read_u32::<LittleEndian>()?,
        profile_reserved: r.read_u32::<LittleEndian>()?,
    })
}

/// Check that decoded headers describe a file this crate can process.
///
/// `actual_file_size` is the real length of the file, which must be large
/// enough to hold `width * height * 3` bytes past the data offset.
pub fn validate(file: &FileHeader, info: &InfoHeader, actual_file_size: u64) -> Result<()> {
    let common = &info.common;

    if file.signature != SIGNATURE {
        error!("Bad signature {:?}", file.signature);
        return Err(BitmapError::BadSignature(file.signature));
    }

    if common.bit_count != 24 {
        error!("Rejecting {}-bit image", common.bit_count);
        return Err(BitmapError::UnsupportedBitDepth(common.bit_count));
    }

    if common.compression != 0 {
        error!("Rejecting compressed image (compression = {})", common.compression);
        return Err(BitmapError::UnsupportedCompression(common.compression));
    }

    if !(0..=MAX_DIMENSION).contains(&common.width) || !(0..=MAX_DIMENSION).contains(&common.height)
    {
        error!("Rejecting image of {}x{}", common.width, common.height);
        return Err(BitmapError::DimensionsOutOfRange {
            width: common.width,
            height: common.height,
        });
    }

    let expected_offset = FILE_HEADER_SIZE + info.size();
    if file.data_offset != expected_offset {
        error!(
            "Pixel data offset {} does not follow the {}-byte info header",
            file.data_offset,
            info.size()
        );
        return Err(BitmapError::DataOffsetMismatch {
            expected: expected_offset,
            actual: file.data_offset,
        });
    }

    let expected_size =
        file.data_offset as u64 + common.width as u64 * common.height as u64 * 3;
    if actual_file_size < expected_size {
        error!(
            "File of {} bytes cannot hold a {}x{} raster",
            actual_file_size, common.width, common.height
        );
        return Err(BitmapError::FileTooSmall {
            expected: expected_size,
            actual: actual_file_size,
        });
    }

    Ok(())
}

/// Encode both headers into exactly `14 + info.size()` bytes.
///
/// Only the fields that belong to the header's version are written. A
/// 40-byte header for an uncompressed image always carries an image size of
/// 0, whatever the in-memory value is.
pub fn encode_headers(file: &FileHeader, info: &InfoHeader) -> Result<Vec<u8>> {
    let mut buf = Vec::with_capacity((FILE_HEADER_SIZE + info.size()) as usize);
    write_headers(&mut buf, file, info)?;
    Ok(buf)
}

/// Write both headers to `writer`, in the layout [`encode_headers`] produces.
pub fn write_headers<W: Write>(writer: &mut W, file: &FileHeader, info: &InfoHeader) -> Result<()> {
    writer.write_all(&file.signature)?;
    writer.write_u32::<LittleEndian>(file.file_size)?;
    writer.write_u32::<LittleEndian>(file.reserved)?;
    writer.write_u32::<LittleEndian>(file.data_offset)?;

    writer.write_u32::<LittleEndian>(info.size())?;
    write_core_fields(writer, info)?;
    match &info.version {
        HeaderVersion::V3 => {}
        HeaderVersion::V4(v4) => write_v4_fields(writer, v4)?,
        HeaderVersion::V5(v4, v5) => {
            write_v4_fields(writer, v4)?;
            write_v5_fields(writer, v5)?;
        }
    }
    Ok(())
}

fn write_core_fields<W: Write>(w: &mut W, info: &InfoHeader) -> Result<()> {
    let c = &info.common;
    let image_size = if matches!(info.version, HeaderVersion::V3) && c.compression == 0 {
        0
    } else {
        c.image_size
    };

    w.write_i32::<LittleEndian>(c.width)?;
    w.write_i32::<LittleEndian>(c.height)?;
    w.write_u16::<LittleEndian>(c.planes)?;
    w.write_u16::<LittleEndian>(c.bit_count)?;
    w.write_u32::<LittleEndian>(c.compression)?;
    w.write_u32::<LittleEndian>(image_size)?;
    w.write_i32::<LittleEndian>(c.x_pixels_per_meter)?;
    w.write_i32::<LittleEndian>(c.y_pixels_per_meter)?;
    w.write_u32::<LittleEndian>(c.colors_used)?;
    w.write_u32::<LittleEndian>(c.colors_important)?;
    Ok(())
}

fn write_v4_fields<W: Write>(w: &mut W, v4: &V4Fields) -> Result<()> {
    w.write_u32::<LittleEndian>(v4.red_mask)?;
    w.write_u32::<LittleEndian>(v4.green_mask)?;
    w.write_u32::<LittleEndian>(v4.blue_mask)?;
    w.write_u32::<LittleEndian>(v4.alpha_mask)?;
    w.write_u32::<LittleEndian>(v4.color_space)?;
    for endpoint in v4.endpoints {
        w.write_i32::<LittleEndian>(endpoint)?;
    }
    w.write_u32::<LittleEndian>(v4.gamma_red)?;
    w.write_u32::<LittleEndian>(v4.gamma_green)?;
    w.write_u32::<LittleEndian>(v4.gamma_blue)?;
    Ok(())
}

fn write_v5_fields<W: Write>(w: &mut W, v5: &V5Fields) -> Result<()> {
    w.write_u32::<LittleEndian>(v5.intent)?;
    w.write_u32::<LittleEndian>(v5.profile_data)?;
    w.write_u32::<LittleEndian>(v5.profile_size)?;
    w.write_u32::<LittleEndian>(v5.profile_reserved)?;
    Ok(())
}


// ============================================================================
// Property-Based Tests
// ============================================================================
