//! Header record types.

/// Size of the fixed file header that starts every bitmap.
pub const FILE_HEADER_SIZE: u32 = 14;

/// Smallest file that can hold a file header and a version 3 info header.
pub const MIN_FILE_SIZE: u64 = 54;

/// Largest width or height accepted by [`validate`](super::validate).
pub const MAX_DIMENSION: i32 = 65536;

/// The only accepted signature.
pub const SIGNATURE: [u8; 2] = *b"BM";

/// The fixed 14-byte header at the start of the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileHeader {
    /// Must be `b"BM"`.
    pub signature: [u8; 2],
    /// Total file size in bytes as declared by the writer.
    pub file_size: u32,
    /// Reserved; carried through unchanged.
    pub reserved: u32,
    /// Absolute offset of the pixel raster.
    pub data_offset: u32,
}

impl FileHeader {
    /// Build a consistent file header for the given info header.
    ///
    /// The data offset points directly past the info header and the file
    /// size covers the padded raster.
    pub fn for_info(info: &InfoHeader) -> Self {
        let data_offset = FILE_HEADER_SIZE + info.size();
        let (width, height) = info.dimensions();
        let raster = crate::pixels::row_stride(width) as u64 * height as u64;
        Self {
            signature: SIGNATURE,
            file_size: (data_offset as u64 + raster).min(u32::MAX as u64) as u32,
            reserved: 0,
            data_offset,
        }
    }
}

/// Fields shared by every info header version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoreFields {
    pub width: i32,
    pub height: i32,
    /// Number of colour planes (always 1 in practice).
    pub planes: u16,
    /// Bits per pixel; only 24 is supported.
    pub bit_count: u16,
    /// Compression code; only 0 (uncompressed) is supported.
    pub compression: u32,
    /// Declared raster size in bytes. May be 0 for uncompressed images.
    pub image_size: u32,
    pub x_pixels_per_meter: i32,
    pub y_pixels_per_meter: i32,
    pub colors_used: u32,
    pub colors_important: u32,
}

impl Default for CoreFields {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            planes: 1,
            bit_count: 24,
            compression: 0,
            image_size: 0,
            x_pixels_per_meter: 0,
            y_pixels_per_meter: 0,
            colors_used: 0,
            colors_important: 0,
        }
    }
}

/// Colour-space fields added by the 108-byte header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct V4Fields {
    pub red_mask: u32,
    pub green_mask: u32,
    pub blue_mask: u32,
    pub alpha_mask: u32,
    pub color_space: u32,
    /// CIE XYZ endpoints for red, green and blue.
    pub endpoints: [i32; 9],
    pub gamma_red: u32,
    pub gamma_green: u32,
    pub gamma_blue: u32,
}

/// ICC profile fields added by the 124-byte header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct V5Fields {
    pub intent: u32,
    pub profile_data: u32,
    pub profile_size: u32,
    /// Trailing reserved word of the info header. Unrelated to
    /// [`FileHeader::reserved`].
    pub profile_reserved: u32,
}

/// Version-specific part of the info header, keyed by its declared size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderVersion {
    /// 40-byte `BITMAPINFOHEADER`.
    V3,
    /// 108-byte `BITMAPV4HEADER`.
    V4(V4Fields),
    /// 124-byte `BITMAPV5HEADER`.
    V5(V4Fields, V5Fields),
}

impl HeaderVersion {
    /// The size discriminant written at the start of the info header.
    pub fn size(&self) -> u32 {
        match self {
            HeaderVersion::V3 => InfoHeader::V3_SIZE,
            HeaderVersion::V4(_) => InfoHeader::V4_SIZE,
            HeaderVersion::V5(..) => InfoHeader::V5_SIZE,
        }
    }
}

/// The variable-length header that follows the file header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfoHeader {
    pub common: CoreFields,
    pub version: HeaderVersion,
}

impl InfoHeader {
    pub const V3_SIZE: u32 = 40;
    pub const V4_SIZE: u32 = 108;
    pub const V5_SIZE: u32 = 124;

    /// A version 3 header for an uncompressed 24-bit image.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            common: CoreFields {
                width: width as i32,
                height: height as i32,
                ..CoreFields::default()
            },
            version: HeaderVersion::V3,
        }
    }

    /// Declared size of this header in bytes (40, 108 or 124).
    pub fn size(&self) -> u32 {
        self.version.size()
    }

    /// Width and height as unsigned values.
    ///
    /// Negative values (rejected by validation) are reported as 0.
    pub fn dimensions(&self) -> (u32, u32) {
        (
            self.common.width.max(0) as u32,
            self.common.height.max(0) as u32,
        )
    }

    /// Record a new image shape after a rotation.
    pub fn set_dimensions(&mut self, width: u32, height: u32) {
        self.common.width = width as i32;
        self.common.height = height as i32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_sizes() {
        assert_eq!(HeaderVersion::V3.size(), 40);
        assert_eq!(HeaderVersion::V4(V4Fields::default()).size(), 108);
        assert_eq!(
            HeaderVersion::V5(V4Fields::default(), V5Fields::default()).size(),
            124
        );
    }

    #[test]
    fn test_new_info_header_defaults() {
        let info = InfoHeader::new(3, 2);
        assert_eq!(info.size(), 40);
        assert_eq!(info.common.bit_count, 24);
        assert_eq!(info.common.planes, 1);
        assert_eq!(info.dimensions(), (3, 2));
    }

    #[test]
    fn test_negative_dimensions_clamp_to_zero() {
        let mut info = InfoHeader::new(3, 2);
        info.common.height = -2;
        assert_eq!(info.dimensions(), (3, 0));
    }

    #[test]
    fn test_file_header_for_info() {
        // 3 pixels wide -> 9 bytes per row, padded to 12
        let info = InfoHeader::new(3, 2);
        let header = FileHeader::for_info(&info);
        assert_eq!(header.signature, SIGNATURE);
        assert_eq!(header.data_offset, 54);
        assert_eq!(header.file_size, 54 + 24);
    }
}
