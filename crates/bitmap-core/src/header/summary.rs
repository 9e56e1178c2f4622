//! Human-readable header report.

use super::types::{FileHeader, InfoHeader};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The subset of header fields worth showing to a person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderSummary {
    pub signature: String,
    pub file_size: u32,
    /// Offset of the pixel data, i.e. the size of both headers together.
    pub header_size: u32,
    pub dib_header_size: u32,
    pub width: i32,
    pub height: i32,
    pub bits_per_pixel: u16,
    pub image_size: u32,
}

impl HeaderSummary {
    pub fn new(file: &FileHeader, info: &InfoHeader) -> Self {
        Self {
            signature: String::from_utf8_lossy(&file.signature).into_owned(),
            file_size: file.file_size,
            header_size: file.data_offset,
            dib_header_size: info.size(),
            width: info.common.width,
            height: info.common.height,
            bits_per_pixel: info.common.bit_count,
            image_size: info.common.image_size,
        }
    }
}

impl fmt::Display for HeaderSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BMP Header:")?;
        writeln!(f, "- Signature {}", self.signature)?;
        writeln!(f, "- FileSizeInBytes {}", self.file_size)?;
        writeln!(f, "- HeaderSize {}", self.header_size)?;
        writeln!(f, "DIB Header:")?;
        writeln!(f, "- DibHeaderSize {}", self.dib_header_size)?;
        writeln!(f, "- WidthInPixels {}", self.width)?;
        writeln!(f, "- HeightInPixels {}", self.height)?;
        writeln!(f, "- PixelSizeInBits {}", self.bits_per_pixel)?;
        write!(f, "- ImageSizeInBytes {}", self.image_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_display() {
        let info = InfoHeader::new(4, 3);
        let file = FileHeader::for_info(&info);
        let summary = HeaderSummary::new(&file, &info);

        let expected = "BMP Header:\n\
                        - Signature BM\n\
                        - FileSizeInBytes 90\n\
                        - HeaderSize 54\n\
                        DIB Header:\n\
                        - DibHeaderSize 40\n\
                        - WidthInPixels 4\n\
                        - HeightInPixels 3\n\
                        - PixelSizeInBits 24\n\
                        - ImageSizeInBytes 0";
        assert_eq!(summary.to_string(), expected);
    }
}
