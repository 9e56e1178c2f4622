//! Bitmap header codec.
//!
//! A bitmap starts with a fixed 14-byte file header followed by an info
//! header whose version is identified by its own declared size:
//!
//! | size | version | extra fields |
//! |------|---------|--------------|
//! | 40   | v3      | none |
//! | 108  | v4      | channel masks, colour space, CIE endpoints, gamma |
//! | 124  | v5      | v4 fields plus rendering intent and ICC profile |
//!
//! All integers are little-endian. [`decode_headers`] switches once on the
//! size and fills in only the fields that version carries;
//! [`encode_headers`] writes them back the same way.

mod codec;
mod summary;
mod types;

pub use codec::{decode_headers, encode_headers, read_headers_from, validate, write_headers};
pub use summary::HeaderSummary;
pub use types::{
    CoreFields, FileHeader, HeaderVersion, InfoHeader, V4Fields, V5Fields, FILE_HEADER_SIZE,
    MAX_DIMENSION, MIN_FILE_SIZE, SIGNATURE,
};
