//! Windows and OS/2 bitmap headers.

use std::io::Read;

use tracing::debug;

use crate::types::{Dimensions, Result};
use crate::utils::{read_i32_le, read_u16_le, skip_exact};

/// Bytes of the file header which follow the `BM` signature: file size, two reserved
/// words and the pixel data offset.
const FILE_HEADER_TAIL_LEN: u64 = 12;

/// Layout of the info header, selected by its declared length.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum InfoHeader {
    /// `BITMAPCOREHEADER` (12 bytes) or the OS/2 2.x header (64 bytes); dimensions are
    /// 16-bit unsigned.
    LegacyShort(i32),
    /// `BITMAPINFOHEADER` (40 bytes); dimensions are 32-bit signed and a negative height
    /// means the rows are stored top-down.
    Standard,
    Unsupported(i32),
}

impl InfoHeader {
    pub fn from_length(len: i32) -> InfoHeader {
        match len {
            12 | 64 => InfoHeader::LegacyShort(len),
            40 => InfoHeader::Standard,
            n => InfoHeader::Unsupported(n),
        }
    }
}

pub fn read_dimensions<R: ?Sized + Read>(r: &mut R) -> Result<Dimensions> {
    skip_exact(r, FILE_HEADER_TAIL_LEN, "when skipping bitmap file header")?;

    let len = read_i32_le(r, "when reading info header length")?;
    match InfoHeader::from_length(len) {
        InfoHeader::LegacyShort(_) => {
            let width = read_u16_le(r, "when reading width")?;
            let height = read_u16_le(r, "when reading height")?;
            Ok((width, height).into())
        }
        InfoHeader::Standard => {
            let width = read_i32_le(r, "when reading width")?;
            let height = read_i32_le(r, "when reading height")?;
            Ok((width, height).into())
        }
        InfoHeader::Unsupported(n) => {
            debug!(length = n, "unsupported bitmap info header");
            Err(unsupported!("bitmap info header of length {}", n))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::{read_dimensions, InfoHeader};
    use crate::types::{Dimensions, Error};

    fn header(info_len: i32, fields: &[u8]) -> Vec<u8> {
        let mut data = vec![0u8; 12];
        data.extend_from_slice(&info_len.to_le_bytes());
        data.extend_from_slice(fields);
        data
    }

    #[test]
    fn test_info_header_classification() {
        assert_eq!(InfoHeader::from_length(12), InfoHeader::LegacyShort(12));
        assert_eq!(InfoHeader::from_length(64), InfoHeader::LegacyShort(64));
        assert_eq!(InfoHeader::from_length(40), InfoHeader::Standard);
        assert_eq!(InfoHeader::from_length(124), InfoHeader::Unsupported(124));
    }

    #[test]
    fn test_core_header_uses_short_fields() {
        let data = header(12, &[0x10, 0x00, 0x20, 0x00, 0x01, 0x00, 0x18, 0x00]);
        let mut r = Cursor::new(data);
        assert_eq!(read_dimensions(&mut r).unwrap(), Dimensions { width: 16, height: 32 });
        assert_eq!(r.position(), 20);
    }

    #[test]
    fn test_os2_header_uses_short_fields() {
        let data = header(64, &[0xff, 0xff, 0x02, 0x00]);
        assert_eq!(
            read_dimensions(&mut Cursor::new(data)).unwrap(),
            Dimensions { width: 65535, height: 2 }
        );
    }

    #[test]
    fn test_standard_header_keeps_negative_height() {
        let mut fields = Vec::new();
        fields.extend_from_slice(&100i32.to_le_bytes());
        fields.extend_from_slice(&(-50i32).to_le_bytes());
        let mut r = Cursor::new(header(40, &fields));
        assert_eq!(read_dimensions(&mut r).unwrap(), Dimensions { width: 100, height: -50 });
        assert_eq!(r.position(), 24);
    }

    #[test]
    fn test_unknown_header_length() {
        let data = header(108, &[0u8; 8]);
        match read_dimensions(&mut Cursor::new(data)) {
            Err(Error::UnsupportedVariant(s)) => assert!(s.contains("108")),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_truncated_file_header() {
        let mut r = Cursor::new(vec![0u8; 7]);
        assert!(matches!(read_dimensions(&mut r), Err(Error::PrematureEndOfStream(Some(_)))));
    }
}
