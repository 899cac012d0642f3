//! GIF logical screen descriptor.

use std::io::Read;

use crate::types::{Dimensions, Result};
use crate::utils::read_u16_le;

/// Reads the canvas size from the logical screen descriptor which immediately follows
/// the `GIF87a`/`GIF89a` magic.
pub fn read_dimensions<R: ?Sized + Read>(r: &mut R) -> Result<Dimensions> {
    let width = read_u16_le(r, "when reading logical screen width")?;
    let height = read_u16_le(r, "when reading logical screen height")?;
    Ok((width, height).into())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::read_dimensions;
    use crate::types::{Dimensions, Error};

    #[test]
    fn test_logical_screen_size() {
        // 0x0140 x 0x00f0, then flags and background color which are left unread
        let mut r = Cursor::new(vec![0x40, 0x01, 0xf0, 0x00, 0xf7, 0x00, 0x00]);
        assert_eq!(read_dimensions(&mut r).unwrap(), Dimensions { width: 320, height: 240 });
        assert_eq!(r.position(), 4);
    }

    #[test]
    fn test_truncated_descriptor() {
        let mut r = Cursor::new(vec![0x40, 0x01, 0xf0]);
        match read_dimensions(&mut r) {
            Err(Error::PrematureEndOfStream(Some(s))) => {
                assert_eq!(s, "when reading logical screen height")
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
