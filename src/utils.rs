//! Field readers over any blocking byte source.
//!
//! Every reader takes a short "when reading ..." description which ends up in the
//! `PrematureEndOfStream` error if the source runs dry.

use std::io::{self, Read};

use byteorder::{BigEndian, LittleEndian, ReadBytesExt};

use crate::types::Result;

pub fn read_u8<R: ?Sized + Read>(r: &mut R, what: &'static str) -> Result<u8> {
    Ok(try_if_eof!(r.read_u8(), what))
}

macro_rules! field_readers {
    ($($name:ident => $method:ident::<$order:ty> -> $t:ty;)*) => {
        $(
            pub fn $name<R: ?Sized + Read>(r: &mut R, what: &'static str) -> Result<$t> {
                Ok(try_if_eof!(r.$method::<$order>(), what))
            }
        )*
    }
}

field_readers! {
    read_u16_le => read_u16::<LittleEndian> -> u16;
    read_u16_be => read_u16::<BigEndian> -> u16;
    read_i32_le => read_i32::<LittleEndian> -> i32;
    read_i32_be => read_i32::<BigEndian> -> i32;
}

/// Discards up to `n` bytes, returning how many were actually dropped.
pub fn skip_bytes<R: ?Sized + Read>(r: &mut R, n: u64) -> io::Result<u64> {
    io::copy(&mut Read::take(r, n), &mut io::sink())
}

/// Discards exactly `n` bytes or fails with `PrematureEndOfStream`.
pub fn skip_exact<R: ?Sized + Read>(r: &mut R, n: u64, what: &'static str) -> Result<()> {
    if skip_bytes(r, n)? != n {
        return Err(unexpected_eof!(what));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::types::Error;

    #[test]
    fn test_skip_bytes_stops_at_end() {
        let mut r = Cursor::new(vec![1u8, 2, 3]);
        assert_eq!(skip_bytes(&mut r, 2).unwrap(), 2);
        assert_eq!(skip_bytes(&mut r, 10).unwrap(), 1);
        assert_eq!(skip_bytes(&mut r, 10).unwrap(), 0);
    }

    #[test]
    fn test_skip_exact_reports_short_source() {
        let mut r = Cursor::new(vec![0u8; 4]);
        match skip_exact(&mut r, 5, "when skipping test data") {
            Err(Error::PrematureEndOfStream(Some(s))) => assert_eq!(s, "when skipping test data"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_field_readers_byte_order() {
        let mut r = Cursor::new(vec![0x01, 0x02, 0x01, 0x02, 0xff, 0xff, 0xff, 0xfe]);
        assert_eq!(read_u16_le(&mut r, "le").unwrap(), 0x0201);
        assert_eq!(read_u16_be(&mut r, "be").unwrap(), 0x0102);
        assert_eq!(read_i32_be(&mut r, "be").unwrap(), -2);
        assert!(matches!(read_u8(&mut r, "eof"), Err(Error::PrematureEndOfStream(Some(_)))));
    }
}
