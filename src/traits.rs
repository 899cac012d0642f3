use std::io::{Read, Seek};
use std::path::Path;

use crate::generic;
use crate::types::{Dimensions, ImageInfo, Result};

/// Values which can be read from the leading bytes of an image.
///
/// `load` is the only required method; the other entry points adapt a file path, an
/// in-memory buffer or a seekable reader to it.
pub trait LoadableDimensions: Sized {
    fn load<R: ?Sized + Read>(r: &mut R) -> Result<Self>;

    /// Opens `path` read-only; the file is released before this method returns.
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self>;

    #[inline]
    fn load_from_buffer(mut buf: &[u8]) -> Result<Self> {
        Self::load(&mut buf)
    }

    /// Rewinds `r` to offset 0 before reading.
    #[inline]
    fn load_from_seekable<R: ?Sized + Read + Seek>(r: &mut R) -> Result<Self> {
        r.rewind()?;
        Self::load(r)
    }
}

impl LoadableDimensions for ImageInfo {
    #[inline]
    fn load<R: ?Sized + Read>(r: &mut R) -> Result<ImageInfo> {
        generic::load_info(r)
    }

    #[inline]
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ImageInfo> {
        generic::load_info_from_file(path)
    }
}

impl LoadableDimensions for Dimensions {
    #[inline]
    fn load<R: ?Sized + Read>(r: &mut R) -> Result<Dimensions> {
        generic::load(r)
    }

    #[inline]
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Dimensions> {
        generic::load_from_file(path)
    }
}
