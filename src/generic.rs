//! Format detection by leading signature bytes.

use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use arrayvec::ArrayVec;
use tracing::debug;

use crate::formats::{bmp, gif, jpeg, png};
use crate::types::{Dimensions, Error, ImageFormat, ImageInfo, Result};
use crate::utils::read_u8;

/// What a fully matched signature leads to.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum Outcome {
    Parse(ImageFormat),
    Unsupported(&'static str),
}

/// A magic byte sequence; every position lists the byte values accepted there.
struct Signature {
    pattern: &'static [&'static [u8]],
    outcome: Outcome,
}

const SIGNATURES: &[Signature] = &[
    Signature {
        pattern: &[b"B", b"M"],
        outcome: Outcome::Parse(ImageFormat::Bmp),
    },
    Signature {
        pattern: &[b"B", b"A"],
        outcome: Outcome::Unsupported("OS/2 bitmap array"),
    },
    Signature {
        pattern: &[b"G", b"I", b"F", b"8", b"97", b"a"],
        outcome: Outcome::Parse(ImageFormat::Gif),
    },
    Signature {
        pattern: &[b"\x89", b"P", b"N", b"G", b"\r", b"\n", b"\x1a", b"\n"],
        outcome: Outcome::Parse(ImageFormat::Png),
    },
    Signature {
        pattern: &[b"\x8a", b"M", b"N", b"G", b"\r", b"\n", b"\x1a", b"\n"],
        outcome: Outcome::Parse(ImageFormat::Mng),
    },
    Signature {
        pattern: &[b"\xff", b"\xd8", b"\xff"],
        outcome: Outcome::Parse(ImageFormat::Jpeg),
    },
];

const MAX_SIGNATURES: usize = 8;

/// Reads signature bytes one at a time, narrowing the candidate set after each byte.
///
/// All candidates are matched in lockstep, so no byte is ever read twice and a
/// mismatch is final: the source may not be seekable, so there is no second guess.
fn match_signature<R: ?Sized + Read>(r: &mut R) -> Result<Outcome> {
    let mut candidates: ArrayVec<&Signature, MAX_SIGNATURES> = SIGNATURES.iter().collect();

    let mut pos = 0;
    loop {
        let b = read_u8(r, "when reading image signature")?;
        candidates.retain(|s| s.pattern[pos].contains(&b));
        pos += 1;

        if let Some(s) = candidates.iter().find(|s| s.pattern.len() == pos) {
            return Ok(s.outcome);
        }
        if candidates.is_empty() {
            return Err(Error::UnrecognizedFormat);
        }
    }
}

/// Detects the format of the image in `r` and reads its dimensions.
///
/// Only the bytes up to the dimension fields are consumed; `r` is left wherever the
/// header parser stopped.
pub fn load_info<R: ?Sized + Read>(r: &mut R) -> Result<ImageInfo> {
    let format = match match_signature(r)? {
        Outcome::Parse(format) => format,
        Outcome::Unsupported(what) => {
            debug!(variant = what, "unsupported image variant");
            return Err(unsupported!(what));
        }
    };
    debug!(%format, "detected image format");

    let dimensions = match format {
        ImageFormat::Bmp => bmp::read_dimensions(r)?,
        ImageFormat::Gif => gif::read_dimensions(r)?,
        ImageFormat::Png | ImageFormat::Mng => png::read_dimensions(r)?,
        ImageFormat::Jpeg => jpeg::read_dimensions(r)?,
    };
    debug!(%format, %dimensions, "read image dimensions");

    Ok(ImageInfo { format, dimensions })
}

#[inline]
pub fn load<R: ?Sized + Read>(r: &mut R) -> Result<Dimensions> {
    load_info(r).map(|info| info.dimensions)
}

/// Rewinds `r` to its start before detecting the format.
pub fn load_from_seekable<R: ?Sized + Read + Seek>(r: &mut R) -> Result<Dimensions> {
    r.rewind()?;
    load(r)
}

#[inline]
pub fn load_from_buffer(mut buf: &[u8]) -> Result<Dimensions> {
    load(&mut buf)
}

/// Opens the file at `path` read-only and reads its dimensions. The file is closed on
/// every exit path.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Dimensions> {
    load_info_from_file(path).map(|info| info.dimensions)
}

pub(crate) fn load_info_from_file<P: AsRef<Path>>(path: P) -> Result<ImageInfo> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return Err(Error::InvalidArgument("empty image path".into()));
    }
    let mut f = BufReader::new(File::open(path)?);
    load_info(&mut f)
}
