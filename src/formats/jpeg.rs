//! JPEG marker segment scanner.
//!
//! JPEG has no fixed header; the frame size lives in the first start-of-frame segment,
//! which may be preceded by any number of application, table and comment segments.
//! The scanner walks the segments one by one, skipping each by its declared length.

use std::io::Read;

use tracing::{debug, trace};

use crate::types::{Dimensions, Error, Result};
use crate::utils::{read_u16_be, read_u8, skip_exact};

const MARKER_PREFIX: u8 = 0xff;
const STUFFED_BYTE: u8 = 0x00;
const EOI: u8 = 0xd9;

/// Baseline, extended sequential, progressive and lossless frames.
fn is_sof(marker: u8) -> bool {
    matches!(marker, 0xc0..=0xc3)
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum State {
    /// Positioned right after a `0xFF` prefix.
    AwaitingMarker,
    /// Positioned after the length field of a segment which does not carry dimensions.
    SkippingSegment { marker: u8, length: u16 },
    Found(Dimensions),
    EoiReached,
    /// The byte after a skipped segment was not a marker prefix.
    Desynced(u8),
}

/// Scans marker segments, starting right after `FF D8 FF`, until a start-of-frame segment
/// yields the image dimensions.
pub fn read_dimensions<R: ?Sized + Read>(r: &mut R) -> Result<Dimensions> {
    let mut state = State::AwaitingMarker;
    loop {
        state = match state {
            State::AwaitingMarker => read_marker(r)?,
            State::SkippingSegment { marker, length } => skip_segment(r, marker, length)?,
            State::Found(dimensions) => return Ok(dimensions),
            State::EoiReached => return Err(Error::NoDimensionsFound),
            State::Desynced(b) => {
                debug!(byte = b, "lost marker synchronization");
                return Err(malformed!("expected marker prefix 0xFF, found 0x{:02X}", b));
            }
        };
    }
}

fn read_marker<R: ?Sized + Read>(r: &mut R) -> Result<State> {
    let marker = read_u8(r, "when reading marker type")?;
    if marker == STUFFED_BYTE {
        return Ok(State::AwaitingMarker);
    }
    if marker == EOI {
        trace!("reached end of image");
        return Ok(State::EoiReached);
    }

    let length = read_u16_be(r, "when reading marker segment length")?;
    trace!(marker, length, "marker segment");

    if is_sof(marker) {
        let _precision = read_u8(r, "when reading sample precision")?;
        let height = read_u16_be(r, "when reading frame height")?;
        let width = read_u16_be(r, "when reading frame width")?;
        return Ok(State::Found((width, height).into()));
    }

    Ok(State::SkippingSegment { marker, length })
}

fn skip_segment<R: ?Sized + Read>(r: &mut R, marker: u8, length: u16) -> Result<State> {
    let payload = match length.checked_sub(2) {
        Some(n) => n as u64,
        None => {
            return Err(malformed!(
                "segment length {} of marker 0x{:02X} is shorter than the length field",
                length,
                marker
            ))
        }
    };
    skip_exact(r, payload, "when skipping marker segment payload")?;

    match read_u8(r, "when reading next marker prefix")? {
        MARKER_PREFIX => Ok(State::AwaitingMarker),
        b => Ok(State::Desynced(b)),
    }
}
