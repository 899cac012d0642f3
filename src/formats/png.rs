//! PNG and MNG header chunk.
//!
//! Both formats start with a fixed-layout header chunk (`IHDR` and `MHDR` respectively)
//! whose first two fields are the frame width and height. The chunk type and CRC are
//! not checked.

use std::io::Read;

use tracing::trace;

use crate::types::{Dimensions, Result};
use crate::utils::{read_i32_be, skip_exact};

/// Chunk length plus chunk type of the first chunk.
const CHUNK_PREFIX_LEN: u64 = 8;

pub fn read_dimensions<R: ?Sized + Read>(r: &mut R) -> Result<Dimensions> {
    skip_exact(r, CHUNK_PREFIX_LEN, "when skipping header chunk length and type")?;

    let width = read_i32_be(r, "when reading width")?;
    let height = read_i32_be(r, "when reading height")?;
    trace!(width, height, "read header chunk");

    Ok((width, height).into())
}
