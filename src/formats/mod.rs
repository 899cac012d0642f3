//! Per-format header parsers.
//!
//! Each parser is entered with the source positioned just past the signature the sniffer
//! has already matched, and reads only the fields leading up to the image dimensions.

pub mod bmp;
pub mod gif;
pub mod jpeg;
pub mod png;
