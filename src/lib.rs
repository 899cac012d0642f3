//! Reads the pixel dimensions of BMP, GIF, PNG, MNG and JPEG images from their first
//! few bytes, without decoding any image data.
//!
//! ```no_run
//! let dims = imsize::load_from_file("photo.jpg")?;
//! println!("{}x{}", dims.width, dims.height);
//! # Ok::<(), imsize::Error>(())
//! ```

pub use generic::{load, load_from_buffer, load_from_file, load_from_seekable, load_info};
pub use traits::LoadableDimensions;
pub use types::{Dimensions, Error, ImageFormat, ImageInfo, Result};

#[macro_use]
mod macros;
mod generic;
mod traits;
mod types;
mod utils;

pub mod formats;
