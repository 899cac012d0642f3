use std::borrow::Cow;
use std::fmt;
use std::io;
use std::result;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(Cow<'static, str>),

    #[error("unrecognized image format")]
    UnrecognizedFormat,

    #[error("unsupported format variant: {0}")]
    UnsupportedVariant(Cow<'static, str>),

    #[error("malformed image stream: {0}")]
    MalformedStream(Cow<'static, str>),

    #[error("premature end of stream{}", eof_context(.0))]
    PrematureEndOfStream(Option<Cow<'static, str>>),

    #[error("no dimensions found before end of image")]
    NoDimensionsFound,

    #[error("I/O error: {0}")]
    Io(#[source] io::Error),
}

fn eof_context(context: &Option<Cow<'static, str>>) -> String {
    match *context {
        Some(ref s) => format!(": {}", s),
        None => String::new(),
    }
}

impl From<io::Error> for Error {
    #[inline]
    fn from(e: io::Error) -> Error {
        match e.kind() {
            io::ErrorKind::UnexpectedEof => Error::PrematureEndOfStream(None),
            _ => Error::Io(e),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;

/// Pixel dimensions of an image, as encoded by its header.
///
/// Values are stored exactly as the source format encodes them. In particular a BMP
/// image with the 40-byte info header may report a negative height, which marks
/// top-down row order.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Dimensions {
    pub width: i32,
    pub height: i32,
}

impl<T: Into<i32>, U: Into<i32>> From<(T, U)> for Dimensions {
    fn from((w, h): (T, U)) -> Dimensions {
        Dimensions {
            width: w.into(),
            height: h.into(),
        }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Image format family recognized by its leading signature bytes.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum ImageFormat {
    Bmp,
    Gif,
    Png,
    Mng,
    Jpeg,
}

impl ImageFormat {
    pub fn mime_type(self) -> &'static str {
        match self {
            ImageFormat::Bmp => "image/bmp",
            ImageFormat::Gif => "image/gif",
            ImageFormat::Png => "image/png",
            ImageFormat::Mng => "video/x-mng",
            ImageFormat::Jpeg => "image/jpeg",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Bmp => "bmp",
            ImageFormat::Gif => "gif",
            ImageFormat::Png => "png",
            ImageFormat::Mng => "mng",
            ImageFormat::Jpeg => "jpg",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            ImageFormat::Bmp => "BMP",
            ImageFormat::Gif => "GIF",
            ImageFormat::Png => "PNG",
            ImageFormat::Mng => "MNG",
            ImageFormat::Jpeg => "JPEG",
        };
        f.write_str(name)
    }
}

/// Detected format together with the dimensions read from its header.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct ImageInfo {
    pub format: ImageFormat,
    pub dimensions: Dimensions,
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::{Dimensions, Error};

    #[test]
    fn test_dimensions_from_mixed_pair() {
        let d = Dimensions::from((640u16, -480i32));
        assert_eq!(d, Dimensions { width: 640, height: -480 });
        assert_eq!(d.to_string(), "640x-480");
    }

    #[test]
    fn test_eof_io_error_maps_to_premature_end() {
        let e: Error = io::Error::new(io::ErrorKind::UnexpectedEof, "eof").into();
        assert!(matches!(e, Error::PrematureEndOfStream(None)));

        let e: Error = io::Error::new(io::ErrorKind::PermissionDenied, "nope").into();
        assert!(matches!(e, Error::Io(_)));
    }

    #[test]
    fn test_premature_end_message() {
        assert_eq!(Error::PrematureEndOfStream(None).to_string(), "premature end of stream");
        assert_eq!(
            Error::PrematureEndOfStream(Some("when reading width".into())).to_string(),
            "premature end of stream: when reading width"
        );
    }
}
