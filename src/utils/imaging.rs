use std::io::Cursor;

use image::{ImageFormat, ImageOutputFormat};

/// Largest accepted upload, checked before any storage I/O.
pub const MAX_IMAGE_SIZE: usize = 5 * 1024 * 1024;
pub const JPEG_QUALITY: u8 = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Jpeg,
    Png,
    Gif,
}

impl ImageKind {
    /// Case-insensitive match on the extension after the last dot.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let (_, ext) = filename.rsplit_once('.')?;
        match ext.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Some(ImageKind::Jpeg),
            "png" => Some(ImageKind::Png),
            "gif" => Some(ImageKind::Gif),
            _ => None,
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            ImageKind::Jpeg => "image/jpeg",
            ImageKind::Png => "image/png",
            ImageKind::Gif => "image/gif",
        }
    }
}

pub fn extension(filename: &str) -> String {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| format!(".{}", ext.to_ascii_lowercase()))
        .unwrap_or_default()
}

/// Re-encodes jpeg at [`JPEG_QUALITY`] and png losslessly. Gifs are returned
/// untouched. Errors are left to the caller, which keeps the original bytes.
pub fn optimize(kind: ImageKind, data: &[u8]) -> anyhow::Result<Vec<u8>> {
    let (input, output) = match kind {
        ImageKind::Jpeg => (ImageFormat::Jpeg, ImageOutputFormat::Jpeg(JPEG_QUALITY)),
        ImageKind::Png => (ImageFormat::Png, ImageOutputFormat::Png),
        ImageKind::Gif => return Ok(data.to_vec()),
    };

    let decoded = image::load_from_memory_with_format(data, input)?;
    let mut encoded = Cursor::new(Vec::with_capacity(data.len()));
    decoded.write_to(&mut encoded, output)?;
    Ok(encoded.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, RgbImage};

    fn sample(format: ImageOutputFormat) -> Vec<u8> {
        let img = DynamicImage::ImageRgb8(RgbImage::from_fn(32, 32, |x, y| {
            image::Rgb([(x * 8) as u8, (y * 8) as u8, 128])
        }));
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, format).unwrap();
        out.into_inner()
    }

    #[test]
    fn test_kind_from_filename() {
        assert_eq!(ImageKind::from_filename("a.jpg"), Some(ImageKind::Jpeg));
        assert_eq!(ImageKind::from_filename("a.JPEG"), Some(ImageKind::Jpeg));
        assert_eq!(ImageKind::from_filename("shot.Png"), Some(ImageKind::Png));
        assert_eq!(ImageKind::from_filename("x.tar.gif"), Some(ImageKind::Gif));
        assert_eq!(ImageKind::from_filename("doc.bmp"), None);
        assert_eq!(ImageKind::from_filename("noext"), None);
    }

    #[test]
    fn test_content_type() {
        assert_eq!(ImageKind::Jpeg.content_type(), "image/jpeg");
        assert_eq!(ImageKind::Gif.content_type(), "image/gif");
    }

    #[test]
    fn test_extension() {
        assert_eq!(extension("photo.BMP"), ".bmp");
        assert_eq!(extension("photo"), "");
    }

    #[test]
    fn test_optimize_jpeg_produces_jpeg() {
        let out = optimize(ImageKind::Jpeg, &sample(ImageOutputFormat::Jpeg(100))).unwrap();
        assert_eq!(image::guess_format(&out).unwrap(), ImageFormat::Jpeg);
    }

    #[test]
    fn test_optimize_png_produces_png() {
        let out = optimize(ImageKind::Png, &sample(ImageOutputFormat::Png)).unwrap();
        assert_eq!(image::guess_format(&out).unwrap(), ImageFormat::Png);
    }

    #[test]
    fn test_gif_is_passed_through() {
        let data = b"GIF89a not really decoded".to_vec();
        assert_eq!(optimize(ImageKind::Gif, &data).unwrap(), data);
    }

    #[test]
    fn test_garbage_fails_to_optimize() {
        assert!(optimize(ImageKind::Jpeg, b"definitely not a jpeg").is_err());
        assert!(optimize(ImageKind::Png, b"nor a png").is_err());
    }
}
