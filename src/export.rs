use std::path::Path;

use image::{ImageBuffer, ImageFormat, Rgba};
use thiserror::Error;

use crate::canvas::Buffer;
use crate::render::scale_nearest;

/// Image formats the export dialog offers, detected from the extension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FileFormat {
    Png,
    Bmp,
    Gif,
    Unknown,
}

impl FileFormat {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "png" => FileFormat::Png,
            "bmp" => FileFormat::Bmp,
            "gif" => FileFormat::Gif,
            _ => FileFormat::Unknown,
        }
    }

    fn image_format(&self) -> Option<ImageFormat> {
        match self {
            FileFormat::Png => Some(ImageFormat::Png),
            FileFormat::Bmp => Some(ImageFormat::Bmp),
            FileFormat::Gif => Some(ImageFormat::Gif),
            FileFormat::Unknown => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("image encode error: {0}")]
    Encode(#[from] image::ImageError),
}

fn detect_format(path: &Path) -> FileFormat {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(FileFormat::from_extension)
        .unwrap_or(FileFormat::Unknown)
}

/// Writes `buffer` to `path`, magnified by the integer `scale` so each
/// sprite pixel becomes a solid block in the output image. The format is
/// chosen by the file extension.
pub fn export_image(buffer: &Buffer, scale: usize, path: &Path) -> Result<(), ExportError> {
    let format = detect_format(path).image_format().ok_or_else(|| {
        ExportError::UnsupportedFormat(path.to_string_lossy().into_owned())
    })?;

    let scale = scale.max(1);
    let width = buffer.width() * scale;
    let height = buffer.height() * scale;
    let bytes = scale_nearest(buffer, scale);

    let mut img = ImageBuffer::new(width as u32, height as u32);
    for y in 0..height {
        for x in 0..width {
            let idx = (y * width + x) * 4;
            img.put_pixel(
                x as u32,
                y as u32,
                Rgba([bytes[idx], bytes[idx + 1], bytes[idx + 2], bytes[idx + 3]]),
            );
        }
    }

    img.save_with_format(path, format)?;
    log::info!("exported {}x{} image to {}", width, height, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Rgba as Color;
    use std::sync::Arc;

    #[test]
    fn format_detection() {
        assert_eq!(FileFormat::from_extension("PNG"), FileFormat::Png);
        assert_eq!(FileFormat::from_extension("bmp"), FileFormat::Bmp);
        assert_eq!(FileFormat::from_extension("gif"), FileFormat::Gif);
        assert_eq!(FileFormat::from_extension("tga"), FileFormat::Unknown);
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let buffer = Buffer::new(2, 2);
        let result = export_image(&buffer, 1, Path::new("sprite.xyz"));
        assert!(matches!(result, Err(ExportError::UnsupportedFormat(_))));
    }

    #[test]
    fn exported_png_round_trips_scaled_pixels() {
        let pen = Color::new(200, 100, 50, 255);
        let buffer = Arc::new(Buffer::new(2, 2)).painted(0, 0, pen);
        let path = std::env::temp_dir().join("pixelique_export_test.png");

        export_image(&buffer, 2, &path).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.dimensions(), (4, 4));
        assert_eq!(img.get_pixel(0, 0).0, [200, 100, 50, 255]);
        assert_eq!(img.get_pixel(1, 1).0, [200, 100, 50, 255]);
        assert_eq!(img.get_pixel(2, 0).0, [0, 0, 0, 0]);

        let _ = std::fs::remove_file(&path);
    }
}
