use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbaImage};
use log::{debug, warn};

use super::sprite_png_filename;
use crate::cli::CompressionLevel;
use crate::cutter::CutSheet;
use crate::error::SpriteCutError;

/// A sprite that could not be written
#[derive(Debug)]
pub struct SpriteFailure {
    pub index: usize,
    pub error: SpriteCutError,
}

/// Per-sheet result of writing cropped sprites
#[derive(Debug, Default)]
pub struct ExportReport {
    /// Files written successfully, in sprite order
    pub written: Vec<PathBuf>,
    pub failures: Vec<SpriteFailure>,
}

impl ExportReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Save one sprite as PNG, optionally recompressed with oxipng
pub fn save_sprite_image(
    image: &RgbaImage,
    path: &Path,
    compress: Option<CompressionLevel>,
) -> Result<(), SpriteCutError> {
    let mut png_data = Cursor::new(Vec::new());
    image
        .write_to(&mut png_data, ImageFormat::Png)
        .map_err(|e| SpriteCutError::ImageSave {
            path: path.to_path_buf(),
            source: e,
        })?;

    let output_data = if let Some(level) = compress {
        let opts = match level {
            CompressionLevel::Level(n) => oxipng::Options::from_preset(n),
            CompressionLevel::Max => oxipng::Options::max_compression(),
        };
        oxipng::optimize_from_memory(&png_data.into_inner(), &opts).map_err(|e| {
            SpriteCutError::PngCompress {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
        })?
    } else {
        png_data.into_inner()
    };

    fs::write(path, output_data).map_err(|e| SpriteCutError::OutputWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Write every cropped sprite of the sheet into `output_dir`.
///
/// A failed sprite is recorded in the report and the rest are still written.
/// Sprites without cropped pixels are skipped.
pub fn write_sprites(
    sheet: &CutSheet,
    output_dir: &Path,
    compress: Option<CompressionLevel>,
) -> ExportReport {
    let mut report = ExportReport::default();

    for sprite in &sheet.sprites {
        let Some(image) = &sprite.image else {
            continue;
        };

        let path = output_dir.join(sprite_png_filename(&sheet.name, sprite.index));
        match save_sprite_image(image, &path, compress) {
            Ok(()) => {
                debug!("Saved {}", path.display());
                report.written.push(path);
            }
            Err(error) => {
                warn!(
                    "Failed to save sprite {} of {}: {}",
                    sprite.index, sheet.name, error
                );
                report.failures.push(SpriteFailure {
                    index: sprite.index,
                    error,
                });
            }
        }
    }

    report
}
