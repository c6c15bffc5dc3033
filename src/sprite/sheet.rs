use image::RgbaImage;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::SpriteCutError;

/// A decoded sprite sheet ready for detection
#[derive(Debug, Clone)]
pub struct SpriteSheet {
    /// Original file path
    pub path: PathBuf,
    /// Base name used to label output (file stem, e.g. "hero" for hero.png)
    pub name: String,
    /// Decoded RGBA8 pixels
    pub image: RgbaImage,
}

impl SpriteSheet {
    pub fn new(path: impl Into<PathBuf>, image: RgbaImage) -> Self {
        let path = path.into();
        let name = base_name(&path);
        Self { path, name, image }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// File name including extension, as referenced from CSS and JSON
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| format!("{}.png", self.name))
    }
}

/// File name without directory or extension
pub fn base_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "sheet".to_string())
}

/// Reject sheets whose base names collide, since each name owns one output
/// directory and the later sheet would overwrite the earlier one's files.
pub fn ensure_unique_names(sheets: &[SpriteSheet]) -> Result<(), SpriteCutError> {
    let mut seen: HashMap<&str, &Path> = HashMap::new();

    for sheet in sheets {
        if let Some(first) = seen.insert(&sheet.name, &sheet.path) {
            return Err(SpriteCutError::DuplicateSheetName {
                name: sheet.name.clone(),
                first: first.to_path_buf(),
                second: sheet.path.clone(),
            });
        }
    }

    Ok(())
}
