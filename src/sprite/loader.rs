use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use image::ImageReader;
use log::info;
use rayon::prelude::*;

use super::SpriteSheet;
use crate::error::SpriteCutError;

const SUPPORTED_EXTENSIONS: &[&str] = &["png", "gif", "bmp", "webp", "tga", "tiff"];

/// Load sprite sheets from input paths (files or directories).
///
/// Directories are searched recursively. Sheets are decoded in parallel and
/// returned in the order they were collected.
pub fn load_sheets(inputs: &[impl AsRef<Path>]) -> Result<Vec<SpriteSheet>> {
    let paths = collect_sheet_paths(inputs)?;

    if paths.is_empty() {
        return Err(SpriteCutError::NoImages.into());
    }

    info!("Loading {} sheets...", paths.len());

    paths.par_iter().map(|path| load_sheet(path)).collect()
}

fn collect_sheet_paths(inputs: &[impl AsRef<Path>]) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for input in inputs {
        let path = input.as_ref();
        if !path.exists() {
            return Err(SpriteCutError::InputNotFound(path.to_path_buf()).into());
        }

        if path.is_file() {
            if is_supported_image(path) {
                paths.push(path.to_path_buf());
            }
        } else if path.is_dir() {
            collect_from_directory(path, &mut paths)?;
        }
    }

    Ok(paths)
}

fn collect_from_directory(dir: &Path, paths: &mut Vec<PathBuf>) -> Result<()> {
    let mut entries = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory {}", dir.display()))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()?;
    // read_dir order is platform dependent
    entries.sort();

    for path in entries {
        if path.is_file() && is_supported_image(&path) {
            paths.push(path);
        } else if path.is_dir() {
            collect_from_directory(&path, paths)?;
        }
    }

    Ok(())
}

fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Decode a single sheet into RGBA8
pub fn load_sheet(path: &Path) -> Result<SpriteSheet> {
    let image = ImageReader::open(path)
        .map_err(|e| SpriteCutError::ImageLoad {
            path: path.to_path_buf(),
            source: e.into(),
        })?
        .decode()
        .map_err(|e| SpriteCutError::ImageLoad {
            path: path.to_path_buf(),
            source: e,
        })?
        .into_rgba8();

    Ok(SpriteSheet::new(path, image))
}
