use image::RgbaImage;

use crate::detect::Rect;

/// Label of the sprite at `index` in CSS and JSON output
pub fn sprite_name(index: usize) -> String {
    format!("sprite{}", index)
}

/// One accepted sprite of a cut sheet
#[derive(Debug, Clone)]
pub struct CutSprite {
    /// Discovery index, also the numeric suffix of names and files
    pub index: usize,
    /// Metadata label (`sprite0`, `sprite1`, ...)
    pub name: String,
    /// Bounding box in sheet coordinates
    pub rect: Rect,
    /// Cropped pixels, absent when cropping was disabled
    pub image: Option<RgbaImage>,
}

/// Result of cutting one sprite sheet
#[derive(Debug, Clone)]
pub struct CutSheet {
    /// Sheet base name, used for the output directory and file names
    pub name: String,
    /// Sheet file name referenced by the metadata
    pub image_name: String,
    pub width: u32,
    pub height: u32,
    /// Sprites in discovery order
    pub sprites: Vec<CutSprite>,
    /// Regions cleared as too small
    pub discarded: usize,
    /// Contour walks that stopped before closing
    pub truncated: usize,
}

impl CutSheet {
    pub fn rects(&self) -> impl Iterator<Item = &Rect> {
        self.sprites.iter().map(|s| &s.rect)
    }
}
