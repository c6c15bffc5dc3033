use log::info;

use super::types::{CutSheet, CutSprite, sprite_name};
use crate::detect::{
    DEFAULT_MAX_STEPS, DEFAULT_MIN_SIZE, Detection, PixelBuffer, SpriteExtractor,
};
use crate::sprite::{SpriteSheet, crop_rectangle};

/// Configuration for cutting sprite sheets.
///
/// Holds no per-sheet state, so one cutter can be shared across threads.
#[derive(Debug, Clone, Copy)]
pub struct SheetCutter {
    pub min_size: u32,
    pub max_steps: usize,
    pub crop: bool,
}

impl Default for SheetCutter {
    fn default() -> Self {
        Self::new()
    }
}

impl SheetCutter {
    pub fn new() -> Self {
        Self {
            min_size: DEFAULT_MIN_SIZE,
            max_steps: DEFAULT_MAX_STEPS,
            crop: true,
        }
    }

    pub fn min_size(mut self, min_size: u32) -> Self {
        self.min_size = min_size;
        self
    }

    pub fn max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    pub fn crop(mut self, crop: bool) -> Self {
        self.crop = crop;
        self
    }

    /// Find sprite rectangles without cropping anything
    pub fn detect(&self, sheet: &SpriteSheet) -> Detection {
        SpriteExtractor::new(PixelBuffer::from_rgba(&sheet.image))
            .min_size(self.min_size)
            .max_steps(self.max_steps)
            .run()
    }

    /// Detect every sprite on the sheet and crop each one
    pub fn cut(&self, sheet: &SpriteSheet) -> CutSheet {
        let detection = self.detect(sheet);

        let sprites = detection
            .sprites
            .iter()
            .enumerate()
            .map(|(index, rect)| CutSprite {
                index,
                name: sprite_name(index),
                rect: *rect,
                image: self.crop.then(|| crop_rectangle(&sheet.image, rect)),
            })
            .collect::<Vec<_>>();

        info!(
            "{}: found {} sprites ({} discarded as too small)",
            sheet.name,
            sprites.len(),
            detection.discarded
        );

        CutSheet {
            name: sheet.name.clone(),
            image_name: sheet.file_name(),
            width: sheet.width(),
            height: sheet.height(),
            sprites,
            discarded: detection.discarded,
            truncated: detection.truncated,
        }
    }
}
