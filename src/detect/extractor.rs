use image::RgbaImage;
use log::{debug, warn};

use super::marching::{DEFAULT_MAX_STEPS, trace_contour};
use super::{PixelBuffer, Rect};

/// Sprites must be strictly larger than this in both dimensions to be kept
pub const DEFAULT_MIN_SIZE: u32 = 3;

/// Outcome of one extraction run over a sheet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Detection {
    /// Accepted sprites in discovery order
    pub sprites: Vec<Rect>,
    /// Regions cleared without being kept because they were too small
    pub discarded: usize,
    /// Walks that stopped before closing
    pub truncated: usize,
}

/// Repeatedly traces and blanks regions of a pixel buffer until none remain.
///
/// The whole bounding box of each traced region is cleared, not just the
/// region itself, so a sprite lying inside another sprite's box is erased
/// before it can be found.
pub struct SpriteExtractor {
    buffer: PixelBuffer,
    min_size: u32,
    max_steps: usize,
}

impl SpriteExtractor {
    pub fn new(buffer: PixelBuffer) -> Self {
        Self {
            buffer,
            min_size: DEFAULT_MIN_SIZE,
            max_steps: DEFAULT_MAX_STEPS,
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

    /// Run detection to exhaustion
    pub fn run(&mut self) -> Detection {
        let mut detection = Detection::default();

        while let Some(contour) = trace_contour(&self.buffer, self.max_steps) {
            if contour.points.len() <= 3 {
                break;
            }
            let Some(rect) = contour.bounds() else {
                break;
            };

            if !contour.closed {
                warn!(
                    "Contour starting at ({}, {}) did not close after {} steps",
                    contour.start.x,
                    contour.start.y,
                    contour.points.len()
                );
                detection.truncated += 1;
            }

            if rect.width() > self.min_size && rect.height() > self.min_size {
                debug!(
                    "Sprite {}: {}x{} at ({}, {})",
                    detection.sprites.len(),
                    rect.width(),
                    rect.height(),
                    rect.left,
                    rect.top
                );
                detection.sprites.push(rect);
            } else {
                detection.discarded += 1;
            }

            self.buffer.clear_rect(&rect);

            // A truncated walk may produce a box that misses its own start
            if self.buffer.is_opaque(contour.start.x, contour.start.y) {
                self.buffer.clear_pixel(contour.start);
            }
        }

        detection
    }

    /// Give back the buffer in its post-detection state
    pub fn into_buffer(self) -> PixelBuffer {
        self.buffer
    }
}

/// Detect sprite bounding boxes with the default thresholds.
///
/// The image is copied; the caller's pixels are left untouched.
pub fn detect_sprites(image: &RgbaImage) -> Vec<Rect> {
    SpriteExtractor::new(PixelBuffer::from_rgba(image))
        .run()
        .sprites
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn fill(img: &mut RgbaImage, x0: u32, y0: u32, w: u32, h: u32) {
        for y in y0..y0 + h {
            for x in x0..x0 + w {
                img.put_pixel(x, y, Rgba([200, 100, 50, 255]));
            }
        }
    }

    #[test]
    fn test_single_rectangle() {
        let mut img = RgbaImage::new(20, 20);
        fill(&mut img, 3, 4, 8, 6);

        let sprites = detect_sprites(&img);

        assert_eq!(sprites.len(), 1);
        let rect = sprites[0];
        assert_eq!((rect.left, rect.top), (3, 4));
        assert_eq!((rect.width(), rect.height()), (8, 6));
    }

    #[test]
    fn test_transparent_image() {
        let img = RgbaImage::new(32, 32);
        assert!(detect_sprites(&img).is_empty());
    }

    #[test]
    fn test_zero_area_image() {
        let img = RgbaImage::new(0, 0);
        assert!(detect_sprites(&img).is_empty());
    }

    #[test]
    fn test_raster_discovery_order() {
        let mut img = RgbaImage::new(40, 30);
        // Further right but higher up, so found first
        fill(&mut img, 20, 2, 5, 5);
        fill(&mut img, 2, 10, 6, 4);

        let sprites = detect_sprites(&img);

        assert_eq!(
            sprites,
            vec![Rect::new(20, 2, 25, 7), Rect::new(2, 10, 8, 14)]
        );
    }

    #[test]
    fn test_sprite_touching_far_edge() {
        let mut img = RgbaImage::new(20, 20);
        fill(&mut img, 15, 15, 5, 5);

        let sprites = detect_sprites(&img);

        assert_eq!(sprites, vec![Rect::new(15, 15, 20, 20)]);
    }

    #[test]
    fn test_small_shapes_are_cleared_but_not_kept() {
        let mut img = RgbaImage::new(30, 30);
        fill(&mut img, 1, 1, 3, 3);
        fill(&mut img, 10, 1, 10, 2);
        fill(&mut img, 5, 10, 1, 1);
        img.put_pixel(20, 20, Rgba([0, 0, 0, 255]));
        img.put_pixel(21, 21, Rgba([0, 0, 0, 255]));

        let mut extractor = SpriteExtractor::new(PixelBuffer::from_rgba(&img));
        let detection = extractor.run();

        assert!(detection.sprites.is_empty());
        assert_eq!(detection.discarded, 5);
        assert!(extractor.into_buffer().is_transparent());
    }

    #[test]
    fn test_min_size_is_exclusive() {
        let mut img = RgbaImage::new(20, 20);
        fill(&mut img, 1, 1, 4, 4);
        fill(&mut img, 10, 10, 3, 8);

        let sprites = detect_sprites(&img);

        assert_eq!(sprites, vec![Rect::new(1, 1, 5, 5)]);
    }

    #[test]
    fn test_custom_min_size() {
        let mut img = RgbaImage::new(20, 20);
        fill(&mut img, 1, 1, 4, 4);
        fill(&mut img, 8, 8, 10, 10);

        let detection = SpriteExtractor::new(PixelBuffer::from_rgba(&img))
            .min_size(5)
            .run();

        assert_eq!(detection.sprites, vec![Rect::new(8, 8, 18, 18)]);
        assert_eq!(detection.discarded, 1);
    }

    #[test]
    fn test_rerun_after_extraction_is_empty() {
        let mut img = RgbaImage::new(40, 40);
        fill(&mut img, 2, 2, 6, 6);
        fill(&mut img, 20, 5, 8, 12);
        fill(&mut img, 4, 25, 2, 2);

        let mut first = SpriteExtractor::new(PixelBuffer::from_rgba(&img));
        assert_eq!(first.run().sprites.len(), 2);

        let mut second = SpriteExtractor::new(first.into_buffer());
        assert_eq!(second.run(), Detection::default());
    }

    #[test]
    fn test_source_image_is_not_mutated() {
        let mut img = RgbaImage::new(10, 10);
        fill(&mut img, 2, 2, 5, 5);
        let before = img.clone();

        let _ = detect_sprites(&img);

        assert_eq!(img, before);
    }

    #[test]
    fn test_nested_sprite_is_lost() {
        // A 20x20 frame with a 2px border and a separate 5x5 block in its
        // hole: clearing the frame's bounding box wipes the block too
        let mut img = RgbaImage::new(30, 30);
        fill(&mut img, 2, 2, 20, 2);
        fill(&mut img, 2, 20, 20, 2);
        fill(&mut img, 2, 2, 2, 20);
        fill(&mut img, 20, 2, 2, 20);
        fill(&mut img, 9, 9, 5, 5);

        let mut extractor = SpriteExtractor::new(PixelBuffer::from_rgba(&img));
        let detection = extractor.run();

        assert_eq!(detection.sprites, vec![Rect::new(2, 2, 22, 22)]);
        assert!(extractor.into_buffer().is_transparent());
    }

    #[test]
    fn test_truncated_walks_still_terminate() {
        let mut img = RgbaImage::new(20, 20);
        fill(&mut img, 2, 2, 10, 10);

        let mut extractor = SpriteExtractor::new(PixelBuffer::from_rgba(&img)).max_steps(5);
        let detection = extractor.run();

        assert!(detection.sprites.is_empty());
        assert!(detection.truncated > 0);
        assert!(extractor.into_buffer().is_transparent());
    }
}
