use image::{DynamicImage, RgbaImage};

use super::{Point, Rect};

/// Scratch RGBA8 copy of a sprite sheet that detection clears as it goes.
///
/// Pixel `(x, y)` lives at bytes `4 * (y * width + x) .. +4` in R, G, B, A
/// order. The source image is never touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Copy an RGBA8 image into a new buffer
    pub fn from_rgba(image: &RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        Self {
            width,
            height,
            data: image.as_raw().clone(),
        }
    }

    /// Convert any decoded image, scaling each channel down to 8 bits
    pub fn from_image(image: &DynamicImage) -> Self {
        let rgba = image.to_rgba8();
        let (width, height) = rgba.dimensions();
        Self {
            width,
            height,
            data: rgba.into_raw(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    /// True if the pixel is inside the buffer and has non-zero alpha
    pub fn is_opaque(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height && self.data[self.offset(x, y) + 3] > 0
    }

    /// First non-transparent pixel in raster order (rows top to bottom,
    /// columns left to right)
    pub fn first_opaque(&self) -> Option<Point> {
        for y in 0..self.height {
            for x in 0..self.width {
                if self.is_opaque(x, y) {
                    return Some(Point::new(x, y));
                }
            }
        }
        None
    }

    /// Zero every channel of the pixels in `[left, right) x [top, bottom)`,
    /// clipped to the buffer
    pub fn clear_rect(&mut self, rect: &Rect) {
        let right = rect.right.min(self.width);
        let bottom = rect.bottom.min(self.height);
        if rect.left >= right {
            return;
        }

        for y in rect.top..bottom {
            let start = self.offset(rect.left, y);
            let end = self.offset(right, y);
            self.data[start..end].fill(0);
        }
    }

    /// Zero a single pixel; out-of-bounds coordinates are ignored
    pub fn clear_pixel(&mut self, p: Point) {
        if p.x < self.width && p.y < self.height {
            let start = self.offset(p.x, p.y);
            self.data[start..start + 4].fill(0);
        }
    }

    /// True once no pixel has any alpha left
    pub fn is_transparent(&self) -> bool {
        self.data.chunks_exact(4).all(|px| px[3] == 0)
    }
}
