use image::RgbaImage;

use crate::detect::Rect;

/// Cut a rectangle out of the source image into a new image.
///
/// The result is always `rect.width() x rect.height()`. Any part of the
/// rectangle lying past the source's right or bottom edge stays transparent.
pub fn crop_rectangle(image: &RgbaImage, rect: &Rect) -> RgbaImage {
    let width = rect.width();
    let height = rect.height();
    let mut cropped = RgbaImage::new(width, height);

    let (source_width, source_height) = image.dimensions();
    let copy_width = width.min(source_width.saturating_sub(rect.left));
    let copy_height = height.min(source_height.saturating_sub(rect.top));

    if copy_width > 0 && copy_height > 0 {
        let region =
            image::imageops::crop_imm(image, rect.left, rect.top, copy_width, copy_height)
                .to_image();
        image::imageops::replace(&mut cropped, &region, 0, 0);
    }

    cropped
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn gradient(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| {
            Rgba([(x * 10) as u8, (y * 10) as u8, 7, 255])
        })
    }

    #[test]
    fn test_crop_inside_source() {
        let img = gradient(16, 16);
        let rect = Rect::new(3, 5, 9, 12);

        let cropped = crop_rectangle(&img, &rect);

        assert_eq!(cropped.dimensions(), (6, 7));
        for y in 0..7 {
            for x in 0..6 {
                assert_eq!(cropped.get_pixel(x, y), img.get_pixel(x + 3, y + 5));
            }
        }
    }

    #[test]
    fn test_crop_past_far_edge_is_transparent() {
        let img = gradient(10, 10);
        let rect = Rect::new(8, 7, 14, 13);

        let cropped = crop_rectangle(&img, &rect);

        assert_eq!(cropped.dimensions(), (6, 6));
        for y in 0..6 {
            for x in 0..6 {
                let expected = if x < 2 && y < 3 {
                    *img.get_pixel(x + 8, y + 7)
                } else {
                    Rgba([0, 0, 0, 0])
                };
                assert_eq!(*cropped.get_pixel(x, y), expected, "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_crop_entirely_outside() {
        let img = gradient(4, 4);
        let cropped = crop_rectangle(&img, &Rect::new(10, 10, 15, 15));

        assert_eq!(cropped.dimensions(), (5, 5));
        assert!(cropped.pixels().all(|p| p[3] == 0));
    }
}
