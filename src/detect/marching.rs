use log::{debug, trace};

use super::{PixelBuffer, Point, Rect};

/// Hard cap on the number of steps a single contour walk may take
pub const DEFAULT_MAX_STEPS: usize = 200_000;

/// Unit step along the pixel lattice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Move `p` one unit, or `None` if that would leave the lattice
    fn apply(self, p: Point) -> Option<Point> {
        match self {
            Direction::Up => p.y.checked_sub(1).map(|y| Point::new(p.x, y)),
            Direction::Down => p.y.checked_add(1).map(|y| Point::new(p.x, y)),
            Direction::Left => p.x.checked_sub(1).map(|x| Point::new(x, p.y)),
            Direction::Right => p.x.checked_add(1).map(|x| Point::new(x, p.y)),
        }
    }
}

/// Boundary walk around one non-transparent region
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contour {
    /// First opaque pixel in raster order, where the walk began
    pub start: Point,
    /// Every position visited after the start, in walk order
    pub points: Vec<Point>,
    /// False when the walk hit the step cap or a degenerate cell
    pub closed: bool,
}

impl Contour {
    pub fn bounds(&self) -> Option<Rect> {
        Rect::bounding(&self.points)
    }
}

/// 4-bit opacity code of the 2x2 cell whose bottom-right pixel is `p`.
///
/// Bit 1 is the top-left pixel, 2 top-right, 4 bottom-left, 8 bottom-right.
/// Pixels outside the buffer count as transparent.
pub fn cell_code(buffer: &PixelBuffer, p: Point) -> u8 {
    let left = p.x.checked_sub(1);
    let up = p.y.checked_sub(1);
    let opaque = |x: Option<u32>, y: Option<u32>| match (x, y) {
        (Some(x), Some(y)) => buffer.is_opaque(x, y),
        _ => false,
    };

    let mut code = 0;
    if opaque(left, up) {
        code |= 1;
    }
    if opaque(Some(p.x), up) {
        code |= 2;
    }
    if opaque(left, Some(p.y)) {
        code |= 4;
    }
    if opaque(Some(p.x), Some(p.y)) {
        code |= 8;
    }
    code
}

/// Pick the next step for a cell code.
///
/// The saddle cells 6 and 9 are resolved by the direction we arrived from so
/// the walk never folds back on itself. Codes 0 and 15 have no boundary to
/// follow and return `None`.
pub fn next_direction(code: u8, previous: Option<Direction>) -> Option<Direction> {
    match code {
        1 | 5 | 13 => Some(Direction::Up),
        8 | 10 | 11 => Some(Direction::Down),
        4 | 12 | 14 => Some(Direction::Left),
        2 | 3 | 7 => Some(Direction::Right),
        6 => {
            if previous == Some(Direction::Up) {
                Some(Direction::Left)
            } else {
                Some(Direction::Right)
            }
        }
        9 => {
            if previous == Some(Direction::Right) {
                Some(Direction::Up)
            } else {
                Some(Direction::Down)
            }
        }
        _ => None,
    }
}

/// Trace the boundary of the first region found by raster scan.
///
/// Returns `None` when the buffer has no opaque pixel. The walk stops when it
/// returns to the start pixel or after `max_steps` steps, whichever is first.
pub fn trace_contour(buffer: &PixelBuffer, max_steps: usize) -> Option<Contour> {
    let start = buffer.first_opaque()?;
    trace!("Contour start at ({}, {})", start.x, start.y);

    let mut points = Vec::new();
    let mut current = start;
    let mut previous = None;
    let mut closed = false;

    while points.len() < max_steps {
        let code = cell_code(buffer, current);
        let Some(direction) = next_direction(code, previous) else {
            debug!(
                "Degenerate cell {} at ({}, {}), abandoning walk",
                code, current.x, current.y
            );
            break;
        };
        let Some(next) = direction.apply(current) else {
            break;
        };

        current = next;
        points.push(current);
        previous = Some(direction);

        if current == start {
            closed = true;
            break;
        }
    }

    Some(Contour {
        start,
        points,
        closed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn buffer_with(width: u32, height: u32, pixels: &[(u32, u32)]) -> PixelBuffer {
        let mut img = RgbaImage::new(width, height);
        for &(x, y) in pixels {
            img.put_pixel(x, y, Rgba([255, 0, 0, 255]));
        }
        PixelBuffer::from_rgba(&img)
    }

    fn filled(width: u32, height: u32, x0: u32, y0: u32, w: u32, h: u32) -> PixelBuffer {
        let pixels: Vec<_> = (y0..y0 + h)
            .flat_map(|y| (x0..x0 + w).map(move |x| (x, y)))
            .collect();
        buffer_with(width, height, &pixels)
    }

    #[test]
    fn test_cell_code_bits() {
        let buffer = buffer_with(4, 4, &[(1, 1)]);

        assert_eq!(cell_code(&buffer, Point::new(1, 1)), 8);
        assert_eq!(cell_code(&buffer, Point::new(2, 1)), 4);
        assert_eq!(cell_code(&buffer, Point::new(1, 2)), 2);
        assert_eq!(cell_code(&buffer, Point::new(2, 2)), 1);
        assert_eq!(cell_code(&buffer, Point::new(3, 3)), 0);
    }

    #[test]
    fn test_cell_code_outside_is_transparent() {
        let buffer = filled(2, 2, 0, 0, 2, 2);

        assert_eq!(cell_code(&buffer, Point::new(0, 0)), 8);
        assert_eq!(cell_code(&buffer, Point::new(2, 2)), 1);
        assert_eq!(cell_code(&buffer, Point::new(1, 1)), 15);
    }

    #[test]
    fn test_direction_table() {
        for code in [1, 5, 13] {
            assert_eq!(next_direction(code, None), Some(Direction::Up));
        }
        for code in [8, 10, 11] {
            assert_eq!(next_direction(code, None), Some(Direction::Down));
        }
        for code in [4, 12, 14] {
            assert_eq!(next_direction(code, None), Some(Direction::Left));
        }
        for code in [2, 3, 7] {
            assert_eq!(next_direction(code, None), Some(Direction::Right));
        }
        assert_eq!(next_direction(0, None), None);
        assert_eq!(next_direction(15, Some(Direction::Up)), None);
    }

    #[test]
    fn test_saddle_resolution() {
        assert_eq!(
            next_direction(6, Some(Direction::Up)),
            Some(Direction::Left)
        );
        assert_eq!(
            next_direction(6, Some(Direction::Down)),
            Some(Direction::Right)
        );
        assert_eq!(next_direction(6, None), Some(Direction::Right));

        assert_eq!(
            next_direction(9, Some(Direction::Right)),
            Some(Direction::Up)
        );
        assert_eq!(
            next_direction(9, Some(Direction::Left)),
            Some(Direction::Down)
        );
        assert_eq!(next_direction(9, None), Some(Direction::Down));
    }

    #[test]
    fn test_empty_buffer_has_no_contour() {
        let buffer = buffer_with(8, 8, &[]);
        assert_eq!(trace_contour(&buffer, DEFAULT_MAX_STEPS), None);
    }

    #[test]
    fn test_rectangle_walk() {
        let buffer = filled(20, 20, 3, 4, 8, 6);

        let contour = trace_contour(&buffer, DEFAULT_MAX_STEPS).unwrap();

        assert!(contour.closed);
        assert_eq!(contour.start, Point::new(3, 4));
        assert_eq!(contour.points.len(), 2 * (8 + 6));
        // Walk goes down the left edge first and ends back on the start
        assert_eq!(contour.points[0], Point::new(3, 5));
        assert_eq!(contour.points.last(), Some(&Point::new(3, 4)));
        assert_eq!(contour.bounds(), Some(Rect::new(3, 4, 11, 10)));
    }

    #[test]
    fn test_walk_along_image_edge() {
        let buffer = filled(6, 6, 0, 0, 6, 6);

        let contour = trace_contour(&buffer, DEFAULT_MAX_STEPS).unwrap();

        assert!(contour.closed);
        assert_eq!(contour.bounds(), Some(Rect::new(0, 0, 6, 6)));
    }

    #[test]
    fn test_diagonal_pixels_split_at_saddle() {
        // (1,1) and (2,2) touch only at a corner; arriving at the saddle
        // from the left turns the walk up, so only the first pixel is traced
        let buffer = buffer_with(4, 4, &[(1, 1), (2, 2)]);

        let contour = trace_contour(&buffer, DEFAULT_MAX_STEPS).unwrap();

        assert!(contour.closed);
        assert_eq!(
            contour.points,
            vec![
                Point::new(1, 2),
                Point::new(2, 2),
                Point::new(2, 1),
                Point::new(1, 1),
            ]
        );
    }

    #[test]
    fn test_step_cap_truncates_walk() {
        let buffer = filled(20, 20, 2, 2, 10, 10);

        let contour = trace_contour(&buffer, 5).unwrap();

        assert!(!contour.closed);
        assert_eq!(contour.points.len(), 5);
        assert_eq!(contour.points.last(), Some(&Point::new(2, 7)));
    }
}
