//! Sprite detection: marching-squares contour tracing over a scratch pixel
//! buffer, repeated until every region has been found and cleared.

mod buffer;
mod extractor;
mod marching;
mod rect;

pub use buffer::PixelBuffer;
pub use extractor::{DEFAULT_MIN_SIZE, Detection, SpriteExtractor, detect_sprites};
pub use marching::{
    Contour, DEFAULT_MAX_STEPS, Direction, cell_code, next_direction, trace_contour,
};
pub use rect::{Point, Rect};
