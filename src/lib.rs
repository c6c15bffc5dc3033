pub mod cli;
pub mod config;
pub mod cutter;
pub mod detect;
pub mod error;
pub mod output;
pub mod sprite;

pub use cutter::{CutSheet, CutSprite, SheetCutter};
pub use detect::{Detection, PixelBuffer, Point, Rect, SpriteExtractor, detect_sprites};
pub use error::SpriteCutError;
pub use sprite::{SpriteSheet, crop_rectangle, load_sheets};
