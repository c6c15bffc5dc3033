mod builder;
mod types;

pub use builder::SheetCutter;
pub use types::{CutSheet, CutSprite, sprite_name};
