mod cropper;
mod loader;
mod sheet;

pub use cropper::crop_rectangle;
pub use loader::{load_sheet, load_sheets};
pub use sheet::{SpriteSheet, base_name, ensure_unique_names};
