mod css;
mod format;
mod json;

use std::path::{Path, PathBuf};

use crate::cutter::CutSheet;

pub use css::{generate_css, write_css};
pub use format::{ExportReport, SpriteFailure, save_sprite_image, write_sprites};
pub use json::{generate_json, write_json};

/// Directory that receives all output for one sheet: `<output>/<sheet name>`
pub fn sheet_output_dir(output: &Path, sheet: &CutSheet) -> PathBuf {
    output.join(&sheet.name)
}

/// File name of a cropped sprite: sheet base name plus discovery index
pub fn sprite_png_filename(base_name: &str, index: usize) -> String {
    format!("{}{}.png", base_name, index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sprite_png_filename() {
        assert_eq!(sprite_png_filename("hero", 0), "hero0.png");
        assert_eq!(sprite_png_filename("hero", 12), "hero12.png");
    }
}
