use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::cutter::{CutSheet, CutSprite};
use crate::error::SpriteCutError;

/// Build the stylesheet for a cut sheet.
///
/// A shared `.sprite` rule points at the sheet image, then one rule per
/// sprite sets its size and shifts the background by the negated origin.
pub fn generate_css(sheet: &CutSheet) -> String {
    let mut css = format!(
        ".sprite {{display:inline-block; overflow:hidden; background-repeat: no-repeat;background-image:url({});}}",
        sheet.image_name
    );
    for sprite in &sheet.sprites {
        css.push_str(&sprite_rule(sprite));
    }
    css
}

fn sprite_rule(sprite: &CutSprite) -> String {
    let rect = &sprite.rect;
    format!(
        ".{} {{width:{}px; height:{}px; background-position: {}px {}px}}",
        sprite.name,
        rect.width(),
        rect.height(),
        -i64::from(rect.left),
        -i64::from(rect.top)
    )
}

/// Write `<name>.css` into `output_dir`
pub fn write_css(sheet: &CutSheet, output_dir: &Path) -> Result<PathBuf> {
    let css_path = output_dir.join(format!("{}.css", sheet.name));

    fs::write(&css_path, generate_css(sheet)).map_err(|e| SpriteCutError::OutputWrite {
        path: css_path.clone(),
        source: e,
    })?;

    Ok(css_path)
}
