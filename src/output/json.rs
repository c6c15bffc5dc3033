use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Serialize;

use crate::cutter::{CutSheet, CutSprite};
use crate::error::SpriteCutError;

#[derive(Serialize)]
struct JsonOutput {
    sprite: JsonSheet,
}

#[derive(Serialize)]
struct JsonSheet {
    width: u32,
    height: u32,
    image: String,
    frames: Vec<JsonFrame>,
}

/// Frame offsets are negated like a CSS background-position
#[derive(Serialize)]
struct JsonFrame {
    name: String,
    x: i64,
    y: i64,
    width: u32,
    height: u32,
}

/// Serialize the sheet's atlas description
pub fn generate_json(sheet: &CutSheet) -> Result<String> {
    let output = JsonOutput {
        sprite: JsonSheet {
            width: sheet.width,
            height: sheet.height,
            image: sheet.image_name.clone(),
            frames: sheet.sprites.iter().map(sprite_to_json).collect(),
        },
    };

    Ok(serde_json::to_string_pretty(&output)?)
}

fn sprite_to_json(sprite: &CutSprite) -> JsonFrame {
    JsonFrame {
        name: sprite.name.clone(),
        x: -i64::from(sprite.rect.left),
        y: -i64::from(sprite.rect.top),
        width: sprite.rect.width(),
        height: sprite.rect.height(),
    }
}

/// Write `<name>.json` into `output_dir`
pub fn write_json(sheet: &CutSheet, output_dir: &Path) -> Result<PathBuf> {
    let json_path = output_dir.join(format!("{}.json", sheet.name));
    let content = generate_json(sheet)?;

    fs::write(&json_path, content).map_err(|e| SpriteCutError::OutputWrite {
        path: json_path.clone(),
        source: e,
    })?;

    Ok(json_path)
}
