use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpriteCutError {
    #[error("Failed to decode sprite sheet '{path}': {source}")]
    ImageLoad {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to encode sprite '{path}': {source}")]
    ImageSave {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("No sprite sheets found in input")]
    NoImages,

    #[error("Failed to write '{path}': {source}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to recompress sprite '{path}': {message}")]
    PngCompress { path: PathBuf, message: String },

    #[error("Sprite sheet path does not exist: {0}")]
    InputNotFound(PathBuf),

    #[error(
        "Sheets '{first}' and '{second}' are both named '{name}' and would share one output directory"
    )]
    DuplicateSheetName {
        name: String,
        first: PathBuf,
        second: PathBuf,
    },
}
