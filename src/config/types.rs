use serde::{Deserialize, Serialize};

use crate::detect::{DEFAULT_MAX_STEPS, DEFAULT_MIN_SIZE};

/// PNG compression level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CompressConfig {
    /// Optimization level 0-6
    Level(u8),
    /// Maximum compression ("max")
    Max(String),
}

/// Spritecut configuration file structure.
///
/// All paths in the config are relative to the config file location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpriteCutConfig {
    /// Config file version (currently 1)
    pub version: u32,
    /// Input sheet paths or glob patterns
    pub input: Vec<String>,
    /// Root directory; each sheet gets its own subdirectory
    pub output_dir: String,
    /// Sprites must exceed this many pixels in both dimensions
    pub min_size: u32,
    /// Step cap for a single contour walk
    pub max_steps: usize,
    /// Write cropped sprite images
    pub crop: bool,
    /// PNG compression configuration (optional)
    pub compress: Option<CompressConfig>,
}

impl Default for SpriteCutConfig {
    fn default() -> Self {
        Self {
            version: 1,
            input: Vec::new(),
            output_dir: "export".to_string(),
            min_size: DEFAULT_MIN_SIZE,
            max_steps: DEFAULT_MAX_STEPS,
            crop: true,
            compress: None,
        }
    }
}
