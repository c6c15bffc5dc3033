use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::types::SpriteCutConfig;

/// A `.spritecut` file together with the directory it was read from.
///
/// Sheet patterns and the output root in the file are written relative to
/// that directory.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: SpriteCutConfig,
    /// Anchor for every relative path in `config`
    pub config_dir: PathBuf,
}

impl LoadedConfig {
    /// Read and parse a `.spritecut` file; missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        let config: SpriteCutConfig = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse config file: {}", path.display()))?;

        let config_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        Ok(Self { config, config_dir })
    }

    /// Sheet paths named by the config, anchored at the config directory.
    ///
    /// Glob entries expand to every matching sheet in sorted order; plain
    /// entries are passed through even if the file is missing, so the loader
    /// can report it.
    pub fn resolve_inputs(&self) -> Result<Vec<PathBuf>> {
        let mut results = Vec::new();

        for pattern in &self.config.input {
            if is_glob_pattern(pattern) {
                let full_pattern = self.config_dir.join(pattern);
                let pattern_str = full_pattern.to_string_lossy();

                let paths = glob::glob(&pattern_str)
                    .with_context(|| format!("invalid glob pattern: {}", pattern))?;

                for entry in paths {
                    let path =
                        entry.with_context(|| format!("failed to read glob entry: {}", pattern))?;
                    results.push(path);
                }
            } else {
                results.push(self.config_dir.join(pattern));
            }
        }

        Ok(results)
    }

    /// Root under which each sheet's output directory is created.
    pub fn resolve_output_dir(&self) -> PathBuf {
        self.config_dir.join(&self.config.output_dir)
    }
}

/// True for entries like `sheets/*.png` that need glob expansion.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?') || pattern.contains('[')
}
