use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::{CompressConfig, LoadedConfig, SpriteCutConfig, make_relative};
use crate::cli::{CommonArgs, CompressionLevel};

/// Effective settings after layering CLI flags over an optional config file.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedConfig {
    pub input: Vec<PathBuf>,
    pub output: PathBuf,
    pub min_size: u32,
    pub max_steps: usize,
    pub crop: bool,
    pub verbose: bool,
    pub compress: Option<CompressionLevel>,
}

impl MergedConfig {
    /// Merge config file values with CLI arguments.
    /// CLI arguments always take precedence over config values.
    pub fn from_args(args: &CommonArgs) -> Result<Self> {
        let loaded_config = if let Some(config_path) = &args.config {
            Some(
                LoadedConfig::load(config_path)
                    .with_context(|| format!("failed to load config: {}", config_path.display()))?,
            )
        } else {
            None
        };
        let defaults = SpriteCutConfig::default();
        let config = loaded_config
            .as_ref()
            .map(|lc| &lc.config)
            .unwrap_or(&defaults);

        // Determine input files: CLI args override config
        let input = if !args.input.is_empty() {
            args.input.clone()
        } else if let Some(ref lc) = loaded_config {
            lc.resolve_inputs()
                .context("failed to resolve input files from config")?
        } else {
            // This shouldn't happen due to clap's required_unless_present
            Vec::new()
        };

        // Determine output directory: CLI > config > default
        let output = args.output.clone().unwrap_or_else(|| {
            loaded_config
                .as_ref()
                .map(|lc| lc.resolve_output_dir())
                .unwrap_or_else(|| PathBuf::from(&defaults.output_dir))
        });

        // --no-crop wins, otherwise the config decides
        let crop = !args.no_crop && config.crop;

        let compress = if args.compress.is_some() {
            args.compress
        } else {
            config
                .compress
                .as_ref()
                .map(compression_from_config)
                .transpose()?
        };

        Ok(Self {
            input,
            output,
            min_size: args.min_size.unwrap_or(config.min_size),
            max_steps: args.max_steps.unwrap_or(config.max_steps),
            crop,
            verbose: args.verbose,
            compress,
        })
    }

    /// Config file equivalent of these settings, to be written at `config_path`.
    ///
    /// Relative paths are taken from `cwd`, then rewritten relative to the
    /// config file's directory, which is what `LoadedConfig` resolves against.
    pub fn to_config(&self, config_path: &Path, cwd: &Path) -> SpriteCutConfig {
        let config_dir = cwd.join(config_path.parent().unwrap_or(Path::new("")));
        let relative = |p: &Path| make_relative(&cwd.join(p), &config_dir);

        SpriteCutConfig {
            input: self.input.iter().map(|p| relative(p.as_path())).collect(),
            output_dir: relative(self.output.as_path()),
            min_size: self.min_size,
            max_steps: self.max_steps,
            crop: self.crop,
            compress: self.compress.map(|c| match c {
                CompressionLevel::Level(n) => CompressConfig::Level(n),
                CompressionLevel::Max => CompressConfig::Max("max".to_string()),
            }),
            ..Default::default()
        }
    }
}

fn compression_from_config(compress: &CompressConfig) -> Result<CompressionLevel> {
    match compress {
        CompressConfig::Level(n) if *n <= 6 => Ok(CompressionLevel::Level(*n)),
        CompressConfig::Max(s) if s.eq_ignore_ascii_case("max") => Ok(CompressionLevel::Max),
        other => Err(anyhow::anyhow!(
            "invalid compress value {:?} in config file. Valid values: 0-6, \"max\"",
            other
        )),
    }
}
