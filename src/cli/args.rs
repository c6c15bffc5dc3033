use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "spritecut")]
#[command(version, about = "Cut individual sprites out of sprite sheets", long_about = None)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Cut sprites and write CSS metadata
    Css(CommonArgs),
    /// Cut sprites and write JSON atlas metadata
    Json(CommonArgs),
    /// Cut sprites and write both CSS and JSON metadata
    All(CommonArgs),
}

impl Command {
    pub fn args(&self) -> &CommonArgs {
        match self {
            Command::Css(args) | Command::Json(args) | Command::All(args) => args,
        }
    }

    pub fn writes_css(&self) -> bool {
        matches!(self, Command::Css(_) | Command::All(_))
    }

    pub fn writes_json(&self) -> bool {
        matches!(self, Command::Json(_) | Command::All(_))
    }
}

#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Input sprite sheets or directories
    #[arg(required_unless_present = "config")]
    pub input: Vec<PathBuf>,

    /// Load settings from a .spritecut config file
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output root; each sheet gets its own subdirectory [default: export]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Keep only sprites larger than N pixels in both dimensions [default: 3]
    #[arg(long, value_name = "N")]
    pub min_size: Option<u32>,

    /// Give up on a contour after N steps [default: 200000]
    #[arg(long, value_name = "N")]
    pub max_steps: Option<usize>,

    /// Only write metadata, skip the cropped sprite images
    #[arg(long)]
    pub no_crop: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Compress PNG output (0-6 or 'max'). Default level is 2 if flag is present without value.
    #[arg(long, value_name = "LEVEL", default_missing_value = "2", num_args = 0..=1)]
    pub compress: Option<CompressionLevel>,

    /// Write the effective settings to a config file
    #[arg(long, value_name = "FILE")]
    pub save_config: Option<PathBuf>,
}

/// PNG compression level (0-6 or max)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionLevel {
    /// Optimization level 0-6
    Level(u8),
    /// Maximum compression
    Max,
}

impl std::str::FromStr for CompressionLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("max") {
            Ok(CompressionLevel::Max)
        } else {
            s.parse::<u8>()
                .map_err(|_e| format!("invalid compression level: {}", s))
                .and_then(|n| {
                    if n <= 6 {
                        Ok(CompressionLevel::Level(n))
                    } else {
                        Err(format!("compression level must be 0-6 or 'max', got {}", n))
                    }
                })
        }
    }
}

impl Default for CompressionLevel {
    fn default() -> Self {
        CompressionLevel::Level(2)
    }
}
