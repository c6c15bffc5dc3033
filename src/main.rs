use std::fs;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use rayon::prelude::*;

use spritecut::cli::CliArgs;
use spritecut::config::{MergedConfig, save_config};
use spritecut::cutter::{CutSheet, SheetCutter};
use spritecut::output::{sheet_output_dir, write_css, write_json, write_sprites};
use spritecut::sprite::{ensure_unique_names, load_sheets};

#[allow(clippy::print_stderr)]
fn main() {
    if let Err(e) = run() {
        // Use eprintln instead of error! because logger may not be initialized
        // (e.g., config loading fails before logger init)
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = CliArgs::parse();
    let merged = MergedConfig::from_args(cli.command.args())?;

    env_logger::Builder::new()
        .filter_level(if merged.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .format_timestamp(None)
        .format_target(false)
        .init();

    info!("Spritecut v{}", env!("CARGO_PKG_VERSION"));

    if let Some(path) = &cli.command.args().save_config {
        let cwd = std::env::current_dir().context("failed to read current directory")?;
        save_config(&merged.to_config(path, &cwd), path)?;
        info!("Saved config to {}", path.display());
    }

    let sheets = load_sheets(&merged.input)?;
    // Checked before anything is written so no sheet's output is clobbered
    ensure_unique_names(&sheets)?;

    let cutter = SheetCutter::new()
        .min_size(merged.min_size)
        .max_steps(merged.max_steps)
        .crop(merged.crop);

    // Every sheet gets its own scratch buffer, so sheets can be cut independently
    let cut_sheets: Vec<CutSheet> = sheets.par_iter().map(|sheet| cutter.cut(sheet)).collect();

    let mut failed = 0usize;
    for sheet in &cut_sheets {
        let dir = sheet_output_dir(&merged.output, sheet);
        fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create output directory: {}", dir.display()))?;

        if sheet.truncated > 0 {
            warn!(
                "{}: {} contour(s) hit the step limit; results may be incomplete",
                sheet.name, sheet.truncated
            );
        }

        if cli.command.writes_css() {
            let path = write_css(sheet, &dir)?;
            info!("Generated {}", path.display());
        }

        if cli.command.writes_json() {
            let path = write_json(sheet, &dir)?;
            info!("Generated {}", path.display());
        }

        let report = write_sprites(sheet, &dir, merged.compress);
        if !report.written.is_empty() {
            info!("Saved {} sprites to {}", report.written.len(), dir.display());
        }
        failed += report.failures.len();
    }

    if failed > 0 {
        anyhow::bail!("{} sprite(s) could not be saved", failed);
    }

    info!("Done!");

    Ok(())
}
