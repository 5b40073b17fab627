//
// Slices the asteroid explosion sheet into per-frame PNG files. Every flag
// defaults to the compiled-in configuration, so running without arguments
// reproduces the game's asset layout.
//
use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use spriteslice::config::{
    FRAME_COUNT, FRAME_HEIGHT, FRAME_PREFIX, FRAME_WIDTH, INPUT_PATH, OUTPUT_DIR,
};
use spriteslice::{SliceConfig, SliceReport};
use std::{path::PathBuf, process};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "spriteslice", version, about = "Slice a sprite sheet into frame files")]
struct Cli {
    /// Sprite sheet to slice
    #[arg(long, default_value = INPUT_PATH)]
    input: PathBuf,
    /// Directory receiving the frames, created if missing
    #[arg(long, default_value = OUTPUT_DIR)]
    output: PathBuf,
    #[arg(long, default_value_t = FRAME_WIDTH)]
    frame_width: u32,
    #[arg(long, default_value_t = FRAME_HEIGHT)]
    frame_height: u32,
    /// Number of frames to extract
    #[arg(long, default_value_t = FRAME_COUNT)]
    frames: u32,
    /// Frame files are named <PREFIX>_<index>.png
    #[arg(long, default_value = FRAME_PREFIX)]
    prefix: String,
    /// Don't write the last frame a second time
    #[arg(long)]
    no_pad: bool,
}

impl Cli {
    fn into_config(self) -> SliceConfig {
        SliceConfig::default()
            .input(self.input)
            .output_dir(self.output)
            .frame_size(self.frame_width, self.frame_height)
            .frame_count(self.frames)
            .prefix(self.prefix)
            .pad_last_frame(!self.no_pad)
    }
}

// Runs one slicing pass and reports success through the log.
fn run(cli: Cli) -> Result<SliceReport> {
    let config = cli.into_config();
    let report = spriteslice::slice(&config).context("Error slicing sprite sheet")?;
    info!(
        "Wrote {} files to {}",
        report.written.len(),
        config.output_dir.display()
    );
    Ok(report)
}

// Process exit code for a finished run. Failures are logged as one line
// holding the whole cause chain.
fn exit_code(result: &Result<SliceReport>) -> i32 {
    match result {
        Ok(_) => 0,
        Err(err) => {
            error!("{:#}", err);
            1
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .without_time()
        .with_target(false)
        .init();

    let result = run(Cli::parse());
    process::exit(exit_code(&result));
}
