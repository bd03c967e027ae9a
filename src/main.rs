use anyhow::Result;
use clap::Parser;
use tracing::info;

mod config;
mod core;
mod render;

use crate::core::clock::Clock;

#[derive(Parser, Debug)]
#[command(name = "analog-clock", about = "Software-rendered analog clock")]
struct Args {
    /// Surface width in pixels
    #[arg(long, default_value_t = 200)]
    width: u32,

    /// Surface height in pixels
    #[arg(long, default_value_t = 200)]
    height: u32,

    /// Output mode: png, raw
    #[arg(long, default_value = "png")]
    output: String,

    /// Output file path (for png mode)
    #[arg(long, default_value = "clock.png")]
    output_path: String,

    /// Hand and tick color (#rrggbb)
    #[arg(long, default_value = "#ffffff")]
    foreground: String,

    /// Second-hand color (#rrggbb)
    #[arg(long, default_value = "#ff0000")]
    accent: String,

    /// Dial background color (#rrggbb)
    #[arg(long, default_value = "#000000")]
    background: String,

    /// Frames to render before exiting (0 = run forever)
    #[arg(long, default_value_t = 0)]
    frames: u64,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    info!(
        "analog-clock v{} starting ({}x{})",
        env!("CARGO_PKG_VERSION"),
        args.width,
        args.height
    );

    let mut clock = Clock::new(config::ClockConfig {
        width: args.width,
        height: args.height,
        output_mode: args.output.parse().unwrap_or_default(),
        output_path: args.output_path.into(),
        theme: config::Theme {
            foreground: config::parse_color(&args.foreground),
            accent: config::parse_color(&args.accent),
            background: config::parse_color(&args.background),
        },
        frames: args.frames,
    })?;

    clock.run().await?;

    info!("analog-clock shutdown");
    Ok(())
}
