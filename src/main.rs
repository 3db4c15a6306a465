use clap::{ArgAction, Parser};

mod backend;
mod config;
mod draw;
mod export;
mod input;
mod tool;
mod util;

#[derive(Parser, Debug)]
#[command(name = "waymeasure")]
#[command(version, about = "Screen measurement overlay for Wayland compositors")]
struct Cli {
    /// Show the measurement overlay immediately (one-shot mode)
    #[arg(long, short = 'a', action = ArgAction::SetTrue)]
    active: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    // Check for Wayland environment
    if std::env::var("WAYLAND_DISPLAY").is_err() && cli.active {
        log::error!("WAYLAND_DISPLAY not set - this application requires Wayland.");
        log::error!("Please run on a Wayland compositor (Hyprland, Sway, etc.).");
        return Err(anyhow::anyhow!("Wayland environment required"));
    }

    if cli.active {
        log::info!("Starting measurement overlay...");
        log::info!("Controls:");
        log::info!("  - Measure: press left button, drag, release");
        log::info!("  - Cancel measurement: right click or Escape");
        log::info!("  - Exit: Escape (while idle) or Q");
        log::info!("");

        backend::run_wayland()?;

        log::info!("Measurement overlay closed.");
    } else {
        // No flags: show usage
        println!("waymeasure: Screen measurement overlay for Wayland compositors");
        println!();
        println!("Usage:");
        println!("  waymeasure --active    Show the measurement overlay");
        println!("  waymeasure --help      Show help");
        println!();
        println!("While the overlay is open:");
        println!("  1. Press the left mouse button to anchor a measurement");
        println!("  2. Drag; the rectangle and its \"width x height\" label follow the pointer");
        println!("  3. Release to finish (the measurement is copied to the clipboard)");
        println!();
        println!("Requirements:");
        println!("  - Wayland compositor (Hyprland, Sway, etc.)");
        println!("  - wlr-layer-shell protocol support");
    }

    Ok(())
}
