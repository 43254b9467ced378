//! Application entry point for the tree viewer.
//!
//! This binary parses the command line, sets up logging, loads the
//! configuration and the tree document, and hands everything to
//! [`Viewer`] running inside eframe.

mod surface;
mod viewer;
mod watch;

use clap::Parser;
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, Layer, filter::filter_fn, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};
use viewer::{TreeInput, Viewer};
use vis_core::{config::VisConfig, render::Renderer};

#[derive(Parser, Debug)]
#[command(version, about = "Draws a rooted tree with a recursive fan-out layout")]
struct Cli {
    /// Tree document (TOML); the built-in sample tree is shown when omitted
    #[arg(short, long, value_name = "FILE")]
    tree: Option<PathBuf>,

    /// Layout and style overrides (TOML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Verbosity, repeat for more (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    debug: u8,
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    // Windowing and GPU backends are chatty at debug level.
    let noisy_modules = ["wgpu", "naga", "winit", "eframe", "egui_glow", "calloop"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let result = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_filter(module_filter)
                .with_filter(env_filter),
        )
        .try_init();
    if let Err(e) = result {
        eprintln!("Error: Failed to set up logging: {e}");
    }
}

fn exit_with(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {msg}");
    std::process::exit(1);
}

/// Starts the native eframe application.
///
/// ### Returns
/// - `Ok(())` if the application runs to completion without errors.
/// - `Err` if eframe fails to create the native window or event loop.
fn main() -> eframe::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    let cfg = match &cli.config {
        Some(path) => VisConfig::load(path).unwrap_or_else(|e| exit_with(e)),
        None => VisConfig::default(),
    };
    let renderer = Renderer::new(cfg).unwrap_or_else(|e| exit_with(e));

    let input = match cli.tree {
        Some(path) => TreeInput::open(path).unwrap_or_else(|e| exit_with(e)),
        None => TreeInput::Sample,
    };
    tracing::info!(?cfg, "starting viewer");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1600.0, 900.0])
            .with_title("tree-vis"),
        ..Default::default()
    };

    eframe::run_native(
        "tree-vis",
        options,
        Box::new(|_cc| Ok(Box::new(Viewer::new(input, renderer)))),
    )
}
