#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod estimator;
pub mod model;
pub mod ui;

// Re-export commonly used types outside of crate
pub use app::App;
pub use data::GeoTable;
pub use estimator::{Estimate, EstimateError, Estimator};
pub use model::{DeliveryModel, GradientBoostedModel};

// CLI argument parsing
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory containing the model artifact and reference CSV files
    #[arg(long, default_value = ".")]
    pub data_dir: PathBuf,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}
