use clap::Parser;
use tracing::info;

use sb1383_ui::{CalculatorApp, logging};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// SB 1383 compliance calculator.
///
/// Collects a jurisdiction's population and current Recovered Organic Waste
/// Product procurement figures and computes the annual procurement
/// requirement.
#[derive(Debug, Parser)]
struct Cli {
    /// Log filter, e.g. `info` or `sb1383_core=debug`.
    /// The RUST_LOG environment variable takes precedence when set.
    #[arg(long, default_value = "info")]
    log_level: String,
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log_level)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 640.0])
            .with_min_inner_size([560.0, 480.0]),
        ..Default::default()
    };

    info!("starting compliance calculator");
    eframe::run_native(
        "SB 1383 Compliance Calculator",
        options,
        Box::new(|_cc| Ok(Box::new(CalculatorApp::new()))),
    )
    .map_err(|e| anyhow::anyhow!("ui event loop failed: {e}"))
}
