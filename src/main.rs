//! FaceSleuth — face-image dataset analyser.
//!
//! Thin binary entry point. All logic lives in the `facesleuth-core`
//! and `facesleuth-gui` crates.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;

/// Tally the age, gender, and ethnicity labels encoded in a face-image
/// dataset's filenames and chart the distributions.
///
/// Dataset files are expected to be named
/// `<age>_<gender>_<ethnicity>_<timestamp>.<bmp|png|jpg>`.
#[derive(Parser)]
#[command(name = "facesleuth", version, about, long_about = None)]
struct Cli {
    /// Dataset directory containing the labelled face images
    #[arg(short, long)]
    input: PathBuf,
}

fn main() -> anyhow::Result<()> {
    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let cli = Cli::parse();

    tracing::info!("FaceSleuth starting — dataset {}", cli.input.display());

    // Scan, decode, and tally *before* opening the window so the first
    // rendered frame already shows the finished charts, and so any dataset
    // error aborts the run without ever creating a window.  This is the
    // same build-state-first pattern as DiskSleuth.
    let start = Instant::now();

    let images = facesleuth_core::scanner::scan_images(&cli.input)?;

    let mut records = Vec::with_capacity(images.len());
    for path in &images {
        let record = facesleuth_core::decode::decode_path(path)
            .with_context(|| format!("bad dataset file name: {}", path.display()))?;
        records.push(record);
    }

    let tally = facesleuth_core::analysis::tally_records(&records);
    let duration = start.elapsed();

    tracing::info!(
        "Analysed {} pictures in {:.1?}",
        tally.record_count,
        duration
    );

    let icon = facesleuth_gui::icon::generate_icon(64);
    let state = facesleuth_gui::FaceSleuthState::build(&cli.input, tally, duration);

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("FaceSleuth -- Dataset Analyser")
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([800.0, 500.0])
            .with_icon(icon),
        ..Default::default()
    };

    eframe::run_native(
        "FaceSleuth",
        options,
        Box::new(|cc| Ok(Box::new(facesleuth_gui::FaceSleuthApp::with_state(cc, state)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))?;

    Ok(())
}
