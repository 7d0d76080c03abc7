use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use dermascan_core::analysis::view_filter::View;
use dermascan_core::estimation::age_gender::NullAgeGenderEstimator;
use dermascan_core::io::image_file_reader::read_rgb_image;
use dermascan_core::io::json_landmark_source::JsonLandmarkSource;
use dermascan_core::io::roi_patch_writer::RoiPatchWriter;
use dermascan_core::pipeline::analyze_views_use_case::AnalyzeViewsUseCase;
use dermascan_core::pipeline::roi_writer::RoiWriter;
use dermascan_core::shared::constants::IMAGE_EXTENSIONS;
use dermascan_core::shared::image::Image;

/// Skin region analysis from face captures and precomputed landmarks.
#[derive(Parser)]
#[command(name = "dermascan")]
struct Cli {
    /// Frontal capture image.
    #[arg(long)]
    center: Option<PathBuf>,

    /// Left profile capture image.
    #[arg(long)]
    left: Option<PathBuf>,

    /// Right profile capture image.
    #[arg(long)]
    right: Option<PathBuf>,

    /// Face mesh JSON for the frontal capture ([[x, y], ...]).
    #[arg(long)]
    center_landmarks: Option<PathBuf>,

    /// Face mesh JSON for the left profile capture.
    #[arg(long)]
    left_landmarks: Option<PathBuf>,

    /// Face mesh JSON for the right profile capture.
    #[arg(long)]
    right_landmarks: Option<PathBuf>,

    /// Report output path.
    #[arg(long, default_value = "report.json")]
    output: PathBuf,

    /// Save extracted region patches to this directory.
    #[arg(long)]
    save_rois: Option<PathBuf>,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let captures = load_captures(&cli)?;
    if captures.is_empty() {
        return Err("at least one of --center, --left, --right is required".into());
    }

    let landmark_paths = landmark_paths(&cli);
    for (view, _) in &captures {
        if !landmark_paths.contains_key(view) {
            return Err(format!("missing landmark file for {} view", view.label()).into());
        }
    }

    let roi_writer: Option<Box<dyn RoiWriter>> = cli
        .save_rois
        .as_ref()
        .map(|dir| Box::new(RoiPatchWriter::new(dir)) as Box<dyn RoiWriter>);

    let mut use_case = AnalyzeViewsUseCase::new(
        Box::new(JsonLandmarkSource::new(landmark_paths)),
        Box::new(NullAgeGenderEstimator),
        roi_writer,
    );

    let report = use_case.execute(&captures)?;
    let json = serde_json::to_string_pretty(&report)?;
    std::fs::write(&cli.output, json)?;
    log::info!("report written to {}", cli.output.display());

    Ok(())
}

/// Decodes the configured captures in processing order, center first.
fn load_captures(cli: &Cli) -> Result<Vec<(View, Image)>, Box<dyn std::error::Error>> {
    let configured = [
        (View::Center, &cli.center),
        (View::Left, &cli.left),
        (View::Right, &cli.right),
    ];

    let mut captures = Vec::new();
    for (view, path) in configured {
        if let Some(path) = path {
            ensure_image_extension(path)?;
            captures.push((view, read_rgb_image(path)?));
        }
    }
    Ok(captures)
}

fn ensure_image_extension(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());
    match ext {
        Some(e) if IMAGE_EXTENSIONS.contains(&e.as_str()) => Ok(()),
        _ => Err(format!("unsupported image type: {}", path.display()).into()),
    }
}

fn landmark_paths(cli: &Cli) -> HashMap<View, PathBuf> {
    let configured = [
        (View::Center, &cli.center_landmarks),
        (View::Left, &cli.left_landmarks),
        (View::Right, &cli.right_landmarks),
    ];

    configured
        .into_iter()
        .filter_map(|(view, path)| path.clone().map(|p| (view, p)))
        .collect()
}
