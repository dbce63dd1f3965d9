// src/main.rs

mod config;
mod extrapolation;
mod frame_io;
mod lane_fit;
mod overlay;
mod pipeline;
mod preprocessing;
mod roi;
mod segment_extraction;
mod types;

use anyhow::Result;
use pipeline::LanePipeline;
use tracing::{error, info};
use types::Config;

#[derive(Debug, Default)]
struct RunStats {
    frames_processed: usize,
    frames_failed: usize,
    frames_with_both_lanes: usize,
    frames_with_one_lane: usize,
    frames_with_no_lanes: usize,
}

fn main() -> Result<()> {
    let config_path = "config.yaml";
    let config = Config::load_or_default(config_path)?;

    tracing_subscriber::fmt()
        .with_env_filter(format!("lane_detection={}", config.logging.level))
        .init();

    info!("Lane detection starting");
    if std::path::Path::new(config_path).exists() {
        info!("✓ Configuration loaded from {}", config_path);
    } else {
        info!("{} not found, using built-in defaults", config_path);
    }
    info!(
        "Edge thresholds: canny {}..{}, hough threshold {}, min length {}",
        config.edge.canny_low,
        config.edge.canny_high,
        config.hough.threshold,
        config.hough.min_line_length
    );

    let frames = frame_io::find_image_files(&config.io.input_dir)?;
    if frames.is_empty() {
        error!("No frame files found in {}", config.io.input_dir);
        return Ok(());
    }

    let pipeline = LanePipeline::new(config.clone());
    let mut stats = RunStats::default();

    for (idx, path) in frames.iter().enumerate() {
        info!(
            "Processing frame {}/{}: {}",
            idx + 1,
            frames.len(),
            path.display()
        );

        match process_one(&pipeline, path, &config) {
            Ok(lane_count) => {
                stats.frames_processed += 1;
                match lane_count {
                    2 => stats.frames_with_both_lanes += 1,
                    1 => stats.frames_with_one_lane += 1,
                    _ => stats.frames_with_no_lanes += 1,
                }
            }
            Err(e) => {
                stats.frames_failed += 1;
                error!("Failed on {}: {:#}", path.display(), e);
            }
        }
    }

    info!("✓ Run complete");
    info!("  Frames processed: {}", stats.frames_processed);
    info!("  Both lanes found: {}", stats.frames_with_both_lanes);
    info!("  One lane found:   {}", stats.frames_with_one_lane);
    info!("  No lanes found:   {}", stats.frames_with_no_lanes);
    if stats.frames_failed > 0 {
        info!("  Failed frames:    {}", stats.frames_failed);
    }

    Ok(())
}

fn process_one(pipeline: &LanePipeline, path: &std::path::Path, config: &Config) -> Result<usize> {
    let frame = frame_io::read_frame(path)?;
    let result = pipeline.process(&frame)?;

    if config.io.save_annotated {
        let out = frame_io::write_annotated(path, &config.io.output_dir, &result.annotated)?;
        info!(
            "  {} segment(s), {} lane line(s) -> {}",
            result.raw_segment_count,
            result.lanes.len(),
            out.display()
        );
    }

    Ok(result.lanes.len())
}
