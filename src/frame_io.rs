// src/frame_io.rs

use anyhow::Result;
use opencv::{core::Mat, imgcodecs, prelude::*};
use std::path::{Path, PathBuf};
use tracing::info;
use walkdir::WalkDir;

const IMAGE_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "bmp"];

pub fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Collect every frame capture under `input_dir`, recursively.
pub fn find_image_files(input_dir: &str) -> Result<Vec<PathBuf>> {
    let mut frames = Vec::new();

    for entry in WalkDir::new(input_dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if path.is_file() && has_image_extension(path) {
            frames.push(path.to_path_buf());
        }
    }

    frames.sort();
    info!("Found {} frame file(s) in {}", frames.len(), input_dir);
    Ok(frames)
}

pub fn read_frame(path: &Path) -> Result<Mat> {
    let path_str = path
        .to_str()
        .ok_or_else(|| anyhow::anyhow!("non-UTF-8 path: {}", path.display()))?;

    let frame = imgcodecs::imread(path_str, imgcodecs::IMREAD_COLOR)?;
    if frame.empty() {
        anyhow::bail!("failed to read image: {}", path.display());
    }
    Ok(frame)
}

/// Write the annotated frame next to its siblings in `output_dir` as
/// `<stem>_lanes.<ext>`, creating the directory on first use.
pub fn write_annotated(input_path: &Path, output_dir: &str, annotated: &Mat) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)?;

    let stem = input_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("frame");
    let ext = input_path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    let output_path = PathBuf::from(output_dir).join(format!("{}_lanes.{}", stem, ext));
    let output_str = output_path
        .to_str()
        .ok_or_else(|| anyhow::anyhow!("non-UTF-8 path: {}", output_path.display()))?;

    imgcodecs::imwrite(output_str, annotated, &opencv::core::Vector::<i32>::new())?;
    Ok(output_path)
}
