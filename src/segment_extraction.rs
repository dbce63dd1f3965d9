// src/segment_extraction.rs

use crate::types::{HoughConfig, Segment};
use anyhow::Result;
use opencv::{
    core::{self, Mat},
    imgproc,
};
use tracing::debug;

/// Run the probabilistic Hough transform over a masked edge map and collect
/// the raw line segments. An empty result is a normal frame outcome, not an
/// error.
pub fn extract_segments(masked_edges: &Mat, config: &HoughConfig) -> Result<Vec<Segment>> {
    let mut lines = core::Vector::<core::Vec4i>::new();
    imgproc::hough_lines_p(
        masked_edges,
        &mut lines,
        config.rho,
        config.theta_degrees.to_radians(),
        config.threshold,
        config.min_line_length,
        config.max_line_gap,
    )?;

    let segments: Vec<Segment> = lines
        .iter()
        .map(|line| Segment::new(line[0], line[1], line[2], line[3]))
        .collect();

    debug!("hough transform produced {} segment(s)", segments.len());
    Ok(segments)
}
