// src/lane_fit.rs

use crate::types::{LineModel, Segment};
use tracing::debug;

/// Collapse one frame's raw segments into at most two lane models.
///
/// Segments are split by slope sign (negative → left boundary, non-negative
/// → right boundary, in image coordinates) and each non-empty side is
/// averaged into a single slope/intercept pair. Vertical segments have no
/// slope under y = mx + b and are dropped before bucketing.
///
/// An empty input is the "no lane markings this frame" case and yields an
/// empty output; left comes before right when both sides are present.
pub fn classify_and_average(segments: &[Segment]) -> Vec<LineModel> {
    if segments.is_empty() {
        return Vec::new();
    }

    let mut left: Vec<(f64, f64)> = Vec::new();
    let mut right: Vec<(f64, f64)> = Vec::new();
    let mut dropped_vertical = 0usize;

    for seg in segments {
        if seg.x2 == seg.x1 {
            dropped_vertical += 1;
            continue;
        }

        let slope = f64::from(seg.y2 - seg.y1) / f64::from(seg.x2 - seg.x1);
        let intercept = f64::from(seg.y1) - slope * f64::from(seg.x1);

        // Exactly-zero slope goes right; downstream treats it as near-flat.
        if slope < 0.0 {
            left.push((slope, intercept));
        } else {
            right.push((slope, intercept));
        }
    }

    if dropped_vertical > 0 {
        debug!("dropped {} vertical segment(s)", dropped_vertical);
    }

    let mut models = Vec::with_capacity(2);
    if let Some(model) = average_bucket(&left) {
        models.push(model);
    }
    if let Some(model) = average_bucket(&right) {
        models.push(model);
    }
    models
}

/// Arithmetic mean of slope and intercept, taken independently. Segments of
/// different lengths along the same physical boundary share (approximately)
/// one line equation, so averaging in model space weights them equally.
fn average_bucket(bucket: &[(f64, f64)]) -> Option<LineModel> {
    if bucket.is_empty() {
        return None;
    }

    let n = bucket.len() as f64;
    let slope = bucket.iter().map(|(s, _)| s).sum::<f64>() / n;
    let intercept = bucket.iter().map(|(_, b)| b).sum::<f64>() / n;

    Some(LineModel { slope, intercept })
}
