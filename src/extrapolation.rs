// src/extrapolation.rs

use crate::types::{LaneLine, LineModel};
use anyhow::{ensure, Result};

/// Lane lines are drawn from the bottom row up to this fraction of the
/// frame height.
const HORIZON_RATIO: f64 = 0.6;

/// Stand-in slope for a perfectly horizontal model. A flat line never
/// reaches the vertical drawing window, so it is rendered as near-flat
/// instead of faulting on the division.
const FLAT_SLOPE_SENTINEL: f64 = 0.1;

/// Extend an averaged lane model into a drawable segment spanning the fixed
/// vertical window: y1 at the frame bottom, y2 at 60% of the frame height.
///
/// x coordinates are truncated toward zero. Fails only on non-positive
/// frame heights; every valid model maps to finite integer coordinates.
pub fn extrapolate(model: LineModel, frame_height: i32) -> Result<LaneLine> {
    ensure!(
        frame_height > 0,
        "frame height must be positive, got {}",
        frame_height
    );

    let y1 = frame_height;
    let y2 = (f64::from(frame_height) * HORIZON_RATIO) as i32;

    let slope = if model.slope == 0.0 {
        FLAT_SLOPE_SENTINEL
    } else {
        model.slope
    };

    let x1 = ((f64::from(y1) - model.intercept) / slope) as i32;
    let x2 = ((f64::from(y2) - model.intercept) / slope) as i32;

    Ok(LaneLine { x1, y1, x2, y2 })
}
