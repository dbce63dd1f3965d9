// src/overlay.rs

use crate::types::{LaneLine, OverlayConfig};
use anyhow::Result;
use opencv::{
    core::{self, Mat, Point, Scalar},
    imgproc,
    prelude::*,
};

/// Draw the extrapolated lane lines on a black canvas and blend the canvas
/// over the original frame. With the default weights the frame keeps 80% of
/// its intensity and the lane strokes come through at full strength.
pub fn render_overlay(frame: &Mat, lanes: &[LaneLine], config: &OverlayConfig) -> Result<Mat> {
    let size = frame.size()?;
    let mut canvas = Mat::zeros(size.height, size.width, frame.typ())?.to_mat()?;

    let [b, g, r] = config.line_color_bgr;
    let color = Scalar::new(b, g, r, 0.0);

    for lane in lanes {
        imgproc::line(
            &mut canvas,
            Point::new(lane.x1, lane.y1),
            Point::new(lane.x2, lane.y2),
            color,
            config.line_thickness,
            imgproc::LINE_AA,
            0,
        )?;
    }

    let mut blended = Mat::default();
    core::add_weighted(
        frame,
        config.frame_weight,
        &canvas,
        config.overlay_weight,
        config.blend_bias,
        &mut blended,
        -1,
    )?;

    Ok(blended)
}
