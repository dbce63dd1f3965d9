// src/preprocessing.rs

use crate::types::EdgeConfig;
use anyhow::{ensure, Result};
use opencv::{
    core::{self, Mat, Size},
    imgproc,
    prelude::*,
};

/// Turn a BGR frame into a binary edge map: grayscale, Gaussian blur,
/// Canny with the configured hysteresis thresholds.
pub fn detect_edges(frame: &Mat, config: &EdgeConfig) -> Result<Mat> {
    ensure!(!frame.empty(), "cannot detect edges on an empty frame");
    ensure!(
        config.blur_kernel > 0 && config.blur_kernel % 2 == 1,
        "blur kernel must be a positive odd number, got {}",
        config.blur_kernel
    );

    let mut gray = Mat::default();
    imgproc::cvt_color(frame, &mut gray, imgproc::COLOR_BGR2GRAY, 0)?;

    let mut blurred = Mat::default();
    imgproc::gaussian_blur(
        &gray,
        &mut blurred,
        Size::new(config.blur_kernel, config.blur_kernel),
        0.0,
        0.0,
        core::BORDER_DEFAULT,
    )?;

    let mut edges = Mat::default();
    imgproc::canny(&blurred, &mut edges, config.canny_low, config.canny_high, 3, false)?;

    Ok(edges)
}
