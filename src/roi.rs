// src/roi.rs

use crate::types::RoiConfig;
use anyhow::Result;
use opencv::{
    core::{self, Mat, Point, Scalar, Vector},
    imgproc,
    prelude::*,
};

/// Triangular region the lane markings are expected to fall in: base along
/// the bottom row inset by `side_margin`, apex slightly below the vertical
/// midpoint of the frame.
pub fn roi_triangle(width: i32, height: i32, config: &RoiConfig) -> [Point; 3] {
    [
        Point::new(config.side_margin, height),
        Point::new(width - config.side_margin, height),
        Point::new(width / 2, height / 2 + config.apex_drop),
    ]
}

/// Zero out every edge pixel outside the triangular region of interest.
pub fn apply_roi_mask(edges: &Mat, config: &RoiConfig) -> Result<Mat> {
    let size = edges.size()?;
    let triangle = roi_triangle(size.width, size.height, config);

    let mut mask = Mat::zeros(size.height, size.width, edges.typ())?.to_mat()?;

    let mut polygons = Vector::<Vector<Point>>::new();
    polygons.push(Vector::from_iter(triangle));
    imgproc::fill_poly(
        &mut mask,
        &polygons,
        Scalar::all(255.0),
        imgproc::LINE_8,
        0,
        Point::new(0, 0),
    )?;

    let mut masked = Mat::default();
    core::bitwise_and(edges, &mask, &mut masked, &core::no_array())?;
    Ok(masked)
}
