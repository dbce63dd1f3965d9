// src/pipeline.rs
//
// Per-frame lane extraction, end to end:
//
//   BGR frame → edge map → ROI mask → Hough segments
//             → classify & average → extrapolate → overlay
//
// Every frame is processed independently; the pipeline holds configuration
// only and no state survives between calls.

use crate::types::{Config, LaneLine};
use crate::{extrapolation, lane_fit, overlay, preprocessing, roi, segment_extraction};
use anyhow::{ensure, Result};
use opencv::{core::Mat, prelude::*};
use tracing::debug;

pub struct LanePipeline {
    config: Config,
}

/// Outcome of one frame: the annotated image plus the data that produced it.
pub struct FrameResult {
    pub annotated: Mat,
    pub lanes: Vec<LaneLine>,
    pub raw_segment_count: usize,
}

impl LanePipeline {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Process a single BGR frame. Zero, one, or two lane lines is a normal
    /// result; fewer lanes on a noisy frame is degraded output, not an error.
    pub fn process(&self, frame: &Mat) -> Result<FrameResult> {
        ensure!(!frame.empty(), "cannot process an empty frame");
        let height = frame.rows();

        let edges = preprocessing::detect_edges(frame, &self.config.edge)?;
        let masked = roi::apply_roi_mask(&edges, &self.config.roi)?;
        let segments = segment_extraction::extract_segments(&masked, &self.config.hough)?;

        let models = lane_fit::classify_and_average(&segments);
        let mut lanes = Vec::with_capacity(models.len());
        for model in models {
            lanes.push(extrapolation::extrapolate(model, height)?);
        }

        debug!(
            "frame {}x{}: {} raw segment(s) -> {} lane line(s)",
            frame.cols(),
            height,
            segments.len(),
            lanes.len()
        );

        let annotated = overlay::render_overlay(frame, &lanes, &self.config.overlay)?;

        Ok(FrameResult {
            annotated,
            lanes,
            raw_segment_count: segments.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opencv::{
        core::{self, Point, Scalar},
        imgproc,
    };

    /// Black road-scene stand-in with two bright stripes converging toward
    /// the middle of the frame, roughly where lane markings would sit.
    fn synthetic_road_frame() -> Mat {
        let mut frame = Mat::new_rows_cols_with_default(
            480,
            640,
            core::CV_8UC3,
            Scalar::all(0.0),
        )
        .unwrap();

        imgproc::line(
            &mut frame,
            Point::new(150, 480),
            Point::new(300, 300),
            Scalar::new(255.0, 255.0, 255.0, 0.0),
            8,
            imgproc::LINE_8,
            0,
        )
        .unwrap();
        imgproc::line(
            &mut frame,
            Point::new(490, 480),
            Point::new(340, 300),
            Scalar::new(255.0, 255.0, 255.0, 0.0),
            8,
            imgproc::LINE_8,
            0,
        )
        .unwrap();

        frame
    }

    #[test]
    fn test_two_stripes_give_two_lanes() {
        let pipeline = LanePipeline::new(Config::default());
        let frame = synthetic_road_frame();

        let result = pipeline.process(&frame).unwrap();

        assert_eq!(result.lanes.len(), 2, "expected a lane line per stripe");
        assert!(result.raw_segment_count >= 2);

        for lane in &result.lanes {
            assert_eq!(lane.y1, 480);
            assert_eq!(lane.y2, 288);
        }

        // Left model first, right second
        assert!(result.lanes[0].x1 < result.lanes[1].x1);

        assert_eq!(result.annotated.rows(), 480);
        assert_eq!(result.annotated.cols(), 640);
    }

    #[test]
    fn test_featureless_frame_gives_no_lanes() {
        let pipeline = LanePipeline::new(Config::default());
        let frame = Mat::new_rows_cols_with_default(
            480,
            640,
            core::CV_8UC3,
            Scalar::all(0.0),
        )
        .unwrap();

        let result = pipeline.process(&frame).unwrap();

        assert!(result.lanes.is_empty());
        assert_eq!(result.raw_segment_count, 0);
    }

    #[test]
    fn test_empty_frame_is_rejected() {
        let pipeline = LanePipeline::new(Config::default());
        assert!(pipeline.process(&Mat::default()).is_err());
    }
}
