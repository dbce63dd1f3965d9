use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub io: IoConfig,
    pub edge: EdgeConfig,
    pub hough: HoughConfig,
    pub roi: RoiConfig,
    pub overlay: OverlayConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IoConfig {
    pub input_dir: String,
    pub output_dir: String,
    pub save_annotated: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeConfig {
    pub blur_kernel: i32,
    pub canny_low: f64,
    pub canny_high: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HoughConfig {
    pub rho: f64,
    pub theta_degrees: f64,
    pub threshold: i32,
    pub min_line_length: f64,
    pub max_line_gap: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RoiConfig {
    /// Horizontal inset of the two base vertices from the frame edges.
    pub side_margin: i32,
    /// How far below the vertical midpoint the apex sits.
    pub apex_drop: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    pub line_color_bgr: [f64; 3],
    pub line_thickness: i32,
    pub frame_weight: f64,
    pub overlay_weight: f64,
    pub blend_bias: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for IoConfig {
    fn default() -> Self {
        Self {
            input_dir: "frames".to_string(),
            output_dir: "output".to_string(),
            save_annotated: true,
        }
    }
}

impl Default for EdgeConfig {
    fn default() -> Self {
        Self {
            blur_kernel: 5,
            canny_low: 50.0,
            canny_high: 150.0,
        }
    }
}

impl Default for HoughConfig {
    fn default() -> Self {
        Self {
            rho: 1.0,
            theta_degrees: 1.0,
            threshold: 50,
            min_line_length: 50.0,
            max_line_gap: 150.0,
        }
    }
}

impl Default for RoiConfig {
    fn default() -> Self {
        Self {
            side_margin: 100,
            apex_drop: 50,
        }
    }
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            line_color_bgr: [255.0, 0.0, 0.0],
            line_thickness: 10,
            frame_weight: 0.8,
            overlay_weight: 1.0,
            blend_bias: 1.0,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// A short detected line, endpoints in pixel coordinates (origin top-left,
/// y increasing downward). One frame's Hough output is a list of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl Segment {
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }
}

/// Infinite-line summary of a segment cluster: y = slope * x + intercept.
/// Negative slope is a left-lane candidate, non-negative a right-lane one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineModel {
    pub slope: f64,
    pub intercept: f64,
}

/// Final drawable lane boundary. y1 is the frame's bottom row, y2 is 60% of
/// the frame height, so every lane line spans the same vertical window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaneLine {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}
