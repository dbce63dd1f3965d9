use crate::types::Config;
use anyhow::Result;
use std::fs;
use std::path::Path;

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    /// Load from `path`, or fall back to the built-in defaults when the file
    /// does not exist. A file that exists but fails to parse is still an error.
    pub fn load_or_default(path: &str) -> Result<Self> {
        if Path::new(path).exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tuning_values() {
        let config = Config::default();

        assert_eq!(config.edge.blur_kernel, 5);
        assert_eq!(config.edge.canny_low, 50.0);
        assert_eq!(config.edge.canny_high, 150.0);

        assert_eq!(config.hough.rho, 1.0);
        assert_eq!(config.hough.theta_degrees, 1.0);
        assert_eq!(config.hough.threshold, 50);
        assert_eq!(config.hough.min_line_length, 50.0);
        assert_eq!(config.hough.max_line_gap, 150.0);

        assert_eq!(config.roi.side_margin, 100);
        assert_eq!(config.roi.apex_drop, 50);

        assert_eq!(config.overlay.line_color_bgr, [255.0, 0.0, 0.0]);
        assert_eq!(config.overlay.line_thickness, 10);
        assert_eq!(config.overlay.frame_weight, 0.8);
        assert_eq!(config.overlay.overlay_weight, 1.0);
        assert_eq!(config.overlay.blend_bias, 1.0);
    }

    #[test]
    fn test_partial_yaml_fills_in_defaults() {
        let yaml = r#"
edge:
  canny_low: 40.0
logging:
  level: debug
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.edge.canny_low, 40.0);
        assert_eq!(config.edge.canny_high, 150.0);
        assert_eq!(config.hough.threshold, 50);
        assert_eq!(config.logging.level, "debug");
    }
}
