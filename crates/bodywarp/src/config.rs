use bodywarp_imgproc::parallel::ExecutionStrategy;
use serde::{Deserialize, Serialize};

use crate::error::PreviewError;

/// Default bound on the longest side of the image before warping.
pub const DEFAULT_MAX_DIMENSION: usize = 800;

/// Default quality of the re-encoded preview.
pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Settings of the preview pipeline.
///
/// Every field has a default, so a partial JSON document is enough:
///
/// ```
/// use bodywarp::PreviewConfig;
///
/// let config = PreviewConfig::from_json(r#"{ "max_dimension": 512 }"#).unwrap();
/// assert_eq!(config.max_dimension, 512);
/// assert_eq!(config.jpeg_quality, 90);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// Longest side, in pixels, the source is downscaled to before warping. Zero disables it.
    pub max_dimension: usize,
    /// JPEG quality used when encoding the preview.
    pub jpeg_quality: u8,
    /// How the warp pass is scheduled.
    pub strategy: ExecutionStrategy,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            max_dimension: DEFAULT_MAX_DIMENSION,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            strategy: ExecutionStrategy::default(),
        }
    }
}

impl PreviewConfig {
    /// Parse a configuration from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, PreviewError> {
        Ok(serde_json::from_str(json)?)
    }
}
