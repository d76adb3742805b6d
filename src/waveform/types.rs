//! Rendering parameter types
//!
//! Shapes shared with the frontend waveform components. The renderer
//! itself lives in the UI layer; these only carry configuration.

use super::normalize::normalize_peaks;
use serde::{Deserialize, Serialize};

/// Drawing configuration for the waveform renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawParams {
    /// Stretch the waveform to the parent's width
    pub fill_parent: bool,
    /// Height in CSS pixels
    pub height: f64,
    /// Normalize peaks before drawing
    pub normalize: bool,
    /// Device pixel ratio
    pub pixel_ratio: f64,
    /// Bar width in CSS pixels (None = continuous line)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bar_width: Option<f64>,
    /// Fill color
    pub color: String,
}

impl Default for DrawParams {
    fn default() -> Self {
        Self {
            fill_parent: true,
            height: 128.0,
            normalize: false,
            pixel_ratio: 1.0,
            bar_width: None,
            color: "#999999".to_string(),
        }
    }
}

impl DrawParams {
    /// Peaks as they should be handed to the renderer
    pub fn prepare_peaks(&self, peaks: &[f32]) -> Vec<f32> {
        if self.normalize {
            normalize_peaks(peaks)
        } else {
            peaks.to_vec()
        }
    }
}

/// Props for a progress-aware waveform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaveformProps {
    pub peaks: Vec<f32>,
    /// Playback progress
    pub percent: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bar_width: Option<f64>,
}

/// Props for a fixed-size canvas waveform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaveCanvasProps {
    pub peaks: Vec<f32>,
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bar_width: Option<f64>,
}
