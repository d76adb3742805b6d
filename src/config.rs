//! Configuration
//!
//! Bundles the extraction, decoder and drawing settings. Every section and
//! field falls back to its documented default when omitted.

use crate::decoder::DecoderConfig;
use crate::utils::error::WaveformResult;
use crate::waveform::{DrawParams, PeakOptions};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WaveformConfig {
    pub peaks: PeakOptions,
    pub decoder: DecoderConfig,
    pub draw: DrawParams,
}

impl WaveformConfig {
    /// Parse a configuration from JSON
    pub fn from_json(content: &str) -> WaveformResult<Self> {
        let config: Self = serde_json::from_str(content)?;
        tracing::debug!("Loaded waveform config: {:?}", config);
        Ok(config)
    }

    pub fn to_json(&self) -> WaveformResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::WaveformError;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = WaveformConfig::from_json("{}").unwrap();

        assert_eq!(config, WaveformConfig::default());
        assert_eq!(config.peaks.bucket_count, 600);
        assert_eq!(config.peaks.channel, 0);
        assert_eq!(config.decoder.sample_rate, 44100);
    }

    #[test]
    fn test_partial_config() {
        let config = WaveformConfig::from_json(
            r#"{
                "peaks": { "channel": 1 },
                "decoder": { "channels": 2 },
                "draw": {
                    "fillParent": false,
                    "height": 64,
                    "normalize": true,
                    "pixelRatio": 2,
                    "color": "red"
                }
            }"#,
        )
        .unwrap();

        assert_eq!(config.peaks.bucket_count, 600);
        assert_eq!(config.peaks.channel, 1);
        assert_eq!(config.decoder.channels, Some(2));
        assert!(config.draw.normalize);
        assert_eq!(config.draw.pixel_ratio, 2.0);
        assert_eq!(config.draw.bar_width, None);
    }

    #[test]
    fn test_config_round_trip() {
        let mut config = WaveformConfig::default();
        config.peaks.bucket_count = 256;

        let loaded = WaveformConfig::from_json(&config.to_json().unwrap()).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_invalid_config() {
        let result = WaveformConfig::from_json("{ not json");
        assert!(matches!(result, Err(WaveformError::Serialization(_))));
    }
}
