//! Peak extraction
//!
//! Downsamples one channel of a decoded signal into a fixed number of
//! buckets, each reduced to its half-scaled maximum absolute amplitude.

use super::signal::Signal;
use crate::utils::error::{WaveformError, WaveformResult};
use serde::{Deserialize, Serialize};

/// Bucket count used when none is configured
pub const DEFAULT_BUCKET_COUNT: usize = 600;

/// Channel used when none is configured
pub const DEFAULT_CHANNEL: usize = 0;

/// Peak extraction options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeakOptions {
    /// Number of peaks to produce
    #[serde(default = "default_bucket_count")]
    pub bucket_count: usize,
    /// Zero-based channel to read samples from
    #[serde(default)]
    pub channel: usize,
}

fn default_bucket_count() -> usize {
    DEFAULT_BUCKET_COUNT
}

impl Default for PeakOptions {
    fn default() -> Self {
        Self {
            bucket_count: DEFAULT_BUCKET_COUNT,
            channel: DEFAULT_CHANNEL,
        }
    }
}

/// Extract peaks from a signal
///
/// Splits the selected channel into `bucket_count` contiguous buckets of
/// `len / bucket_count` samples and emits half of each bucket's maximum
/// absolute amplitude. Samples past the last full bucket are ignored, and a
/// signal shorter than `bucket_count` yields all zeros.
pub fn extract_peaks(signal: &Signal, options: &PeakOptions) -> WaveformResult<Vec<f32>> {
    if options.bucket_count == 0 {
        return Err(WaveformError::InvalidArgument(
            "Bucket count must be greater than zero".to_string(),
        ));
    }

    let samples = signal.channel_data(options.channel)?;
    let bucket_size = samples.len() / options.bucket_count;

    tracing::debug!(
        "Extracting {} peaks from channel {} ({} samples, {} per bucket)",
        options.bucket_count,
        options.channel,
        samples.len(),
        bucket_size
    );

    let peaks = (0..options.bucket_count)
        .map(|i| {
            let start = i * bucket_size;
            let max = samples[start..start + bucket_size]
                .iter()
                .fold(0.0f32, |max, &s| max.max(s.abs()));
            max / 2.0
        })
        .collect();

    Ok(peaks)
}

/// Extract peaks with the default options (600 buckets, channel 0)
pub fn extract_peaks_default(signal: &Signal) -> WaveformResult<Vec<f32>> {
    extract_peaks(signal, &PeakOptions::default())
}
