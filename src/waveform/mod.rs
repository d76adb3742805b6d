//! Waveform extraction module
//!
//! Turns decoded audio into peak data for visualization.

mod extractor;
mod normalize;
mod signal;
pub mod types;

pub use extractor::{
    extract_peaks, extract_peaks_default, PeakOptions, DEFAULT_BUCKET_COUNT, DEFAULT_CHANNEL,
};
pub use normalize::normalize_peaks;
pub use signal::Signal;
pub use types::{DrawParams, WaveCanvasProps, WaveformProps};

use crate::decoder::Decoder;
use crate::utils::error::WaveformResult;
use serde::{Deserialize, Serialize};

/// Waveform data for an audio clip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaveformData {
    /// One peak per bucket, each in 0.0-0.5 for unit-range audio
    pub peaks: Vec<f32>,
    /// Duration of the decoded audio in milliseconds
    pub duration_ms: u64,
    /// Sample rate of the decoded audio
    pub sample_rate: u32,
    pub bucket_count: usize,
    pub channel: usize,
}

impl WaveformData {
    /// Extract peaks from an already decoded signal
    pub fn from_signal(signal: &Signal, options: &PeakOptions) -> WaveformResult<Self> {
        Ok(Self {
            peaks: extract_peaks(signal, options)?,
            duration_ms: signal.duration_ms(),
            sample_rate: signal.sample_rate(),
            bucket_count: options.bucket_count,
            channel: options.channel,
        })
    }
}

/// Decode an encoded audio clip and extract its peaks
///
/// The decoder runs exactly once; its errors are returned unchanged.
pub async fn load_waveform(
    decoder: &dyn Decoder,
    bytes: &[u8],
    options: &PeakOptions,
) -> WaveformResult<WaveformData> {
    let signal = decoder.decode(bytes).await?;

    tracing::info!(
        "Decoded audio: {} channel(s), {} samples @ {}Hz",
        signal.number_of_channels(),
        signal.len(),
        signal.sample_rate()
    );

    WaveformData::from_signal(&signal, options)
}
