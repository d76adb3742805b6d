//! Waveform peaks - audio peak extraction for waveform visualization.
//!
//! Decodes audio clips, reduces them to a fixed number of peaks and
//! provides the drawing and label helpers used by the waveform UI.

pub mod config;
pub mod decoder;
pub mod utils;
pub mod waveform;

pub use config::WaveformConfig;
pub use decoder::{Decoder, DecoderConfig, FfmpegDecoder};
pub use utils::{format_time, ErrorResponse, WaveformError, WaveformResult};
pub use waveform::{
    extract_peaks, extract_peaks_default, load_waveform, normalize_peaks, DrawParams, PeakOptions,
    Signal, WaveCanvasProps, WaveformData, WaveformProps,
};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing/logging
///
/// Honors `RUST_LOG`, defaulting to debug output for this crate. Calling it
/// again after a subscriber is installed is a no-op.
pub fn init_tracing() {
    let result = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "waveform_peaks=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();

    if result.is_ok() {
        tracing::info!("Starting waveform-peaks v{}", env!("CARGO_PKG_VERSION"));
    }
}
