//! Audio decoding
//!
//! Turns encoded audio bytes into a [`Signal`]. Decoding is the only async
//! step before peak extraction.

pub mod ffmpeg;

pub use ffmpeg::{signal_from_f32le, DecoderConfig, FfmpegDecoder};

use crate::utils::error::WaveformResult;
use crate::waveform::Signal;
use async_trait::async_trait;

/// Source of decoded audio
#[async_trait]
pub trait Decoder: Send + Sync {
    /// Decode an encoded audio stream (wav, mp3, ogg, ...) into linear PCM
    async fn decode(&self, bytes: &[u8]) -> WaveformResult<Signal>;
}
