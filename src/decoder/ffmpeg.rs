//! FFmpeg-based audio decoder
//!
//! Pipes encoded audio into FFmpeg over stdin and reads back interleaved
//! 32-bit float PCM from stdout. Nothing touches the filesystem.

use super::Decoder;
use crate::utils::error::{WaveformError, WaveformResult};
use crate::waveform::Signal;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// FFmpeg decoder configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DecoderConfig {
    /// FFmpeg executable
    pub ffmpeg_path: String,
    /// FFprobe executable, used to detect the source channel count
    pub ffprobe_path: String,
    /// Output sample rate in Hz
    pub sample_rate: u32,
    /// Force a channel count (None = keep the source layout)
    pub channels: Option<u16>,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            ffmpeg_path: "ffmpeg".to_string(),
            ffprobe_path: "ffprobe".to_string(),
            sample_rate: 44100,
            channels: None,
        }
    }
}

/// Decoder that shells out to FFmpeg
#[derive(Debug, Clone, Default)]
pub struct FfmpegDecoder {
    config: DecoderConfig,
}

impl FfmpegDecoder {
    pub fn new(config: DecoderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Probe the number of channels in the first audio stream
    async fn probe_channels(&self, bytes: &[u8]) -> WaveformResult<usize> {
        let stdout = run_with_input(
            &self.config.ffprobe_path,
            &[
                "-v",
                "error",
                "-select_streams",
                "a:0",
                "-show_entries",
                "stream=channels",
                "-of",
                "csv=p=0",
                "pipe:0",
            ],
            bytes,
        )
        .await?;

        parse_channel_count(&String::from_utf8_lossy(&stdout))
    }
}

#[async_trait]
impl Decoder for FfmpegDecoder {
    async fn decode(&self, bytes: &[u8]) -> WaveformResult<Signal> {
        if bytes.is_empty() {
            return Err(WaveformError::Decode("Audio data is empty".to_string()));
        }
        if self.config.sample_rate == 0 {
            return Err(WaveformError::InvalidArgument(
                "Decoder sample rate must be greater than zero".to_string(),
            ));
        }

        let channels = match self.config.channels {
            Some(0) => {
                return Err(WaveformError::InvalidArgument(
                    "Decoder channel count must be greater than zero".to_string(),
                ))
            }
            Some(n) => n as usize,
            None => self.probe_channels(bytes).await?,
        };

        tracing::info!(
            "Decoding {} bytes of audio: {} channel(s) @ {}Hz",
            bytes.len(),
            channels,
            self.config.sample_rate
        );

        let sample_rate = self.config.sample_rate.to_string();
        let channel_arg = channels.to_string();
        let raw = run_with_input(
            &self.config.ffmpeg_path,
            &[
                "-hide_banner",
                "-loglevel",
                "error",
                "-i",
                "pipe:0",
                "-vn",
                "-ac",
                channel_arg.as_str(),
                "-ar",
                sample_rate.as_str(),
                "-f",
                "f32le",
                "-acodec",
                "pcm_f32le",
                "pipe:1",
            ],
            bytes,
        )
        .await?;

        let signal = signal_from_f32le(&raw, channels, self.config.sample_rate)?;

        tracing::debug!(
            "Decoded {} frames ({:.2}s)",
            signal.len(),
            signal.duration_secs()
        );

        Ok(signal)
    }
}

/// Convert raw interleaved f32 little-endian PCM into a signal
///
/// Stray bytes and a trailing partial frame are dropped.
pub fn signal_from_f32le(raw: &[u8], channels: usize, sample_rate: u32) -> WaveformResult<Signal> {
    let samples: Vec<f32> = raw
        .chunks_exact(4)
        .map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect();

    Signal::from_interleaved(&samples, channels, sample_rate)
}

/// Parse ffprobe's `csv=p=0` channel output
fn parse_channel_count(output: &str) -> WaveformResult<usize> {
    let line = output
        .lines()
        .map(|l| l.trim().trim_end_matches(','))
        .find(|l| !l.is_empty())
        .ok_or_else(|| WaveformError::Decode("No audio stream found".to_string()))?;

    match line.parse::<usize>() {
        Ok(0) | Err(_) => Err(WaveformError::Decode(format!(
            "Unexpected ffprobe output: {}",
            line
        ))),
        Ok(channels) => Ok(channels),
    }
}

/// Run a program with `input` on stdin and collect stdout
async fn run_with_input(program: &str, args: &[&str], input: &[u8]) -> WaveformResult<Vec<u8>> {
    let mut process = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|e| WaveformError::Decode(format!("Failed to start {}: {}", program, e)))?;

    let mut stdin = process
        .stdin
        .take()
        .ok_or_else(|| WaveformError::Decode(format!("Failed to capture {} stdin", program)))?;

    // Feed stdin concurrently so a full stdout pipe can't deadlock us
    let input = input.to_vec();
    let writer = tokio::spawn(async move {
        let result = stdin.write_all(&input).await;
        drop(stdin);
        result
    });

    let output = process.wait_with_output().await?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        tracing::warn!("{} exited with {}: {}", program, output.status, stderr.trim());
        return Err(WaveformError::Decode(format!(
            "{} failed: {}",
            program,
            stderr.trim()
        )));
    }

    // The child may stop reading early once it has what it needs
    match writer.await {
        Ok(Err(e)) if e.kind() != std::io::ErrorKind::BrokenPipe => {
            tracing::warn!("Failed to write audio to {}: {}", program, e);
        }
        Err(e) => {
            tracing::warn!("{} stdin writer panicked: {}", program, e);
        }
        _ => {}
    }

    Ok(output.stdout)
}
