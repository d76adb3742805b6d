//! Decoded audio signal
//!
//! A multi-channel block of linear PCM samples. Decoders are the only
//! producers; the peak extractor borrows it read-only.

use crate::utils::error::{WaveformError, WaveformResult};

/// Decoded multi-channel audio held as one `Vec<f32>` per channel
#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
    channels: Vec<Vec<f32>>,
    sample_rate: u32,
}

impl Signal {
    /// Build a signal from per-channel sample arrays.
    ///
    /// Requires at least one channel, a non-zero sample rate and the same
    /// length for every channel.
    pub fn new(channels: Vec<Vec<f32>>, sample_rate: u32) -> WaveformResult<Self> {
        if channels.is_empty() {
            return Err(WaveformError::InvalidArgument(
                "Signal must have at least one channel".to_string(),
            ));
        }
        if sample_rate == 0 {
            return Err(WaveformError::InvalidArgument(
                "Sample rate must be greater than zero".to_string(),
            ));
        }

        let len = channels[0].len();
        if let Some(index) = channels.iter().position(|c| c.len() != len) {
            return Err(WaveformError::InvalidArgument(format!(
                "Channel {} has {} samples, expected {}",
                index,
                channels[index].len(),
                len
            )));
        }

        Ok(Self {
            channels,
            sample_rate,
        })
    }

    /// Build a signal from interleaved frames (`L R L R ...`).
    ///
    /// A trailing partial frame is dropped.
    pub fn from_interleaved(
        samples: &[f32],
        channel_count: usize,
        sample_rate: u32,
    ) -> WaveformResult<Self> {
        if channel_count == 0 {
            return Err(WaveformError::InvalidArgument(
                "Channel count must be greater than zero".to_string(),
            ));
        }

        let frames = samples.len() / channel_count;
        let mut channels = vec![Vec::with_capacity(frames); channel_count];
        for frame in samples.chunks_exact(channel_count) {
            for (channel, &sample) in channels.iter_mut().zip(frame) {
                channel.push(sample);
            }
        }

        Self::new(channels, sample_rate)
    }

    pub fn number_of_channels(&self) -> usize {
        self.channels.len()
    }

    /// Samples per channel
    pub fn len(&self) -> usize {
        self.channels[0].len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Duration in seconds
    pub fn duration_secs(&self) -> f64 {
        self.len() as f64 / self.sample_rate as f64
    }

    /// Duration in milliseconds, truncated
    pub fn duration_ms(&self) -> u64 {
        (self.duration_secs() * 1000.0) as u64
    }

    /// Samples of one channel
    pub fn channel_data(&self, channel: usize) -> WaveformResult<&[f32]> {
        self.channels
            .get(channel)
            .map(Vec::as_slice)
            .ok_or(WaveformError::OutOfRange {
                channel,
                available: self.channels.len(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_empty_channel_list() {
        let result = Signal::new(vec![], 44100);
        assert!(matches!(result, Err(WaveformError::InvalidArgument(_))));
    }

    #[test]
    fn test_new_rejects_zero_sample_rate() {
        let result = Signal::new(vec![vec![0.0; 4]], 0);
        assert!(matches!(result, Err(WaveformError::InvalidArgument(_))));
    }

    #[test]
    fn test_new_rejects_ragged_channels() {
        let result = Signal::new(vec![vec![0.0; 4], vec![0.0; 3]], 8000);
        assert!(matches!(result, Err(WaveformError::InvalidArgument(_))));
    }

    #[test]
    fn test_from_interleaved_splits_channels() {
        let samples = [0.1, -0.1, 0.2, -0.2, 0.3, -0.3, 0.9];
        let signal = Signal::from_interleaved(&samples, 2, 8000).unwrap();

        assert_eq!(signal.number_of_channels(), 2);
        assert_eq!(signal.len(), 3);
        assert_eq!(signal.channel_data(0).unwrap(), &[0.1, 0.2, 0.3]);
        assert_eq!(signal.channel_data(1).unwrap(), &[-0.1, -0.2, -0.3]);
    }

    #[test]
    fn test_channel_data_out_of_range() {
        let signal = Signal::new(vec![vec![0.0; 4]], 8000).unwrap();
        match signal.channel_data(1) {
            Err(WaveformError::OutOfRange { channel, available }) => {
                assert_eq!(channel, 1);
                assert_eq!(available, 1);
            }
            other => panic!("expected OutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_duration() {
        let signal = Signal::new(vec![vec![0.0; 12000]], 8000).unwrap();
        assert!((signal.duration_secs() - 1.5).abs() < f64::EPSILON);
        assert_eq!(signal.duration_ms(), 1500);
        assert!(!signal.is_empty());
    }
}
