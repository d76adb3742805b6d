//! Peak normalization

/// Scale peaks so the largest value becomes 1.0
///
/// Empty input stays empty. If the largest value is not a positive finite
/// number (e.g. silence), every entry maps to 0.0 instead of NaN.
pub fn normalize_peaks(peaks: &[f32]) -> Vec<f32> {
    let max = peaks.iter().copied().fold(f32::NEG_INFINITY, f32::max);

    if !(max.is_finite() && max > 0.0) {
        return vec![0.0; peaks.len()];
    }

    peaks.iter().map(|&peak| peak / max).collect()
}
