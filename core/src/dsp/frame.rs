use crate::dsp::stats::StatsHelper;
use crate::{ShieldError, ShieldResult};
use ndarray::Array2;
use num_complex::Complex32;

/// Shapes a raw complex window into the classifier input tensor.
///
/// The window is truncated or zero-padded to `window_len`, split into I and Q
/// columns, and each channel is normalized to zero mean and unit variance
/// with the same formula used at training time, so runtime classification
/// sees identically scaled features. Pure function of its inputs.
pub fn feature_tensor(samples: &[Complex32], window_len: usize) -> ShieldResult<Array2<f32>> {
    if window_len == 0 {
        return Err(ShieldError::Configuration(
            "classifier window length must be at least 1".into(),
        ));
    }

    let mut i_channel = vec![0.0f32; window_len];
    let mut q_channel = vec![0.0f32; window_len];
    for (idx, sample) in samples.iter().take(window_len).enumerate() {
        i_channel[idx] = sample.re;
        q_channel[idx] = sample.im;
    }

    StatsHelper::normalize_in_place(&mut i_channel);
    StatsHelper::normalize_in_place(&mut q_channel);

    let mut tensor = Array2::<f32>::zeros((window_len, 2));
    for idx in 0..window_len {
        tensor[[idx, 0]] = i_channel[idx];
        tensor[[idx, 1]] = q_channel[idx];
    }
    Ok(tensor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tone(len: usize) -> Vec<Complex32> {
        (0..len)
            .map(|n| {
                let phase = n as f32 * 0.37;
                Complex32::new(phase.cos(), phase.sin())
            })
            .collect()
    }

    #[test]
    fn zero_window_len_is_a_configuration_error() {
        assert!(matches!(
            feature_tensor(&tone(8), 0),
            Err(ShieldError::Configuration(_))
        ));
    }

    #[test]
    fn long_input_is_truncated() {
        let tensor = feature_tensor(&tone(32), 8).unwrap();
        assert_eq!(tensor.shape(), &[8, 2]);
    }

    #[test]
    fn short_input_is_zero_padded() {
        let tensor = feature_tensor(&tone(4), 8).unwrap();
        assert_eq!(tensor.shape(), &[8, 2]);
    }

    #[test]
    fn channels_are_zero_mean_unit_variance() {
        let tensor = feature_tensor(&tone(64), 64).unwrap();
        for channel in 0..2 {
            let column: Vec<f32> = tensor.column(channel).iter().copied().collect();
            assert!(StatsHelper::mean(&column).abs() < 1e-4);
            assert!((StatsHelper::std_dev(&column) - 1.0).abs() < 1e-3);
        }
    }

    #[test]
    fn tensor_is_reproducible() {
        let samples = tone(16);
        let first = feature_tensor(&samples, 16).unwrap();
        let second = feature_tensor(&samples, 16).unwrap();
        assert_eq!(first, second);
    }
}
