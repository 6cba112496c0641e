pub struct StatsHelper;

impl StatsHelper {
    pub fn mean(samples: &[f32]) -> f32 {
        if samples.is_empty() {
            return 0.0;
        }
        samples.iter().sum::<f32>() / samples.len() as f32
    }

    /// Population standard deviation, matching the training-time formula.
    pub fn std_dev(samples: &[f32]) -> f32 {
        if samples.is_empty() {
            return 0.0;
        }
        let mean = Self::mean(samples);
        let var = samples.iter().map(|&v| (v - mean) * (v - mean)).sum::<f32>()
            / samples.len() as f32;
        var.sqrt()
    }

    pub fn rms(samples: &[f32]) -> f32 {
        if samples.is_empty() {
            return 0.0;
        }
        let sum_sq: f32 = samples.iter().map(|&v| v * v).sum();
        (sum_sq / samples.len() as f32).sqrt()
    }

    /// Zero-mean/unit-variance normalization in place. A zero-spread channel
    /// is only mean-subtracted, never divided.
    pub fn normalize_in_place(samples: &mut [f32]) {
        let mean = Self::mean(samples);
        let std = Self::std_dev(samples);
        for value in samples.iter_mut() {
            *value -= mean;
        }
        if std > 0.0 {
            for value in samples.iter_mut() {
                *value /= std;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rms_zero_sequence_yields_zero() {
        assert_eq!(StatsHelper::rms(&[]), 0.0);
        assert_eq!(StatsHelper::rms(&[0.0, 0.0]), 0.0);
    }

    #[test]
    fn std_dev_of_constant_sequence_is_zero() {
        assert_eq!(StatsHelper::std_dev(&[2.0, 2.0, 2.0]), 0.0);
    }

    #[test]
    fn normalize_centers_and_scales() {
        let mut samples = vec![1.0, 3.0];
        StatsHelper::normalize_in_place(&mut samples);
        assert!((StatsHelper::mean(&samples)).abs() < 1e-6);
        assert!((StatsHelper::std_dev(&samples) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn normalize_leaves_zero_spread_channel_at_zero() {
        let mut samples = vec![5.0, 5.0, 5.0];
        StatsHelper::normalize_in_place(&mut samples);
        assert_eq!(samples, vec![0.0, 0.0, 0.0]);
    }
}
