use num_complex::Complex32;
use rustfft::{num_traits::Zero, Fft, FftPlanner};
use std::sync::Arc;

/// Helper that wraps the `rustfft` planner for reuse across status reports.
pub struct SpectrumHelper {
    fft: Arc<dyn Fft<f32>>,
    size: usize,
}

impl SpectrumHelper {
    pub fn new(size: usize) -> Self {
        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(size.max(1));
        Self {
            fft,
            size: size.max(1),
        }
    }

    /// Centered power spectrum in dB of one complex window, truncated or
    /// zero-padded to the planner size.
    pub fn power_db(&self, samples: &[Complex32]) -> Vec<f32> {
        let mut buffer = vec![Complex32::zero(); self.size];
        for (slot, sample) in buffer.iter_mut().zip(samples.iter()) {
            *slot = *sample;
        }
        self.fft.process(&mut buffer);

        let scale = self.size as f32;
        let mut power: Vec<f32> = buffer
            .iter()
            .map(|c| {
                let p = c.norm_sqr() / (scale * scale);
                10.0 * (p + 1e-12).log10()
            })
            .collect();
        // Rotate so DC sits at the center bin, negative frequencies first.
        power.rotate_right(self.size / 2);
        power
    }
}
