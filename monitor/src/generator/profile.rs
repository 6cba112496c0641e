use anyhow::ensure;
use num_complex::Complex32;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use shieldcore::threat::ThreatLabel;
use shieldcore::{ShieldError, ShieldResult, SignalSource};
use std::f32::consts::PI;

/// Configuration for generating synthetic impaired receive windows.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    pub window_len: usize,
    pub seed: u64,
    /// Jammer-to-noise ratio of the injected impairment, in dB relative to
    /// the unit-power QPSK baseband.
    pub jnr_db: f32,
    pub noise_floor: f32,
    /// Normalized tone frequency in cycles per sample.
    pub tone_frequency: f32,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            window_len: 1024,
            seed: 0,
            jnr_db: 30.0,
            noise_floor: 0.05,
            tone_frequency: 0.12,
        }
    }
}

/// Ancillary metadata accompanying each generated window.
#[allow(dead_code)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowAncillary {
    pub scenario: ThreatLabel,
    pub jnr_db: f32,
    pub timestamp: f64,
}

/// One labelled receive window consumed by the monitoring loop.
#[derive(Debug, Clone)]
pub struct ThreatWindow {
    pub samples: Vec<Complex32>,
    pub ancillary: WindowAncillary,
}

fn qpsk_baseband(rng: &mut StdRng, len: usize, noise_floor: f32) -> Vec<Complex32> {
    const SYMBOLS: [(f32, f32); 4] = [(1.0, 1.0), (-1.0, 1.0), (-1.0, -1.0), (1.0, -1.0)];
    let scale = 1.0 / 2.0_f32.sqrt();
    (0..len)
        .map(|_| {
            let (re, im) = SYMBOLS[rng.gen_range(0..4)];
            let noise = Complex32::new(
                rng.gen_range(-noise_floor..noise_floor),
                rng.gen_range(-noise_floor..noise_floor),
            );
            Complex32::new(re * scale, im * scale) + noise
        })
        .collect()
}

fn tone(len: usize, frequency: f32, amplitude: f32) -> Vec<Complex32> {
    (0..len)
        .map(|n| {
            let phase = 2.0 * PI * frequency * n as f32;
            Complex32::new(phase.cos(), phase.sin()) * amplitude
        })
        .collect()
}

/// Builds one synthetic window for the requested impairment scenario.
/// Deterministic: the same configuration and label always yield the same
/// samples.
pub fn build_threat_window(
    label: ThreatLabel,
    config: &ScenarioConfig,
) -> anyhow::Result<ThreatWindow> {
    ensure!(config.window_len > 0, "scenario window length must be at least 1");

    // Per-label stream so scenarios stay independent of generation order.
    let stream = ThreatLabel::ALL
        .iter()
        .position(|&l| l == label)
        .unwrap_or(0) as u64;
    let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(stream << 32));

    let len = config.window_len;
    let jam_amplitude = 10.0_f32.powf(config.jnr_db / 20.0) * config.noise_floor;
    let mut samples = qpsk_baseband(&mut rng, len, config.noise_floor);

    match label {
        ThreatLabel::Nominal => {}
        ThreatLabel::NarrowbandContinuous => {
            for (sample, jam) in samples
                .iter_mut()
                .zip(tone(len, config.tone_frequency, jam_amplitude))
            {
                *sample += jam;
            }
        }
        ThreatLabel::NarrowbandSweep => {
            // Sawtooth chirp: instantaneous frequency ramps across the band
            // and snaps back, four sweeps per window.
            let sweeps = 4;
            let mut phase = 0.0f32;
            for (n, sample) in samples.iter_mut().enumerate() {
                let ramp = (n * sweeps % len) as f32 / len as f32;
                let freq = -0.25 + 0.5 * ramp;
                phase += 2.0 * PI * freq;
                *sample += Complex32::new(phase.cos(), phase.sin()) * jam_amplitude;
            }
        }
        ThreatLabel::AdjacentChannelInterference => {
            // Leakage from a neighbouring carrier near the band edge.
            for (sample, jam) in samples.iter_mut().zip(tone(len, 0.45, jam_amplitude * 0.7)) {
                *sample += jam;
            }
        }
        ThreatLabel::WidebandNoise => {
            for sample in samples.iter_mut() {
                *sample += Complex32::new(
                    rng.gen_range(-jam_amplitude..jam_amplitude),
                    rng.gen_range(-jam_amplitude..jam_amplitude),
                );
            }
        }
        ThreatLabel::BurstNoise => {
            // Gated noise: random bursts covering roughly a third of the window.
            let burst_len = (len / 8).max(1);
            let mut n = 0;
            while n < len {
                if rng.gen_range(0.0..1.0) < 0.33 {
                    for sample in samples.iter_mut().skip(n).take(burst_len) {
                        *sample += Complex32::new(
                            rng.gen_range(-jam_amplitude..jam_amplitude),
                            rng.gen_range(-jam_amplitude..jam_amplitude),
                        );
                    }
                }
                n += burst_len;
            }
        }
        ThreatLabel::Pulsed => {
            // Periodic high-power pulses, pulse width 1/16 of the period.
            let period = (len / 8).max(2);
            let width = (period / 16).max(1);
            for (n, sample) in samples.iter_mut().enumerate() {
                if n % period < width {
                    *sample += Complex32::new(jam_amplitude * 8.0, 0.0);
                }
            }
        }
        ThreatLabel::CoChannelInterference => {
            // A second QPSK carrier on the same frequency.
            let interferer = qpsk_baseband(&mut rng, len, config.noise_floor);
            for (sample, other) in samples.iter_mut().zip(interferer) {
                *sample += other * (jam_amplitude * 0.8).min(2.0);
            }
        }
        ThreatLabel::AtmosphericFading => {
            // Slow fade dipping to 20% of nominal power mid-window.
            for (n, sample) in samples.iter_mut().enumerate() {
                let envelope =
                    0.2 + 0.8 * (0.5 * (1.0 + (2.0 * PI * n as f32 / len as f32).cos()));
                *sample *= envelope;
            }
        }
    }

    Ok(ThreatWindow {
        samples,
        ancillary: WindowAncillary {
            scenario: label,
            jnr_db: config.jnr_db,
            timestamp: 0.0,
        },
    })
}

/// Signal-source boundary backed by the synthetic scenario generator.
pub struct ScenarioSource {
    config: ScenarioConfig,
}

impl ScenarioSource {
    pub fn new(config: ScenarioConfig) -> Self {
        Self { config }
    }
}

impl SignalSource for ScenarioSource {
    fn generate(&self, scenario: ThreatLabel) -> ShieldResult<Vec<Complex32>> {
        build_threat_window(scenario, &self.config)
            .map(|window| window.samples)
            .map_err(|err| ShieldError::Adapter(format!("scenario generation failed: {err}")))
    }
}
