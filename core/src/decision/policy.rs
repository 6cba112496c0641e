use crate::threat::{ActionCode, SeverityTier, ThreatLabel};
use crate::{ShieldError, ShieldResult};
use std::collections::HashMap;

/// Static mitigation policy: a total `ThreatLabel -> SeverityTier` mapping.
///
/// The legacy controller encoded this as an if/elif ladder; here an unmapped
/// label is rejected at construction so the monitoring loop can never reach a
/// label without a defined response.
pub struct PolicyTable {
    tiers: HashMap<ThreatLabel, SeverityTier>,
}

impl PolicyTable {
    /// Builds a table from an explicit mapping, failing fast unless every
    /// label in the closed set is covered.
    pub fn new(tiers: HashMap<ThreatLabel, SeverityTier>) -> ShieldResult<Self> {
        for label in ThreatLabel::ALL {
            if !tiers.contains_key(&label) {
                return Err(ShieldError::Configuration(format!(
                    "policy table has no tier for label {label}"
                )));
            }
        }
        Ok(Self { tiers })
    }

    /// The operational policy of the defense architecture:
    /// - AtmosphericFading: gain compensation (Basic).
    /// - CW, sweep, and adjacent-channel interference: notch filtering (Basic).
    /// - Wideband, burst, and pulsed noise degrade SNR/coding: Adaptive.
    /// - Co-channel interference needs spatial nulling: Spatial, always.
    pub fn standard() -> Self {
        let tiers = HashMap::from([
            (ThreatLabel::Nominal, SeverityTier::Nominal),
            (ThreatLabel::AtmosphericFading, SeverityTier::Basic),
            (ThreatLabel::NarrowbandContinuous, SeverityTier::Basic),
            (ThreatLabel::NarrowbandSweep, SeverityTier::Basic),
            (
                ThreatLabel::AdjacentChannelInterference,
                SeverityTier::Basic,
            ),
            (ThreatLabel::WidebandNoise, SeverityTier::Adaptive),
            (ThreatLabel::BurstNoise, SeverityTier::Adaptive),
            (ThreatLabel::Pulsed, SeverityTier::Adaptive),
            (ThreatLabel::CoChannelInterference, SeverityTier::Spatial),
        ]);
        // The literal map above covers ThreatLabel::ALL.
        Self { tiers }
    }

    pub fn tier_for(&self, label: ThreatLabel) -> SeverityTier {
        // Exhaustiveness was validated at construction.
        self.tiers[&label]
    }

    /// Canonical action for a label's tier. The Basic tier splits between
    /// gain compensation and notch filtering depending on the label.
    pub fn action_for(&self, label: ThreatLabel) -> ActionCode {
        match self.tier_for(label) {
            SeverityTier::Nominal => ActionCode::Nominal,
            SeverityTier::Basic => {
                if label == ThreatLabel::AtmosphericFading {
                    ActionCode::Agc
                } else {
                    ActionCode::NotchFilter
                }
            }
            SeverityTier::Adaptive => ActionCode::AdaptiveCodingModulation,
            SeverityTier::Spatial => ActionCode::BeamformingStbc,
            SeverityTier::Emergency => ActionCode::Emergency,
        }
    }
}
