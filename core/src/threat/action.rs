use serde::{Deserialize, Serialize};
use std::fmt;

/// Escalation level guiding which mitigation class applies. The derive order
/// is the escalation order: `Emergency` dominates every label-based tier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SeverityTier {
    Nominal,
    Basic,
    Adaptive,
    Spatial,
    Emergency,
}

/// Mitigation directive emitted for one classification cycle. `Display`
/// yields the wire codes the legacy visualization layer consumes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ActionCode {
    Nominal,
    Agc,
    NotchFilter,
    AdaptiveCodingModulation,
    BeamformingStbc,
    Emergency,
}

impl fmt::Display for ActionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            ActionCode::Nominal => "NOMINAL",
            ActionCode::Agc => "AGC",
            ActionCode::NotchFilter => "FILTER",
            ActionCode::AdaptiveCodingModulation => "ACM",
            ActionCode::BeamformingStbc => "BEAM_STBC",
            ActionCode::Emergency => "EMERGENCY",
        };
        f.write_str(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_order_in_escalation_direction() {
        assert!(SeverityTier::Nominal < SeverityTier::Basic);
        assert!(SeverityTier::Basic < SeverityTier::Adaptive);
        assert!(SeverityTier::Adaptive < SeverityTier::Spatial);
        assert!(SeverityTier::Spatial < SeverityTier::Emergency);
    }

    #[test]
    fn action_codes_render_legacy_wire_names() {
        assert_eq!(ActionCode::BeamformingStbc.to_string(), "BEAM_STBC");
        assert_eq!(ActionCode::Emergency.to_string(), "EMERGENCY");
    }
}
