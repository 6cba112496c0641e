use serde::{Deserialize, Serialize};
use std::fmt;

/// Impairment classes the receive-chain classifier can report, derived from
/// the legacy dataset classes (Clean/CW/Sweep/ACI/AWGN/BBNJ/Pulsed/CCI/
/// Atmospheric).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ThreatLabel {
    Nominal,
    NarrowbandContinuous,
    NarrowbandSweep,
    AdjacentChannelInterference,
    WidebandNoise,
    BurstNoise,
    Pulsed,
    CoChannelInterference,
    AtmosphericFading,
}

impl ThreatLabel {
    /// The closed label set. Policy tables are validated against this slice.
    pub const ALL: [ThreatLabel; 9] = [
        ThreatLabel::Nominal,
        ThreatLabel::NarrowbandContinuous,
        ThreatLabel::NarrowbandSweep,
        ThreatLabel::AdjacentChannelInterference,
        ThreatLabel::WidebandNoise,
        ThreatLabel::BurstNoise,
        ThreatLabel::Pulsed,
        ThreatLabel::CoChannelInterference,
        ThreatLabel::AtmosphericFading,
    ];
}

impl fmt::Display for ThreatLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ThreatLabel::Nominal => "Nominal",
            ThreatLabel::NarrowbandContinuous => "NarrowbandContinuous",
            ThreatLabel::NarrowbandSweep => "NarrowbandSweep",
            ThreatLabel::AdjacentChannelInterference => "AdjacentChannelInterference",
            ThreatLabel::WidebandNoise => "WidebandNoise",
            ThreatLabel::BurstNoise => "BurstNoise",
            ThreatLabel::Pulsed => "Pulsed",
            ThreatLabel::CoChannelInterference => "CoChannelInterference",
            ThreatLabel::AtmosphericFading => "AtmosphericFading",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn label_set_is_closed_and_distinct() {
        let unique: HashSet<_> = ThreatLabel::ALL.iter().collect();
        assert_eq!(unique.len(), ThreatLabel::ALL.len());
    }
}
