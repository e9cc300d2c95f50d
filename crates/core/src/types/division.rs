//! Business division type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown division string.
#[derive(thiserror::Error, Debug, Clone)]
#[error("unknown division: {0}")]
pub struct DivisionError(pub String);

/// A business division a lead can be attributed to.
///
/// The set is fixed; the wire format is the human-readable display name
/// (e.g. `"Crash Barrier"`), which is also what the backend stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Division {
    /// Highway safety crash barriers.
    #[serde(rename = "Crash Barrier")]
    CrashBarrier,
    /// Sewage treatment plants.
    #[serde(rename = "STP")]
    Stp,
    /// Solar mounting and structures.
    #[serde(rename = "Solar")]
    Solar,
    /// High mast and lighting poles.
    #[serde(rename = "High Mast and Poles")]
    HighMastAndPoles,
    /// Rolling mill products.
    #[serde(rename = "Rolling Mill")]
    RollingMill,
    /// Railway structures.
    #[serde(rename = "Railway")]
    Railway,
    /// Galvanized beams.
    #[serde(rename = "Beam (GI)")]
    BeamGi,
    /// Transmission line towers.
    #[serde(rename = "Transmission Line Tower")]
    TransmissionLineTower,
}

impl Division {
    /// All divisions, in the order they appear in the lead form.
    pub const ALL: [Self; 8] = [
        Self::CrashBarrier,
        Self::Stp,
        Self::Solar,
        Self::HighMastAndPoles,
        Self::RollingMill,
        Self::Railway,
        Self::BeamGi,
        Self::TransmissionLineTower,
    ];

    /// Returns the display (and wire) name of the division.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CrashBarrier => "Crash Barrier",
            Self::Stp => "STP",
            Self::Solar => "Solar",
            Self::HighMastAndPoles => "High Mast and Poles",
            Self::RollingMill => "Rolling Mill",
            Self::Railway => "Railway",
            Self::BeamGi => "Beam (GI)",
            Self::TransmissionLineTower => "Transmission Line Tower",
        }
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Division {
    type Err = DivisionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| DivisionError(s.to_owned()))
    }
}
