//! Per-person rumor state.

use std::fmt;

/// Where a person stands with respect to the rumor.
///
/// Transitions only go forward: `Ignorant → Spreader → Stifler`.
/// `Stifler` is terminal and nobody ever becomes `Ignorant` again.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum RumorState {
    /// Has not heard the rumor.
    #[default]
    Ignorant,
    /// Actively passing it on; carries a countdown timer.
    Spreader,
    /// Heard it and stopped spreading.
    Stifler,
}

impl RumorState {
    /// Human-readable label, used for CSV/SQLite column values.
    pub fn as_str(self) -> &'static str {
        match self {
            RumorState::Ignorant => "ignorant",
            RumorState::Spreader => "spreader",
            RumorState::Stifler  => "stifler",
        }
    }
}

impl fmt::Display for RumorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Population totals per state.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RumorCounts {
    pub ignorant: usize,
    pub spreader: usize,
    pub stifler:  usize,
}

impl RumorCounts {
    pub fn total(&self) -> usize {
        self.ignorant + self.spreader + self.stifler
    }

    /// `true` once nobody is spreading; the outcome can no longer change.
    pub fn is_settled(&self) -> bool {
        self.spreader == 0
    }
}

impl fmt::Display for RumorCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ignorant={} spreader={} stifler={}",
            self.ignorant, self.spreader, self.stifler
        )
    }
}
