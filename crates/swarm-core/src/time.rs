//! Simulation time model.
//!
//! Time is a monotonically increasing `Tick` counter, one tick per rendered
//! frame.  `SimClock` maps ticks to simulated seconds using the frame rate the
//! scenario was tuned for (60 fps by default), which is only used for
//! reporting cadence; the engine itself is frame-based.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// `true` every `interval` ticks (tick 0 excluded).  `interval == 0` never fires.
    #[inline]
    pub fn is_every(self, interval: u64) -> bool {
        interval > 0 && self.0 > 0 && self.0 % interval == 0
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Tracks the current tick and converts it to simulated seconds.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Frames (ticks) per simulated second.
    pub frames_per_second: u32,
    /// The current tick, advanced by [`SimClock::advance`] once per tick.
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new(frames_per_second: u32) -> Self {
        Self { frames_per_second, current_tick: Tick::ZERO }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = self.current_tick + 1;
    }

    /// Back to tick 0; used by `reset()`.
    #[inline]
    pub fn rewind(&mut self) {
        self.current_tick = Tick::ZERO;
    }

    /// Simulated seconds elapsed since tick 0.
    pub fn elapsed_secs(&self) -> f64 {
        if self.frames_per_second == 0 {
            return 0.0;
        }
        self.current_tick.0 as f64 / self.frames_per_second as f64
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.1}s)", self.current_tick, self.elapsed_secs())
    }
}
