//! Deterministic per-agent and simulation-level RNG wrappers.
//!
//! # Determinism strategy
//!
//! Each agent (or person) gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (index * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive indices uniformly across the seed space.  Every
//! random draw an agent makes during a tick (wander direction, diffusion
//! jitter, infection rolls) comes from its own stream, so results do not
//! depend on the order in which agents are evaluated, sequentially or on a
//! Rayon pool.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::vec2::{SteerVec, Vec2};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── AgentRng ──────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG.
///
/// Stored in a parallel `Vec<AgentRng>` alongside the SoA arrays of the
/// owning population.
pub struct AgentRng(SmallRng);

impl AgentRng {
    /// Seed deterministically from the run's global seed and an agent or
    /// person id.
    pub fn new(global_seed: u64, id: impl Into<usize>) -> Self {
        let index = id.into() as u64;
        let seed = global_seed ^ index.wrapping_mul(MIXING_CONSTANT);
        AgentRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Unit vector with a uniformly random heading.
    #[inline]
    pub fn unit_vector(&mut self) -> Vec2 {
        Vec2::from_heading(self.0.gen_range(0.0..std::f32::consts::TAU))
    }

    /// Uniform sample in `[-half_width, half_width)`; zero when `half_width` is zero.
    #[inline]
    pub fn jitter(&mut self, half_width: f32) -> f32 {
        if half_width <= 0.0 {
            return 0.0;
        }
        self.0.gen_range(-half_width..half_width)
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Simulation-level RNG for global operations: initial placement, social
/// graph construction, seed-spreader choice, and the per-run seeds handed to
/// a fresh set of `AgentRng`s on every reset.
///
/// Used only from the single-threaded parts of the tick driver.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Unit vector with a uniformly random heading.
    #[inline]
    pub fn unit_vector(&mut self) -> Vec2 {
        Vec2::from_heading(self.0.gen_range(0.0..std::f32::consts::TAU))
    }

    /// Uniform point inside `[0, width) × [0, height)`.
    #[inline]
    pub fn point_in(&mut self, width: f32, height: f32) -> Vec2 {
        Vec2::new(self.0.gen_range(0.0..width), self.0.gen_range(0.0..height))
    }

    /// Uniform sample from `[lo, hi)`; returns `lo` when the range is empty.
    #[inline]
    pub fn uniform(&mut self, lo: f32, hi: f32) -> f32 {
        if hi > lo { self.0.gen_range(lo..hi) } else { lo }
    }
}
