//! Scenario configuration.
//!
//! Every struct has a `Default` equal to the constants the scenarios were
//! tuned with, so an empty TOML table (or no file at all) reproduces them.
//! Values are fixed once a simulation is built; `reset()` reuses them.
//!
//! ## Example `scenario.toml`
//!
//! ```toml
//! [world]
//! width = 700.0
//! height = 450.0
//! seed = 7
//!
//! [flock]
//! follower_count = 80
//!
//! [rumor]
//! population = 200
//! stifling_chance = 0.05
//! ```
//!
//! Call `validate()` (the simulation builders do) before use: invalid values
//! fail fast with [`SwarmError::Config`] instead of producing NaN state.

use crate::{SwarmError, SwarmResult};

// ── Validation helpers ────────────────────────────────────────────────────────

fn positive(what: &str, v: f32) -> SwarmResult<()> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(SwarmError::Config(format!("{what} must be positive and finite, got {v}")))
    }
}

fn non_negative(what: &str, v: f32) -> SwarmResult<()> {
    if v.is_finite() && v >= 0.0 {
        Ok(())
    } else {
        Err(SwarmError::Config(format!("{what} must be non-negative and finite, got {v}")))
    }
}

fn probability(what: &str, v: f64) -> SwarmResult<()> {
    if (0.0..=1.0).contains(&v) {
        Ok(())
    } else {
        Err(SwarmError::Config(format!("{what} must lie in [0, 1], got {v}")))
    }
}

fn ordered(what: &str, (lo, hi): (f32, f32)) -> SwarmResult<()> {
    if lo.is_finite() && hi.is_finite() && lo <= hi {
        Ok(())
    } else {
        Err(SwarmError::Config(format!("{what} range ({lo}, {hi}) is inverted or not finite")))
    }
}

fn non_zero(what: &str, n: usize) -> SwarmResult<()> {
    if n > 0 {
        Ok(())
    } else {
        Err(SwarmError::Config(format!("{what} must be at least 1")))
    }
}

// ── WorldConfig ───────────────────────────────────────────────────────────────

/// Shared world parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WorldConfig {
    /// World rectangle width; positions wrap (or clamp) against it.
    pub width: f32,
    /// World rectangle height.
    pub height: f32,
    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,
    /// Ticks per simulated second; only used for log cadence.
    pub frames_per_second: u32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self { width: 700.0, height: 450.0, seed: 42, frames_per_second: 60 }
    }
}

impl WorldConfig {
    pub fn validate(&self) -> SwarmResult<()> {
        positive("world.width", self.width)?;
        positive("world.height", self.height)?;
        Ok(())
    }
}

// ── FlockConfig ───────────────────────────────────────────────────────────────

/// Leader/follower scenario.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FlockConfig {
    pub leader_count: usize,
    pub follower_count: usize,
    pub leader_max_speed: f32,
    pub follower_max_speed: f32,
    /// Visual diameter; the drag-capture circle has radius `leader_size / 2`.
    pub leader_size: f32,
    pub follower_size: f32,
    /// Magnitude of the random wander force applied to unpinned leaders.
    pub leader_wander: f32,
    /// Followers closer than this push each other apart.
    pub separation_distance: f32,
    pub separation_max_force: f32,
    pub seek_max_force: f32,
}

impl Default for FlockConfig {
    fn default() -> Self {
        Self {
            leader_count:         2,
            follower_count:       40,
            leader_max_speed:     3.5,
            follower_max_speed:   2.5,
            leader_size:          18.0,
            follower_size:        10.0,
            leader_wander:        0.1,
            separation_distance:  20.0,
            separation_max_force: 0.2,
            seek_max_force:       0.15,
        }
    }
}

impl FlockConfig {
    pub fn validate(&self) -> SwarmResult<()> {
        non_zero("flock.leader_count", self.leader_count)?;
        non_zero("flock.follower_count", self.follower_count)?;
        positive("flock.leader_max_speed", self.leader_max_speed)?;
        positive("flock.follower_max_speed", self.follower_max_speed)?;
        non_negative("flock.leader_size", self.leader_size)?;
        non_negative("flock.follower_size", self.follower_size)?;
        non_negative("flock.leader_wander", self.leader_wander)?;
        non_negative("flock.separation_distance", self.separation_distance)?;
        non_negative("flock.separation_max_force", self.separation_max_force)?;
        non_negative("flock.seek_max_force", self.seek_max_force)?;
        Ok(())
    }
}

// ── InfluenceConfig ───────────────────────────────────────────────────────────

/// Social-media influence scenario.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InfluenceConfig {
    pub influencer_count: usize,
    pub user_count: usize,
    pub influencer_max_speed: f32,
    pub user_max_speed: f32,
    pub influencer_size: f32,
    pub user_size: f32,
    pub influencer_wander: f32,
    /// Influence weight falls linearly from 1 at distance 0 to 0 here.
    pub influence_radius: f32,
    pub influence_max_force: f32,
    /// Retention factor applied to the alignment score on ticks with no
    /// influencer in range.
    pub alignment_decay: f32,
    /// Users closer than this contribute to peer velocity alignment.
    pub perception_radius: f32,
    pub peer_max_force: f32,
}

impl Default for InfluenceConfig {
    fn default() -> Self {
        Self {
            influencer_count:     5,
            user_count:           50,
            influencer_max_speed: 2.5,
            user_max_speed:       2.2,
            influencer_size:      20.0,
            user_size:            12.0,
            influencer_wander:    0.15,
            influence_radius:     100.0,
            influence_max_force:  0.1,
            alignment_decay:      0.95,
            perception_radius:    50.0,
            peer_max_force:       0.05,
        }
    }
}

impl InfluenceConfig {
    pub fn validate(&self) -> SwarmResult<()> {
        non_zero("influence.influencer_count", self.influencer_count)?;
        non_zero("influence.user_count", self.user_count)?;
        positive("influence.influencer_max_speed", self.influencer_max_speed)?;
        positive("influence.user_max_speed", self.user_max_speed)?;
        non_negative("influence.influencer_size", self.influencer_size)?;
        non_negative("influence.user_size", self.user_size)?;
        non_negative("influence.influencer_wander", self.influencer_wander)?;
        positive("influence.influence_radius", self.influence_radius)?;
        non_negative("influence.influence_max_force", self.influence_max_force)?;
        probability("influence.alignment_decay", self.alignment_decay as f64)?;
        non_negative("influence.perception_radius", self.perception_radius)?;
        non_negative("influence.peer_max_force", self.peer_max_force)?;
        Ok(())
    }
}

// ── RumorConfig ───────────────────────────────────────────────────────────────

/// Rumor-propagation scenario.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RumorConfig {
    pub population: usize,
    /// Visual radius; also the margin of the diffusion clamp and the
    /// drag-capture radius.
    pub person_radius: f32,
    /// Social-graph pair draws as a fraction of the population.
    pub connection_ratio: f32,
    pub interest_range: (f32, f32),
    pub spread_chance_range: (f32, f32),
    pub spread_range_range: (f32, f32),
    /// Base spreader lifetime in ticks.
    pub spreader_lifetime: i32,
    /// Lifetime is drawn uniformly from `lifetime ± jitter`.
    pub lifetime_jitter: i32,
    /// Probability that a spreader/spreader contact stifles one of them.
    pub stifling_chance: f64,
    /// Per-axis diffusion half-width while spreading.
    pub spreader_jitter: f32,
    /// Per-axis diffusion half-width otherwise.
    pub idle_jitter: f32,
    /// Log the running spread-event count every N ticks (0 disables).
    pub report_interval_ticks: u64,
}

impl Default for RumorConfig {
    fn default() -> Self {
        Self {
            population:            100,
            person_radius:         8.0,
            connection_ratio:      0.1,
            interest_range:        (0.5, 1.0),
            spread_chance_range:   (0.05, 0.15),
            spread_range_range:    (15.0, 25.0),
            spreader_lifetime:     600,
            lifetime_jitter:       100,
            stifling_chance:       0.02,
            spreader_jitter:       2.0,
            idle_jitter:           1.5,
            report_interval_ticks: 600,
        }
    }
}

impl RumorConfig {
    pub fn validate(&self) -> SwarmResult<()> {
        non_zero("rumor.population", self.population)?;
        non_negative("rumor.person_radius", self.person_radius)?;
        non_negative("rumor.connection_ratio", self.connection_ratio)?;
        ordered("rumor.interest_range", self.interest_range)?;
        ordered("rumor.spread_chance_range", self.spread_chance_range)?;
        ordered("rumor.spread_range_range", self.spread_range_range)?;
        probability("rumor.interest_range.min", self.interest_range.0 as f64)?;
        probability("rumor.interest_range.max", self.interest_range.1 as f64)?;
        probability("rumor.spread_chance_range.min", self.spread_chance_range.0 as f64)?;
        probability("rumor.spread_chance_range.max", self.spread_chance_range.1 as f64)?;
        non_negative("rumor.spread_range_range.min", self.spread_range_range.0)?;
        probability("rumor.stifling_chance", self.stifling_chance)?;
        non_negative("rumor.spreader_jitter", self.spreader_jitter)?;
        non_negative("rumor.idle_jitter", self.idle_jitter)?;
        if self.spreader_lifetime <= 0 {
            return Err(SwarmError::Config(format!(
                "rumor.spreader_lifetime must be positive, got {}",
                self.spreader_lifetime
            )));
        }
        if self.lifetime_jitter < 0 || self.lifetime_jitter >= self.spreader_lifetime {
            return Err(SwarmError::Config(format!(
                "rumor.lifetime_jitter must lie in [0, {}), got {}",
                self.spreader_lifetime, self.lifetime_jitter
            )));
        }
        Ok(())
    }

    /// Validate against the world as well: the diffusion clamp needs room.
    pub fn validate_in(&self, world: &WorldConfig) -> SwarmResult<()> {
        world.validate()?;
        self.validate()?;
        if 2.0 * self.person_radius > world.width.min(world.height) {
            return Err(SwarmError::Config(format!(
                "rumor.person_radius {} does not fit a {}x{} world",
                self.person_radius, world.width, world.height
            )));
        }
        Ok(())
    }

    /// Number of random pair draws used to build the social graph.
    pub fn connection_draws(&self) -> usize {
        (self.population as f32 * self.connection_ratio).ceil() as usize
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Aggregate configuration for every scenario, typically loaded from a TOML
/// file by the application crate.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    pub world: WorldConfig,
    pub flock: FlockConfig,
    pub influence: InfluenceConfig,
    pub rumor: RumorConfig,
}

impl SimConfig {
    /// Validate every section.
    pub fn validate(&self) -> SwarmResult<()> {
        self.world.validate()?;
        self.flock.validate()?;
        self.influence.validate()?;
        self.rumor.validate_in(&self.world)?;
        Ok(())
    }
}
