//! Fluent builder for constructing a [`SwarmSim`].

use swarm_agent::RoleGroup;
use swarm_core::{FlockConfig, InfluenceConfig, Role, SimClock, SimRng, WorldConfig};
use swarm_steer::SteeringTable;
use tracing::info;

use crate::{SimError, SimResult, SwarmSim};

/// Fluent builder for [`SwarmSim`].
///
/// # Required inputs
///
/// - [`WorldConfig`]: arena size, seed, frame rate
///
/// # Optional inputs (have defaults)
///
/// | Method                    | Default                          |
/// |---------------------------|----------------------------------|
/// | `.group(g)`               | no agents (build fails)          |
/// | `.steering(t)`            | `SteeringTable::new()` (no rules) |
/// | `.snapshot_interval(n)`   | `world.frames_per_second`        |
///
/// The two scenario constructors fill in groups and steering from their
/// config after validating it.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SwarmSimBuilder::leader_follow(world, &FlockConfig::default())
///     .snapshot_interval(0)
///     .build()?;
/// sim.run_ticks(600, &mut NoopObserver)?;
/// ```
pub struct SwarmSimBuilder {
    world:             WorldConfig,
    groups:            Vec<RoleGroup>,
    table:             SteeringTable,
    snapshot_interval: Option<u64>,
    invalid:           Option<SimError>,
}

impl SwarmSimBuilder {
    /// Empty builder; add groups and a steering table before building.
    pub fn new(world: WorldConfig) -> Self {
        Self {
            world,
            groups:            Vec::new(),
            table:             SteeringTable::new(),
            snapshot_interval: None,
            invalid:           None,
        }
    }

    /// Leaders wander, followers seek the nearest leader; both separate.
    pub fn leader_follow(world: WorldConfig, cfg: &FlockConfig) -> Self {
        let mut b = Self::new(world)
            .group(RoleGroup::new(Role::Leader, cfg.leader_count, cfg.leader_max_speed, cfg.leader_size))
            .group(RoleGroup::new(Role::Follower, cfg.follower_count, cfg.follower_max_speed, cfg.follower_size))
            .steering(SteeringTable::leader_follow(cfg));
        b.invalid = cfg.validate().err().map(SimError::from);
        b
    }

    /// Influencers wander; users turn toward nearby influencers' headings and
    /// align with nearby users.
    pub fn social_influence(world: WorldConfig, cfg: &InfluenceConfig) -> Self {
        let mut b = Self::new(world)
            .group(RoleGroup::new(
                Role::Influencer,
                cfg.influencer_count,
                cfg.influencer_max_speed,
                cfg.influencer_size,
            ))
            .group(RoleGroup::new(Role::User, cfg.user_count, cfg.user_max_speed, cfg.user_size))
            .steering(SteeringTable::social_influence(cfg));
        b.invalid = cfg.validate().err().map(SimError::from);
        b
    }

    /// Append a block of agents.  Ids follow insertion order.
    pub fn group(mut self, group: RoleGroup) -> Self {
        self.groups.push(group);
        self
    }

    pub fn steering(mut self, table: SteeringTable) -> Self {
        self.table = table;
        self
    }

    /// Ticks between `on_agents` snapshots; `0` disables them.
    pub fn snapshot_interval(mut self, ticks: u64) -> Self {
        self.snapshot_interval = Some(ticks);
        self
    }

    /// Validate inputs, scatter the population and return a ready-to-run
    /// [`SwarmSim`].
    pub fn build(self) -> SimResult<SwarmSim> {
        if let Some(err) = self.invalid {
            return Err(err);
        }
        self.world.validate()?;

        let total: usize = self.groups.iter().map(|g| g.count).sum();
        if total == 0 {
            return Err(SimError::Config("a swarm needs at least one agent".into()));
        }
        for g in &self.groups {
            if !(g.max_speed.is_finite() && g.max_speed > 0.0) {
                return Err(SimError::Config(format!(
                    "{} max speed must be positive, got {}",
                    g.role, g.max_speed
                )));
            }
            if !(g.size.is_finite() && g.size >= 0.0) {
                return Err(SimError::Config(format!("{} size must be non-negative, got {}", g.role, g.size)));
            }
        }

        let mut rng = SimRng::new(self.world.seed);
        let (agents, rngs) = SwarmSim::scatter(&self.groups, &self.world, &mut rng);
        info!(
            agents = agents.count,
            width = self.world.width,
            height = self.world.height,
            seed = self.world.seed,
            "swarm built"
        );

        Ok(SwarmSim {
            clock:             SimClock::new(self.world.frames_per_second),
            snapshot_interval: self.snapshot_interval.unwrap_or(self.world.frames_per_second as u64),
            world:             self.world,
            agents,
            rngs,
            table:             self.table,
            groups:            self.groups,
            rng,
        })
    }
}
