//! Composable steering variants and the per-role table that selects them.

use swarm_core::{AgentId, AgentRng, FlockConfig, InfluenceConfig, Role, Vec2};
use tracing::trace;

use crate::behaviors;
use crate::SteerContext;

/// One steering rule, parameterised.  An agent's total force is the sum of
/// every variant listed for its role; order does not matter.
#[derive(Clone, Debug, PartialEq)]
pub enum Steering {
    /// Random push of `magnitude` each tick.
    Wander { magnitude: f32 },

    /// Keep `distance` from agents of the same role.
    Separation { distance: f32, max_force: f32 },

    /// Chase the nearest agent of role `target`.
    SeekNearest { target: Role, max_force: f32 },

    /// Radius-weighted heading alignment with agents of role `source`;
    /// also maintains the alignment score.
    HeadingInfluence { source: Role, radius: f32, max_force: f32, decay: f32 },

    /// Match the average velocity of same-role peers within `radius`.
    PeerAlignment { radius: f32, max_force: f32 },
}

/// The summed decision for one agent on one tick.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SteerOutcome {
    pub force: Vec2,
    /// New alignment score, if the agent runs heading influence.
    pub alignment: Option<f32>,
}

/// Which steering variants apply to each role.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SteeringTable {
    rules: [Vec<Steering>; Role::COUNT],
}

impl SteeringTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `rule` to `role`'s list.
    pub fn with(mut self, role: Role, rule: Steering) -> Self {
        self.rules[role.index()].push(rule);
        self
    }

    /// Rules for `role` (possibly empty).
    #[inline]
    pub fn rules(&self, role: Role) -> &[Steering] {
        &self.rules[role.index()]
    }

    /// Leaders wander; followers separate from each other and seek the
    /// nearest leader.
    pub fn leader_follow(cfg: &FlockConfig) -> Self {
        Self::new()
            .with(Role::Leader, Steering::Wander { magnitude: cfg.leader_wander })
            .with(Role::Follower, Steering::Separation {
                distance:  cfg.separation_distance,
                max_force: cfg.separation_max_force,
            })
            .with(Role::Follower, Steering::SeekNearest {
                target:    Role::Leader,
                max_force: cfg.seek_max_force,
            })
    }

    /// Influencers wander; users align with influencers and with each other.
    pub fn social_influence(cfg: &InfluenceConfig) -> Self {
        Self::new()
            .with(Role::Influencer, Steering::Wander { magnitude: cfg.influencer_wander })
            .with(Role::User, Steering::HeadingInfluence {
                source:    Role::Influencer,
                radius:    cfg.influence_radius,
                max_force: cfg.influence_max_force,
                decay:     cfg.alignment_decay,
            })
            .with(Role::User, Steering::PeerAlignment {
                radius:    cfg.perception_radius,
                max_force: cfg.peer_max_force,
            })
    }
}

/// Evaluate every rule for `agent`'s role against the snapshot.
///
/// Pinned agents get an empty outcome: no forces and no randomness drawn.
pub fn steer(agent: AgentId, ctx: &SteerContext<'_>, table: &SteeringTable, rng: &mut AgentRng) -> SteerOutcome {
    let agents = ctx.agents;
    let i = agent.index();
    if agents.is_pinned(agent) {
        return SteerOutcome::default();
    }

    let role = agents.role[i];
    let mut outcome = SteerOutcome::default();

    for rule in table.rules(role) {
        match *rule {
            Steering::Wander { magnitude } => {
                outcome.force += behaviors::wander(rng, magnitude);
            }
            Steering::Separation { distance, max_force } => {
                outcome.force += behaviors::separation(agent, ctx.members(role), agents, distance, max_force);
            }
            Steering::SeekNearest { target, max_force } => {
                let candidates = ctx.members(target);
                outcome.force += behaviors::seek_nearest(agent, candidates, agents, max_force);
                if ctx.verbose {
                    if let Some((nearest, d)) = behaviors::nearest(agent, candidates, agents) {
                        trace!(tick = ctx.tick.0, %agent, %nearest, distance = d, "{role} moving toward {target}");
                    }
                }
            }
            Steering::HeadingInfluence { source, radius, max_force, decay } => {
                let inf = behaviors::heading_influence(
                    agent, ctx.members(source), agents, radius, max_force, decay,
                );
                outcome.force += inf.force;
                outcome.alignment = Some(inf.alignment);
            }
            Steering::PeerAlignment { radius, max_force } => {
                outcome.force += behaviors::peer_alignment(agent, ctx.members(role), agents, radius, max_force);
            }
        }
    }
    outcome
}
