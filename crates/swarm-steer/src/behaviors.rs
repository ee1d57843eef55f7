//! Pure steering functions.
//!
//! Each function takes the steering agent, a candidate set and the
//! prior-tick store, and returns a force already clamped to its own cap.
//! Candidate sets may contain the agent itself; it is always skipped.
//! Interactions that divide by distance skip pairs at distance exactly zero.

use swarm_agent::AgentStore;
use swarm_core::vec2::angle_between;
use swarm_core::{AgentId, AgentRng, SteerVec, Vec2};

/// Push away from same-role neighbors closer than `distance`.
///
/// Each contributing neighbor adds `normalize(self − other) / d`; the sum is
/// averaged, rescaled to `max_speed`, turned into a steering delta against
/// the current velocity and clamped to `max_force`.  No contributors → zero.
pub fn separation(
    agent:     AgentId,
    peers:     &[AgentId],
    agents:    &AgentStore,
    distance:  f32,
    max_force: f32,
) -> Vec2 {
    let i = agent.index();
    let here = agents.position[i];
    let mut sum = Vec2::ZERO;
    let mut total = 0u32;

    for &other in peers {
        if other == agent {
            continue;
        }
        let there = agents.position[other.index()];
        let d = here.distance(there);
        if d > 0.0 && d < distance {
            sum += (here - there).normalize_or_zero() / d;
            total += 1;
        }
    }

    if total == 0 {
        return Vec2::ZERO;
    }
    let desired = (sum / total as f32).set_mag(agents.max_speed[i]);
    (desired - agents.velocity[i]).limit(max_force)
}

/// The closest candidate to `agent` and its distance.  Ties go to the
/// lowest id; `None` for an empty candidate set.
pub fn nearest(agent: AgentId, candidates: &[AgentId], agents: &AgentStore) -> Option<(AgentId, f32)> {
    let here = agents.position[agent.index()];
    let mut best: Option<(AgentId, f32)> = None;
    for &other in candidates {
        if other == agent {
            continue;
        }
        let d = here.distance(agents.position[other.index()]);
        if best.is_none_or(|(_, min)| d < min) {
            best = Some((other, d));
        }
    }
    best
}

/// Steer toward the nearest candidate at full speed, clamped to `max_force`.
///
/// No candidates, or a nearest candidate sitting exactly on the agent,
/// produce no force.
pub fn seek_nearest(
    agent:      AgentId,
    candidates: &[AgentId],
    agents:     &AgentStore,
    max_force:  f32,
) -> Vec2 {
    let Some((target, d)) = nearest(agent, candidates, agents) else {
        return Vec2::ZERO;
    };
    if d <= 0.0 {
        return Vec2::ZERO;
    }
    let i = agent.index();
    let desired = (agents.position[target.index()] - agents.position[i]).set_mag(agents.max_speed[i]);
    (desired - agents.velocity[i]).limit(max_force)
}

/// Result of [`heading_influence`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Influence {
    /// Steering force (zero when nobody is in range).
    pub force: Vec2,
    /// New alignment score for the agent.
    pub alignment: f32,
    /// Number of influencers in range.
    pub in_range: usize,
}

/// Align heading with influencers inside `radius`, weighted by proximity.
///
/// Weight falls linearly from 1 at distance 0 to 0 at `radius`.  When at
/// least one influencer is in range the weighted mean heading becomes the
/// desired velocity (at `max_speed`) and the alignment score is
/// `1 − Δθ/π`, Δθ being the angle between the agent's current heading and
/// the desired one.  Otherwise the force is zero and the previous score is
/// multiplied by `decay`.
pub fn heading_influence(
    agent:       AgentId,
    influencers: &[AgentId],
    agents:      &AgentStore,
    radius:      f32,
    max_force:   f32,
    decay:       f32,
) -> Influence {
    let i = agent.index();
    let here = agents.position[i];
    let mut heading_sum = Vec2::ZERO;
    let mut total_weight = 0.0f32;
    let mut in_range = 0usize;

    for &other in influencers {
        if other == agent {
            continue;
        }
        let o = other.index();
        let d = here.distance(agents.position[o]);
        if d < radius {
            let weight = 1.0 - d / radius;
            heading_sum += Vec2::from_heading(agents.heading[o]) * weight;
            total_weight += weight;
            in_range += 1;
        }
    }

    if in_range == 0 || total_weight <= 0.0 {
        return Influence {
            force:     Vec2::ZERO,
            alignment: agents.alignment[i] * decay,
            in_range,
        };
    }

    let velocity = agents.velocity[i];
    let desired = (heading_sum / total_weight).set_mag(agents.max_speed[i]);
    let force = (desired - velocity).limit(max_force);
    let diff = angle_between(velocity.heading(), desired.heading());
    let alignment = (1.0 - diff / std::f32::consts::PI).clamp(0.0, 1.0);

    Influence { force, alignment, in_range }
}

/// Match the average velocity of same-role peers inside `radius`.
pub fn peer_alignment(
    agent:     AgentId,
    peers:     &[AgentId],
    agents:    &AgentStore,
    radius:    f32,
    max_force: f32,
) -> Vec2 {
    let i = agent.index();
    let here = agents.position[i];
    let mut sum = Vec2::ZERO;
    let mut total = 0u32;

    for &other in peers {
        if other == agent {
            continue;
        }
        let o = other.index();
        if here.distance(agents.position[o]) < radius {
            sum += agents.velocity[o];
            total += 1;
        }
    }

    if total == 0 {
        return Vec2::ZERO;
    }
    let desired = (sum / total as f32).set_mag(agents.max_speed[i]);
    (desired - agents.velocity[i]).limit(max_force)
}

/// Random push of fixed magnitude in a uniformly random direction.
#[inline]
pub fn wander(rng: &mut AgentRng, magnitude: f32) -> Vec2 {
    rng.unit_vector() * magnitude
}
