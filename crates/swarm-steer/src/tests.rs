//! Unit tests for swarm-steer.

use swarm_agent::{AgentRngs, AgentStore, AgentStoreBuilder, RoleGroup};
use swarm_core::{AgentId, Role, Tick, Vec2};

use crate::SteerContext;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn store(groups: &[RoleGroup]) -> (AgentStore, AgentRngs) {
    AgentStoreBuilder::new(0).groups(groups).build()
}

fn followers(n: usize) -> (AgentStore, AgentRngs) {
    store(&[RoleGroup::new(Role::Follower, n, 2.5, 10.0)])
}

fn ids(range: std::ops::Range<u32>) -> Vec<AgentId> {
    range.map(AgentId).collect()
}

// ── Separation ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod separation_tests {
    use super::*;
    use crate::behaviors::separation;

    #[test]
    fn close_pair_pushes_apart_symmetrically() {
        let (mut s, _) = followers(2);
        s.position[0] = Vec2::new(100.0, 100.0);
        s.position[1] = Vec2::new(110.0, 100.0);
        let peers = ids(0..2);

        let f0 = separation(AgentId(0), &peers, &s, 20.0, 0.2);
        let f1 = separation(AgentId(1), &peers, &s, 20.0, 0.2);

        let away0 = s.position[0] - s.position[1];
        assert!(f0.dot(away0) > 0.0, "agent 0 should be pushed away from 1: {f0:?}");
        assert!(f1.dot(-away0) > 0.0, "agent 1 should be pushed away from 0: {f1:?}");
        assert!(f0.length() <= 0.2 + 1e-6);
    }

    #[test]
    fn no_neighbors_in_range_is_zero() {
        let (mut s, _) = followers(2);
        s.position[0] = Vec2::new(0.0, 0.0);
        s.position[1] = Vec2::new(50.0, 0.0);
        assert_eq!(separation(AgentId(0), &ids(0..2), &s, 20.0, 0.2), Vec2::ZERO);
    }

    #[test]
    fn coincident_neighbor_skipped() {
        let (mut s, _) = followers(2);
        s.position[0] = Vec2::new(5.0, 5.0);
        s.position[1] = Vec2::new(5.0, 5.0);
        let f = separation(AgentId(0), &ids(0..2), &s, 20.0, 0.2);
        assert_eq!(f, Vec2::ZERO);
        assert!(f.is_finite());
    }

    #[test]
    fn delta_is_against_current_velocity() {
        // Already moving away at max speed: nothing left to steer.
        let (mut s, _) = followers(2);
        s.position[0] = Vec2::new(100.0, 100.0);
        s.position[1] = Vec2::new(110.0, 100.0);
        s.velocity[0] = Vec2::new(-2.5, 0.0);
        let f = separation(AgentId(0), &ids(0..2), &s, 20.0, 0.2);
        assert!(f.length() < 1e-5, "{f:?}");
    }
}

// ── Seek-nearest ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod seek_tests {
    use super::*;
    use crate::behaviors::{nearest, seek_nearest};

    fn flock() -> AgentStore {
        let (mut s, _) = store(&[
            RoleGroup::new(Role::Leader, 2, 3.5, 18.0),
            RoleGroup::new(Role::Follower, 1, 2.5, 10.0),
        ]);
        s.position[0] = Vec2::new(0.0, 0.0);
        s.position[1] = Vec2::new(100.0, 0.0);
        s.position[2] = Vec2::new(80.0, 0.0);
        s
    }

    #[test]
    fn picks_closest_leader() {
        let s = flock();
        let (target, d) = nearest(AgentId(2), &ids(0..2), &s).unwrap();
        assert_eq!(target, AgentId(1));
        assert!((d - 20.0).abs() < 1e-5);
    }

    #[test]
    fn ties_go_to_lowest_id() {
        let mut s = flock();
        s.position[2] = Vec2::new(50.0, 0.0);
        assert_eq!(nearest(AgentId(2), &ids(0..2), &s).unwrap().0, AgentId(0));
    }

    #[test]
    fn force_points_at_target_and_is_clamped() {
        let s = flock();
        let f = seek_nearest(AgentId(2), &ids(0..2), &s, 0.15);
        assert!(f.x > 0.0);
        assert!(f.y.abs() < 1e-6);
        assert!((f.length() - 0.15).abs() < 1e-5);
    }

    #[test]
    fn empty_candidates_no_force() {
        let s = flock();
        assert_eq!(seek_nearest(AgentId(2), &[], &s, 0.15), Vec2::ZERO);
    }

    #[test]
    fn target_on_top_no_force() {
        let mut s = flock();
        s.position[2] = s.position[1];
        s.velocity[2] = Vec2::new(1.0, 0.0);
        assert_eq!(seek_nearest(AgentId(2), &ids(0..2), &s, 0.15), Vec2::ZERO);
    }
}

// ── Heading influence ─────────────────────────────────────────────────────────

#[cfg(test)]
mod influence_tests {
    use std::f32::consts::FRAC_PI_2;

    use swarm_core::SteerVec;

    use super::*;
    use crate::behaviors::heading_influence;

    fn scene() -> AgentStore {
        let (mut s, _) = store(&[
            RoleGroup::new(Role::Influencer, 2, 2.5, 20.0),
            RoleGroup::new(Role::User, 1, 2.2, 12.0),
        ]);
        s.position[2] = Vec2::new(300.0, 300.0);
        s.velocity[2] = Vec2::new(1.0, 0.0);
        s.heading[2] = 0.0;
        s
    }

    #[test]
    fn aligned_influencer_gives_full_score() {
        let mut s = scene();
        s.position[0] = Vec2::new(320.0, 300.0);
        s.heading[0] = 0.0;
        s.position[1] = Vec2::new(0.0, 0.0); // out of range
        let inf = heading_influence(AgentId(2), &ids(0..2), &s, 100.0, 0.1, 0.95);
        assert_eq!(inf.in_range, 1);
        assert!((inf.alignment - 1.0).abs() < 1e-5);
        // Desired (2.2, 0) minus velocity (1, 0), clamped to 0.1.
        assert!((inf.force - Vec2::new(0.1, 0.0)).length() < 1e-5);
    }

    #[test]
    fn perpendicular_influencer_gives_half_score() {
        let mut s = scene();
        s.position[0] = Vec2::new(300.0, 350.0);
        s.heading[0] = FRAC_PI_2;
        s.position[1] = Vec2::new(0.0, 0.0);
        let inf = heading_influence(AgentId(2), &ids(0..2), &s, 100.0, 0.1, 0.95);
        assert!((inf.alignment - 0.5).abs() < 1e-4);
    }

    #[test]
    fn closer_influencer_weighs_more() {
        let mut s = scene();
        s.position[0] = Vec2::new(310.0, 300.0); // weight 0.9, heading 0
        s.heading[0] = 0.0;
        s.position[1] = Vec2::new(390.0, 300.0); // weight 0.1, heading π/2
        s.heading[1] = FRAC_PI_2;
        let inf = heading_influence(AgentId(2), &ids(0..2), &s, 100.0, 10.0, 0.95);
        // Weighted mean heading is mostly along +x.
        let desired = inf.force + s.velocity[2];
        assert!(desired.x > desired.y * 5.0, "{desired:?}");
    }

    #[test]
    fn headings_across_the_half_turn_seam_are_close() {
        let mut s = scene();
        s.velocity[2] = Vec2::from_heading(3.0);
        s.heading[2] = 3.0;
        s.position[0] = Vec2::new(320.0, 300.0);
        s.heading[0] = -3.0;
        s.position[1] = Vec2::new(0.0, 0.0);
        let inf = heading_influence(AgentId(2), &ids(0..2), &s, 100.0, 0.1, 0.95);
        // 3.0 and -3.0 are 2π - 6 apart, not 6.
        let expected = 1.0 - (std::f32::consts::TAU - 6.0) / std::f32::consts::PI;
        assert!((inf.alignment - expected).abs() < 1e-4, "{}", inf.alignment);
        assert!(inf.alignment > 0.9);
    }

    #[test]
    fn out_of_range_decays_previous_score() {
        let mut s = scene();
        s.alignment[2] = 0.8;
        s.position[0] = Vec2::new(0.0, 0.0);
        s.position[1] = Vec2::new(600.0, 0.0);
        let inf = heading_influence(AgentId(2), &ids(0..2), &s, 100.0, 0.1, 0.95);
        assert_eq!(inf.in_range, 0);
        assert_eq!(inf.force, Vec2::ZERO);
        assert!((inf.alignment - 0.76).abs() < 1e-6);
    }
}

// ── Peer alignment ────────────────────────────────────────────────────────────

#[cfg(test)]
mod peer_tests {
    use super::*;
    use crate::behaviors::peer_alignment;

    #[test]
    fn steers_toward_peer_velocity() {
        let (mut s, _) = store(&[RoleGroup::new(Role::User, 3, 2.2, 12.0)]);
        s.position[0] = Vec2::new(100.0, 100.0);
        s.position[1] = Vec2::new(120.0, 100.0);
        s.position[2] = Vec2::new(400.0, 100.0); // outside perception
        s.velocity[0] = Vec2::new(1.0, 0.0);
        s.velocity[1] = Vec2::new(0.0, 2.0);
        s.velocity[2] = Vec2::new(-2.0, 0.0);
        let f = peer_alignment(AgentId(0), &ids(0..3), &s, 50.0, 0.05);
        assert!(f.y > 0.0);
        assert!(f.x < 0.0);
        assert!((f.length() - 0.05).abs() < 1e-5);
    }

    #[test]
    fn alone_is_zero() {
        let (mut s, _) = store(&[RoleGroup::new(Role::User, 1, 2.2, 12.0)]);
        s.velocity[0] = Vec2::new(1.0, 0.0);
        assert_eq!(peer_alignment(AgentId(0), &ids(0..1), &s, 50.0, 0.05), Vec2::ZERO);
    }
}

// ── Steering table / steer() ──────────────────────────────────────────────────

#[cfg(test)]
mod steer_tests {
    use swarm_core::{FlockConfig, InfluenceConfig};

    use super::*;
    use crate::{SteeringTable, Steering, steer};

    #[test]
    fn context_groups_members_by_role() {
        let (s, _) = store(&[
            RoleGroup::new(Role::Leader, 2, 3.5, 18.0),
            RoleGroup::new(Role::Follower, 3, 2.5, 10.0),
        ]);
        let ctx = SteerContext::new(Tick(0), &s);
        assert_eq!(ctx.members(Role::Leader), &ids(0..2)[..]);
        assert_eq!(ctx.members(Role::Follower), &ids(2..5)[..]);
        assert!(ctx.members(Role::User).is_empty());
    }

    #[test]
    fn tables_assign_expected_rules() {
        let flock = SteeringTable::leader_follow(&FlockConfig::default());
        assert_eq!(flock.rules(Role::Leader), &[Steering::Wander { magnitude: 0.1 }]);
        assert_eq!(flock.rules(Role::Follower).len(), 2);
        assert!(flock.rules(Role::User).is_empty());

        let social = SteeringTable::social_influence(&InfluenceConfig::default());
        assert_eq!(social.rules(Role::Influencer), &[Steering::Wander { magnitude: 0.15 }]);
        assert_eq!(social.rules(Role::User).len(), 2);
    }

    #[test]
    fn wander_has_configured_magnitude() {
        let (s, mut rngs) = store(&[RoleGroup::new(Role::Leader, 1, 3.5, 18.0)]);
        let table = SteeringTable::leader_follow(&FlockConfig::default());
        let ctx = SteerContext::new(Tick(0), &s);
        let out = steer(AgentId(0), &ctx, &table, rngs.get_mut(AgentId(0)));
        assert!((out.force.length() - 0.1).abs() < 1e-5);
        assert_eq!(out.alignment, None);
    }

    #[test]
    fn pinned_agent_gets_nothing() {
        let (mut s, mut rngs) = store(&[RoleGroup::new(Role::Leader, 1, 3.5, 18.0)]);
        s.pin(AgentId(0), Vec2::new(100.0, 100.0)).unwrap();
        let table = SteeringTable::leader_follow(&FlockConfig::default());
        let ctx = SteerContext::new(Tick(0), &s);
        let out = steer(AgentId(0), &ctx, &table, rngs.get_mut(AgentId(0)));
        assert_eq!(out, Default::default());
    }

    #[test]
    fn user_outcome_carries_alignment() {
        let (mut s, mut rngs) = store(&[
            RoleGroup::new(Role::Influencer, 1, 2.5, 20.0),
            RoleGroup::new(Role::User, 1, 2.2, 12.0),
        ]);
        s.position[0] = Vec2::new(0.0, 0.0);
        s.position[1] = Vec2::new(500.0, 400.0);
        s.alignment[1] = 0.5;
        let table = SteeringTable::social_influence(&InfluenceConfig::default());
        let ctx = SteerContext::new(Tick(0), &s);
        let out = steer(AgentId(1), &ctx, &table, rngs.get_mut(AgentId(1)));
        assert!((out.alignment.unwrap() - 0.475).abs() < 1e-6);
        assert_eq!(out.force, Vec2::ZERO);
    }
}
