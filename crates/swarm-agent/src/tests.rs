//! Unit tests for swarm-agent.

use swarm_core::{Role, Vec2};

use crate::{AgentRngs, AgentStore, AgentStoreBuilder, RoleGroup};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn flock(leaders: usize, followers: usize) -> (AgentStore, AgentRngs) {
    AgentStoreBuilder::new(0)
        .group(RoleGroup::new(Role::Leader, leaders, 3.5, 18.0))
        .group(RoleGroup::new(Role::Follower, followers, 2.5, 10.0))
        .build()
}

#[cfg(test)]
mod builder_tests {
    use swarm_core::SimRng;

    use super::*;

    #[test]
    fn groups_are_contiguous() {
        let (store, rngs) = flock(2, 3);
        assert_eq!(store.count, 5);
        assert_eq!(rngs.len(), 5);
        assert_eq!(store.role[..2], [Role::Leader, Role::Leader]);
        assert!(store.role[2..].iter().all(|&r| r == Role::Follower));
        assert_eq!(store.max_speed[0], 3.5);
        assert_eq!(store.max_speed[4], 2.5);
    }

    #[test]
    fn scattered_agents_inside_world_with_unit_velocity() {
        let mut rng = SimRng::new(11);
        let (store, _) = AgentStoreBuilder::new(1)
            .group(RoleGroup::new(Role::User, 50, 2.2, 12.0))
            .build_scattered(&mut rng, 700.0, 450.0);
        for i in 0..store.count {
            let p = store.position[i];
            assert!((0.0..700.0).contains(&p.x) && (0.0..450.0).contains(&p.y));
            assert!((store.velocity[i].length() - 1.0).abs() < 1e-5);
            assert_eq!(store.acceleration[i], Vec2::ZERO);
            assert!(store.pinned[i].is_none());
        }
    }

    #[test]
    fn same_rng_state_same_population() {
        let build = || {
            let mut rng = SimRng::new(3);
            AgentStoreBuilder::new(3)
                .group(RoleGroup::new(Role::Follower, 10, 2.5, 10.0))
                .build_scattered(&mut rng, 100.0, 100.0)
                .0
        };
        assert_eq!(build().position, build().position);
    }

    #[test]
    fn ids_with_role_filters() {
        let (store, _) = flock(2, 3);
        let leaders: Vec<_> = store.ids_with_role(Role::Leader).map(|a| a.0).collect();
        assert_eq!(leaders, [0, 1]);
        assert_eq!(store.role_count(Role::Follower), 3);
        assert_eq!(store.role_count(Role::User), 0);
    }
}

#[cfg(test)]
mod kinematics_tests {
    use swarm_core::{AgentId, SwarmError};

    use super::*;

    #[test]
    fn forces_accumulate_until_integration() {
        let (mut store, _) = flock(0, 1);
        let a = AgentId(0);
        store.apply_force(a, Vec2::new(0.1, 0.0));
        store.apply_force(a, Vec2::new(0.0, 0.2));
        assert_eq!(store.acceleration[0], Vec2::new(0.1, 0.2));
        store.integrate(a);
        assert_eq!(store.acceleration[0], Vec2::ZERO);
        assert!((store.velocity[0] - Vec2::new(0.1, 0.2)).length() < 1e-6);
        assert!((store.position[0] - Vec2::new(0.1, 0.2)).length() < 1e-6);
    }

    #[test]
    fn velocity_limited_to_max_speed() {
        let (mut store, _) = flock(0, 1);
        let a = AgentId(0);
        store.velocity[0] = Vec2::new(2.0, 0.0);
        store.apply_force(a, Vec2::new(5.0, 5.0));
        store.integrate(a);
        assert!((store.velocity[0].length() - 2.5).abs() < 1e-5);
        // Direction preserved.
        let expected = Vec2::new(7.0, 5.0).normalize();
        assert!((store.velocity[0].normalize() - expected).length() < 1e-5);
    }

    #[test]
    fn slow_velocity_unchanged() {
        let (mut store, _) = flock(0, 1);
        store.velocity[0] = Vec2::new(1.0, 1.0);
        store.integrate(AgentId(0));
        assert_eq!(store.velocity[0], Vec2::new(1.0, 1.0));
        assert!((store.heading[0] - std::f32::consts::FRAC_PI_4).abs() < 1e-6);
    }

    #[test]
    fn wrap_past_right_edge_to_zero() {
        let (mut store, _) = flock(0, 1);
        let a = AgentId(0);
        store.position[0] = Vec2::new(700.0 + 0.01, 200.0);
        store.integrate(a);
        store.wrap_edges(a, 700.0, 450.0);
        assert_eq!(store.position[0], Vec2::new(0.0, 200.0));
    }

    #[test]
    fn wrap_axes_independent() {
        let (mut store, _) = flock(0, 1);
        let a = AgentId(0);
        store.position[0] = Vec2::new(-0.5, 451.0);
        store.wrap_edges(a, 700.0, 450.0);
        assert_eq!(store.position[0], Vec2::new(700.0, 0.0));
    }

    #[test]
    fn exact_boundaries_not_wrapped() {
        let (mut store, _) = flock(0, 1);
        let a = AgentId(0);
        store.position[0] = Vec2::new(700.0, 0.0);
        store.wrap_edges(a, 700.0, 450.0);
        assert_eq!(store.position[0], Vec2::new(700.0, 0.0));
        store.position[0] = Vec2::new(0.0, 450.0);
        store.wrap_edges(a, 700.0, 450.0);
        assert_eq!(store.position[0], Vec2::new(0.0, 450.0));
    }

    #[test]
    fn pinned_agent_ignores_forces() {
        let (mut store, _) = flock(1, 0);
        let a = AgentId(0);
        store.velocity[0] = Vec2::new(1.0, 0.0);
        store.heading[0] = 0.3;
        store.pin(a, Vec2::new(100.0, 100.0)).unwrap();
        for _ in 0..10 {
            store.apply_force(a, Vec2::new(3.0, 3.0));
            store.integrate(a);
        }
        assert_eq!(store.position[0], Vec2::new(100.0, 100.0));
        assert_eq!(store.velocity[0], Vec2::ZERO);
        assert_eq!(store.acceleration[0], Vec2::ZERO);
        assert_eq!(store.heading[0], 0.3);
    }

    #[test]
    fn unpin_reports_release_point() {
        let (mut store, _) = flock(1, 0);
        let a = AgentId(0);
        assert_eq!(store.unpin(a).unwrap(), None);
        store.pin(a, Vec2::new(5.0, 6.0)).unwrap();
        assert_eq!(store.unpin(a).unwrap(), Some(Vec2::new(5.0, 6.0)));
        assert!(!store.is_pinned(a));
    }

    #[test]
    fn pin_unknown_agent_errors() {
        let (mut store, _) = flock(1, 0);
        let err = store.pin(AgentId(9), Vec2::ZERO).unwrap_err();
        assert!(matches!(err, SwarmError::AgentNotFound(AgentId(9))));
    }

    #[test]
    fn hit_test_only_draggable_inside_radius() {
        let (mut store, _) = flock(1, 1);
        store.position[0] = Vec2::new(50.0, 50.0); // leader, radius 9
        store.position[1] = Vec2::new(200.0, 200.0); // follower
        assert_eq!(store.hit_test(Vec2::new(55.0, 50.0)), Some(AgentId(0)));
        assert_eq!(store.hit_test(Vec2::new(59.0, 50.0)), None);
        assert_eq!(store.hit_test(Vec2::new(200.0, 200.0)), None);
    }
}
