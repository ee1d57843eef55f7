//! Unit tests for swarm-epidemic.

#[cfg(test)]
mod population_tests {
    use swarm_core::{PersonId, RumorConfig, SimRng, SwarmError, Vec2, WorldConfig};

    use crate::{Population, PopulationBuilder, RumorState};

    #[test]
    fn scattered_traits_within_ranges() {
        let cfg = RumorConfig::default();
        let world = WorldConfig::default();
        let (pop, rngs) = PopulationBuilder::new(&cfg, 1).build_scattered(&mut SimRng::new(3), &world);
        assert_eq!(pop.count, 100);
        assert_eq!(rngs.len(), 100);
        for i in 0..pop.count {
            assert_eq!(pop.state[i], RumorState::Ignorant);
            assert!((0.5..1.0).contains(&pop.interest[i]));
            assert!((0.05..0.15).contains(&pop.spread_chance[i]));
            assert!((15.0..25.0).contains(&pop.spread_range[i]));
            let p = pop.position[i];
            assert!(p.x >= 0.0 && p.x < world.width);
            assert!(p.y >= 0.0 && p.y < world.height);
        }
    }

    #[test]
    fn counts_track_states() {
        let mut pop = Population::new(8.0);
        for _ in 0..4 {
            pop.push(Vec2::ZERO, 1.0, 0.1, 20.0);
        }
        pop.state[1] = RumorState::Spreader;
        pop.state[3] = RumorState::Stifler;
        let c = pop.counts();
        assert_eq!((c.ignorant, c.spreader, c.stifler), (2, 1, 1));
        assert_eq!(c.total(), 4);
        assert!(!c.is_settled());
    }

    #[test]
    fn pin_unpin_and_hit_test() {
        let mut pop = Population::new(8.0);
        let a = pop.push(Vec2::new(50.0, 50.0), 1.0, 0.1, 20.0);
        let b = pop.push(Vec2::new(200.0, 50.0), 1.0, 0.1, 20.0);
        assert_eq!(pop.hit_test(Vec2::new(205.0, 52.0)), Some(b));
        assert_eq!(pop.hit_test(Vec2::new(120.0, 50.0)), None);

        pop.pin(a, Vec2::new(10.0, 10.0)).unwrap();
        assert!(pop.is_pinned(a));
        assert_eq!(pop.position[0], Vec2::new(10.0, 10.0));
        assert_eq!(pop.unpin(a).unwrap(), Some(Vec2::new(10.0, 10.0)));
        assert_eq!(pop.unpin(a).unwrap(), None);

        assert!(matches!(pop.pin(PersonId(9), Vec2::ZERO), Err(SwarmError::PersonNotFound(_))));
    }
}

#[cfg(test)]
mod engine_tests {
    use swarm_core::{PersonId, RumorConfig, SimRng, Tick, Vec2, WorldConfig};
    use swarm_social::{SocialGraph, SocialGraphBuilder};

    use crate::{PersonRngs, Population, RumorEngine, RumorState, SpreadDecision};

    fn engine() -> RumorEngine {
        RumorEngine::new(&RumorConfig::default(), &WorldConfig::default())
    }

    fn hand_placed(points: &[(f32, f32)], interest: f32, chance: f32, range: f32) -> (Population, PersonRngs) {
        let mut pop = Population::new(8.0);
        for &(x, y) in points {
            pop.push(Vec2::new(x, y), interest, chance, range);
        }
        let rngs = PersonRngs::new(pop.count, 11);
        (pop, rngs)
    }

    #[test]
    fn lifetime_within_jitter() {
        let e = engine();
        let (_, mut rngs) = hand_placed(&[(0.0, 0.0)], 1.0, 1.0, 20.0);
        for _ in 0..200 {
            let t = e.draw_lifetime(rngs.get_mut(PersonId(0)));
            assert!((500..=700).contains(&t));
        }
    }

    #[test]
    fn seeding_makes_exactly_one_spreader() {
        let e = engine();
        let (mut pop, mut rngs) = hand_placed(&[(10.0, 10.0); 20], 1.0, 0.1, 20.0);
        let seeded = e.seed(&mut pop, &mut rngs, &mut SimRng::new(5)).unwrap();
        assert_eq!(pop.counts().spreader, 1);
        assert_eq!(pop.state_of(seeded), RumorState::Spreader);
        assert!((500..=700).contains(&pop.timer[seeded.index()]));
    }

    #[test]
    fn seeding_empty_population_is_none() {
        let e = engine();
        let mut pop = Population::new(8.0);
        let mut rngs = PersonRngs::new(0, 1);
        assert!(e.seed(&mut pop, &mut rngs, &mut SimRng::new(5)).is_none());
    }

    #[test]
    fn diffusion_stays_inside_clamp() {
        let e = engine();
        let (mut pop, mut rngs) = hand_placed(&[(8.0, 8.0), (692.0, 442.0), (350.0, 225.0)], 1.0, 0.1, 20.0);
        pop.state[2] = RumorState::Spreader;
        for _ in 0..500 {
            e.diffuse(&mut pop, &mut rngs);
            for p in &pop.position {
                assert!(p.x >= 8.0 && p.x <= 692.0);
                assert!(p.y >= 8.0 && p.y <= 442.0);
            }
        }
    }

    #[test]
    fn diffusion_step_bounded_by_state() {
        let e = engine();
        let (mut pop, mut rngs) = hand_placed(&[(300.0, 200.0), (400.0, 200.0)], 1.0, 0.1, 20.0);
        pop.state[1] = RumorState::Spreader;
        let before = pop.position.clone();
        e.diffuse(&mut pop, &mut rngs);
        let d0 = pop.position[0] - before[0];
        let d1 = pop.position[1] - before[1];
        assert!(d0.x.abs() <= 1.5 && d0.y.abs() <= 1.5);
        assert!(d1.x.abs() <= 2.0 && d1.y.abs() <= 2.0);
    }

    #[test]
    fn pinned_person_does_not_diffuse() {
        let e = engine();
        let (mut pop, mut rngs) = hand_placed(&[(300.0, 200.0)], 1.0, 0.1, 20.0);
        pop.pin(PersonId(0), Vec2::new(100.0, 100.0)).unwrap();
        for _ in 0..10 {
            e.diffuse(&mut pop, &mut rngs);
        }
        assert_eq!(pop.position[0], Vec2::new(100.0, 100.0));
    }

    #[test]
    fn spreader_expires_after_timer() {
        let e = engine();
        let (mut pop, _) = hand_placed(&[(10.0, 10.0)], 1.0, 0.1, 20.0);
        pop.state[0] = RumorState::Spreader;
        pop.timer[0] = 3;
        assert!(e.advance_timers(&mut pop, Tick(1)).is_empty());
        assert!(e.advance_timers(&mut pop, Tick(2)).is_empty());
        assert_eq!(e.advance_timers(&mut pop, Tick(3)), vec![PersonId(0)]);
        assert_eq!(pop.state[0], RumorState::Stifler);
        // Stifler timers are left alone.
        assert!(e.advance_timers(&mut pop, Tick(4)).is_empty());
        assert_eq!(pop.timer[0], 0);
    }

    #[test]
    fn certain_spread_within_range() {
        let e = engine();
        let (mut pop, mut rngs) = hand_placed(&[(100.0, 100.0), (110.0, 100.0)], 1.0, 1.0, 20.0);
        pop.state[0] = RumorState::Spreader;
        pop.timer[0] = 600;
        let graph = SocialGraph::empty(2);
        let decisions = e.decide(&pop, &graph, &mut rngs);
        assert_eq!(decisions, vec![SpreadDecision::Infect { source: PersonId(0), target: PersonId(1) }]);

        let report = e.commit(&mut pop, &mut rngs, &decisions, Tick(7));
        assert_eq!(pop.state[1], RumorState::Spreader);
        assert_eq!(report.infections.len(), 1);
        let ev = report.infections[0];
        assert_eq!((ev.source, ev.target, ev.tick), (PersonId(0), PersonId(1), Tick(7)));
        assert_eq!(ev.from, Vec2::new(100.0, 100.0));
        assert_eq!(ev.to, Vec2::new(110.0, 100.0));
    }

    #[test]
    fn no_contact_beyond_range_without_edge() {
        let e = engine();
        let (mut pop, mut rngs) = hand_placed(&[(100.0, 100.0), (400.0, 100.0)], 1.0, 1.0, 20.0);
        pop.state[0] = RumorState::Spreader;
        let graph = SocialGraph::empty(2);
        assert!(e.decide(&pop, &graph, &mut rngs).is_empty());
    }

    #[test]
    fn social_edge_reaches_beyond_range() {
        let e = engine();
        let (mut pop, mut rngs) = hand_placed(&[(100.0, 100.0), (600.0, 400.0)], 1.0, 1.0, 20.0);
        pop.state[0] = RumorState::Spreader;
        let mut b = SocialGraphBuilder::new(2);
        b.connect(PersonId(0), PersonId(1)).unwrap();
        let graph = b.build();
        let decisions = e.decide(&pop, &graph, &mut rngs);
        assert_eq!(decisions.len(), 1);
    }

    #[test]
    fn zero_interest_never_infects() {
        let e = engine();
        let (mut pop, mut rngs) = hand_placed(&[(100.0, 100.0), (105.0, 100.0)], 0.0, 1.0, 20.0);
        pop.state[0] = RumorState::Spreader;
        let graph = SocialGraph::empty(2);
        for _ in 0..100 {
            assert!(e.decide(&pop, &graph, &mut rngs).is_empty());
        }
    }

    #[test]
    fn target_infected_once_per_commit() {
        let e = engine();
        let (mut pop, mut rngs) = hand_placed(&[(100.0, 100.0), (110.0, 100.0), (105.0, 100.0)], 1.0, 1.0, 20.0);
        pop.state[0] = RumorState::Spreader;
        pop.state[1] = RumorState::Spreader;
        let decisions = [
            SpreadDecision::Infect { source: PersonId(0), target: PersonId(2) },
            SpreadDecision::Infect { source: PersonId(1), target: PersonId(2) },
        ];
        let report = e.commit(&mut pop, &mut rngs, &decisions, Tick(1));
        assert_eq!(report.infections.len(), 1);
        assert_eq!(report.infections[0].source, PersonId(0));
    }

    #[test]
    fn stifling_only_hits_live_spreaders() {
        let e = engine();
        let (mut pop, mut rngs) = hand_placed(&[(100.0, 100.0), (110.0, 100.0)], 1.0, 1.0, 20.0);
        pop.state[0] = RumorState::Spreader;
        pop.state[1] = RumorState::Spreader;
        let decisions = [
            SpreadDecision::Stifle { source: PersonId(0), other: PersonId(1), victim: PersonId(1) },
            SpreadDecision::Stifle { source: PersonId(1), other: PersonId(0), victim: PersonId(1) },
        ];
        let report = e.commit(&mut pop, &mut rngs, &decisions, Tick(1));
        assert_eq!(report.stifled, vec![PersonId(1)]);
        assert_eq!(pop.state[0], RumorState::Spreader);
        assert_eq!(pop.state[1], RumorState::Stifler);
    }

    #[test]
    fn certain_stifling_picks_one_of_the_pair() {
        let mut e = engine();
        e.stifling_chance = 1.0;
        let (mut pop, mut rngs) = hand_placed(&[(100.0, 100.0), (110.0, 100.0)], 1.0, 1.0, 20.0);
        pop.state[0] = RumorState::Spreader;
        pop.state[1] = RumorState::Spreader;
        let graph = SocialGraph::empty(2);
        let decisions = e.decide(&pop, &graph, &mut rngs);
        // Both spreaders see each other.
        assert_eq!(decisions.len(), 2);
        e.commit(&mut pop, &mut rngs, &decisions, Tick(1));
        let c = pop.counts();
        assert!(c.stifler >= 1);
        assert_eq!(c.ignorant, 0);
    }

    #[test]
    fn stiflers_are_ignored_by_spreaders() {
        let e = engine();
        let (mut pop, mut rngs) = hand_placed(&[(100.0, 100.0), (105.0, 100.0)], 1.0, 1.0, 20.0);
        pop.state[0] = RumorState::Spreader;
        pop.state[1] = RumorState::Stifler;
        let graph = SocialGraph::empty(2);
        assert!(e.decide(&pop, &graph, &mut rngs).is_empty());
    }
}
