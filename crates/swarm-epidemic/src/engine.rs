//! `RumorEngine`: the per-tick phases of the rumor scenario.
//!
//! The engine holds only tuning constants; all mutable state lives in the
//! caller's [`Population`] and [`PersonRngs`].  See the crate docs for the
//! phase order.

use swarm_core::{AgentRng, PersonId, RumorConfig, SimRng, Tick, Vec2, WorldConfig};
use swarm_social::SocialGraph;
use tracing::debug;

use crate::event::{InfectionEvent, SpreadDecision, SpreadReport};
use crate::population::{PersonRngs, Population};
use crate::state::RumorState;

/// Tuning constants for diffusion, spreader lifetime and stifling.
#[derive(Clone, Debug, PartialEq)]
pub struct RumorEngine {
    pub spreader_lifetime: i32,
    pub lifetime_jitter:   i32,
    /// Probability that a spreader/spreader contact stifles one of them.
    pub stifling_chance:   f64,
    pub spreader_jitter:   f32,
    pub idle_jitter:       f32,
    pub width:             f32,
    pub height:            f32,
}

impl RumorEngine {
    pub fn new(cfg: &RumorConfig, world: &WorldConfig) -> Self {
        Self {
            spreader_lifetime: cfg.spreader_lifetime,
            lifetime_jitter: cfg.lifetime_jitter,
            stifling_chance: cfg.stifling_chance,
            spreader_jitter: cfg.spreader_jitter,
            idle_jitter: cfg.idle_jitter,
            width: world.width,
            height: world.height,
        }
    }

    /// Fresh spreader countdown: `lifetime + U{-jitter..=jitter}`.
    pub fn draw_lifetime(&self, rng: &mut AgentRng) -> i32 {
        let j = self.lifetime_jitter.max(0);
        self.spreader_lifetime + rng.gen_range(-j..=j)
    }

    /// Turn `person` into a spreader with a fresh timer.  Returns `false`
    /// (and changes nothing) unless the person is currently ignorant.
    pub fn make_spreader(&self, pop: &mut Population, rngs: &mut PersonRngs, person: PersonId) -> bool {
        let i = person.index();
        if pop.state[i] != RumorState::Ignorant {
            return false;
        }
        pop.state[i] = RumorState::Spreader;
        pop.timer[i] = self.draw_lifetime(rngs.get_mut(person));
        true
    }

    /// Pick one person uniformly and make them the initial spreader.
    pub fn seed(&self, pop: &mut Population, rngs: &mut PersonRngs, rng: &mut SimRng) -> Option<PersonId> {
        if pop.is_empty() {
            return None;
        }
        let person = PersonId(rng.gen_range(0..pop.count as u32));
        self.make_spreader(pop, rngs, person);
        debug!(%person, timer = pop.timer[person.index()], "seeded spreader");
        Some(person)
    }

    // ── Phase 1: movement ─────────────────────────────────────────────────

    /// Jitter every unpinned person and clamp them inside
    /// `[r, w − r] × [r, h − r]`.  Pinned persons snap to their pin.
    pub fn diffuse(&self, pop: &mut Population, rngs: &mut PersonRngs) {
        let r = pop.radius;
        let lo = Vec2::splat(r);
        let hi = Vec2::new(self.width - r, self.height - r);
        for i in 0..pop.count {
            if let Some(pin) = pop.pinned[i] {
                pop.position[i] = pin;
                continue;
            }
            let half = match pop.state[i] {
                RumorState::Spreader => self.spreader_jitter,
                _ => self.idle_jitter,
            };
            let rng = &mut rngs.inner[i];
            let step = Vec2::new(rng.jitter(half), rng.jitter(half));
            pop.position[i] = (pop.position[i] + step).clamp(lo, hi);
        }
    }

    // ── Phase 2: timers ───────────────────────────────────────────────────

    /// Count every spreader down by one; those reaching zero become stiflers.
    /// Returns the newly stifled persons, ascending.
    pub fn advance_timers(&self, pop: &mut Population, tick: Tick) -> Vec<PersonId> {
        let mut expired = Vec::new();
        for i in 0..pop.count {
            if pop.state[i] != RumorState::Spreader {
                continue;
            }
            pop.timer[i] -= 1;
            if pop.timer[i] <= 0 {
                pop.state[i] = RumorState::Stifler;
                let person = PersonId(i as u32);
                debug!(%tick, %person, "spreader lifetime over, now stifler");
                expired.push(person);
            }
        }
        expired
    }

    // ── Phase 3: decide ───────────────────────────────────────────────────

    /// Contact decisions of every current spreader, ascending by spreader
    /// and then by other person.  Reads `pop` only.
    pub fn decide(&self, pop: &Population, graph: &SocialGraph, rngs: &mut PersonRngs) -> Vec<SpreadDecision> {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            let per_spreader: Vec<Vec<SpreadDecision>> = rngs
                .inner
                .par_iter_mut()
                .enumerate()
                .filter(|(i, _)| pop.state[*i] == RumorState::Spreader)
                .map(|(i, rng)| self.decide_for(PersonId(i as u32), pop, graph, rng))
                .collect();
            per_spreader.into_iter().flatten().collect()
        }

        #[cfg(not(feature = "parallel"))]
        {
            let mut out = Vec::new();
            for source in pop.spreaders() {
                out.extend(self.decide_for(source, pop, graph, rngs.get_mut(source)));
            }
            out
        }
    }

    /// One spreader against everyone else.  Contact is active within the
    /// spreader's range or along a social edge.
    fn decide_for(
        &self,
        source: PersonId,
        pop: &Population,
        graph: &SocialGraph,
        rng: &mut AgentRng,
    ) -> Vec<SpreadDecision> {
        let s = source.index();
        let origin = pop.position[s];
        let range = pop.spread_range[s];
        let chance = pop.spread_chance[s];

        let mut out = Vec::new();
        for other in pop.person_ids() {
            if other == source {
                continue;
            }
            let o = other.index();
            let active = origin.distance(pop.position[o]) < range || graph.are_connected(source, other);
            if !active {
                continue;
            }
            match pop.state[o] {
                RumorState::Ignorant => {
                    let p = f64::from(chance * pop.interest[o]);
                    if rng.gen_bool(p) {
                        out.push(SpreadDecision::Infect { source, target: other });
                    }
                }
                RumorState::Spreader => {
                    if rng.gen_bool(self.stifling_chance) {
                        let victim = if rng.gen_bool(0.5) { source } else { other };
                        out.push(SpreadDecision::Stifle { source, other, victim });
                    }
                }
                RumorState::Stifler => {}
            }
        }
        out
    }

    // ── Phase 4: commit ───────────────────────────────────────────────────

    /// Apply `decisions` in order.  Infections of persons that are no longer
    /// ignorant and stiflings of persons that are no longer spreaders are
    /// dropped.
    pub fn commit(
        &self,
        pop: &mut Population,
        rngs: &mut PersonRngs,
        decisions: &[SpreadDecision],
        tick: Tick,
    ) -> SpreadReport {
        let mut report = SpreadReport::default();
        for decision in decisions {
            match *decision {
                SpreadDecision::Infect { source, target } => {
                    if !self.make_spreader(pop, rngs, target) {
                        continue;
                    }
                    let event = InfectionEvent {
                        source,
                        target,
                        from: pop.position[source.index()],
                        to: pop.position[target.index()],
                        tick,
                    };
                    debug!(%tick, %source, %target, "rumor spread");
                    report.infections.push(event);
                }
                SpreadDecision::Stifle { source, other, victim } => {
                    let v = victim.index();
                    if pop.state[v] != RumorState::Spreader {
                        continue;
                    }
                    pop.state[v] = RumorState::Stifler;
                    debug!(%tick, %source, %other, %victim, "stifling encounter");
                    report.stifled.push(victim);
                }
            }
        }
        report
    }
}
