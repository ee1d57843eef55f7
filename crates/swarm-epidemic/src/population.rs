//! Person storage: `Population` (SoA data), `PersonRngs`, and the builder.

use swarm_core::{AgentRng, PersonId, RumorConfig, SimRng, SwarmError, SwarmResult, Vec2, WorldConfig};

use crate::state::{RumorCounts, RumorState};

// ── PersonRngs ────────────────────────────────────────────────────────────────

/// Per-person deterministic RNG state, kept apart from [`Population`] so the
/// spread-decision phase can read the population while each spreader draws
/// from its own stream.
pub struct PersonRngs {
    pub inner: Vec<AgentRng>,
}

impl PersonRngs {
    pub fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count).map(|i| AgentRng::new(global_seed, i)).collect();
        Self { inner }
    }

    #[inline]
    pub fn get_mut(&mut self, person: PersonId) -> &mut AgentRng {
        &mut self.inner[person.index()]
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── Population ────────────────────────────────────────────────────────────────

/// Structure-of-Arrays storage for every person in the rumor scenario.
///
/// `PersonId` is the index into all `Vec`s.  `timer` is only meaningful while
/// `state == Spreader`; it keeps its last value afterwards.
pub struct Population {
    pub count: usize,

    pub position: Vec<Vec2>,
    pub state:    Vec<RumorState>,
    pub timer:    Vec<i32>,

    /// Receptiveness multiplier in `interest_range`.
    pub interest:      Vec<f32>,
    /// Per-contact transmission probability in `spread_chance_range`.
    pub spread_chance: Vec<f32>,
    /// Proximity radius in `spread_range_range`.
    pub spread_range:  Vec<f32>,

    /// External position while dragged.
    pub pinned: Vec<Option<Vec2>>,

    /// Shared drawing/clamp radius.
    pub radius: f32,
}

impl Population {
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn person_ids(&self) -> impl Iterator<Item = PersonId> + '_ {
        (0..self.count as u32).map(PersonId)
    }

    /// Current spreaders, ascending.
    pub fn spreaders(&self) -> impl Iterator<Item = PersonId> + '_ {
        self.person_ids().filter(move |p| self.state[p.index()] == RumorState::Spreader)
    }

    pub fn check(&self, person: PersonId) -> SwarmResult<()> {
        if person.index() < self.count {
            Ok(())
        } else {
            Err(SwarmError::PersonNotFound(person))
        }
    }

    #[inline]
    pub fn state_of(&self, person: PersonId) -> RumorState {
        self.state[person.index()]
    }

    #[inline]
    pub fn is_pinned(&self, person: PersonId) -> bool {
        self.pinned[person.index()].is_some()
    }

    pub fn counts(&self) -> RumorCounts {
        let mut counts = RumorCounts::default();
        for s in &self.state {
            match s {
                RumorState::Ignorant => counts.ignorant += 1,
                RumorState::Spreader => counts.spreader += 1,
                RumorState::Stifler  => counts.stifler += 1,
            }
        }
        counts
    }

    /// Hold `person` at `position` until [`unpin`](Self::unpin).
    pub fn pin(&mut self, person: PersonId, position: Vec2) -> SwarmResult<()> {
        self.check(person)?;
        self.pinned[person.index()] = Some(position);
        self.position[person.index()] = position;
        Ok(())
    }

    /// Release `person`; returns where it was held, or `None` if it was free.
    pub fn unpin(&mut self, person: PersonId) -> SwarmResult<Option<Vec2>> {
        self.check(person)?;
        Ok(self.pinned[person.index()].take())
    }

    /// Lowest-id person whose circle contains `point`.
    pub fn hit_test(&self, point: Vec2) -> Option<PersonId> {
        self.person_ids()
            .find(|p| self.position[p.index()].distance(point) < self.radius)
    }

    /// Empty population whose persons share `radius`; fill it with
    /// [`push`](Self::push).
    pub fn new(radius: f32) -> Self {
        Self::with_capacity(0, radius)
    }

    fn with_capacity(n: usize, radius: f32) -> Self {
        Self {
            count: 0,
            position: Vec::with_capacity(n),
            state: Vec::with_capacity(n),
            timer: Vec::with_capacity(n),
            interest: Vec::with_capacity(n),
            spread_chance: Vec::with_capacity(n),
            spread_range: Vec::with_capacity(n),
            pinned: Vec::with_capacity(n),
            radius,
        }
    }

    /// Append an ignorant person.
    pub fn push(&mut self, position: Vec2, interest: f32, spread_chance: f32, spread_range: f32) -> PersonId {
        let id = PersonId(self.count as u32);
        self.position.push(position);
        self.state.push(RumorState::Ignorant);
        self.timer.push(0);
        self.interest.push(interest);
        self.spread_chance.push(spread_chance);
        self.spread_range.push(spread_range);
        self.pinned.push(None);
        self.count += 1;
        id
    }
}

// ── PopulationBuilder ─────────────────────────────────────────────────────────

/// Builds a [`Population`] whose persons are scattered uniformly in the world
/// with traits drawn from the configured ranges.
pub struct PopulationBuilder<'a> {
    cfg:         &'a RumorConfig,
    person_seed: u64,
}

impl<'a> PopulationBuilder<'a> {
    pub fn new(cfg: &'a RumorConfig, person_seed: u64) -> Self {
        Self { cfg, person_seed }
    }

    /// Draw every person from `rng`.  Per person the order is position x,
    /// position y, interest, spread chance, spread range.
    pub fn build_scattered(self, rng: &mut SimRng, world: &WorldConfig) -> (Population, PersonRngs) {
        let cfg = self.cfg;
        let mut pop = Population::with_capacity(cfg.population, cfg.person_radius);
        for _ in 0..cfg.population {
            let position = rng.point_in(world.width, world.height);
            let interest = rng.uniform(cfg.interest_range.0, cfg.interest_range.1);
            let chance = rng.uniform(cfg.spread_chance_range.0, cfg.spread_chance_range.1);
            let range = rng.uniform(cfg.spread_range_range.0, cfg.spread_range_range.1);
            pop.push(position, interest, chance, range);
        }
        let rngs = PersonRngs::new(pop.count, self.person_seed);
        (pop, rngs)
    }
}
