//! `RumorSim`: the tick driver for the rumor-propagation scenario.

use swarm_core::{PersonId, RumorConfig, SimClock, SimRng, Tick, Vec2, WorldConfig};
use swarm_epidemic::{
    InfectionEvent, PersonRngs, Population, PopulationBuilder, RumorCounts, RumorEngine, RumorState,
};
use swarm_social::SocialGraph;
use tracing::info;

use crate::observer::snapshot_due;
use crate::{NoopObserver, SimObserver, SimResult};

/// Read-only copy of one person's observable state.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PersonView {
    pub position:      Vec2,
    pub state:         RumorState,
    pub timer:         i32,
    pub interest:      f32,
    pub spread_chance: f32,
    pub spread_range:  f32,
    pub pinned:        bool,
}

/// What one tick changed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RumorTick {
    pub tick:       Tick,
    /// Spreaders whose timer ran out.
    pub expired:    Vec<PersonId>,
    /// Spreaders silenced by a stifling encounter.
    pub stifled:    Vec<PersonId>,
    pub infections: Vec<InfectionEvent>,
}

/// The rumor simulation runner.
///
/// Per tick: diffuse, count spreader timers down, decide every spreader's
/// contacts against the post-timer snapshot, then commit in ascending
/// spreader order.  Every committed infection is appended to
/// [`events`](Self::events).
pub struct RumorSim {
    pub world:  WorldConfig,
    pub config: RumorConfig,
    pub clock:  SimClock,

    pub people: Population,

    /// Per-person deterministic RNGs, separated for the split-borrow pattern.
    pub rngs: PersonRngs,

    /// Fixed for the lifetime of a run; rebuilt on reset.
    pub graph: SocialGraph,

    pub engine: RumorEngine,

    /// Ticks between `on_people` snapshots; `0` disables them.
    pub snapshot_interval: u64,

    events: Vec<InfectionEvent>,
    seeded: Option<PersonId>,
    rng:    SimRng,
}

impl RumorSim {
    /// Validate the configuration and build population, graph and seed
    /// spreader from `world.seed`.
    pub fn new(world: WorldConfig, config: RumorConfig) -> SimResult<Self> {
        config.validate_in(&world)?;

        let mut rng = SimRng::new(world.seed);
        let engine = RumorEngine::new(&config, &world);
        let (people, rngs, graph, seeded) = Self::populate(&config, &world, &engine, &mut rng);

        info!(
            population = people.count,
            connections = graph.edge_count(),
            seed = world.seed,
            "rumor population built"
        );

        Ok(Self {
            clock: SimClock::new(world.frames_per_second),
            snapshot_interval: world.frames_per_second as u64,
            world,
            config,
            people,
            rngs,
            graph,
            engine,
            events: Vec::new(),
            seeded,
            rng,
        })
    }

    /// Ticks between `on_people` snapshots; `0` disables them.
    pub fn with_snapshot_interval(mut self, ticks: u64) -> Self {
        self.snapshot_interval = ticks;
        self
    }

    /// Draw order: persons, then the social graph, then the seed spreader.
    fn populate(
        config: &RumorConfig,
        world:  &WorldConfig,
        engine: &RumorEngine,
        rng:    &mut SimRng,
    ) -> (Population, PersonRngs, SocialGraph, Option<PersonId>) {
        let person_seed: u64 = rng.random();
        let (mut people, mut rngs) = PopulationBuilder::new(config, person_seed).build_scattered(rng, world);
        let graph = SocialGraph::random(people.count, config.connection_draws(), rng);
        let seeded = engine.seed(&mut people, &mut rngs, rng);
        (people, rngs, graph, seeded)
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Advance one tick.
    pub fn tick(&mut self) -> RumorTick {
        let now = self.clock.current_tick;
        let summary = self.process_tick(now, &mut NoopObserver);
        self.clock.advance();
        self.report();
        summary
    }

    /// Run exactly `n` ticks from the current position, calling observer
    /// hooks at every tick boundary.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            let now = self.clock.current_tick;
            observer.on_tick_start(now);
            self.process_tick(now, observer);
            observer.on_tick_end(now);
            if snapshot_due(now, self.snapshot_interval) {
                observer.on_people(now, &self.people);
            }
            self.clock.advance();
            self.report();
        }
        Ok(())
    }

    /// [`run_ticks`](Self::run_ticks) followed by `on_sim_end`.
    pub fn run<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        self.run_ticks(n, observer)?;
        observer.on_sim_end(self.clock.current_tick);
        Ok(())
    }

    /// Every committed infection since the last reset, in order.
    pub fn events(&self) -> &[InfectionEvent] {
        &self.events
    }

    pub fn counts(&self) -> RumorCounts {
        self.people.counts()
    }

    /// The person seeded as first spreader.
    pub fn seeded(&self) -> Option<PersonId> {
        self.seeded
    }

    /// Drag any person to `position`.  It stops diffusing until released but
    /// keeps spreading and ageing.
    pub fn pin_person(&mut self, person: PersonId, position: Vec2) -> SimResult<()> {
        self.people.pin(person, position)?;
        Ok(())
    }

    pub fn unpin_person(&mut self, person: PersonId) -> SimResult<Option<Vec2>> {
        let released = self.people.unpin(person)?;
        if let Some(p) = released {
            info!(%person, "person released at ({:.1}, {:.1})", p.x, p.y);
        }
        Ok(released)
    }

    pub fn hit_test(&self, point: Vec2) -> Option<PersonId> {
        self.people.hit_test(point)
    }

    pub fn view(&self, person: PersonId) -> SimResult<PersonView> {
        self.people.check(person)?;
        let i = person.index();
        Ok(PersonView {
            position:      self.people.position[i],
            state:         self.people.state[i],
            timer:         self.people.timer[i],
            interest:      self.people.interest[i],
            spread_chance: self.people.spread_chance[i],
            spread_range:  self.people.spread_range[i],
            pinned:        self.people.is_pinned(person),
        })
    }

    /// Social connections of `person`.
    pub fn connections(&self, person: PersonId) -> SimResult<&[PersonId]> {
        self.people.check(person)?;
        Ok(self.graph.neighbors(person))
    }

    /// Fresh population, graph and seed spreader drawn from the driver's
    /// stream; same configuration.  The event log is cleared and the clock
    /// rewound.
    pub fn reset(&mut self) {
        let (people, rngs, graph, seeded) = Self::populate(&self.config, &self.world, &self.engine, &mut self.rng);
        self.people = people;
        self.rngs = rngs;
        self.graph = graph;
        self.seeded = seeded;
        self.events.clear();
        self.clock.rewind();
        info!(
            population = self.people.count,
            connections = self.graph.edge_count(),
            "rumor population reset"
        );
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick<O: SimObserver>(&mut self, now: Tick, observer: &mut O) -> RumorTick {
        // Movement fully precedes contact checks.
        self.engine.diffuse(&mut self.people, &mut self.rngs);

        let expired = self.engine.advance_timers(&mut self.people, now);

        // Decide against the post-timer snapshot, then commit.
        let decisions = self.engine.decide(&self.people, &self.graph, &mut self.rngs);
        let report = self.engine.commit(&mut self.people, &mut self.rngs, &decisions, now);

        for event in &report.infections {
            observer.on_infection(event);
        }
        self.events.extend_from_slice(&report.infections);

        RumorTick {
            tick: now,
            expired,
            stifled: report.stifled,
            infections: report.infections,
        }
    }

    /// Periodic summary, every `report_interval_ticks` completed ticks.
    fn report(&self) {
        let done = self.clock.current_tick;
        if !done.is_every(self.config.report_interval_ticks) {
            return;
        }
        let counts = self.counts();
        info!(
            tick = done.0,
            spread_events = self.events.len(),
            ignorant = counts.ignorant,
            spreader = counts.spreader,
            stifler = counts.stifler,
            "rumor report"
        );
    }
}
