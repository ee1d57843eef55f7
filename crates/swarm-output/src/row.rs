//! Plain data row types written by output backends.

use swarm_agent::AgentStore;
use swarm_core::{Role, Tick};
use swarm_epidemic::{InfectionEvent, Population, RumorState};

/// One kinematic agent at a given tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentSnapshotRow {
    pub agent_id:  u32,
    pub tick:      u64,
    pub role:      Role,
    pub x:         f32,
    pub y:         f32,
    pub vx:        f32,
    pub vy:        f32,
    pub heading:   f32,
    pub alignment: f32,
    pub pinned:    bool,
}

/// One person of the rumor scenario at a given tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PersonSnapshotRow {
    pub person_id: u32,
    pub tick:      u64,
    pub state:     RumorState,
    /// Remaining spreader ticks; stale once the person is a stifler.
    pub timer:     i32,
    pub x:         f32,
    pub y:         f32,
    pub pinned:    bool,
}

/// One committed transmission.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InfectionEventRow {
    pub tick:      u64,
    pub source_id: u32,
    pub target_id: u32,
    pub from_x:    f32,
    pub from_y:    f32,
    pub to_x:      f32,
    pub to_y:      f32,
}

impl AgentSnapshotRow {
    /// Every agent in `agents`, ascending id.
    pub fn collect(tick: Tick, agents: &AgentStore) -> Vec<Self> {
        (0..agents.count)
            .map(|i| {
                let p = agents.position[i];
                let v = agents.velocity[i];
                AgentSnapshotRow {
                    agent_id:  i as u32,
                    tick:      tick.0,
                    role:      agents.role[i],
                    x:         p.x,
                    y:         p.y,
                    vx:        v.x,
                    vy:        v.y,
                    heading:   agents.heading[i],
                    alignment: agents.alignment[i],
                    pinned:    agents.pinned[i].is_some(),
                }
            })
            .collect()
    }
}

impl PersonSnapshotRow {
    /// Every person in `people`, ascending id.
    pub fn collect(tick: Tick, people: &Population) -> Vec<Self> {
        (0..people.count)
            .map(|i| {
                let p = people.position[i];
                PersonSnapshotRow {
                    person_id: i as u32,
                    tick:      tick.0,
                    state:     people.state[i],
                    timer:     people.timer[i],
                    x:         p.x,
                    y:         p.y,
                    pinned:    people.pinned[i].is_some(),
                }
            })
            .collect()
    }
}

impl From<&InfectionEvent> for InfectionEventRow {
    fn from(e: &InfectionEvent) -> Self {
        InfectionEventRow {
            tick:      e.tick.0,
            source_id: e.source.0,
            target_id: e.target.0,
            from_x:    e.from.x,
            from_y:    e.from.y,
            to_x:      e.to.x,
            to_y:      e.to.y,
        }
    }
}
