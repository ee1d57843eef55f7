//! `swarm-sim`: tick drivers for the swarm engine.
//!
//! # Drivers
//!
//! | Driver       | Scenarios                              |
//! |--------------|----------------------------------------|
//! | [`SwarmSim`] | leader/follower flocking, social influence |
//! | [`RumorSim`] | rumor propagation over a social graph  |
//!
//! Both follow the same lifecycle: build → `tick()` / `run_ticks()` →
//! `reset()`.  Decisions of a tick read only the state left by the previous
//! tick; writes are applied afterwards in ascending id order.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | Runs steering and spread decisions on Rayon's pool.     |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use swarm_core::{FlockConfig, WorldConfig};
//! use swarm_sim::{NoopObserver, SwarmSim};
//!
//! let mut sim = SwarmSim::leader_follow(WorldConfig::default(), &FlockConfig::default())?;
//! sim.run_ticks(600, &mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod rumor;
pub mod swarm;


pub use builder::SwarmSimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use rumor::{PersonView, RumorSim, RumorTick};
pub use swarm::{AgentView, SwarmSim};
