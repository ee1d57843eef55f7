//! `swarm-social`: the static social graph of the rumor model.
//!
//! # Crate layout
//!
//! | Module    | Contents                                      |
//! |-----------|-----------------------------------------------|
//! | [`graph`] | `SocialGraph`, `SocialGraphBuilder`           |
//!
//! An edge means two persons are always in contact, however far apart they
//! are.  The graph is built once per population and never mutated.

pub mod graph;


pub use graph::{SocialGraph, SocialGraphBuilder};
