//! # rampart-engine
//!
//! The decision-and-adaptation core of the Rampart bot.
//!
//! Per turn: the [`engine::Engine`] tracks the game session, assesses
//! [`phase`] and [`threat`], and runs the [`planner`] against the current
//! [`weights::StrategyWeights`]. When a game terminates (our hp reaches zero,
//! or the last enemy tower falls) the [`learning`] step consumes the session's
//! decision history, nudges the weights, folds the outcome into the
//! [`knowledge::KnowledgeBase`], and persists it.
//!
//! Nothing in this crate performs I/O except the knowledge store, and store
//! failures never escape the engine; the worst outcome of any turn is an
//! empty action list.
//!
//! ## Crate Position
//!
//! Domain crate. Depends on `rampart-core`; consumed by `rampart-server`.

#![deny(unsafe_code)]

pub mod engine;
pub mod knowledge;
pub mod learning;
pub mod phase;
pub mod planner;
pub mod session;
pub mod threat;
pub mod weights;

pub use engine::{Engine, EngineStatus};
pub use knowledge::{JsonFileStore, KnowledgeBase, KnowledgeStore, MemoryStore};
pub use weights::StrategyWeights;
