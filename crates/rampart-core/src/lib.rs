//! # rampart-core
//!
//! Foundation types and errors for the Rampart tower-conquest bot.
//!
//! This crate provides the shared vocabulary the engine and server crates
//! depend on:
//!
//! - **Snapshots**: [`snapshot::GameSnapshot`], the per-turn game state the
//!   arena delivers, with nested diplomacy and attack-history entries
//! - **Actions**: [`action::CombatAction`], the upgrade / armor / attack outputs
//! - **Proposals**: [`action::DiplomacyProposal`], a suggested ally + target
//! - **Errors**: [`errors::StoreError`] for persistence backends
//!
//! All wire types carry camelCase serde names matching the arena protocol.
//! The engine never mutates a snapshot; it is an immutable input per turn.
//!
//! ## Crate Position
//!
//! Foundation crate. Depended on by `rampart-engine` and `rampart-server`.

#![deny(unsafe_code)]

pub mod action;
pub mod errors;
pub mod snapshot;

pub use action::{CombatAction, DiplomacyProposal};
pub use errors::StoreError;
pub use snapshot::GameSnapshot;
