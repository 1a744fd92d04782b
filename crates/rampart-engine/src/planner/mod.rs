//! Turn planners: combat actions and diplomacy proposals.
//!
//! Both planners are pure functions of the snapshot and the current strategy
//! weights. Selection scans are explicit first-match-wins loops over the
//! enemy list order, so tie-breaks are stable and reproducible.

pub mod combat;
pub mod diplomacy;

pub use combat::{TurnPlan, plan_turn};
pub use diplomacy::negotiate;
