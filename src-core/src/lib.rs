//! Goal planning and investment allocation engine.
//!
//! Converts user-declared financial goals into required yearly investment
//! amounts, splits them across term-based allocation tables and named
//! instruments, and rolls the results up into the summaries a display layer
//! consumes. Deterministic arithmetic over user-supplied assumptions; no
//! market data, no persistence.

pub mod allocation;
pub mod errors;
pub mod goals;
pub mod planner;
pub mod planning;

pub use allocation::{AllocationEntry, AssetClass, AssetSplit, Instrument, TermKeyed};
pub use errors::{Error, Result};
pub use goals::{Goal, GoalSelector, NewGoal, TermPolicy, TermType};
pub use planner::{PlannerAction, PlannerData, PlannerStore};
pub use planning::{GoalWiseInvestmentSuggestions, InvestmentSuggestion, PlanningService, TermProgress};
