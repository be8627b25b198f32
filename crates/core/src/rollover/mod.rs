//! Rollover policies: pure decision logic from "today" to an ordered
//! plan of partition operations.

mod plan;
mod policy;

pub use plan::{plan_year, plan_year_month, year_phase, PlanStep, RolloverPlan, YearPhase};
pub use policy::RolloverPolicy;
