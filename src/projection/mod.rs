//! Projection engine for treasury depletion under hedged and unhedged
//! cost regimes

mod rates;
mod engine;
mod results;

pub use rates::{RatePaths, linspace};
pub use engine::{ProjectionEngine, monthly_cost, cumulative, treasury_remaining, runway};
pub use results::{MonthRow, ProjectionResult, ProjectionSummary};
