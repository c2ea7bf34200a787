//! FX Hedging Model - Treasury runway projections under multi-currency costs
//!
//! This library provides:
//! - Market and hedged exchange-rate paths over a 1-24 month horizon
//! - Monthly cost series in the reference currency, with coverage blending
//! - Hedging execution costs (OTC spread plus bank spread on the PLN leg)
//! - Cumulative treasury depletion and fractional-month runway
//! - Static expected-value comparison across named rate scenarios

pub mod params;
pub mod projection;
pub mod scenario;

// Re-export commonly used types
pub use params::{HedgeParams, ParamError, MAX_FORECAST_MONTHS};
pub use projection::{ProjectionEngine, ProjectionResult, ProjectionSummary, MonthRow, RatePaths};
pub use scenario::{RateScenario, ScenarioAnalysis, ExpectedValue, default_scenarios};
