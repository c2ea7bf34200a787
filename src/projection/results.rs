//! Projection output structures

use serde::{Deserialize, Serialize};

/// A single row of projection output for one forecast month
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthRow {
    /// Forecast month, 1-based
    pub month: u32,

    // Market rates for the month
    pub usd_pln: f64,
    pub eur_usd: f64,

    // Monthly costs (USD)
    pub cost_unhedged: f64,
    pub cost_hedged: f64,
    pub hedging_execution_cost: f64,

    // Running totals; the hedged cumulative includes execution cost
    pub cumulative_unhedged: f64,
    pub cumulative_hedged: f64,

    // Treasury remaining under each regime; negative once depleted
    pub treasury_unhedged: f64,
    pub treasury_hedged: f64,
}

/// Complete projection result for one parameter set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Monthly detail rows, one per forecast month
    pub rows: Vec<MonthRow>,

    /// Months until depletion without hedging (fractional)
    pub runway_unhedged: f64,

    /// Months until depletion with hedging, including execution-cost drag
    pub runway_hedged: f64,
}

impl ProjectionResult {
    /// Summary metrics over the full horizon
    pub fn summary(&self) -> ProjectionSummary {
        let total_hedging_cost: f64 =
            self.rows.iter().map(|r| r.hedging_execution_cost).sum();

        let (final_cum_unhedged, final_cum_hedged) = self
            .rows
            .last()
            .map(|r| (r.cumulative_unhedged, r.cumulative_hedged))
            .unwrap_or((0.0, 0.0));

        // Total savings compares the two all-in cumulative cost paths;
        // gross savings excludes what was spent executing the hedge.
        let total_savings = final_cum_unhedged - final_cum_hedged;
        let gross_savings = total_savings + total_hedging_cost;

        ProjectionSummary {
            total_months: self.rows.len() as u32,
            runway_unhedged: self.runway_unhedged,
            runway_hedged: self.runway_hedged,
            runway_delta: self.runway_hedged - self.runway_unhedged,
            total_hedging_cost,
            gross_savings,
            net_savings: total_savings,
            hedging_worthwhile: gross_savings > total_hedging_cost,
        }
    }
}

/// Headline metrics for a projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub total_months: u32,
    pub runway_unhedged: f64,
    pub runway_hedged: f64,
    /// Runway extension (positive) or shortening (negative) from hedging
    pub runway_delta: f64,
    /// Total spent executing the hedge over the horizon
    pub total_hedging_cost: f64,
    /// Cost avoided by hedging, before execution costs
    pub gross_savings: f64,
    /// Cost avoided by hedging, net of execution costs
    pub net_savings: f64,
    /// Whether gross savings exceed the execution cost
    pub hedging_worthwhile: bool,
}
