//! Core projection arithmetic: cost series, cumulative treasury depletion
//! and runway

use crate::params::{HedgeParams, ParamError};
use super::rates::RatePaths;
use super::results::{MonthRow, ProjectionResult};

/// Monthly operating cost in USD at the given exchange rates
///
/// PLN costs are bought with USD (divide by USD/PLN), EUR costs are
/// priced in USD (multiply by EUR/USD). Positive rates are a
/// precondition enforced by [`HedgeParams::validate`].
pub fn monthly_cost(usd_pln: f64, eur_usd: f64, pln_costs: f64, eur_costs: f64) -> f64 {
    pln_costs / usd_pln + eur_costs * eur_usd
}

/// Running sum of a cost series, same length as the input
pub fn cumulative(series: &[f64]) -> Vec<f64> {
    series
        .iter()
        .scan(0.0, |acc, &x| {
            *acc += x;
            Some(*acc)
        })
        .collect()
}

/// Treasury remaining after each month's cumulative spend
///
/// Goes negative once the cumulative spend exceeds the treasury.
pub fn treasury_remaining(treasury: f64, cumulative: &[f64]) -> Vec<f64> {
    cumulative.iter().map(|&c| treasury - c).collect()
}

/// Months until the treasury is depleted by the given cost series
///
/// Walks the series subtracting each month's cost. When the balance first
/// reaches zero or below at month `i` (0-based), the result interpolates
/// the fraction of month `i` the remaining balance covered, assuming the
/// cost is spent uniformly across the month. If the balance survives the
/// whole series, the result is exactly the series length.
pub fn runway(treasury: f64, monthly_costs: &[f64]) -> f64 {
    let mut remaining = treasury;
    for (i, &cost) in monthly_costs.iter().enumerate() {
        remaining -= cost;
        if remaining <= 0.0 {
            // Zero cost can only coincide with depletion if the treasury
            // started at or below zero; no fraction of the month was spent.
            if cost == 0.0 {
                return i as f64;
            }
            return i as f64 + (remaining + cost) / cost;
        }
    }
    monthly_costs.len() as f64
}

/// Main projection engine
///
/// Holds a validated parameter set; every method is a pure transformation
/// with no fallible paths.
pub struct ProjectionEngine {
    params: HedgeParams,
}

impl ProjectionEngine {
    /// Validate the parameters and build an engine around them
    ///
    /// This is the single validation boundary; rejected parameters never
    /// reach the arithmetic below.
    pub fn new(params: HedgeParams) -> Result<Self, ParamError> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &HedgeParams {
        &self.params
    }

    /// Run the full projection: rate paths, cost series, cumulative
    /// treasury depletion and runway under both regimes
    pub fn project(&self) -> ProjectionResult {
        let p = &self.params;
        log::debug!(
            "projecting {} months, treasury {:.0}, coverage {:.0}%",
            p.forecast_months,
            p.treasury,
            p.hedge_coverage * 100.0
        );

        let paths = RatePaths::build(p);

        let costs_unhedged = self.unhedged_costs(&paths);
        let costs_hedged = self.hedged_blend_costs(&paths, &costs_unhedged);
        let execution_costs = self.hedging_execution_costs(&paths);

        // The hedged regime pays the blended cost plus the execution cost.
        let costs_hedged_all_in: Vec<f64> = costs_hedged
            .iter()
            .zip(&execution_costs)
            .map(|(c, e)| c + e)
            .collect();

        let cumulative_unhedged = cumulative(&costs_unhedged);
        let cumulative_hedged = cumulative(&costs_hedged_all_in);

        let treasury_unhedged = treasury_remaining(p.treasury, &cumulative_unhedged);
        let treasury_hedged = treasury_remaining(p.treasury, &cumulative_hedged);

        let runway_unhedged = runway(p.treasury, &costs_unhedged);
        let runway_hedged = runway(p.treasury, &costs_hedged_all_in);

        let rows = (0..p.horizon())
            .map(|i| MonthRow {
                month: i as u32 + 1,
                usd_pln: paths.usd_pln_market[i],
                eur_usd: paths.eur_usd_market[i],
                cost_unhedged: costs_unhedged[i],
                cost_hedged: costs_hedged[i],
                hedging_execution_cost: execution_costs[i],
                cumulative_unhedged: cumulative_unhedged[i],
                cumulative_hedged: cumulative_hedged[i],
                treasury_unhedged: treasury_unhedged[i],
                treasury_hedged: treasury_hedged[i],
            })
            .collect();

        ProjectionResult {
            rows,
            runway_unhedged,
            runway_hedged,
        }
    }

    /// Monthly costs at the drifting market rates
    fn unhedged_costs(&self, paths: &RatePaths) -> Vec<f64> {
        let p = &self.params;
        paths
            .usd_pln_market
            .iter()
            .zip(&paths.eur_usd_market)
            .map(|(&usd_pln, &eur_usd)| {
                monthly_cost(usd_pln, eur_usd, p.monthly_pln_costs, p.monthly_eur_costs)
            })
            .collect()
    }

    /// Monthly costs at the frozen hedge rates, before blending
    fn pure_hedged_costs(&self, paths: &RatePaths) -> Vec<f64> {
        let p = &self.params;
        paths
            .usd_pln_hedged
            .iter()
            .zip(&paths.eur_usd_hedged)
            .map(|(&usd_pln, &eur_usd)| {
                monthly_cost(usd_pln, eur_usd, p.monthly_pln_costs, p.monthly_eur_costs)
            })
            .collect()
    }

    /// Blend of hedged and market costs by the coverage ratio
    ///
    /// Coverage 0 reproduces the unhedged series exactly; coverage 1 the
    /// pure hedged series.
    fn hedged_blend_costs(&self, paths: &RatePaths, unhedged: &[f64]) -> Vec<f64> {
        let coverage = self.params.hedge_coverage;
        self.pure_hedged_costs(paths)
            .iter()
            .zip(unhedged)
            .map(|(&hedged, &market)| coverage * hedged + (1.0 - coverage) * market)
            .collect()
    }

    /// Per-month cost of executing the hedge
    ///
    /// The OTC spread applies to the full hedged notional; the bank spread
    /// only to the PLN-settled leg, so its term is weighted by the PLN
    /// share of the hedged cost. Kept in this factored form: with zero
    /// configured costs the hedged cost is zero and the execution cost is
    /// zero by convention.
    fn hedging_execution_costs(&self, paths: &RatePaths) -> Vec<f64> {
        let p = &self.params;
        let pln_leg_usd = p.monthly_pln_costs / p.usd_pln_start;
        self.pure_hedged_costs(paths)
            .iter()
            .map(|&hedged| {
                if hedged == 0.0 {
                    0.0
                } else {
                    hedged
                        * p.hedge_coverage
                        * (p.otc_spread + p.bank_fx_spread * pln_leg_usd / hedged)
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn engine(params: HedgeParams) -> ProjectionEngine {
        ProjectionEngine::new(params).unwrap()
    }

    #[test]
    fn test_monthly_cost_formula() {
        // 230000/3.60 + 95000*1.175 = 63888.89 + 111625
        let cost = monthly_cost(3.60, 1.175, 230_000.0, 95_000.0);
        assert_relative_eq!(cost, 175_513.888889, max_relative = 1e-9);
    }

    #[test]
    fn test_series_lengths_match_horizon() {
        for months in [1, 6, 24] {
            let result = engine(HedgeParams {
                forecast_months: months,
                ..Default::default()
            })
            .project();
            assert_eq!(result.rows.len(), months as usize);
        }
    }

    #[test]
    fn test_cumulative_is_prefix_sum() {
        let series = [1.0, 2.5, 0.0, 4.0];
        let cum = cumulative(&series);
        assert_eq!(cum, vec![1.0, 3.5, 3.5, 7.5]);
    }

    #[test]
    fn test_treasury_remaining_elementwise() {
        let remaining = treasury_remaining(10.0, &[4.0, 8.0, 13.0]);
        assert_eq!(remaining, vec![6.0, 2.0, -3.0]);
    }

    #[test]
    fn test_runway_never_depletes_returns_horizon() {
        assert_eq!(runway(1000.0, &[10.0, 10.0, 10.0]), 3.0);
    }

    #[test]
    fn test_runway_interpolates_within_depleting_month() {
        // 100 - 60 = 40 after month 1; month 2 costs 60, so the balance
        // covers 40/60 of it.
        let r = runway(100.0, &[60.0, 60.0]);
        assert_relative_eq!(r, 1.0 + 40.0 / 60.0, max_relative = 1e-12);
    }

    #[test]
    fn test_runway_zero_cost_guard() {
        // Treasury already depleted and the month costs nothing: return
        // the month index with no fractional adjustment.
        assert_eq!(runway(0.0, &[0.0, 10.0]), 0.0);
    }

    #[test]
    fn test_runway_bounded_by_horizon() {
        let costs = [5.0, 0.0, 125.0, 1.0];
        for treasury in [1.0, 50.0, 1_000.0] {
            let r = runway(treasury, &costs);
            assert!(r >= 0.0 && r <= costs.len() as f64, "runway {r} out of range");
        }
    }

    #[test]
    fn test_zero_coverage_reduces_to_unhedged() {
        let result = engine(HedgeParams {
            hedge_coverage: 0.0,
            ..Default::default()
        })
        .project();
        for row in &result.rows {
            assert_relative_eq!(row.cost_hedged, row.cost_unhedged, max_relative = 1e-12);
            assert_eq!(row.hedging_execution_cost, 0.0);
        }
    }

    #[test]
    fn test_full_coverage_is_pure_hedged_cost() {
        let params = HedgeParams::default();
        let pure_hedged = monthly_cost(
            params.usd_pln_start,
            params.eur_usd_start,
            params.monthly_pln_costs,
            params.monthly_eur_costs,
        );
        let result = engine(params).project();
        for row in &result.rows {
            assert_relative_eq!(row.cost_hedged, pure_hedged, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_execution_cost_zero_when_costs_zero() {
        let result = engine(HedgeParams {
            monthly_eur_costs: 0.0,
            monthly_pln_costs: 0.0,
            ..Default::default()
        })
        .project();
        for row in &result.rows {
            assert_eq!(row.hedging_execution_cost, 0.0);
            assert_eq!(row.cost_hedged, 0.0);
        }
    }

    #[test]
    fn test_baseline_scenario_runway() {
        // Baseline parameters: full coverage freezes the monthly cost at
        // 175,513.89 USD, which depletes the 1,025,000 treasury inside
        // month 6 at roughly 5.84 months before execution-cost drag.
        let params = HedgeParams::default();
        let hedged_monthly = monthly_cost(3.60, 1.175, 230_000.0, 95_000.0);

        let cumulative_6 = hedged_monthly * 6.0;
        assert_relative_eq!(cumulative_6, 1_053_083.333333, max_relative = 1e-9);
        assert!(cumulative_6 > params.treasury);

        let blend_only_runway = runway(params.treasury, &vec![hedged_monthly; 6]);
        assert_relative_eq!(blend_only_runway, 5.84, max_relative = 1e-3);

        // Execution costs shorten the hedged runway slightly further.
        let result = engine(params).project();
        assert!(result.runway_hedged < blend_only_runway);
        assert!(result.runway_hedged > 5.8);
    }

    #[test]
    fn test_summary_savings_consistent_with_rows() {
        let result = engine(HedgeParams::default()).project();
        let summary = result.summary();

        let last = result.rows.last().unwrap();
        assert_relative_eq!(
            summary.net_savings,
            last.cumulative_unhedged - last.cumulative_hedged,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            summary.gross_savings,
            summary.net_savings + summary.total_hedging_cost,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            summary.runway_delta,
            result.runway_hedged - result.runway_unhedged,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_invalid_params_rejected_at_boundary() {
        let params = HedgeParams {
            usd_pln_start: 0.0,
            ..Default::default()
        };
        assert!(ProjectionEngine::new(params).is_err());

        // A NaN treasury must never reach the arithmetic, where it would
        // poison every series and both runways.
        let params = HedgeParams {
            treasury: f64::NAN,
            ..Default::default()
        };
        assert!(ProjectionEngine::new(params).is_err());
    }
}
