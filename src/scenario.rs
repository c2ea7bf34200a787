//! Named exchange-rate scenarios and the expected-value comparison
//!
//! Independent of the month-by-month rate-path machinery: each scenario
//! holds the rates flat for the whole horizon and is weighted by an
//! exogenous probability. Probabilities are taken as given and never
//! normalized; whether they sum to 1 is the caller's responsibility.

use crate::params::HedgeParams;
use crate::projection::monthly_cost;
use serde::{Deserialize, Serialize};

/// A named future-rate scenario with a probability weight
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateScenario {
    pub name: String,
    pub usd_pln: f64,
    pub eur_usd: f64,
    pub probability: f64,
}

impl RateScenario {
    pub fn new(name: impl Into<String>, usd_pln: f64, eur_usd: f64, probability: f64) -> Self {
        Self {
            name: name.into(),
            usd_pln,
            eur_usd,
            probability,
        }
    }
}

/// Baseline three-scenario rate outlook
pub fn default_scenarios() -> Vec<RateScenario> {
    vec![
        RateScenario::new("Strong USD", 3.85, 1.10, 0.15),
        RateScenario::new("Stabilization", 3.58, 1.18, 0.25),
        RateScenario::new("Consensus (weak USD)", 3.50, 1.20, 0.60),
    ]
}

/// Per-scenario outcome over the full horizon
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioRow {
    pub name: String,
    pub probability: f64,
    pub usd_pln: f64,
    pub eur_usd: f64,
    /// Monthly cost at the scenario's flat rates (USD)
    pub monthly_cost: f64,
    /// Total cost over the horizon (USD)
    pub total_cost: f64,
    /// Naive runway at a flat monthly burn, in months
    ///
    /// `treasury / monthly_cost`, uncapped by the horizon; infinite when
    /// both cost inputs are zero (nothing is ever spent).
    pub runway: f64,
    /// Scenario total cost minus the all-in hedged total
    pub savings_vs_hedged: f64,
}

/// Probability-weighted cost comparison across the scenario set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpectedValue {
    /// Probability-weighted total cost without hedging (USD)
    pub unhedged: f64,
    /// All-in hedged total cost at the start rates (USD)
    pub hedged: f64,
    /// `unhedged - hedged`
    pub savings: f64,
}

/// Scenario table plus the expected-value summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioAnalysis {
    pub rows: Vec<ScenarioRow>,
    pub expected_value: ExpectedValue,
}

impl ScenarioAnalysis {
    /// Evaluate every scenario against the hedged alternative
    ///
    /// The hedged total locks the start rates for the whole horizon and
    /// carries both spreads on the full notional:
    /// `monthly_cost(start) * horizon * (1 + otc + bank)`.
    pub fn run(scenarios: &[RateScenario], params: &HedgeParams) -> Self {
        let horizon = params.forecast_months as f64;
        let hedged_total = monthly_cost(
            params.usd_pln_start,
            params.eur_usd_start,
            params.monthly_pln_costs,
            params.monthly_eur_costs,
        ) * horizon
            * (1.0 + params.otc_spread + params.bank_fx_spread);

        let mut rows = Vec::with_capacity(scenarios.len());
        let mut ev_unhedged = 0.0;

        for scenario in scenarios {
            let monthly = monthly_cost(
                scenario.usd_pln,
                scenario.eur_usd,
                params.monthly_pln_costs,
                params.monthly_eur_costs,
            );
            let total = monthly * horizon;
            ev_unhedged += total * scenario.probability;

            rows.push(ScenarioRow {
                name: scenario.name.clone(),
                probability: scenario.probability,
                usd_pln: scenario.usd_pln,
                eur_usd: scenario.eur_usd,
                monthly_cost: monthly,
                total_cost: total,
                runway: params.treasury / monthly,
                savings_vs_hedged: total - hedged_total,
            });
        }

        Self {
            rows,
            expected_value: ExpectedValue {
                unhedged: ev_unhedged,
                hedged: hedged_total,
                savings: ev_unhedged - hedged_total,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_expected_value_is_weighted_sum() {
        let params = HedgeParams::default();
        let scenarios = default_scenarios();
        let analysis = ScenarioAnalysis::run(&scenarios, &params);

        let horizon = params.forecast_months as f64;
        let hand_computed: f64 = scenarios
            .iter()
            .map(|s| {
                monthly_cost(s.usd_pln, s.eur_usd, 230_000.0, 95_000.0)
                    * horizon
                    * s.probability
            })
            .sum();
        assert_relative_eq!(analysis.expected_value.unhedged, hand_computed, max_relative = 1e-12);
        assert_relative_eq!(
            analysis.expected_value.savings,
            analysis.expected_value.unhedged - analysis.expected_value.hedged,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_hedged_total_carries_both_spreads() {
        let params = HedgeParams::default();
        let analysis = ScenarioAnalysis::run(&default_scenarios(), &params);

        let expected = monthly_cost(3.60, 1.175, 230_000.0, 95_000.0)
            * 6.0
            * (1.0 + 0.002 + 0.0015);
        assert_relative_eq!(analysis.expected_value.hedged, expected, max_relative = 1e-12);
    }

    #[test]
    fn test_scenario_rows_cover_input_set() {
        let params = HedgeParams::default();
        let scenarios = default_scenarios();
        let analysis = ScenarioAnalysis::run(&scenarios, &params);

        assert_eq!(analysis.rows.len(), 3);
        for (row, scenario) in analysis.rows.iter().zip(&scenarios) {
            assert_eq!(row.name, scenario.name);
            assert_relative_eq!(row.total_cost, row.monthly_cost * 6.0, max_relative = 1e-12);
            assert_relative_eq!(
                row.runway,
                params.treasury / row.monthly_cost,
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn test_zero_cost_scenario_runway_is_infinite() {
        let params = HedgeParams {
            monthly_eur_costs: 0.0,
            monthly_pln_costs: 0.0,
            ..Default::default()
        };
        let analysis = ScenarioAnalysis::run(&default_scenarios(), &params);
        for row in &analysis.rows {
            assert_eq!(row.monthly_cost, 0.0);
            assert!(row.runway.is_infinite() && row.runway > 0.0);
        }
    }

    #[test]
    fn test_default_scenario_probabilities() {
        let total: f64 = default_scenarios().iter().map(|s| s.probability).sum();
        assert_relative_eq!(total, 1.0, max_relative = 1e-12);
    }
}
