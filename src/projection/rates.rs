//! Exchange-rate path construction

use crate::params::HedgeParams;
use serde::{Deserialize, Serialize};

/// Monthly exchange-rate paths over the forecast horizon
///
/// Market paths drift linearly from the start rate to the forecast end
/// rate; hedged paths stay frozen at the start rate for every month.
/// All four vectors have length equal to the horizon.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatePaths {
    pub usd_pln_market: Vec<f64>,
    pub usd_pln_hedged: Vec<f64>,
    pub eur_usd_market: Vec<f64>,
    pub eur_usd_hedged: Vec<f64>,
}

impl RatePaths {
    /// Build market and hedged paths from validated parameters
    pub fn build(params: &HedgeParams) -> Self {
        let n = params.horizon();
        Self {
            usd_pln_market: linspace(params.usd_pln_start, params.usd_pln_end, n),
            usd_pln_hedged: vec![params.usd_pln_start; n],
            eur_usd_market: linspace(params.eur_usd_start, params.eur_usd_end, n),
            eur_usd_hedged: vec![params.eur_usd_start; n],
        }
    }
}

/// `n` evenly spaced points from `start` to `end`, both endpoints included
///
/// For `n == 1` the single point is `start`.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    if n <= 1 {
        return vec![start; n];
    }
    let step = (end - start) / (n - 1) as f64;
    (0..n).map(|i| start + step * i as f64).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linspace_endpoints() {
        let path = linspace(3.60, 3.50, 6);
        assert_eq!(path.len(), 6);
        assert_relative_eq!(path[0], 3.60, max_relative = 1e-12);
        assert_relative_eq!(path[5], 3.50, max_relative = 1e-12);
        assert_relative_eq!(path[1], 3.58, max_relative = 1e-12);
    }

    #[test]
    fn test_linspace_single_point() {
        assert_eq!(linspace(3.60, 3.50, 1), vec![3.60]);
    }

    #[test]
    fn test_paths_have_horizon_length() {
        let params = HedgeParams {
            forecast_months: 12,
            ..Default::default()
        };
        let paths = RatePaths::build(&params);
        assert_eq!(paths.usd_pln_market.len(), 12);
        assert_eq!(paths.usd_pln_hedged.len(), 12);
        assert_eq!(paths.eur_usd_market.len(), 12);
        assert_eq!(paths.eur_usd_hedged.len(), 12);
    }

    #[test]
    fn test_hedged_paths_constant_at_start() {
        let params = HedgeParams::default();
        let paths = RatePaths::build(&params);
        assert!(paths.usd_pln_hedged.iter().all(|&r| r == params.usd_pln_start));
        assert!(paths.eur_usd_hedged.iter().all(|&r| r == params.eur_usd_start));
    }
}
