//! Input parameters for the hedging model and their validation boundary

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum supported forecast horizon in months
pub const MAX_FORECAST_MONTHS: u32 = 24;

/// Full parameter set for one projection run
///
/// The treasury and all derived costs are expressed in the reference
/// currency (USD-pegged). Operating costs are settled monthly in EUR and
/// PLN and converted through the two exchange rates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HedgeParams {
    /// Treasury balance available to cover operating costs (USDT)
    pub treasury: f64,

    /// Recurring monthly operating costs settled in EUR
    pub monthly_eur_costs: f64,

    /// Recurring monthly operating costs settled in PLN
    pub monthly_pln_costs: f64,

    /// Forecast horizon in months (1..=24)
    pub forecast_months: u32,

    /// USD/PLN rate at the start of the horizon
    pub usd_pln_start: f64,

    /// Forecast USD/PLN rate at the end of the horizon
    pub usd_pln_end: f64,

    /// EUR/USD rate at the start of the horizon
    pub eur_usd_start: f64,

    /// Forecast EUR/USD rate at the end of the horizon
    pub eur_usd_end: f64,

    /// Fraction of monthly costs covered at the frozen start rates [0, 1]
    pub hedge_coverage: f64,

    /// Fractional OTC spread paid when executing the hedge [0, 1]
    pub otc_spread: f64,

    /// Fractional bank spread on the PLN-settled leg [0, 1]
    pub bank_fx_spread: f64,
}

impl Default for HedgeParams {
    /// Baseline model inputs
    fn default() -> Self {
        Self {
            treasury: 1_025_000.0,
            monthly_eur_costs: 95_000.0,
            monthly_pln_costs: 230_000.0,
            forecast_months: 6,
            usd_pln_start: 3.60,
            usd_pln_end: 3.50,
            eur_usd_start: 1.175,
            eur_usd_end: 1.20,
            hedge_coverage: 1.0,
            otc_spread: 0.002,
            bank_fx_spread: 0.0015,
        }
    }
}

/// Rejected parameter sets
///
/// Validation happens once, here, before any series is built. Engine code
/// assumes a validated parameter set and has no fallible paths of its own.
#[derive(Debug, Error, PartialEq)]
pub enum ParamError {
    #[error("treasury must be a positive finite amount, got {0}")]
    NonPositiveTreasury(f64),

    #[error("monthly {currency} costs must be finite and non-negative, got {amount}")]
    NegativeCosts { currency: &'static str, amount: f64 },

    #[error("forecast horizon must be in 1..={MAX_FORECAST_MONTHS} months, got {0}")]
    HorizonOutOfRange(u32),

    #[error("{rate} must be positive, got {value}")]
    NonPositiveRate { rate: &'static str, value: f64 },

    #[error("{name} must lie in [0, 1], got {value}")]
    FractionOutOfRange { name: &'static str, value: f64 },
}

impl HedgeParams {
    /// Check every precondition the projection arithmetic relies on
    ///
    /// A zero exchange rate would make [`monthly_cost`] divide by zero, so
    /// non-positive rates are rejected here rather than surfacing as an
    /// infinite cost downstream.
    ///
    /// [`monthly_cost`]: crate::projection::monthly_cost
    pub fn validate(&self) -> Result<(), ParamError> {
        // `!(x > 0.0)` instead of `x <= 0.0` so NaN is rejected too.
        if !(self.treasury > 0.0) || !self.treasury.is_finite() {
            return Err(ParamError::NonPositiveTreasury(self.treasury));
        }
        for (currency, amount) in [
            ("EUR", self.monthly_eur_costs),
            ("PLN", self.monthly_pln_costs),
        ] {
            if !(amount >= 0.0) || !amount.is_finite() {
                return Err(ParamError::NegativeCosts { currency, amount });
            }
        }
        if self.forecast_months == 0 || self.forecast_months > MAX_FORECAST_MONTHS {
            return Err(ParamError::HorizonOutOfRange(self.forecast_months));
        }
        for (rate, value) in [
            ("USD/PLN start rate", self.usd_pln_start),
            ("USD/PLN end rate", self.usd_pln_end),
            ("EUR/USD start rate", self.eur_usd_start),
            ("EUR/USD end rate", self.eur_usd_end),
        ] {
            if value <= 0.0 || !value.is_finite() {
                return Err(ParamError::NonPositiveRate { rate, value });
            }
        }
        for (name, value) in [
            ("hedge coverage", self.hedge_coverage),
            ("OTC spread", self.otc_spread),
            ("bank FX spread", self.bank_fx_spread),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ParamError::FractionOutOfRange { name, value });
            }
        }
        Ok(())
    }

    /// Forecast horizon as a usize for series allocation
    pub fn horizon(&self) -> usize {
        self.forecast_months as usize
    }
}
