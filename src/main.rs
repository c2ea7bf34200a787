//! FX Hedging Model CLI
//!
//! Runs one projection for a parameter set supplied on the command line
//! and prints the runway metrics, monthly detail table and scenario
//! analysis.

use clap::Parser;
use fx_hedging_model::{
    default_scenarios, HedgeParams, ProjectionEngine, ScenarioAnalysis,
};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Treasury runway projection under hedged and unhedged FX cost regimes
#[derive(Debug, Parser)]
#[command(name = "fx_hedging_model", version, about)]
struct Cli {
    /// Treasury balance (USDT)
    #[arg(long, default_value_t = 1_025_000.0)]
    treasury: f64,

    /// Monthly operating costs settled in EUR
    #[arg(long, default_value_t = 95_000.0)]
    eur_costs: f64,

    /// Monthly operating costs settled in PLN
    #[arg(long, default_value_t = 230_000.0)]
    pln_costs: f64,

    /// Forecast horizon in months (1-24)
    #[arg(long, default_value_t = 6)]
    months: u32,

    /// USD/PLN rate at the start of the horizon
    #[arg(long, default_value_t = 3.60)]
    usd_pln_start: f64,

    /// Forecast USD/PLN rate at the end of the horizon
    #[arg(long, default_value_t = 3.50)]
    usd_pln_end: f64,

    /// EUR/USD rate at the start of the horizon
    #[arg(long, default_value_t = 1.175)]
    eur_usd_start: f64,

    /// Forecast EUR/USD rate at the end of the horizon
    #[arg(long, default_value_t = 1.20)]
    eur_usd_end: f64,

    /// Hedge coverage as a fraction of monthly costs (0-1)
    #[arg(long, default_value_t = 1.0)]
    coverage: f64,

    /// OTC spread as a fraction (0-1)
    #[arg(long, default_value_t = 0.002)]
    otc_spread: f64,

    /// Bank EUR/PLN spread as a fraction (0-1)
    #[arg(long, default_value_t = 0.0015)]
    bank_spread: f64,

    /// Write the monthly detail table to a CSV file
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Print the full projection result as JSON instead of tables
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn params(&self) -> HedgeParams {
        HedgeParams {
            treasury: self.treasury,
            monthly_eur_costs: self.eur_costs,
            monthly_pln_costs: self.pln_costs,
            forecast_months: self.months,
            usd_pln_start: self.usd_pln_start,
            usd_pln_end: self.usd_pln_end,
            eur_usd_start: self.eur_usd_start,
            eur_usd_end: self.eur_usd_end,
            hedge_coverage: self.coverage,
            otc_spread: self.otc_spread,
            bank_fx_spread: self.bank_spread,
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let engine = match ProjectionEngine::new(cli.params()) {
        Ok(engine) => engine,
        Err(err) => {
            eprintln!("invalid parameters: {err}");
            return ExitCode::FAILURE;
        }
    };

    let result = engine.project();
    let summary = result.summary();
    let analysis = ScenarioAnalysis::run(&default_scenarios(), engine.params());

    if cli.json {
        #[derive(serde::Serialize)]
        struct Report<'a> {
            params: &'a HedgeParams,
            result: &'a fx_hedging_model::ProjectionResult,
            summary: &'a fx_hedging_model::ProjectionSummary,
            scenarios: &'a ScenarioAnalysis,
        }
        let report = Report {
            params: engine.params(),
            result: &result,
            summary: &summary,
            scenarios: &analysis,
        };
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("failed to serialize report: {err}");
                return ExitCode::FAILURE;
            }
        }
        return ExitCode::SUCCESS;
    }

    println!("FX Hedging Model v0.1.0");
    println!("=======================\n");

    println!("Treasury:              {:>14.0} USDT", engine.params().treasury);
    println!("Runway (unhedged):     {:>14.1} months", summary.runway_unhedged);
    println!(
        "Runway (hedged):       {:>14.1} months  ({:+.2})",
        summary.runway_hedged, summary.runway_delta
    );
    println!("Savings from hedging:  {:>14.0} USD", summary.net_savings);
    println!();

    // Monthly detail table
    println!(
        "{:>5} {:>8} {:>8} {:>14} {:>14} {:>12} {:>14} {:>14}",
        "Month", "USD/PLN", "EUR/USD", "Unhedged", "Hedged", "HedgeCost", "TreasuryUnh", "TreasuryHed"
    );
    println!("{}", "-".repeat(96));
    for row in &result.rows {
        println!(
            "{:>5} {:>8.4} {:>8.4} {:>14.2} {:>14.2} {:>12.2} {:>14.2} {:>14.2}",
            row.month,
            row.usd_pln,
            row.eur_usd,
            row.cost_unhedged,
            row.cost_hedged,
            row.hedging_execution_cost,
            row.treasury_unhedged,
            row.treasury_hedged,
        );
    }

    // Scenario analysis
    println!("\nScenario analysis ({} months):", engine.params().forecast_months);
    println!(
        "{:<22} {:>6} {:>8} {:>8} {:>14} {:>14} {:>8} {:>14}",
        "Scenario", "Prob", "USD/PLN", "EUR/USD", "Monthly", "Total", "Runway", "SavingsVsHedge"
    );
    println!("{}", "-".repeat(100));
    for row in &analysis.rows {
        println!(
            "{:<22} {:>5.0}% {:>8.2} {:>8.3} {:>14.0} {:>14.0} {:>8.1} {:>14.0}",
            row.name,
            row.probability * 100.0,
            row.usd_pln,
            row.eur_usd,
            row.monthly_cost,
            row.total_cost,
            row.runway,
            row.savings_vs_hedged,
        );
    }

    let ev = &analysis.expected_value;
    println!("\nExpected value (unhedged): {:>14.0} USD", ev.unhedged);
    println!("Cost with hedging:         {:>14.0} USD", ev.hedged);
    println!("Expected savings:          {:>14.0} USD", ev.savings);

    // Recommendation
    println!();
    if summary.hedging_worthwhile {
        println!("Hedging is worthwhile under the assumed scenario:");
        println!("  Gross savings:    {:>14.0} USD", summary.gross_savings);
        println!("  Hedging cost:     {:>14.0} USD", summary.total_hedging_cost);
        println!("  Net savings:      {:>14.0} USD", summary.net_savings);
        println!("  Runway extension: {:>14.2} months", summary.runway_delta);
    } else {
        println!("Hedging may not be worthwhile under the assumed scenario:");
        println!("  Cost difference:  {:>14.0} USD", summary.gross_savings);
        println!("  Hedging cost:     {:>14.0} USD", summary.total_hedging_cost);
        println!("  Balance:          {:>14.0} USD", summary.net_savings);
    }

    // Optional CSV export of the monthly table
    if let Some(path) = &cli.output {
        if let Err(err) = write_csv(path, &result.rows) {
            eprintln!("failed to write {}: {err}", path.display());
            return ExitCode::FAILURE;
        }
        println!("\nMonthly table written to: {}", path.display());
    }

    ExitCode::SUCCESS
}

fn write_csv(path: &Path, rows: &[fx_hedging_model::MonthRow]) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    writeln!(
        file,
        "Month,USD_PLN,EUR_USD,CostUnhedged,CostHedged,HedgingExecutionCost,CumulativeUnhedged,CumulativeHedged,TreasuryUnhedged,TreasuryHedged"
    )?;
    for row in rows {
        writeln!(
            file,
            "{},{:.6},{:.6},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2}",
            row.month,
            row.usd_pln,
            row.eur_usd,
            row.cost_unhedged,
            row.cost_hedged,
            row.hedging_execution_cost,
            row.cumulative_unhedged,
            row.cumulative_hedged,
            row.treasury_unhedged,
            row.treasury_hedged,
        )?;
    }
    Ok(())
}
