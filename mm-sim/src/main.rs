//! mm-sim: command-line front end for the market-making simulator

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use mm_sim::infrastructure::{
    create_file, write_path_csv, write_summaries_csv, write_sweep_csv,
};
use mm_sim::{
    PathRow, QuotingConfig, Regime, RunConfig, SimulationConfig, simulate_many, simulate_path,
    sweep,
};
use std::io;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "mm-sim")]
#[command(about = "Monte Carlo simulator of an Avellaneda-Stoikov market maker")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Simulate one path
    Run {
        #[command(flatten)]
        common: CommonArgs,

        #[command(flatten)]
        market: MarketArgs,

        /// Write the path to this CSV file instead of printing its tail
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Simulate many paths and summarize each
    Batch {
        #[command(flatten)]
        common: CommonArgs,

        #[command(flatten)]
        market: MarketArgs,

        #[arg(long, default_value_t = 100)]
        n_paths: usize,

        /// Base seed; path j uses seed0 + j (defaults to --seed)
        #[arg(long)]
        seed0: Option<u64>,

        /// Write the summary table to this CSV file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Batch-simulate a grid of (sigma, lambda0) regimes
    Sweep {
        #[command(flatten)]
        common: CommonArgs,

        #[arg(long, value_delimiter = ',', default_value = "0.01,0.02,0.04")]
        sigmas: Vec<f64>,

        #[arg(long, value_delimiter = ',', default_value = "0.5,1.0,2.0")]
        lambda0s: Vec<f64>,

        #[arg(long, default_value_t = 100)]
        n_paths: usize,

        #[arg(long, default_value = "results.csv")]
        out: PathBuf,
    },
}

/// Flags shared by every subcommand
#[derive(Args, Debug)]
struct CommonArgs {
    /// Initial mid price
    #[arg(long, default_value_t = 100.0)]
    s0: f64,

    /// Session length
    #[arg(long, default_value_t = 600.0)]
    horizon: f64,

    /// Time step
    #[arg(long, default_value_t = 0.1)]
    dt: f64,

    #[arg(long, default_value_t = 7)]
    seed: u64,

    /// Fee charged per fill
    #[arg(long, default_value_t = 0.0)]
    fee: f64,

    /// Hard cap on |inventory|
    #[arg(long)]
    max_position: Option<u32>,

    /// Risk aversion
    #[arg(long, default_value_t = 0.1)]
    gamma: f64,

    /// Market depth
    #[arg(long, default_value_t = 1.5)]
    k: f64,

    #[arg(long, default_value_t = 0.01)]
    tick: f64,

    #[arg(long, default_value_t = 1)]
    min_spread_ticks: u32,

    #[arg(long)]
    max_spread_ticks: Option<u32>,

    /// Bound on the inventory used for quote skew
    #[arg(long)]
    inventory_clip: Option<u32>,

    /// JSON run configuration; replaces every flag-derived parameter
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Mid-price volatility and base fill intensity for a single regime
#[derive(Args, Debug)]
struct MarketArgs {
    #[arg(long, default_value_t = 0.02)]
    sigma: f64,

    /// Fill intensity at zero distance from mid
    #[arg(long, default_value_t = 1.0)]
    lambda0: f64,
}

impl CommonArgs {
    fn configs(&self, market: Option<&MarketArgs>) -> Result<RunConfig> {
        if let Some(path) = &self.config {
            info!("Loading configuration from: {}", path.display());
            return Ok(RunConfig::from_file(path)?);
        }

        let defaults = SimulationConfig::default();
        let simulation = SimulationConfig {
            initial_mid_price: self.s0,
            volatility: market.map_or(defaults.volatility, |m| m.sigma),
            horizon: self.horizon,
            time_step: self.dt,
            random_seed: self.seed,
            fee_per_fill: self.fee,
            max_position: self.max_position,
        };

        let mut quoting = QuotingConfig::new(
            self.gamma,
            self.k,
            market.map_or(QuotingConfig::default().base_arrival_intensity, |m| m.lambda0),
            self.tick,
        )?
        .with_min_spread_ticks(self.min_spread_ticks);
        quoting.max_spread_ticks = self.max_spread_ticks;
        quoting.inventory_clip = self.inventory_clip;

        let config = RunConfig::new(simulation, quoting);
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mm_sim=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Run {
            common,
            market,
            out,
        } => run(&common, &market, out),
        Command::Batch {
            common,
            market,
            n_paths,
            seed0,
            out,
        } => batch(&common, &market, n_paths, seed0, out),
        Command::Sweep {
            common,
            sigmas,
            lambda0s,
            n_paths,
            out,
        } => run_sweep(&common, &sigmas, &lambda0s, n_paths, out),
    }
}

fn run(common: &CommonArgs, market: &MarketArgs, out: Option<PathBuf>) -> Result<()> {
    let config = common.configs(Some(market))?;
    let path = simulate_path(&config.simulation, &config.quoting)?;

    match out {
        Some(file) => {
            write_path_csv(create_file(&file)?, &path)
                .with_context(|| format!("writing {}", file.display()))?;
            info!("Wrote {} rows to {}", path.len(), file.display());
        }
        None => {
            println!(
                "{:>10} {:>12} {:>10} {:>10} {:>6} {:>12} {:>12} {:>4} {:>4}",
                "time", "mid", "bid", "ask", "inv", "cash", "pnl", "fb", "fa"
            );
            let tail = path.rows().len().saturating_sub(10);
            for row in &path.rows()[tail..] {
                print_row(row);
            }
        }
    }

    println!("Final PnL: {:.4}", path.final_pnl());
    println!("Final inventory: {}", path.final_inventory());
    Ok(())
}

fn print_row(row: &PathRow) {
    println!(
        "{:>10.2} {:>12.4} {:>10.2} {:>10.2} {:>6} {:>12.4} {:>12.4} {:>4} {:>4}",
        row.time,
        row.mid,
        row.bid,
        row.ask,
        row.inventory,
        row.cash,
        row.pnl,
        u8::from(row.fill_bid),
        u8::from(row.fill_ask),
    );
}

fn batch(
    common: &CommonArgs,
    market: &MarketArgs,
    n_paths: usize,
    seed0: Option<u64>,
    out: Option<PathBuf>,
) -> Result<()> {
    let config = common.configs(Some(market))?;
    let summaries = simulate_many(&config.simulation, &config.quoting, n_paths, seed0)?;

    match out {
        Some(file) => {
            write_summaries_csv(create_file(&file)?, &summaries)
                .with_context(|| format!("writing {}", file.display()))?;
            info!("Wrote {} summaries to {}", summaries.len(), file.display());
        }
        None => write_summaries_csv(io::stdout().lock(), &summaries)?,
    }
    Ok(())
}

fn run_sweep(
    common: &CommonArgs,
    sigmas: &[f64],
    lambda0s: &[f64],
    n_paths: usize,
    out: PathBuf,
) -> Result<()> {
    let config = common.configs(None)?;
    let regimes = Regime::grid(sigmas, lambda0s);
    info!(regimes = regimes.len(), n_paths, "Starting sweep");

    let rows = sweep(&config.simulation, &config.quoting, &regimes, n_paths)?;
    write_sweep_csv(create_file(&out)?, &rows)
        .with_context(|| format!("writing {}", out.display()))?;

    for row in &rows {
        println!(
            "{:<28} pnl_final_mean={:>10.4} sharpe_step_mean={:>8.4}",
            row.regime,
            row.mean_of("pnl_final").unwrap_or_default(),
            row.mean_of("sharpe_step").unwrap_or_default(),
        );
    }
    println!("Wrote {} regimes to {}", rows.len(), out.display());
    Ok(())
}
