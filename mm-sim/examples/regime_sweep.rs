//! Sweep a small grid of volatility and fill-intensity regimes

use mm_sim::infrastructure::write_sweep_csv;
use mm_sim::{QuotingConfig, Regime, SimulationConfig, sweep};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Regime Sweep ===\n");

    let sim = SimulationConfig::new(100.0, 0.02, 120.0, 0.1, 7)?;
    let quoting = QuotingConfig::default().with_inventory_clip(20);
    let regimes = Regime::grid(&[0.01, 0.02, 0.04], &[0.5, 1.0, 2.0]);

    println!(
        "Running {} regimes x 50 paths ({} steps each)...\n",
        regimes.len(),
        sim.num_steps()
    );

    let rows = sweep(&sim, &quoting, &regimes, 50)?;

    println!(
        "{:<24} {:>12} {:>12} {:>12} {:>10}",
        "regime", "pnl_mean", "pnl_std", "fills_mean", "sharpe"
    );
    for row in &rows {
        println!(
            "{:<24} {:>12.4} {:>12.4} {:>12.1} {:>10.4}",
            row.regime,
            row.mean_of("pnl_final").unwrap_or_default(),
            row.std_of("pnl_final").unwrap_or_default(),
            row.mean_of("fills_total").unwrap_or_default(),
            row.mean_of("sharpe_step").unwrap_or_default(),
        );
    }

    println!("\nCSV:");
    write_sweep_csv(std::io::stdout().lock(), &rows)?;

    Ok(())
}
