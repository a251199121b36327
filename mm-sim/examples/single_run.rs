//! Single path with an inventory cap and a per-fill fee

use mm_sim::{PathSummary, QuotingConfig, SimulationConfig, simulate_path};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Avellaneda-Stoikov Single Path ===\n");

    let sim = SimulationConfig::new(100.0, 0.02, 600.0, 0.1, 42)?
        .with_max_position(5)
        .with_fee_per_fill(0.001);
    let quoting = QuotingConfig::new(0.1, 1.5, 1.0, 0.01)?.with_max_spread_ticks(200);

    println!("Configuration:");
    println!("  S0 = {}, sigma = {}", sim.initial_mid_price, sim.volatility);
    println!("  horizon = {}, dt = {} ({} steps)", sim.horizon, sim.time_step, sim.num_steps());
    println!(
        "  gamma = {}, k = {}, lambda0 = {}",
        quoting.risk_aversion, quoting.market_depth, quoting.base_arrival_intensity
    );
    println!();

    let path = simulate_path(&sim, &quoting)?;

    println!("First quotes:");
    for row in path.rows().iter().take(5) {
        println!(
            "  t={:>5.1}  mid={:>9.4}  bid={:>7.2}  ask={:>7.2}  inv={:>3}",
            row.time, row.mid, row.bid, row.ask, row.inventory
        );
    }

    let summary = PathSummary::from_path(0, &path);

    println!("\n=== Summary ===");
    println!("Final PnL:          {:.4}", summary.pnl_final);
    println!("Final inventory:    {}", path.final_inventory());
    println!("Max |inventory|:    {}", summary.max_abs_inventory);
    println!(
        "Fills (bid/ask):    {} / {}",
        summary.fills_bid, summary.fills_ask
    );
    println!("Mean spread:        {:.4}", summary.spread_mean);
    println!("Per-step Sharpe:    {:.4}", summary.sharpe_step);

    Ok(())
}
