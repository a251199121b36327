//! CSV column contract and JSON configuration loading

use mm_sim::infrastructure::{write_path_csv, write_summaries_csv, write_sweep_csv};
use mm_sim::{
    ConfigError, QuotingConfig, Regime, RunConfig, SUMMARY_COLUMNS, SimulationConfig, SweepRow,
    simulate_many, simulate_path, sweep,
};

fn header(buf: &[u8]) -> String {
    String::from_utf8_lossy(buf)
        .lines()
        .next()
        .unwrap_or_default()
        .to_string()
}

fn short_session() -> SimulationConfig {
    SimulationConfig::new(100.0, 0.02, 2.0, 0.1, 7).unwrap()
}

#[test]
fn test_path_csv_columns() {
    let path = simulate_path(&short_session(), &QuotingConfig::default()).unwrap();
    let mut buf = Vec::new();
    write_path_csv(&mut buf, &path).unwrap();

    assert_eq!(
        header(&buf),
        "time,mid,bid,ask,inventory,cash,pnl,fill_bid,fill_ask"
    );
}

#[test]
fn test_summary_csv_columns() {
    let summaries = simulate_many(&short_session(), &QuotingConfig::default(), 2, None).unwrap();
    let mut buf = Vec::new();
    write_summaries_csv(&mut buf, &summaries).unwrap();

    assert_eq!(
        header(&buf),
        "path,pnl_final,pnl_mean_step,pnl_std_step,max_abs_inventory,\
         fills_total,fills_bid,fills_ask,spread_mean,sharpe_step"
    );
    assert_eq!(SUMMARY_COLUMNS.len(), 10);
}

#[test]
fn test_sweep_csv_columns() {
    let regimes = Regime::grid(&[0.02], &[1.0]);
    let rows = sweep(&short_session(), &QuotingConfig::default(), &regimes, 3).unwrap();
    let mut buf = Vec::new();
    write_sweep_csv(&mut buf, &rows).unwrap();

    assert_eq!(header(&buf), SweepRow::columns().join(","));
    assert!(header(&buf).ends_with("sharpe_step_std"));
}

#[test]
fn test_json_config_round_trip() {
    let config = RunConfig::new(
        short_session().with_max_position(4),
        QuotingConfig::default()
            .with_max_spread_ticks(50)
            .with_inventory_clip(8),
    );
    let json = config.to_json().unwrap();
    let loaded = RunConfig::from_json(&json).unwrap();

    assert_eq!(loaded, config);
    assert_eq!(
        simulate_path(&loaded.simulation, &loaded.quoting).unwrap(),
        simulate_path(&config.simulation, &config.quoting).unwrap()
    );
}

#[test]
fn test_json_config_rejects_bad_depth() {
    let err = RunConfig::from_json(r#"{ "quoting": { "market_depth": 0.0 } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}
