//! CSV export of paths, batch summaries and sweep tables
//!
//! Writers take any `io::Write`, so callers choose between files, stdout
//! and in-memory buffers. Fill flags are written as 0/1.

use crate::application::simulation::SweepRow;
use crate::domain::{PATH_COLUMNS, PathResult, PathSummary, SUMMARY_COLUMNS};
use csv::Writer;
use std::fs::File;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Export errors
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to create '{path}': {source}")]
    Create {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Write one path, one row per time step
pub fn write_path_csv<W: io::Write>(writer: W, path: &PathResult) -> Result<(), ExportError> {
    let mut csv = Writer::from_writer(writer);
    csv.write_record(PATH_COLUMNS)?;
    for row in path.rows() {
        csv.write_record(row.to_record())?;
    }
    csv.flush()?;
    Ok(())
}

/// Write one summary row per path
pub fn write_summaries_csv<W: io::Write>(
    writer: W,
    summaries: &[PathSummary],
) -> Result<(), ExportError> {
    let mut csv = Writer::from_writer(writer);
    csv.write_record(SUMMARY_COLUMNS)?;
    for summary in summaries {
        csv.write_record(summary.to_record())?;
    }
    csv.flush()?;
    Ok(())
}

/// Write one aggregate row per regime
pub fn write_sweep_csv<W: io::Write>(writer: W, rows: &[SweepRow]) -> Result<(), ExportError> {
    let mut csv = Writer::from_writer(writer);
    csv.write_record(SweepRow::columns())?;
    for row in rows {
        csv.write_record(row.to_record())?;
    }
    csv.flush()?;
    Ok(())
}

/// Open `path` for writing
pub fn create_file(path: impl AsRef<Path>) -> Result<File, ExportError> {
    File::create(path.as_ref()).map_err(|source| ExportError::Create {
        path: path.as_ref().display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::simulation::{simulate_many, simulate_path, sweep};
    use mm_core::{QuotingConfig, Regime, SimulationConfig};

    fn small_sim() -> SimulationConfig {
        SimulationConfig::new(100.0, 0.02, 1.0, 0.1, 4).unwrap()
    }

    fn lines(buf: Vec<u8>) -> Vec<String> {
        String::from_utf8(buf)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_path_csv_header_and_rows() {
        let path = simulate_path(&small_sim(), &QuotingConfig::default()).unwrap();
        let mut buf = Vec::new();
        write_path_csv(&mut buf, &path).unwrap();

        let lines = lines(buf);
        assert_eq!(lines[0], "time,mid,bid,ask,inventory,cash,pnl,fill_bid,fill_ask");
        assert_eq!(lines.len(), path.len() + 1);
        for line in &lines[1..] {
            let fields: Vec<&str> = line.split(',').collect();
            assert_eq!(fields.len(), 9);
            assert!(matches!(fields[7], "0" | "1"));
            assert!(matches!(fields[8], "0" | "1"));
        }
    }

    #[test]
    fn test_summaries_csv() {
        let summaries = simulate_many(&small_sim(), &QuotingConfig::default(), 3, None).unwrap();
        let mut buf = Vec::new();
        write_summaries_csv(&mut buf, &summaries).unwrap();

        let lines = lines(buf);
        assert_eq!(lines[0], SUMMARY_COLUMNS.join(","));
        assert_eq!(lines.len(), 4);
        assert!(lines[3].starts_with("2,"));
    }

    #[test]
    fn test_sweep_csv() {
        let regimes = vec![Regime::new("calm", 0.01, 1.0), Regime::new("busy", 0.02, 2.0)];
        let rows = sweep(&small_sim(), &QuotingConfig::default(), &regimes, 2).unwrap();
        let mut buf = Vec::new();
        write_sweep_csv(&mut buf, &rows).unwrap();

        let lines = lines(buf);
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("regime,sigma,lambda0,n_paths,pnl_final_mean"));
        assert!(lines[1].starts_with("calm,0.01,1,2,"));
    }

    #[test]
    fn test_create_file_reports_path() {
        let err = create_file("/nonexistent-dir/out.csv").unwrap_err();
        assert!(err.to_string().contains("/nonexistent-dir/out.csv"));
    }
}
