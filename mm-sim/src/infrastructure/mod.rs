//! Infrastructure layer: JSON configuration and CSV export

pub mod config;
pub mod export;

pub use config::{ConfigError, RunConfig};
pub use export::{
    ExportError, create_file, write_path_csv, write_summaries_csv, write_sweep_csv,
};
