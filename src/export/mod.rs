mod csv;
mod import;
mod json;

pub use csv::{write_absence_csv, write_time_csv};
pub use import::read_payload;
pub use json::write_json;

use clap::ValueEnum;

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }
}
