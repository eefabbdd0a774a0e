use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for abstracker
/// CLI application to track absences, overtime and working hours
#[derive(Parser)]
#[command(
    name = "abstracker",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track absences, overtime and working hours, with weekly/monthly/yearly pay summaries",
    long_about = None
)]
pub struct Cli {
    /// Override store file path (useful for tests or custom locations)
    #[arg(global = true, long = "store")]
    pub store: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and an empty store
    Init,

    /// Show or change settings (holidays limit, hourly rate, currency)
    Config {
        #[arg(long = "print", help = "Print the current settings")]
        print_config: bool,

        #[arg(long = "limit", help = "Holidays limit in days (0.5 steps)")]
        limit: Option<f64>,

        #[arg(long = "rate", help = "Hourly rate (2 decimals)")]
        rate: Option<f64>,

        #[arg(long = "currency", help = "Currency label: PLN, EUR or GBP")]
        currency: Option<String>,
    },

    /// Add a single entry to a list
    Add {
        /// Target list: holidays, sickness, childcare, overtimes, hours
        list: String,

        /// Date of the entry (YYYY-MM-DD)
        date: String,

        #[arg(long = "half", help = "Half day instead of full day (absence lists)")]
        half: bool,

        #[arg(long = "time", help = "Duration as HH:MM (overtimes and hours)")]
        time: Option<String>,

        #[arg(long = "mult", help = "Overtime multiplier, >= 1")]
        mult: Option<f64>,

        #[arg(long = "note")]
        note: Option<String>,

        #[arg(long = "cert", help = "Sickness certificate info")]
        cert: Option<String>,

        #[arg(long = "contact", help = "Sickness contact info")]
        contact: Option<String>,

        #[arg(long = "child", help = "Child name (childcare)")]
        child: Option<String>,

        #[arg(long = "reason", help = "Childcare reason")]
        reason: Option<String>,
    },

    /// Add one entry per day over an inclusive date range
    AddRange {
        /// Target list: holidays, sickness, childcare, overtimes, hours
        list: String,

        /// First date of the range (YYYY-MM-DD)
        from: String,

        /// Last date of the range (YYYY-MM-DD)
        to: String,

        #[arg(long = "half")]
        half: bool,

        #[arg(long = "time")]
        time: Option<String>,

        #[arg(long = "mult")]
        mult: Option<f64>,

        #[arg(long = "note")]
        note: Option<String>,

        #[arg(long = "cert")]
        cert: Option<String>,

        #[arg(long = "contact")]
        contact: Option<String>,

        #[arg(long = "child")]
        child: Option<String>,

        #[arg(long = "reason")]
        reason: Option<String>,
    },

    /// Delete one entry by id
    Del {
        list: String,

        #[arg(long = "id")]
        id: u32,
    },

    /// Remove every entry from one list
    Clear {
        list: String,

        #[arg(long = "yes", help = "Confirm the operation")]
        yes: bool,
    },

    /// Wipe all lists and restore default settings
    Reset {
        #[arg(long = "yes", help = "Confirm the operation")]
        yes: bool,
    },

    /// Print one list sorted by date
    List { list: String },

    /// Week/month/year totals and pay for the period containing a date
    Summary {
        #[arg(long = "date", help = "Anchor date (YYYY-MM-DD), default today")]
        date: Option<String>,
    },

    /// Historical per-week overview, most recent first
    Weekly {
        #[arg(long = "count", default_value_t = 16, help = "Number of weeks to show")]
        count: usize,
    },

    /// Export settings and all lists to a file
    Export {
        #[arg(long = "file")]
        file: String,

        #[arg(long = "format", value_enum, default_value = "json")]
        format: ExportFormat,

        #[arg(long = "list", help = "List to export (CSV only)")]
        list: Option<String>,
    },

    /// Import a previously exported JSON backup
    Import {
        #[arg(long = "file")]
        file: String,
    },
}
