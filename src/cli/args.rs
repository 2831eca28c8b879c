use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "climatescope")]
#[command(
    about = "Descriptive statistics, trends and extreme events over a global weather dataset"
)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Log file path")]
    pub log_file: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Do not show the loading spinner")]
    pub quiet: bool,

    #[arg(
        short,
        long,
        global = true,
        help = "Configuration file [default: climatescope.toml if present]"
    )]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Weather records CSV (overrides configuration)")]
    pub weather: Option<PathBuf>,

    #[arg(long, global = true, help = "Monthly aggregates CSV (overrides configuration)")]
    pub monthly: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print a text report of every global view
    Summary,

    /// Emit global and filtered views for a selection as JSON
    View {
        #[arg(
            long = "country",
            help = "Country to include (repeatable) [default: first five alphabetically]"
        )]
        countries: Vec<String>,

        #[arg(
            long,
            num_args = 2,
            value_names = ["LO", "HI"],
            help = "Inclusive month range [default: 1 12]"
        )]
        months: Option<Vec<u32>>,

        #[arg(long, default_value = "temperature_celsius")]
        variable: String,

        #[arg(long, default_value = "false")]
        pretty: bool,
    },

    /// Show the extreme-event threshold and top countries for one variable
    Extremes {
        #[arg(long, default_value = "temperature_celsius")]
        variable: String,

        #[arg(long, help = "Quantile threshold [default: analysis.extreme_quantile]")]
        quantile: Option<f64>,

        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// List per-country monthly temperature trends
    Trends {
        #[arg(long, help = "Countries to fit [default: analysis.max_trend_countries]")]
        max_countries: Option<usize>,
    },
}
