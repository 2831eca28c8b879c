/// Default input file names
pub const DEFAULT_WEATHER_FILE: &str = "cleaned_weather_data.csv";
pub const DEFAULT_MONTHLY_FILE: &str = "monthly_weather_data.csv";

/// Default configuration file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "climatescope.toml";
pub const ENV_PREFIX: &str = "CLIMATESCOPE";

/// Table names used in error messages
pub const WEATHER_TABLE: &str = "weather records";
pub const MONTHLY_TABLE: &str = "monthly aggregates";

/// Analysis defaults
pub const DEFAULT_EXTREME_QUANTILE: f64 = 0.95;
pub const DEFAULT_MAX_TREND_COUNTRIES: usize = 10;
pub const DEFAULT_HISTOGRAM_BINS: usize = 50;
pub const DEFAULT_COUNTRY_COUNT: usize = 5;
pub const DEFAULT_TOP_N: usize = 10;
pub const DEFAULT_EXTREME_SAMPLE: usize = 1000;
pub const DEFAULT_SCATTER_SAMPLE: usize = 5000;
pub const DEFAULT_DATA_SAMPLE: usize = 10;

/// Month bounds
pub const FIRST_MONTH: u32 = 1;
pub const LAST_MONTH: u32 = 12;
