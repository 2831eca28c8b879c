use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use tracing::debug;
use validator::Validate;

use crate::error::Result;
use crate::utils::constants::*;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    pub data: DataSettings,
    pub analysis: AnalysisSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSettings {
    pub weather_path: PathBuf,
    pub monthly_path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AnalysisSettings {
    #[validate(range(min = 0.0, max = 1.0))]
    pub extreme_quantile: f64,

    #[validate(range(min = 1))]
    pub max_trend_countries: usize,

    #[validate(range(min = 1, max = 10000))]
    pub histogram_bins: usize,

    pub default_country_count: usize,

    #[validate(range(min = 1))]
    pub top_n: usize,

    pub extreme_sample: usize,
    pub scatter_sample: usize,
    pub data_sample: usize,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            weather_path: PathBuf::from(DEFAULT_WEATHER_FILE),
            monthly_path: PathBuf::from(DEFAULT_MONTHLY_FILE),
        }
    }
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            extreme_quantile: DEFAULT_EXTREME_QUANTILE,
            max_trend_countries: DEFAULT_MAX_TREND_COUNTRIES,
            histogram_bins: DEFAULT_HISTOGRAM_BINS,
            default_country_count: DEFAULT_COUNTRY_COUNT,
            top_n: DEFAULT_TOP_N,
            extreme_sample: DEFAULT_EXTREME_SAMPLE,
            scatter_sample: DEFAULT_SCATTER_SAMPLE,
            data_sample: DEFAULT_DATA_SAMPLE,
        }
    }
}

impl Settings {
    /// Layer defaults, an optional config file and `CLIMATESCOPE__*` environment variables.
    ///
    /// An explicitly named file must exist; the default `climatescope.toml` is optional.
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let defaults = AnalysisSettings::default();
        let data = DataSettings::default();

        let mut builder = Config::builder()
            .set_default("data.weather_path", data.weather_path.to_string_lossy().as_ref())?
            .set_default("data.monthly_path", data.monthly_path.to_string_lossy().as_ref())?
            .set_default("analysis.extreme_quantile", defaults.extreme_quantile)?
            .set_default(
                "analysis.max_trend_countries",
                defaults.max_trend_countries as i64,
            )?
            .set_default("analysis.histogram_bins", defaults.histogram_bins as i64)?
            .set_default(
                "analysis.default_country_count",
                defaults.default_country_count as i64,
            )?
            .set_default("analysis.top_n", defaults.top_n as i64)?
            .set_default("analysis.extreme_sample", defaults.extreme_sample as i64)?
            .set_default("analysis.scatter_sample", defaults.scatter_sample as i64)?
            .set_default("analysis.data_sample", defaults.data_sample as i64)?;

        builder = match config_file {
            Some(path) => {
                debug!(path = %path.display(), "Reading configuration file");
                builder.add_source(File::from(path).required(true))
            }
            None => builder.add_source(File::from(Path::new(DEFAULT_CONFIG_FILE)).required(false)),
        };

        let settings: Settings = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        settings.check()?;
        Ok(settings)
    }

    pub fn check(&self) -> Result<()> {
        self.analysis.validate()?;
        Ok(())
    }

    pub fn with_weather_path(mut self, path: PathBuf) -> Self {
        self.data.weather_path = path;
        self
    }

    pub fn with_monthly_path(mut self, path: PathBuf) -> Self {
        self.data.monthly_path = path;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProcessingError;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.check().is_ok());
        assert_eq!(settings.analysis.extreme_quantile, 0.95);
        assert_eq!(settings.analysis.max_trend_countries, 10);
        assert_eq!(
            settings.data.weather_path,
            PathBuf::from("cleaned_weather_data.csv")
        );
    }

    #[test]
    fn test_file_overrides_defaults() -> Result<()> {
        let mut file = Builder::new().suffix(".toml").tempfile()?;
        writeln!(file, "[data]")?;
        writeln!(file, "weather_path = \"data/weather.csv\"")?;
        writeln!(file, "[analysis]")?;
        writeln!(file, "max_trend_countries = 3")?;
        writeln!(file, "extreme_quantile = 0.9")?;

        let settings = Settings::load(Some(file.path()))?;

        assert_eq!(settings.data.weather_path, PathBuf::from("data/weather.csv"));
        assert_eq!(
            settings.data.monthly_path,
            PathBuf::from("monthly_weather_data.csv")
        );
        assert_eq!(settings.analysis.max_trend_countries, 3);
        assert_eq!(settings.analysis.extreme_quantile, 0.9);
        assert_eq!(settings.analysis.histogram_bins, 50);
        Ok(())
    }

    #[test]
    fn test_out_of_range_quantile_is_rejected() -> Result<()> {
        let mut file = Builder::new().suffix(".toml").tempfile()?;
        writeln!(file, "[analysis]")?;
        writeln!(file, "extreme_quantile = 1.5")?;

        let result = Settings::load(Some(file.path()));
        assert!(matches!(result, Err(ProcessingError::Validation(_))));
        Ok(())
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let result = Settings::load(Some(Path::new("/definitely/not/here.toml")));
        assert!(matches!(result, Err(ProcessingError::Config(_))));
    }
}
