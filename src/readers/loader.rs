use crate::config::DataSettings;
use crate::error::Result;
use crate::models::Dataset;
use crate::readers::{MonthlyReader, WeatherReader};
use crate::utils::progress::ProgressReporter;
use std::path::PathBuf;
use tracing::info;

/// Reads both input tables into a [`Dataset`].
pub struct DataLoader {
    weather_path: PathBuf,
    monthly_path: PathBuf,
}

impl DataLoader {
    pub fn new(weather_path: impl Into<PathBuf>, monthly_path: impl Into<PathBuf>) -> Self {
        Self {
            weather_path: weather_path.into(),
            monthly_path: monthly_path.into(),
        }
    }

    pub fn from_settings(settings: &DataSettings) -> Self {
        Self::new(&settings.weather_path, &settings.monthly_path)
    }

    pub fn load(&self) -> Result<Dataset> {
        self.load_with_progress(None)
    }

    pub fn load_with_progress(&self, progress: Option<&ProgressReporter>) -> Result<Dataset> {
        if let Some(p) = progress {
            p.set_message("Reading weather records...");
        }
        let weather = WeatherReader::new().read_records(&self.weather_path)?;
        info!(
            path = %self.weather_path.display(),
            records = weather.len(),
            "Loaded weather records"
        );

        if let Some(p) = progress {
            p.set_message("Reading monthly aggregates...");
        }
        let monthly = MonthlyReader::new().read_aggregates(&self.monthly_path)?;
        info!(
            path = %self.monthly_path.display(),
            rows = monthly.len(),
            "Loaded monthly aggregates"
        );

        let dataset = Dataset::new(weather, monthly);
        if let Some(p) = progress {
            p.finish_with_message(&format!("Loaded {}", dataset.summary()));
        }
        Ok(dataset)
    }
}
