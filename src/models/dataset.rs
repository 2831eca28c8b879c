use std::collections::BTreeSet;

use crate::models::{MonthlyAggregate, WeatherRecord};

/// The two loaded tables. Immutable once constructed.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    weather: Vec<WeatherRecord>,
    monthly: Vec<MonthlyAggregate>,
}

impl Dataset {
    pub fn new(weather: Vec<WeatherRecord>, monthly: Vec<MonthlyAggregate>) -> Self {
        Self { weather, monthly }
    }

    pub fn weather(&self) -> &[WeatherRecord] {
        &self.weather
    }

    pub fn monthly(&self) -> &[MonthlyAggregate] {
        &self.monthly
    }

    /// Distinct countries of the weather table, sorted.
    pub fn countries(&self) -> Vec<String> {
        self.weather
            .iter()
            .map(|r| r.country.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    pub fn summary(&self) -> String {
        format!(
            "{} weather records, {} monthly rows, {} countries",
            self.weather.len(),
            self.monthly.len(),
            self.countries().len()
        )
    }
}
