use crate::analyzers::descriptive::quantile;
use crate::error::Result;
use crate::models::{CountryKeyed, Measured, WeatherRecord, WeatherVariable};
use serde::Serialize;
use std::collections::HashMap;

/// Rows at or above a variable's quantile threshold.
#[derive(Debug, Clone, Serialize)]
pub struct ExtremeEvents {
    pub variable: WeatherVariable,
    pub quantile: f64,
    pub threshold: f64,
    pub count: usize,
    #[serde(skip)]
    pub events: Vec<WeatherRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryCount {
    pub country: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventLocation {
    pub location_name: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
    pub value: f64,
}

/// Rows whose value for `variable` is `>= threshold`. Missing values never match.
pub fn extreme_events<T>(table: &[T], variable: WeatherVariable, threshold: f64) -> Vec<T>
where
    T: Measured + Clone,
{
    table
        .iter()
        .filter(|row| row.value(variable).is_some_and(|v| v >= threshold))
        .cloned()
        .collect()
}

impl ExtremeEvents {
    /// Threshold at quantile `q` of the whole table, then the rows meeting it.
    pub fn detect(table: &[WeatherRecord], variable: WeatherVariable, q: f64) -> Result<Self> {
        let threshold = quantile(table, variable, q)?;
        let events = extreme_events(table, variable, threshold);
        Ok(Self {
            variable,
            quantile: q,
            threshold,
            count: events.len(),
            events,
        })
    }

    pub fn label(&self) -> String {
        format!(
            "Extreme {}: {} events (>= {:.1}{})",
            self.variable.display_name(),
            self.count,
            self.threshold,
            self.variable.units()
        )
    }

    pub fn counts_by_country(&self, n: usize) -> Vec<CountryCount> {
        counts_by_country(&self.events, n)
    }

    pub fn locations(&self, n: usize) -> Vec<EventLocation> {
        self.events
            .iter()
            .take(n)
            .filter_map(|r| {
                Some(EventLocation {
                    location_name: r.location_name.clone(),
                    country: r.country.clone(),
                    latitude: r.latitude,
                    longitude: r.longitude,
                    value: r.value(self.variable)?,
                })
            })
            .collect()
    }
}

/// Row count per country, descending; ties ordered by country name.
pub fn counts_by_country<T: CountryKeyed>(rows: &[T], n: usize) -> Vec<CountryCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for row in rows {
        *counts.entry(row.country()).or_insert(0) += 1;
    }

    let mut ranked: Vec<CountryCount> = counts
        .into_iter()
        .map(|(country, count)| CountryCount {
            country: country.to_string(),
            count,
        })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.country.cmp(&b.country)));
    ranked.truncate(n);
    ranked
}
