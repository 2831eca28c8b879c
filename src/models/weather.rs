use serde::{Deserialize, Serialize};

use crate::error::{ProcessingError, Result};
use crate::models::variable::{CountryKeyed, Measured, WeatherVariable};

/// Columns that must be present in the weather-record table header.
pub const WEATHER_REQUIRED_COLUMNS: [&str; 10] = [
    "country",
    "location_name",
    "latitude",
    "longitude",
    "temperature_celsius",
    "humidity",
    "precip_mm",
    "wind_kph",
    "pressure_mb",
    "uv_index",
];

/// One raw observation row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    pub country: String,
    pub location_name: String,
    pub latitude: f64,
    pub longitude: f64,

    // Empty cells deserialize to None and are skipped by statistics
    pub temperature_celsius: Option<f64>,
    pub humidity: Option<f64>,
    pub precip_mm: Option<f64>,
    pub wind_kph: Option<f64>,
    pub pressure_mb: Option<f64>,
    pub uv_index: Option<f64>,

    #[serde(default)]
    pub last_updated: Option<String>,
}

impl WeatherRecord {
    pub fn builder() -> WeatherRecordBuilder {
        WeatherRecordBuilder::new()
    }
}

impl Measured for WeatherRecord {
    fn value(&self, variable: WeatherVariable) -> Option<f64> {
        let value = match variable {
            WeatherVariable::Temperature => self.temperature_celsius,
            WeatherVariable::Humidity => self.humidity,
            WeatherVariable::Precipitation => self.precip_mm,
            WeatherVariable::WindSpeed => self.wind_kph,
            WeatherVariable::Pressure => self.pressure_mb,
            WeatherVariable::UvIndex => self.uv_index,
        };
        value.filter(|v| !v.is_nan())
    }
}

impl CountryKeyed for WeatherRecord {
    fn country(&self) -> &str {
        &self.country
    }
}

#[derive(Debug, Default)]
pub struct WeatherRecordBuilder {
    country: Option<String>,
    location_name: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    temperature_celsius: Option<f64>,
    humidity: Option<f64>,
    precip_mm: Option<f64>,
    wind_kph: Option<f64>,
    pressure_mb: Option<f64>,
    uv_index: Option<f64>,
    last_updated: Option<String>,
}

impl WeatherRecordBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn country(mut self, country: &str) -> Self {
        self.country = Some(country.to_string());
        self
    }

    pub fn location_name(mut self, name: &str) -> Self {
        self.location_name = Some(name.to_string());
        self
    }

    pub fn coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    pub fn temperature(mut self, celsius: f64) -> Self {
        self.temperature_celsius = Some(celsius);
        self
    }

    pub fn humidity(mut self, humidity: f64) -> Self {
        self.humidity = Some(humidity);
        self
    }

    pub fn precipitation(mut self, mm: f64) -> Self {
        self.precip_mm = Some(mm);
        self
    }

    pub fn wind(mut self, kph: f64) -> Self {
        self.wind_kph = Some(kph);
        self
    }

    pub fn pressure(mut self, mb: f64) -> Self {
        self.pressure_mb = Some(mb);
        self
    }

    pub fn uv_index(mut self, uv: f64) -> Self {
        self.uv_index = Some(uv);
        self
    }

    pub fn value(self, variable: WeatherVariable, value: f64) -> Self {
        match variable {
            WeatherVariable::Temperature => self.temperature(value),
            WeatherVariable::Humidity => self.humidity(value),
            WeatherVariable::Precipitation => self.precipitation(value),
            WeatherVariable::WindSpeed => self.wind(value),
            WeatherVariable::Pressure => self.pressure(value),
            WeatherVariable::UvIndex => self.uv_index(value),
        }
    }

    pub fn last_updated(mut self, timestamp: &str) -> Self {
        self.last_updated = Some(timestamp.to_string());
        self
    }

    pub fn build(self) -> Result<WeatherRecord> {
        Ok(WeatherRecord {
            country: self
                .country
                .ok_or_else(|| ProcessingError::MissingData("country".to_string()))?,
            location_name: self
                .location_name
                .ok_or_else(|| ProcessingError::MissingData("location_name".to_string()))?,
            latitude: self.latitude.unwrap_or_default(),
            longitude: self.longitude.unwrap_or_default(),
            temperature_celsius: self.temperature_celsius,
            humidity: self.humidity,
            precip_mm: self.precip_mm,
            wind_kph: self.wind_kph,
            pressure_mb: self.pressure_mb,
            uv_index: self.uv_index,
            last_updated: self.last_updated,
        })
    }
}
