use serde::{Deserialize, Serialize};

use crate::models::variable::{CountryKeyed, Measured, WeatherVariable};

/// Columns that must be present in the monthly-aggregate table header.
pub const MONTHLY_REQUIRED_COLUMNS: [&str; 8] = [
    "country",
    "month",
    "temperature_celsius",
    "humidity",
    "precip_mm",
    "wind_kph",
    "pressure_mb",
    "uv_index",
];

/// Raw monthly row as stored on disk, before `month_num` is derived.
#[derive(Debug, Clone, Deserialize)]
pub struct RawMonthlyRow {
    pub country: String,
    pub month: String,
    pub temperature_celsius: Option<f64>,
    pub humidity: Option<f64>,
    pub precip_mm: Option<f64>,
    pub wind_kph: Option<f64>,
    pub pressure_mb: Option<f64>,
    pub uv_index: Option<f64>,
}

/// One pre-aggregated (country, month) row of monthly means.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyAggregate {
    pub country: String,
    pub month: String,
    pub month_num: u32,
    pub temperature_celsius: Option<f64>,
    pub humidity: Option<f64>,
    pub precip_mm: Option<f64>,
    pub wind_kph: Option<f64>,
    pub pressure_mb: Option<f64>,
    pub uv_index: Option<f64>,
}

impl MonthlyAggregate {
    pub fn from_raw(raw: RawMonthlyRow, month_num: u32) -> Self {
        Self {
            country: raw.country,
            month: raw.month,
            month_num,
            temperature_celsius: raw.temperature_celsius,
            humidity: raw.humidity,
            precip_mm: raw.precip_mm,
            wind_kph: raw.wind_kph,
            pressure_mb: raw.pressure_mb,
            uv_index: raw.uv_index,
        }
    }

    /// Row with only a temperature reading, the shape trend fitting needs.
    pub fn with_temperature(country: &str, month_num: u32, temperature: f64) -> Self {
        Self {
            country: country.to_string(),
            month: format!("{month_num:02}"),
            month_num,
            temperature_celsius: Some(temperature),
            humidity: None,
            precip_mm: None,
            wind_kph: None,
            pressure_mb: None,
            uv_index: None,
        }
    }
}

impl Measured for MonthlyAggregate {
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

impl CountryKeyed for MonthlyAggregate {
    fn country(&self) -> &str {
        &self.country
    }
}
