use crate::error::{ProcessingError, Result};
use serde::{Deserialize, Serialize};

/// The six numeric weather variables tracked by every derived view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherVariable {
    #[serde(rename = "temperature_celsius")]
    Temperature,
    Humidity,
    #[serde(rename = "precip_mm")]
    Precipitation,
    #[serde(rename = "wind_kph")]
    WindSpeed,
    #[serde(rename = "pressure_mb")]
    Pressure,
    UvIndex,
}

impl WeatherVariable {
    /// Fixed analysis order, matching the column order of the input tables.
    pub const ALL: [WeatherVariable; 6] = [
        WeatherVariable::Temperature,
        WeatherVariable::Humidity,
        WeatherVariable::Precipitation,
        WeatherVariable::WindSpeed,
        WeatherVariable::Pressure,
        WeatherVariable::UvIndex,
    ];

    pub fn column_name(&self) -> &'static str {
        match self {
            WeatherVariable::Temperature => "temperature_celsius",
            WeatherVariable::Humidity => "humidity",
            WeatherVariable::Precipitation => "precip_mm",
            WeatherVariable::WindSpeed => "wind_kph",
            WeatherVariable::Pressure => "pressure_mb",
            WeatherVariable::UvIndex => "uv_index",
        }
    }

    pub fn from_column_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|var| var.column_name() == name.trim())
    }

    /// Resolve a column name, failing the way a table lookup on an absent column would.
    pub fn from_column(table: &str, name: &str) -> Result<Self> {
        Self::from_column_name(name)
            .ok_or_else(|| ProcessingError::missing_column(table, vec![name.to_string()]))
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            WeatherVariable::Temperature => "Temperature",
            WeatherVariable::Humidity => "Humidity",
            WeatherVariable::Precipitation => "Precipitation",
            WeatherVariable::WindSpeed => "Wind Speed",
            WeatherVariable::Pressure => "Pressure",
            WeatherVariable::UvIndex => "UV Index",
        }
    }

    pub fn units(&self) -> &'static str {
        match self {
            WeatherVariable::Temperature => "°C",
            WeatherVariable::Humidity => "%",
            WeatherVariable::Precipitation => "mm",
            WeatherVariable::WindSpeed => "kph",
            WeatherVariable::Pressure => "mb",
            WeatherVariable::UvIndex => "",
        }
    }
}

impl std::fmt::Display for WeatherVariable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.column_name())
    }
}

/// Row access by variable, shared by both input tables.
pub trait Measured {
    fn value(&self, variable: WeatherVariable) -> Option<f64>;
}

/// Rows that belong to a country.
pub trait CountryKeyed {
    fn country(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_name_round_trip() {
        for var in WeatherVariable::ALL {
            assert_eq!(WeatherVariable::from_column_name(var.column_name()), Some(var));
        }
        assert_eq!(WeatherVariable::from_column_name("visibility_km"), None);
    }

    #[test]
    fn test_unknown_column_is_missing_column_error() {
        let err = WeatherVariable::from_column("weather", "feels_like").unwrap_err();
        match err {
            ProcessingError::MissingColumn { table, columns } => {
                assert_eq!(table, "weather");
                assert_eq!(columns, vec!["feels_like".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_serde_uses_column_names() {
        let json = serde_json::to_string(&WeatherVariable::WindSpeed).unwrap();
        assert_eq!(json, "\"wind_kph\"");
        let var: WeatherVariable = serde_json::from_str("\"uv_index\"").unwrap();
        assert_eq!(var, WeatherVariable::UvIndex);
    }

    #[test]
    fn test_display_and_units() {
        assert_eq!(WeatherVariable::Temperature.to_string(), "temperature_celsius");
        assert_eq!(WeatherVariable::Precipitation.display_name(), "Precipitation");
        assert_eq!(WeatherVariable::Pressure.units(), "mb");
    }
}
