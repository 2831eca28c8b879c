use crate::error::Result;
use crate::models::{WeatherRecord, WEATHER_REQUIRED_COLUMNS};
use crate::readers::csv_table::read_table;
use crate::utils::constants::WEATHER_TABLE;
use std::path::Path;

pub struct WeatherReader;

impl WeatherReader {
    pub fn new() -> Self {
        Self
    }

    /// Read the per-observation weather table.
    pub fn read_records(&self, path: &Path) -> Result<Vec<WeatherRecord>> {
        read_table(WEATHER_TABLE, path, &WEATHER_REQUIRED_COLUMNS)
    }
}

impl Default for WeatherReader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProcessingError;
    use crate::models::{Measured, WeatherVariable};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_weather_file() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(
            file,
            "country,location_name,latitude,longitude,last_updated,temperature_celsius,humidity,precip_mm,wind_kph,pressure_mb,uv_index,feels_like_celsius"
        )?;
        writeln!(
            file,
            "Japan,Tokyo,35.69,139.69,2024-05-16 13:15,21.0,60,0.0,11.2,1012.0,5.0,21.3"
        )?;
        writeln!(
            file,
            "\"Korea, South\",Seoul,37.57,126.98,2024-05-16 13:15,19.5,,0.1,8.6,1015.0,4.0,19.5"
        )?;

        let records = WeatherReader::new().read_records(file.path())?;

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].location_name, "Tokyo");
        assert_eq!(records[0].last_updated.as_deref(), Some("2024-05-16 13:15"));
        assert_eq!(records[1].country, "Korea, South");
        assert_eq!(records[1].value(WeatherVariable::Humidity), None);
        assert_eq!(records[1].value(WeatherVariable::Temperature), Some(19.5));
        Ok(())
    }

    #[test]
    fn test_timestamp_column_is_optional() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(
            file,
            "country,location_name,latitude,longitude,temperature_celsius,humidity,precip_mm,wind_kph,pressure_mb,uv_index"
        )?;
        writeln!(file, "Chile,Santiago,-33.45,-70.67,12.0,70,0.0,5.0,1018.0,2.0")?;

        let records = WeatherReader::new().read_records(file.path())?;
        assert_eq!(records[0].last_updated, None);
        Ok(())
    }

    #[test]
    fn test_missing_measurement_column() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(
            file,
            "country,location_name,latitude,longitude,temperature_celsius,humidity,precip_mm,pressure_mb"
        )?;
        writeln!(file, "Chile,Santiago,-33.45,-70.67,12.0,70,0.0,1018.0")?;

        let err = WeatherReader::new().read_records(file.path()).unwrap_err();
        match err {
            ProcessingError::MissingColumn { columns, .. } => {
                assert_eq!(columns, vec!["wind_kph".to_string(), "uv_index".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
        Ok(())
    }
}
