use crate::error::{ProcessingError, Result};
use crate::models::{MonthlyAggregate, RawMonthlyRow, MONTHLY_REQUIRED_COLUMNS};
use crate::readers::csv_table::read_table;
use crate::utils::constants::MONTHLY_TABLE;
use crate::utils::month::parse_month_label;
use std::path::Path;

pub struct MonthlyReader;

impl MonthlyReader {
    pub fn new() -> Self {
        Self
    }

    /// Read the monthly-aggregate table and derive `month_num` from each `month` label.
    pub fn read_aggregates(&self, path: &Path) -> Result<Vec<MonthlyAggregate>> {
        let raw: Vec<RawMonthlyRow> = read_table(MONTHLY_TABLE, path, &MONTHLY_REQUIRED_COLUMNS)?;
        raw.into_iter().map(Self::derive_month_num).collect()
    }

    fn derive_month_num(row: RawMonthlyRow) -> Result<MonthlyAggregate> {
        let month_num = parse_month_label(&row.month).ok_or_else(|| {
            ProcessingError::data_format(
                MONTHLY_TABLE,
                format!("Unparseable month label: '{}'", row.month),
            )
        })?;
        Ok(MonthlyAggregate::from_raw(row, month_num))
    }
}

impl Default for MonthlyReader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str =
        "country,month,temperature_celsius,humidity,precip_mm,wind_kph,pressure_mb,uv_index";

    #[test]
    fn test_read_monthly_file() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "{HEADER}")?;
        writeln!(file, "Japan,2024-05,20.1,65,0.3,10.0,1011.0,6.0")?;
        writeln!(file, "Japan,2024-06,24.8,72,0.9,9.0,1008.0,7.0")?;
        writeln!(file, "Chile,2024-06-01,9.7,80,1.2,6.0,1020.0,2.0")?;

        let rows = MonthlyReader::new().read_aggregates(file.path())?;

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].month_num, 5);
        assert_eq!(rows[1].month_num, 6);
        assert_eq!(rows[2].month_num, 6);
        assert_eq!(rows[2].month, "2024-06-01");
        Ok(())
    }

    #[test]
    fn test_timestamp_and_year_labels() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "{HEADER}")?;
        writeln!(file, "Kenya,2024-05-01T00:00:00Z,19.5,70,2.0,8.0,1015.0,9.0")?;
        writeln!(file, "Kenya,2024-08-01 00:00:00+00:00,18.0,66,0.4,9.0,1016.0,8.0")?;
        writeln!(file, "Kenya,\"May 16, 2024\",19.9,71,2.2,8.0,1015.0,9.0")?;
        writeln!(file, "Kenya,2024,21.0,60,0.8,7.0,1014.0,10.0")?;

        let rows = MonthlyReader::new().read_aggregates(file.path())?;

        let months: Vec<u32> = rows.iter().map(|r| r.month_num).collect();
        assert_eq!(months, vec![5, 8, 5, 1]);
        Ok(())
    }

    #[test]
    fn test_unparseable_month_fails() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "{HEADER}")?;
        writeln!(file, "Japan,sometime,20.1,65,0.3,10.0,1011.0,6.0")?;

        let err = MonthlyReader::new().read_aggregates(file.path()).unwrap_err();
        match err {
            ProcessingError::DataFormat { table, message } => {
                assert_eq!(table, MONTHLY_TABLE);
                assert!(message.contains("sometime"));
            }
            other => panic!("unexpected error: {other}"),
        }
        Ok(())
    }

    #[test]
    fn test_missing_month_column() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(
            file,
            "country,temperature_celsius,humidity,precip_mm,wind_kph,pressure_mb,uv_index"
        )?;
        writeln!(file, "Japan,20.1,65,0.3,10.0,1011.0,6.0")?;

        let err = MonthlyReader::new().read_aggregates(file.path()).unwrap_err();
        match err {
            ProcessingError::MissingColumn { columns, .. } => {
                assert_eq!(columns, vec!["month".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
        Ok(())
    }
}
