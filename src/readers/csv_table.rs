use crate::error::{ProcessingError, Result};
use csv::{Reader, ReaderBuilder, StringRecord, Trim};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::path::Path;
use tracing::debug;

/// Open a headed CSV file, failing with `FileNotFound` when the path is absent.
pub fn open_csv(path: &Path) -> Result<Reader<File>> {
    if !path.exists() {
        return Err(ProcessingError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_path(path)?;
    Ok(reader)
}

/// Check a header row against the required column list, reporting every absent name.
pub fn check_columns(table: &str, headers: &StringRecord, required: &[&str]) -> Result<()> {
    let missing: Vec<String> = required
        .iter()
        .filter(|column| !headers.iter().any(|h| h == **column))
        .map(|column| column.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ProcessingError::missing_column(table, missing))
    }
}

/// Deserialize every row of a CSV table after verifying its header.
///
/// Row errors are reported as `DataFormat` with the offending line number.
pub fn read_table<T: DeserializeOwned>(
    table: &str,
    path: &Path,
    required: &[&str],
) -> Result<Vec<T>> {
    let mut reader = open_csv(path)?;
    let headers = reader.headers()?.clone();
    check_columns(table, &headers, required)?;

    let mut rows = Vec::new();
    for result in reader.deserialize::<T>() {
        let row = result.map_err(|e| {
            let line = e
                .position()
                .map(|p| p.line().to_string())
                .unwrap_or_else(|| "?".to_string());
            ProcessingError::data_format(table, format!("line {}: {}", line, e))
        })?;
        rows.push(row);
    }

    debug!(table, rows = rows.len(), path = %path.display(), "Read CSV table");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[derive(Debug, Deserialize)]
    struct Row {
        name: String,
        value: Option<f64>,
    }

    #[test]
    fn test_read_table() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "name,value,extra")?;
        writeln!(file, "a, 1.5 ,x")?;
        writeln!(file, "b,,y")?;

        let rows: Vec<Row> = read_table("test", file.path(), &["name", "value"])?;

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "a");
        assert_eq!(rows[0].value, Some(1.5));
        assert_eq!(rows[1].value, None);
        Ok(())
    }

    #[test]
    fn test_missing_columns_are_all_reported() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "name")?;
        writeln!(file, "a")?;

        let err = read_table::<Row>("test", file.path(), &["name", "value", "other"]).unwrap_err();
        match err {
            ProcessingError::MissingColumn { table, columns } => {
                assert_eq!(table, "test");
                assert_eq!(columns, vec!["value".to_string(), "other".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
        Ok(())
    }

    #[test]
    fn test_malformed_row_is_data_format_error() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "name,value")?;
        writeln!(file, "a,1.0")?;
        writeln!(file, "b,warm")?;

        let err = read_table::<Row>("test", file.path(), &["name", "value"]).unwrap_err();
        match err {
            ProcessingError::DataFormat { table, message } => {
                assert_eq!(table, "test");
                assert!(message.starts_with("line 3"), "{message}");
            }
            other => panic!("unexpected error: {other}"),
        }
        Ok(())
    }

    #[test]
    fn test_missing_file() {
        let err = open_csv(Path::new("/no/such/table.csv")).unwrap_err();
        assert!(matches!(err, ProcessingError::FileNotFound { .. }));
    }
}
