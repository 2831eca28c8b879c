use crate::error::Result;
use crate::models::Dataset;
use std::sync::{Arc, OnceLock};
use tracing::debug;

/// Once-initialized, shared, read-only handle to the loaded tables.
///
/// The first successful initializer wins. Racing initializers may each read the
/// files, but every caller observes the same `Arc<Dataset>` afterwards. Failed
/// loads leave the handle empty.
#[derive(Debug, Default)]
pub struct DatasetHandle {
    cell: OnceLock<Arc<Dataset>>,
}

impl DatasetHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<Arc<Dataset>> {
        self.cell.get().cloned()
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }

    pub fn get_or_load<F>(&self, load: F) -> Result<Arc<Dataset>>
    where
        F: FnOnce() -> Result<Dataset>,
    {
        if let Some(dataset) = self.cell.get() {
            return Ok(Arc::clone(dataset));
        }

        let loaded = Arc::new(load()?);
        let stored = self.cell.get_or_init(|| Arc::clone(&loaded));
        if !Arc::ptr_eq(stored, &loaded) {
            debug!("Dataset already initialized by another caller; discarding duplicate load");
        }
        Ok(Arc::clone(stored))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProcessingError;
    use crate::models::WeatherRecord;
    use std::path::PathBuf;

    fn one_record_dataset(country: &str) -> Dataset {
        let record = WeatherRecord::builder()
            .country(country)
            .location_name("Capital")
            .build()
            .unwrap();
        Dataset::new(vec![record], Vec::new())
    }

    #[test]
    fn test_loads_once() -> Result<()> {
        let handle = DatasetHandle::new();
        let mut calls = 0;

        let first = handle.get_or_load(|| {
            calls += 1;
            Ok(one_record_dataset("Fiji"))
        })?;
        let second = handle.get_or_load(|| {
            calls += 1;
            Ok(one_record_dataset("Tonga"))
        })?;

        assert_eq!(calls, 1);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second.weather()[0].country, "Fiji");
        Ok(())
    }

    #[test]
    fn test_handle_keeps_the_loaded_dataset() -> Result<()> {
        let handle = DatasetHandle::new();
        let loaded = handle.get_or_load(|| Ok(one_record_dataset("Samoa")))?;

        let stored = handle.get().unwrap();
        assert!(Arc::ptr_eq(&loaded, &stored));
        assert_eq!(stored.weather().len(), 1);
        assert_eq!(stored.weather()[0].country, "Samoa");
        Ok(())
    }

    #[test]
    fn test_failed_load_leaves_handle_empty() {
        let handle = DatasetHandle::new();
        let result = handle.get_or_load(|| {
            Err(ProcessingError::FileNotFound {
                path: PathBuf::from("missing.csv"),
            })
        });

        assert!(result.is_err());
        assert!(!handle.is_loaded());
        assert!(handle.get().is_none());
    }

    #[test]
    fn test_concurrent_initializers_share_one_dataset() {
        let handle = Arc::new(DatasetHandle::new());
        let threads: Vec<_> = (0..4)
            .map(|i| {
                let handle = Arc::clone(&handle);
                std::thread::spawn(move || {
                    handle
                        .get_or_load(|| Ok(one_record_dataset(&format!("Country {i}"))))
                        .unwrap()
                })
            })
            .collect();

        let results: Vec<Arc<Dataset>> = threads.into_iter().map(|t| t.join().unwrap()).collect();
        for dataset in &results {
            assert!(Arc::ptr_eq(dataset, &results[0]));
        }
    }
}
