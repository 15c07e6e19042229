//! Dataset loading with a known-good fallback.
//!
//! A load failure is never surfaced to the caller of `load_or_sample`:
//! the embedded sample fixture takes the dataset's place and the
//! failure is logged. Callers that need to distinguish use `try_load`.

use crate::error::{DataError, DataResult};
use crate::model::Dataset;

/// The embedded known-good fixture, compiled into the binary.
pub const SAMPLE_DATASET_JSON: &str = include_str!("../data/sample_dataset.json");

/// Parse the embedded fixture. The fixture ships inside the crate and
/// is covered by tests, so a parse failure here is a build defect.
pub fn sample() -> Dataset {
    serde_json::from_str(SAMPLE_DATASET_JSON).expect("embedded sample dataset is valid")
}

/// Read and parse a dataset file.
pub fn try_load(path: &str) -> DataResult<Dataset> {
    let content = std::fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_string(),
        source,
    })?;
    let dataset: Dataset = serde_json::from_str(&content)?;
    Ok(dataset)
}

/// Load a dataset, substituting the embedded fixture on any failure.
pub fn load_or_sample(path: &str) -> Dataset {
    match try_load(path) {
        Ok(dataset) => {
            log::info!(
                "loaded dataset from {path}: {} employees, {} tasks",
                dataset.employees.len(),
                dataset.tasks.len()
            );
            dataset
        }
        Err(err) => {
            log::warn!("{err}; falling back to the embedded sample dataset");
            sample()
        }
    }
}
