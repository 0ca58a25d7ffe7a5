pub mod errors;
pub mod logger;
pub mod query;
pub mod record;
pub mod source;

use crate::errors::StoreError;
use crate::query::{QueryParams, QueryResult};
use crate::record::{Record, RecordId};
use crate::source::{DataSource, FsSource, parse_dataset};
use std::path::Path;

/// The main store struct: resolves named datasets through its source and
/// answers queries over them.
///
/// Every call re-reads the dataset and rebuilds its own view, so concurrent
/// queries against the same logical dataset need no coordination and the
/// inputs are never mutated.
pub struct Store<S: DataSource = FsSource> {
    source: S,
}

impl Store<FsSource> {
    /// Opens a store over a directory of `<name>.json` dataset files.
    #[must_use]
    pub fn open<P: AsRef<Path>>(root: P) -> Self {
        Self { source: FsSource::new(root) }
    }
}

impl<S: DataSource> Store<S> {
    /// Wraps an arbitrary source. Configuration is passed in explicitly;
    /// the store reads no ambient process state.
    pub fn with_source(source: S) -> Self {
        Self { source }
    }

    /// Fetches and parses a dataset into its records.
    ///
    /// # Errors
    /// `FETCH_ERROR`, `INVALID_JSON`, `INVALID_STRUCTURE` or `LOAD_ERROR`
    /// per the load taxonomy.
    pub fn load(&self, dataset: &str) -> Result<Vec<Record>, StoreError> {
        let bytes = self.source.fetch(dataset)?;
        let records = parse_dataset(dataset, &bytes)?;
        log::debug!("load: dataset={dataset}, records={}", records.len());
        Ok(records)
    }

    /// Loads a dataset and runs a filter/sort/paginate query over it.
    ///
    /// Query-level edge cases (empty results, out-of-range pages, unknown
    /// sort fields) return empty/default results; only load failures error.
    ///
    /// # Errors
    /// Load errors as in [`Store::load`].
    pub fn query(&self, dataset: &str, params: &QueryParams) -> Result<QueryResult, StoreError> {
        let records = self.load(dataset)?;
        let result = query::query_records(&records, params);
        log::debug!(
            "query: dataset={dataset}, total={}, returned={}",
            result.meta.pagination.total,
            result.data.len()
        );
        Ok(result)
    }

    /// Loads a dataset and returns the record with the given `id`, ignoring
    /// any filter, sort or pagination parameters.
    ///
    /// # Errors
    /// `ITEM_NOT_FOUND` when absent, plus load errors as in [`Store::load`].
    pub fn get_item(&self, dataset: &str, id: &RecordId) -> Result<Record, StoreError> {
        let records = self.load(dataset)?;
        let record = query::find_record(&records, id)?;
        Ok(record.clone())
    }
}

/// Initializes the store library.
///
/// This function should be called before any other store operations.
/// It sets up the logger and other necessary components.
pub fn init() -> Result<(), Box<dyn std::error::Error>> {
    logger::init()?;
    Ok(())
}
