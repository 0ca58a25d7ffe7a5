use serde_json::Value;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::errors::StoreError;
use crate::record::Record;

/// Supplies the raw bytes of a named dataset.
///
/// Implementations own the resolution of logical names to storage: the
/// bundled `FsSource` maps `"team"` to `<root>/team.json`; an HTTP source
/// would map it to a URL. Fetching happens once per store call and is never
/// cached here.
pub trait DataSource: Send + Sync {
    /// # Errors
    /// `FETCH_ERROR` when the dataset does not exist, `LOAD_ERROR` for any
    /// other retrieval failure.
    fn fetch(&self, name: &str) -> Result<Vec<u8>, StoreError>;
}

/// Reads datasets from `<root>/<name>.json` files.
pub struct FsSource {
    root: PathBuf,
}

impl FsSource {
    #[must_use]
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self { root: root.as_ref().to_path_buf() }
    }

    fn path_for(&self, name: &str) -> PathBuf {
        self.root.join(format!("{name}.json"))
    }
}

impl DataSource for FsSource {
    fn fetch(&self, name: &str) -> Result<Vec<u8>, StoreError> {
        let path = self.path_for(name);
        std::fs::read(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => StoreError::Fetch {
                name: name.to_string(),
                reason: format!("{} not found", path.display()),
            },
            _ => StoreError::Load { name: name.to_string(), reason: e.to_string() },
        })
    }
}

/// Parses a fetched dataset document into its records.
///
/// The document must be a JSON object with an array-valued `data` field, and
/// every element of `data` must itself be an object.
///
/// # Errors
/// `INVALID_JSON` if the bytes do not parse, `INVALID_STRUCTURE` if the
/// envelope or an element has the wrong shape.
pub fn parse_dataset(name: &str, bytes: &[u8]) -> Result<Vec<Record>, StoreError> {
    let document: Value = serde_json::from_slice(bytes).map_err(|e| StoreError::InvalidJson {
        name: name.to_string(),
        reason: e.to_string(),
    })?;
    let Some(data) = document.get("data").and_then(Value::as_array) else {
        return Err(StoreError::InvalidStructure { name: name.to_string() });
    };
    data.iter()
        .map(|entry| {
            entry
                .as_object()
                .cloned()
                .ok_or_else(|| StoreError::InvalidStructure { name: name.to_string() })
        })
        .collect()
}
