//! Dataset loading and lookup.
//!
//! The dataset is a single JSON document whose top-level keys are category
//! names. It is read once at startup and never mutated afterwards.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info};

use crate::constants::DEFAULT_CATEGORY;
use crate::models::CategoryPack;

/// Failure to read or parse the dataset document.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file could not be read
    #[error("Failed to read dataset {}: {source}", path.display())]
    Io {
        /// Path that was attempted
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON
    #[error("Failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),

    /// The top-level value is not an object
    #[error("Dataset must be a JSON object keyed by category name")]
    NotAnObject,

    /// A category value does not have the expected shape
    #[error("Category '{category}' is malformed: {source}")]
    InvalidCategory {
        /// Offending category name
        category: String,
        /// Deserialization error for that category
        #[source]
        source: serde_json::Error,
    },
}

/// Loaded dataset with stable category ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataStore {
    /// Category names in source-document order
    categories: Vec<String>,
    /// Packs in the same order as `categories`
    packs: Vec<CategoryPack>,
}

impl DataStore {
    /// Reads and parses the dataset at `path`.
    ///
    /// A single attempt is made; there is no retry.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        debug!(path = %path.display(), "loading dataset");
        let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::from_json_str(&content)?;
        info!(
            path = %path.display(),
            categories = store.len(),
            "dataset loaded"
        );
        Ok(store)
    }

    /// Parses a dataset from an in-memory JSON document.
    pub fn from_json_str(content: &str) -> Result<Self, LoadError> {
        let value: Value = serde_json::from_str(content)?;
        let Value::Object(map) = value else {
            return Err(LoadError::NotAnObject);
        };

        let mut categories = Vec::with_capacity(map.len());
        let mut packs = Vec::with_capacity(map.len());
        for (name, raw) in map {
            let pack: CategoryPack =
                serde_json::from_value(raw).map_err(|source| LoadError::InvalidCategory {
                    category: name.clone(),
                    source,
                })?;
            categories.push(name);
            packs.push(pack);
        }

        Ok(Self { categories, packs })
    }

    /// Category names in source order.
    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Records for `name`, if the category exists.
    #[must_use]
    pub fn pack(&self, name: &str) -> Option<&CategoryPack> {
        self.index_of(name).map(|i| &self.packs[i])
    }

    /// Position of `name` in the category ordering.
    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.categories.iter().position(|c| c == name)
    }

    /// Whether `name` is a category of this dataset.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    /// Number of categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Whether no categories were loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Chooses the category shown on startup.
    ///
    /// The fixed default wins whenever present, even over a valid saved
    /// preference. Otherwise the saved value is used if it still names a
    /// category, and finally the first category. Returns `None` only for an
    /// empty dataset.
    #[must_use]
    pub fn initial_category(&self, saved: Option<&str>) -> Option<&str> {
        if let Some(i) = self.index_of(DEFAULT_CATEGORY) {
            return Some(&self.categories[i]);
        }
        if let Some(i) = saved.and_then(|name| self.index_of(name)) {
            return Some(&self.categories[i]);
        }
        self.categories.first().map(String::as_str)
    }
}
