//! Read-only restaurant catalog backed by two CSV tables.
//!
//! The catalog is loaded eagerly and in full when a repository is built. A
//! single bad row fails the whole load, so a repository either exists with
//! every row validated or does not exist at all.

mod reader;
pub mod repository;
pub mod source;

#[cfg(test)]
mod tests;

use crate::domain::{Cuisine, Restaurant, ValidationError};
use std::num::{ParseFloatError, ParseIntError};
use std::path::PathBuf;
use std::sync::Arc;

pub use repository::CsvRestaurantRepository;
pub use source::{CatalogSource, CsvDataSource};

/// Storage abstraction so the search service can be exercised in isolation.
pub trait RestaurantRepository: Send + Sync {
    /// Every restaurant in source order.
    fn find_all(&self) -> &[Restaurant];
    /// Every cuisine in source order.
    fn find_all_cuisines(&self) -> &[Arc<Cuisine>];
}

/// The two tables making up a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogTable {
    Cuisines,
    Restaurants,
}

impl CatalogTable {
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Cuisines => "cuisines.csv",
            Self::Restaurants => "restaurants.csv",
        }
    }

    pub const fn record_label(self) -> &'static str {
        match self {
            Self::Cuisines => "cuisine",
            Self::Restaurants => "restaurant",
        }
    }
}

/// Raised when a catalog cannot be opened, read, or validated.
#[derive(Debug, thiserror::Error)]
pub enum DataLoadError {
    #[error("Resource not found: {file}")]
    ResourceNotFound { file: &'static str },
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },
    #[error("Failed to open file: {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to read CSV data from {}", table.file_name())]
    Read {
        table: CatalogTable,
        #[source]
        source: std::io::Error,
    },
    #[error("CSV data is empty: {}", table.file_name())]
    Empty { table: CatalogTable },
    #[error("Failed to process CSV data from {}", table.file_name())]
    Csv {
        table: CatalogTable,
        #[source]
        source: csv::Error,
    },
    #[error("Duplicate cuisine id {id}")]
    DuplicateCuisineId { id: i64 },
    #[error("Invalid {} data: {row}", table.record_label())]
    InvalidRow {
        table: CatalogTable,
        row: String,
        #[source]
        source: RowError,
    },
}

/// Reason a single CSV row could not become a catalog entry.
#[derive(Debug, thiserror::Error)]
pub enum RowError {
    #[error("missing column '{column}' at index {index}")]
    MissingColumn { column: &'static str, index: usize },
    #[error("invalid integer '{value}' in column '{column}'")]
    InvalidInteger {
        column: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("invalid number '{value}' in column '{column}'")]
    InvalidNumber {
        column: &'static str,
        value: String,
        #[source]
        source: ParseFloatError,
    },
    #[error("{0}")]
    Validation(#[from] ValidationError),
}
