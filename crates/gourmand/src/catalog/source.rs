use super::{CatalogTable, DataLoadError};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

const BUNDLED_TABLES: &[(&str, &str)] = &[
    ("cuisines.csv", include_str!("../../data/cuisines.csv")),
    ("restaurants.csv", include_str!("../../data/restaurants.csv")),
];

/// Provider of the raw byte streams behind a catalog.
pub trait CatalogSource {
    fn open(&self, table: CatalogTable) -> Result<Box<dyn Read + '_>, DataLoadError>;
}

/// Catalog tables either compiled into the binary or read from a directory
/// holding `restaurants.csv` and `cuisines.csv`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CsvDataSource {
    Bundled,
    Directory(PathBuf),
}

impl CsvDataSource {
    pub fn bundled() -> Self {
        Self::Bundled
    }

    /// Fails unless both tables can be opened, so a source that exists is
    /// never half available.
    pub fn from_directory<P: Into<PathBuf>>(directory: P) -> Result<Self, DataLoadError> {
        let source = Self::Directory(directory.into());
        source.open(CatalogTable::Restaurants)?;
        source.open(CatalogTable::Cuisines)?;
        Ok(source)
    }

    pub fn directory(&self) -> Option<&Path> {
        match self {
            Self::Bundled => None,
            Self::Directory(path) => Some(path.as_path()),
        }
    }
}

impl Default for CsvDataSource {
    fn default() -> Self {
        Self::bundled()
    }
}

impl CatalogSource for CsvDataSource {
    fn open(&self, table: CatalogTable) -> Result<Box<dyn Read + '_>, DataLoadError> {
        let file_name = table.file_name();
        match self {
            Self::Bundled => {
                let content = BUNDLED_TABLES
                    .iter()
                    .find(|(name, _)| *name == file_name)
                    .map(|(_, content)| *content)
                    .ok_or(DataLoadError::ResourceNotFound { file: file_name })?;
                Ok(Box::new(content.as_bytes()))
            }
            Self::Directory(directory) => {
                let path = directory.join(file_name);
                if !path.exists() {
                    return Err(DataLoadError::FileNotFound { path });
                }
                let file = File::open(&path).map_err(|source| DataLoadError::Open {
                    path: path.clone(),
                    source,
                })?;
                Ok(Box::new(file))
            }
        }
    }
}
