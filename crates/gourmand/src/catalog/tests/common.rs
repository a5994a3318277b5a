use std::io::{self, Read};

use crate::catalog::{CatalogSource, CatalogTable, DataLoadError};

pub(super) const VALID_CUISINES_CSV: &str = "id,name
1,Italian
2,American
3,Chinese";

pub(super) const VALID_RESTAURANTS_CSV: &str = "name,customer_rating,distance,price,cuisine_id
Pizza Place,4,1.0,20.0,1
Burger Joint,3,2.0,15.0,2
Chinese Garden,5,3.0,30.0,3";

pub(super) const RESTAURANTS_HEADER: &str = "name,customer_rating,distance,price,cuisine_id";

/// Catalog tables held in memory; a `None` table cannot be opened.
#[derive(Debug, Clone)]
pub(super) struct MemorySource {
    pub(super) cuisines: Option<String>,
    pub(super) restaurants: Option<String>,
}

impl MemorySource {
    pub(super) fn valid() -> Self {
        Self {
            cuisines: Some(VALID_CUISINES_CSV.to_string()),
            restaurants: Some(VALID_RESTAURANTS_CSV.to_string()),
        }
    }

    pub(super) fn with_restaurants(restaurants: &str) -> Self {
        Self {
            restaurants: Some(restaurants.to_string()),
            ..Self::valid()
        }
    }

    pub(super) fn with_cuisines(cuisines: &str) -> Self {
        Self {
            cuisines: Some(cuisines.to_string()),
            ..Self::valid()
        }
    }
}

impl CatalogSource for MemorySource {
    fn open(&self, table: CatalogTable) -> Result<Box<dyn Read + '_>, DataLoadError> {
        let content = match table {
            CatalogTable::Cuisines => self.cuisines.as_deref(),
            CatalogTable::Restaurants => self.restaurants.as_deref(),
        };

        match content {
            Some(content) => Ok(Box::new(content.as_bytes())),
            None => Err(DataLoadError::ResourceNotFound {
                file: table.file_name(),
            }),
        }
    }
}

/// Opens every table, but reads of `broken` always fail.
pub(super) struct BrokenReadSource {
    pub(super) broken: CatalogTable,
}

impl CatalogSource for BrokenReadSource {
    fn open(&self, table: CatalogTable) -> Result<Box<dyn Read + '_>, DataLoadError> {
        if table == self.broken {
            return Ok(Box::new(BrokenReader));
        }
        let content = match table {
            CatalogTable::Cuisines => VALID_CUISINES_CSV,
            CatalogTable::Restaurants => VALID_RESTAURANTS_CSV,
        };
        Ok(Box::new(content.as_bytes()))
    }
}

struct BrokenReader;

impl Read for BrokenReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::Other, "simulated read failure"))
    }
}

pub(super) fn restaurants_csv(rows: &[&str]) -> String {
    let mut csv = String::from(RESTAURANTS_HEADER);
    for row in rows {
        csv.push('\n');
        csv.push_str(row);
    }
    csv
}
