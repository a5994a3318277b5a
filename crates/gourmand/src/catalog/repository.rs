use super::reader::{read_rows, CsvRow};
use super::{CatalogSource, CatalogTable, DataLoadError, RestaurantRepository, RowError};
use crate::domain::{Cuisine, Distance, Price, Rating, Restaurant, RestaurantDraft};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

const CUISINE_ID: usize = 0;
const CUISINE_NAME: usize = 1;

const RESTAURANT_NAME: usize = 0;
const RESTAURANT_RATING: usize = 1;
const RESTAURANT_DISTANCE: usize = 2;
const RESTAURANT_PRICE: usize = 3;
const RESTAURANT_CUISINE_ID: usize = 4;

/// Immutable snapshot of both catalog tables, fully validated at load time.
#[derive(Debug)]
pub struct CsvRestaurantRepository {
    restaurants: Vec<Restaurant>,
    cuisines: Vec<Arc<Cuisine>>,
    cuisines_by_id: HashMap<i64, Arc<Cuisine>>,
}

impl CsvRestaurantRepository {
    /// Loads cuisines first, then restaurants resolved against them.
    pub fn load<S: CatalogSource + ?Sized>(source: &S) -> Result<Self, DataLoadError> {
        let (cuisines, cuisines_by_id) = load_cuisines(source)?;
        let restaurants = load_restaurants(source, &cuisines_by_id)?;

        Ok(Self {
            restaurants,
            cuisines,
            cuisines_by_id,
        })
    }

    pub fn cuisine(&self, id: i64) -> Option<&Arc<Cuisine>> {
        self.cuisines_by_id.get(&id)
    }
}

impl RestaurantRepository for CsvRestaurantRepository {
    fn find_all(&self) -> &[Restaurant] {
        &self.restaurants
    }

    fn find_all_cuisines(&self) -> &[Arc<Cuisine>] {
        &self.cuisines
    }
}

type CuisineCatalog = (Vec<Arc<Cuisine>>, HashMap<i64, Arc<Cuisine>>);

fn load_cuisines<S: CatalogSource + ?Sized>(source: &S) -> Result<CuisineCatalog, DataLoadError> {
    debug!("loading cuisines from data source");
    let table = CatalogTable::Cuisines;
    let rows = read_rows(source.open(table)?, table)?;

    let mut cuisines = Vec::with_capacity(rows.len());
    let mut by_id = HashMap::with_capacity(rows.len());

    for row in rows {
        let (id, cuisine) = parse_cuisine(&row).map_err(|source| invalid_row(table, &row, source))?;
        let cuisine = Arc::new(cuisine);
        if by_id.insert(id, Arc::clone(&cuisine)).is_some() {
            return Err(DataLoadError::DuplicateCuisineId { id });
        }
        cuisines.push(cuisine);
    }

    info!(count = cuisines.len(), "loaded cuisines");
    Ok((cuisines, by_id))
}

fn load_restaurants<S: CatalogSource + ?Sized>(
    source: &S,
    cuisines_by_id: &HashMap<i64, Arc<Cuisine>>,
) -> Result<Vec<Restaurant>, DataLoadError> {
    debug!("loading restaurants from data source");
    let table = CatalogTable::Restaurants;
    let rows = read_rows(source.open(table)?, table)?;

    let restaurants = rows
        .iter()
        .map(|row| {
            parse_restaurant(row, cuisines_by_id).map_err(|source| invalid_row(table, row, source))
        })
        .collect::<Result<Vec<_>, _>>()?;

    info!(count = restaurants.len(), "loaded restaurants");
    Ok(restaurants)
}

fn parse_cuisine(row: &CsvRow) -> Result<(i64, Cuisine), RowError> {
    let id = row.integer(CUISINE_ID, "id")?;
    let cuisine = Cuisine::new(row.column(CUISINE_NAME, "name")?)?;
    Ok((id, cuisine))
}

/// An unknown cuisine id is not checked up front: it leaves the draft without
/// a cuisine and fails the restaurant's own "cannot be null" validation.
fn parse_restaurant(
    row: &CsvRow,
    cuisines_by_id: &HashMap<i64, Arc<Cuisine>>,
) -> Result<Restaurant, RowError> {
    let name = row.column(RESTAURANT_NAME, "name")?.to_string();
    let rating = Rating::new(row.integer(RESTAURANT_RATING, "customer_rating")?)?;
    let distance = Distance::new(row.number(RESTAURANT_DISTANCE, "distance")?)?;
    let price = Price::new(row.number(RESTAURANT_PRICE, "price")?)?;
    let cuisine_id: i64 = row.integer(RESTAURANT_CUISINE_ID, "cuisine_id")?;

    let restaurant = RestaurantDraft {
        name: Some(name),
        rating: Some(rating),
        distance: Some(distance),
        price: Some(price),
        cuisine: cuisines_by_id.get(&cuisine_id).cloned(),
    }
    .build()?;

    Ok(restaurant)
}

fn invalid_row(table: CatalogTable, row: &CsvRow, source: RowError) -> DataLoadError {
    DataLoadError::InvalidRow {
        table,
        row: row.raw(),
        source,
    }
}
