use crate::domain::Restaurant;
use serde::Serialize;

/// Flattened, display-ready copy of a matched restaurant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub name: String,
    pub rating: u8,
    pub distance: f64,
    pub price: f64,
    pub cuisine: String,
}

impl From<&Restaurant> for SearchResult {
    fn from(restaurant: &Restaurant) -> Self {
        Self {
            name: restaurant.name().to_string(),
            rating: restaurant.rating().value(),
            distance: restaurant.distance().miles(),
            price: restaurant.price().amount(),
            cuisine: restaurant.cuisine().name().to_string(),
        }
    }
}
