use super::{Cuisine, Distance, Price, Rating, ValidationError};
use std::fmt;
use std::sync::Arc;

/// A validated restaurant. The cuisine is shared with the catalog that loaded
/// it, so every restaurant of the same cuisine points at one allocation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Restaurant {
    name: String,
    rating: Rating,
    distance: Distance,
    price: Price,
    cuisine: Arc<Cuisine>,
}

impl Restaurant {
    pub fn new(
        name: impl Into<String>,
        rating: Rating,
        distance: Distance,
        price: Price,
        cuisine: Arc<Cuisine>,
    ) -> Result<Self, ValidationError> {
        RestaurantDraft {
            name: Some(name.into()),
            rating: Some(rating),
            distance: Some(distance),
            price: Some(price),
            cuisine: Some(cuisine),
        }
        .build()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }

    pub fn distance(&self) -> Distance {
        self.distance
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn cuisine(&self) -> &Arc<Cuisine> {
        &self.cuisine
    }
}

impl fmt::Display for Restaurant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} stars, {}, {}, {})",
            self.name, self.rating, self.distance, self.price, self.cuisine
        )
    }
}

/// Restaurant fields gathered from an untrusted source, any of which may be
/// absent. `build` checks them in declaration order and reports the first
/// missing one.
#[derive(Debug, Clone, Default)]
pub struct RestaurantDraft {
    pub name: Option<String>,
    pub rating: Option<Rating>,
    pub distance: Option<Distance>,
    pub price: Option<Price>,
    pub cuisine: Option<Arc<Cuisine>>,
}

impl RestaurantDraft {
    pub fn build(self) -> Result<Restaurant, ValidationError> {
        let name = self
            .name
            .filter(|name| !name.trim().is_empty())
            .ok_or(ValidationError::EmptyRestaurantName)?;
        let rating = self.rating.ok_or(ValidationError::Missing { field: "Rating" })?;
        let distance = self
            .distance
            .ok_or(ValidationError::Missing { field: "Distance" })?;
        let price = self.price.ok_or(ValidationError::Missing { field: "Price" })?;
        let cuisine = self
            .cuisine
            .ok_or(ValidationError::Missing { field: "Cuisine" })?;

        Ok(Restaurant {
            name,
            rating,
            distance,
            price,
            cuisine,
        })
    }
}
