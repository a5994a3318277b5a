use crate::domain::{Cuisine, Distance, Price, Rating};
use std::fmt;

/// What the user is looking for. Every absent field places no constraint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchCriteria {
    name: Option<String>,
    min_rating: Option<Rating>,
    max_distance: Option<Distance>,
    max_price: Option<Price>,
    cuisine: Option<Cuisine>,
}

impl SearchCriteria {
    /// A blank name is stored as absent.
    pub fn new(
        name: Option<String>,
        min_rating: Option<Rating>,
        max_distance: Option<Distance>,
        max_price: Option<Price>,
        cuisine: Option<Cuisine>,
    ) -> Self {
        let name = name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty());

        Self {
            name,
            min_rating,
            max_distance,
            max_price,
            cuisine,
        }
    }

    pub fn builder() -> SearchCriteriaBuilder {
        SearchCriteriaBuilder::default()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn min_rating(&self) -> Option<Rating> {
        self.min_rating
    }

    pub fn max_distance(&self) -> Option<Distance> {
        self.max_distance
    }

    pub fn max_price(&self) -> Option<Price> {
        self.max_price
    }

    pub fn cuisine(&self) -> Option<&Cuisine> {
        self.cuisine.as_ref()
    }

    pub fn is_unconstrained(&self) -> bool {
        self.name.is_none()
            && self.min_rating.is_none()
            && self.max_distance.is_none()
            && self.max_price.is_none()
            && self.cuisine.is_none()
    }
}

/// Lists each constraint on its own line, or says there are none.
impl fmt::Display for SearchCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unconstrained() {
            return writeln!(f, "No criteria specified");
        }

        if let Some(name) = &self.name {
            writeln!(f, "- Name: {name}")?;
        }
        if let Some(rating) = self.min_rating {
            writeln!(f, "- Minimum rating: {rating}")?;
        }
        if let Some(distance) = self.max_distance {
            writeln!(f, "- Maximum distance: {distance}")?;
        }
        if let Some(price) = self.max_price {
            writeln!(f, "- Maximum price: {price}")?;
        }
        if let Some(cuisine) = &self.cuisine {
            writeln!(f, "- Cuisine: {cuisine}")?;
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct SearchCriteriaBuilder {
    name: Option<String>,
    min_rating: Option<Rating>,
    max_distance: Option<Distance>,
    max_price: Option<Price>,
    cuisine: Option<Cuisine>,
}

impl SearchCriteriaBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn min_rating(mut self, rating: impl Into<Option<Rating>>) -> Self {
        self.min_rating = rating.into();
        self
    }

    pub fn max_distance(mut self, distance: impl Into<Option<Distance>>) -> Self {
        self.max_distance = distance.into();
        self
    }

    pub fn max_price(mut self, price: impl Into<Option<Price>>) -> Self {
        self.max_price = price.into();
        self
    }

    pub fn cuisine(mut self, cuisine: impl Into<Option<Cuisine>>) -> Self {
        self.cuisine = cuisine.into();
        self
    }

    pub fn build(self) -> SearchCriteria {
        SearchCriteria::new(
            self.name,
            self.min_rating,
            self.max_distance,
            self.max_price,
            self.cuisine,
        )
    }
}
