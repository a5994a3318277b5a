//! Pure matching and ranking rules. Neither function touches I/O or mutates
//! its input.

use super::SearchCriteria;
use crate::domain::Restaurant;
use std::cmp::Ordering;

/// Restaurants satisfying every constraint in `criteria`, in input order.
pub fn filter<'a, I>(restaurants: I, criteria: &SearchCriteria) -> Vec<&'a Restaurant>
where
    I: IntoIterator<Item = &'a Restaurant>,
{
    restaurants
        .into_iter()
        .filter(|restaurant| matches(restaurant, criteria))
        .collect()
}

/// Sorts by distance ascending, then rating descending, then price ascending.
/// The sort is stable, so full ties keep their input order.
pub fn rank(mut matches: Vec<&Restaurant>) -> Vec<&Restaurant> {
    matches.sort_by(|a, b| by_relevance(a, b));
    matches
}

pub fn by_relevance(a: &Restaurant, b: &Restaurant) -> Ordering {
    a.distance()
        .cmp(&b.distance())
        .then_with(|| b.rating().cmp(&a.rating()))
        .then_with(|| a.price().cmp(&b.price()))
}

pub fn matches(restaurant: &Restaurant, criteria: &SearchCriteria) -> bool {
    matches_name(restaurant, criteria)
        && matches_rating(restaurant, criteria)
        && matches_distance(restaurant, criteria)
        && matches_price(restaurant, criteria)
        && matches_cuisine(restaurant, criteria)
}

fn matches_name(restaurant: &Restaurant, criteria: &SearchCriteria) -> bool {
    criteria
        .name()
        .map_or(true, |name| contains_ignoring_case(restaurant.name(), name))
}

fn matches_rating(restaurant: &Restaurant, criteria: &SearchCriteria) -> bool {
    criteria
        .min_rating()
        .map_or(true, |min| restaurant.rating() >= min)
}

fn matches_distance(restaurant: &Restaurant, criteria: &SearchCriteria) -> bool {
    criteria
        .max_distance()
        .map_or(true, |max| restaurant.distance() <= max)
}

fn matches_price(restaurant: &Restaurant, criteria: &SearchCriteria) -> bool {
    criteria
        .max_price()
        .map_or(true, |max| restaurant.price() <= max)
}

fn matches_cuisine(restaurant: &Restaurant, criteria: &SearchCriteria) -> bool {
    criteria.cuisine().map_or(true, |cuisine| {
        contains_ignoring_case(restaurant.cuisine().name(), cuisine.name())
    })
}

fn contains_ignoring_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
