/// Raised when a value type, cuisine, or restaurant is built from input that
/// violates a range or format rule.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Rating must be between {min} and {max} stars")]
    RatingOutOfRange { value: i32, min: u8, max: u8 },
    #[error("Distance must be between {min:.1} and {max:.1} miles")]
    DistanceOutOfRange { value: f64, min: f64, max: f64 },
    #[error("Price must be between ${min:.2} and ${max:.2}")]
    PriceOutOfRange { value: f64, min: f64, max: f64 },
    #[error("Cuisine name cannot be empty")]
    EmptyCuisine,
    #[error("Cuisine name must contain only letters, spaces, and hyphens")]
    InvalidCuisine { value: String },
    #[error("Restaurant name cannot be empty")]
    EmptyRestaurantName,
    #[error("{field} cannot be null")]
    Missing { field: &'static str },
}
