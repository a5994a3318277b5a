mod cuisine;
mod restaurant;
mod validation;
mod values;

pub use cuisine::Cuisine;
pub use restaurant::{Restaurant, RestaurantDraft};
pub use validation::ValidationError;
pub use values::{fixed_half_up, Distance, Price, Rating};
