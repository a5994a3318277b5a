//! Filtering and relevance ranking over a loaded catalog.

mod criteria;
pub mod matching;
mod result;
mod service;


pub use criteria::{SearchCriteria, SearchCriteriaBuilder};
pub use result::SearchResult;
pub use service::{SearchService, MAX_RESULTS};
