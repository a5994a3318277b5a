use std::sync::Arc;

use tracing::info;

use super::matching::{filter, rank};
use super::{SearchCriteria, SearchResult};
use crate::catalog::RestaurantRepository;

/// Upper bound on the number of results a search returns.
pub const MAX_RESULTS: usize = 5;

/// Service composing the catalog repository with the matching and ranking
/// rules.
pub struct SearchService<R> {
    repository: Arc<R>,
}

impl<R> SearchService<R>
where
    R: RestaurantRepository,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Filters, ranks, and keeps the best [`MAX_RESULTS`] restaurants. An
    /// empty result is not an error.
    pub fn search(&self, criteria: &SearchCriteria) -> Vec<SearchResult> {
        let catalog = self.repository.find_all();
        let matches = filter(catalog, criteria);
        let matched = matches.len();

        let results = rank(matches)
            .into_iter()
            .take(MAX_RESULTS)
            .map(SearchResult::from)
            .collect::<Vec<_>>();

        info!(
            catalog = catalog.len(),
            matched,
            returned = results.len(),
            "search completed"
        );
        results
    }
}

impl<R> Clone for SearchService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
