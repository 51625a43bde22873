//! Search service implementation.
//!
//! This module provides the `DirectorySearch` trait and the `SearchService`
//! implementation that composes store queries with column projection.

use std::sync::Arc;

use async_trait::async_trait;
use staffdir_store::{EmployeeStore, SearchFilters};

use crate::columns::ColumnConfigRegistry;
use crate::error::Result;
use crate::projection::ProjectedEmployee;
use crate::types::SearchResult;

/// Trait defining the directory search operation.
///
/// Implementations filter by tenant and criteria, paginate, and project each
/// record onto the organization's configured columns.
#[async_trait]
pub trait DirectorySearch: Send + Sync {
    /// Run a validated search.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::Store` if the backing store cannot be read.
    async fn search(&self, filters: SearchFilters) -> Result<SearchResult>;

    /// Total number of stored employees across all organizations.
    ///
    /// Used to check that the backing store is readable.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::Store` if the backing store cannot be read.
    fn employee_count(&self) -> Result<u64>;
}

/// The main search service implementation.
pub struct SearchService<S: EmployeeStore> {
    store: Arc<S>,
    columns: ColumnConfigRegistry,
}

impl<S: EmployeeStore> SearchService<S> {
    /// Create a new search service.
    #[must_use]
    pub fn new(store: Arc<S>, columns: ColumnConfigRegistry) -> Self {
        Self { store, columns }
    }

    /// Create with the builtin column configuration.
    #[must_use]
    pub fn with_builtin_columns(store: Arc<S>) -> Self {
        Self::new(store, ColumnConfigRegistry::builtin())
    }
}

#[async_trait]
impl<S: EmployeeStore + 'static> DirectorySearch for SearchService<S> {
    async fn search(&self, filters: SearchFilters) -> Result<SearchResult> {
        let page = self.store.query(&filters)?;
        let columns = self.columns.columns_for(&filters.org_id);

        let items = page
            .employees
            .iter()
            .map(|employee| ProjectedEmployee::project(employee, columns))
            .collect();

        tracing::debug!(
            org_id = %filters.org_id,
            total = page.total,
            limit = filters.limit,
            offset = filters.offset,
            columns = columns.len(),
            "Search completed"
        );

        Ok(SearchResult {
            items,
            total: page.total,
            limit: filters.limit,
            offset: filters.offset,
        })
    }

    fn employee_count(&self) -> Result<u64> {
        Ok(self.store.count_employees()?)
    }
}
