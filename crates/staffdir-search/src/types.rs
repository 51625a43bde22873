//! Request and response types for directory search.
//!
//! These types define the contract between the boundary and the search
//! service.

use serde::{Deserialize, Serialize};
use staffdir_core::OrgId;
use staffdir_store::SearchFilters;

use crate::error::{Result, SearchError};
use crate::projection::ProjectedEmployee;

/// A raw search request as received at the boundary.
///
/// Every field is optional text; [`SearchRequest::into_filters`] turns it into
/// validated [`SearchFilters`]. Empty strings count as absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Organization to search within. Required.
    #[serde(default)]
    pub org_id: Option<String>,
    /// Case-insensitive substring match on name.
    #[serde(default)]
    pub name: Option<String>,
    /// Exact match on department.
    #[serde(default)]
    pub department: Option<String>,
    /// Exact match on location.
    #[serde(default)]
    pub location: Option<String>,
    /// Exact match on position.
    #[serde(default)]
    pub position: Option<String>,
    /// Page size, 1-100. Defaults to 20.
    #[serde(default)]
    pub limit: Option<String>,
    /// Records to skip, >= 0. Defaults to 0.
    #[serde(default)]
    pub offset: Option<String>,
}

impl SearchRequest {
    /// Create a request for an organization with no filters.
    #[must_use]
    pub fn for_org(org_id: impl Into<String>) -> Self {
        Self {
            org_id: Some(org_id.into()),
            ..Self::default()
        }
    }

    /// The organization id, if one was supplied.
    #[must_use]
    pub fn org_id(&self) -> Option<&str> {
        non_empty(self.org_id.as_deref())
    }

    /// Validate the request.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::InvalidRequest` if `org_id` is missing or invalid,
    /// `limit` is not an integer in 1..=100, or `offset` is not a
    /// non-negative integer.
    pub fn into_filters(self) -> Result<SearchFilters> {
        let org_id = self
            .org_id()
            .ok_or_else(|| SearchError::InvalidRequest("org_id is required".to_string()))?;
        let org_id = OrgId::new(org_id)
            .map_err(|e| SearchError::InvalidRequest(format!("org_id: {e}")))?;

        let limit = match non_empty(self.limit.as_deref()) {
            None => SearchFilters::DEFAULT_LIMIT,
            Some(raw) => raw
                .parse::<u32>()
                .ok()
                .filter(|limit| (1..=SearchFilters::MAX_LIMIT).contains(limit))
                .ok_or_else(|| {
                    SearchError::InvalidRequest(format!(
                        "limit must be an integer between 1 and {}",
                        SearchFilters::MAX_LIMIT
                    ))
                })?,
        };

        let offset = match non_empty(self.offset.as_deref()) {
            None => 0,
            Some(raw) => raw.parse::<u64>().map_err(|_| {
                SearchError::InvalidRequest(
                    "offset must be a non-negative integer".to_string(),
                )
            })?,
        };

        Ok(SearchFilters {
            org_id,
            name: owned_non_empty(self.name),
            department: owned_non_empty(self.department),
            location: owned_non_empty(self.location),
            position: owned_non_empty(self.position),
            limit,
            offset,
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn owned_non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// The result of a directory search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    /// Projected records, at most `limit` of them.
    pub items: Vec<ProjectedEmployee>,
    /// Number of matching records, ignoring pagination.
    pub total: u64,
    /// Page size used.
    pub limit: u32,
    /// Offset used.
    pub offset: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(limit: Option<&str>, offset: Option<&str>) -> SearchRequest {
        SearchRequest {
            limit: limit.map(str::to_string),
            offset: offset.map(str::to_string),
            ..SearchRequest::for_org("org_a")
        }
    }

    #[test]
    fn defaults_applied() {
        let filters = SearchRequest::for_org("org_a").into_filters().unwrap();
        assert_eq!(filters.org_id.as_str(), "org_a");
        assert_eq!(filters.limit, 20);
        assert_eq!(filters.offset, 0);
        assert!(filters.name.is_none());
    }

    #[test]
    fn missing_org_rejected() {
        let result = SearchRequest::default().into_filters();
        assert!(matches!(result, Err(SearchError::InvalidRequest(_))));

        let blank = SearchRequest::for_org("").into_filters();
        assert!(matches!(blank, Err(SearchError::InvalidRequest(_))));
    }

    #[test]
    fn limit_bounds() {
        assert_eq!(request(Some("1"), None).into_filters().unwrap().limit, 1);
        assert_eq!(request(Some("100"), None).into_filters().unwrap().limit, 100);
        for bad in ["0", "101", "-1", "ten", "2.5"] {
            assert!(
                request(Some(bad), None).into_filters().is_err(),
                "limit {bad} should be rejected"
            );
        }
    }

    #[test]
    fn offset_bounds() {
        assert_eq!(request(None, Some("7")).into_filters().unwrap().offset, 7);
        assert!(request(None, Some("-1")).into_filters().is_err());
        assert!(request(None, Some("x")).into_filters().is_err());
    }

    #[test]
    fn blank_filters_are_absent() {
        let filters = SearchRequest {
            name: Some(String::new()),
            department: Some("Engineering".to_string()),
            ..SearchRequest::for_org("org_b")
        }
        .into_filters()
        .unwrap();
        assert!(filters.name.is_none());
        assert_eq!(filters.department.as_deref(), Some("Engineering"));
    }
}
