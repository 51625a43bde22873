//! Filtering and pagination shared by every store backend.

use crate::error::Result;
use crate::types::{EmployeePage, SearchFilters};
use crate::Employee;

/// Apply `filters` to `rows` and cut out the requested page.
///
/// `rows` must be yielded in ascending id order; that order is what makes
/// pages reproducible across calls. Every matching row is counted towards
/// `total`, whether or not it falls inside the page. The first row error
/// aborts the query.
///
/// # Errors
///
/// Returns the first error produced by `rows`.
pub fn select_page<I>(rows: I, filters: &SearchFilters) -> Result<EmployeePage>
where
    I: IntoIterator<Item = Result<Employee>>,
{
    let window = filters.offset..filters.offset.saturating_add(u64::from(filters.limit));
    let mut page = EmployeePage::default();

    for row in rows {
        let employee = row?;
        if !filters.matches(&employee) {
            continue;
        }
        if window.contains(&page.total) {
            page.employees.push(employee);
        }
        page.total += 1;
    }

    Ok(page)
}
