//! Column projection of employee records.

use serde::ser::{Serialize, SerializeMap, Serializer};
use staffdir_core::Column;
use staffdir_store::Employee;

/// An employee reduced to an organization's visible columns.
///
/// Holds `(column, value)` pairs in configured order and serializes as a
/// JSON object with keys in that same order. Only [`Column`] values can be
/// keys, so the tenant id has no way in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectedEmployee {
    fields: Vec<(Column, String)>,
}

impl ProjectedEmployee {
    /// Project `employee` onto `columns`, preserving column order.
    #[must_use]
    pub fn project(employee: &Employee, columns: &[Column]) -> Self {
        let fields = columns
            .iter()
            .map(|&column| (column, employee.field(column).to_string()))
            .collect();
        Self { fields }
    }

    /// Columns present in this record, in output order.
    pub fn columns(&self) -> impl Iterator<Item = Column> + '_ {
        self.fields.iter().map(|(column, _)| *column)
    }

    /// Value of a column, if it is part of the projection.
    #[must_use]
    pub fn get(&self, column: Column) -> Option<&str> {
        self.fields
            .iter()
            .find(|(c, _)| *c == column)
            .map(|(_, value)| value.as_str())
    }
}

impl Serialize for ProjectedEmployee {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (column, value) in &self.fields {
            map.serialize_entry(column.as_str(), value)?;
        }
        map.end()
    }
}
