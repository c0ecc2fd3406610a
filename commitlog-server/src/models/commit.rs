//! Commit record passthrough

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A row of the commits table, every column carried verbatim.
///
/// The store projects each row to a JSON object, so the service never
/// needs to know the table's columns beyond the timestamp it filters on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommitRecord(Map<String, Value>);

#[cfg(test)]
impl CommitRecord {
    pub(crate) fn get(&self, column: &str) -> Option<&Value> {
        self.0.get(column)
    }

    pub(crate) fn columns(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}
