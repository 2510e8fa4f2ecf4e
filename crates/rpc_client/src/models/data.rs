use serde::{Deserialize, Serialize};

/// Body of `GET /accounts/{id}/data/{name}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataValueResponse {
    /// Base64 of the stored bytes.
    pub value: String,
}

/// Outcome of a data entry read. A missing entry is a normal outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataLookup<T> {
    Found(T),
    NotFound,
}

impl<T> DataLookup<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, DataLookup::Found(_))
    }

    pub fn found(self) -> Option<T> {
        match self {
            DataLookup::Found(value) => Some(value),
            DataLookup::NotFound => None,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> DataLookup<U> {
        match self {
            DataLookup::Found(value) => DataLookup::Found(f(value)),
            DataLookup::NotFound => DataLookup::NotFound,
        }
    }
}
