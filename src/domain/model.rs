use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One catalog lookup: the identifier plus the page URL it resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTarget {
    pub id: String,
    pub url: String,
}

/// Values scraped for a single identifier. The extractor decides the keys;
/// they are flattened next to the id when persisted, so a stored entry reads
/// `{"id": "elf001", "title": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LookupResult {
    pub id: String,
    #[serde(flatten)]
    pub values: Map<String, Value>,
}

impl LookupResult {
    pub fn new(id: impl Into<String>, values: Map<String, Value>) -> Self {
        Self {
            id: id.into(),
            values,
        }
    }
}
