//! Client profile owned by the client service.

use serde::{Deserialize, Serialize};

/// A client as returned by the client service.
///
/// Only `id` and `name` are interpreted here. Every other profile
/// attribute is carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub attributes: serde_json::Map<String, serde_json::Value>,
}

impl Client {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: Some(name.into()),
            attributes: serde_json::Map::new(),
        }
    }
}
