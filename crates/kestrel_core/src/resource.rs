use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An application-level record fetched from the resource API.
///
/// Only the identifier is interpreted by this layer; everything else the
/// endpoint returns is carried verbatim and can nest arbitrarily.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    /// Identifier used by the single-item route.
    pub id: String,

    /// All remaining fields of the record.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}
