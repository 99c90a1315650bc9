//! Success envelope shared by the relay routes

use serde::Serialize;
use serde_json::{Map, Value};

/// `{ "sucesso": true, ... }` with the payload keys alongside the flag
#[derive(Debug, Clone, Serialize)]
pub struct Envelope {
    sucesso: bool,
    #[serde(flatten)]
    payload: Map<String, Value>,
}

impl Envelope {
    /// Nest `value` under `key`
    pub fn with_key(key: &str, value: Value) -> Self {
        let mut payload = Map::new();
        payload.insert(key.to_string(), value);
        Self {
            sucesso: true,
            payload,
        }
    }

    /// Merge the keys of `object` into the envelope
    ///
    /// A `sucesso` key in the object is dropped so the flag stays authoritative.
    pub fn merged(mut object: Map<String, Value>) -> Self {
        object.remove("sucesso");
        Self {
            sucesso: true,
            payload: object,
        }
    }
}
