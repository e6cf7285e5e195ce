use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A plugin attached to an endpoint, as reported by the gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plugin {
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub api_id: String,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub name: String,
    /// Plugin configuration. Opaque to the client.
    #[serde(
        rename = "value",
        alias = "config",
        default,
        deserialize_with = "crate::models::null_as_default"
    )]
    pub config: Map<String, Value>,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub enabled: bool,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub created_at: i64,
}

/// Desired plugin state. Encodes as `{ "name": ..., <config fields> }`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PluginRequest {
    pub name: String,
    #[serde(flatten)]
    pub config: Map<String, Value>,
}

impl PluginRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            config: Map::new(),
        }
    }

    /// Set a single configuration entry. The value is passed through as-is.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.config.insert(key.into(), value.into());
        self
    }

    pub fn with_config(mut self, config: Map<String, Value>) -> Self {
        self.config = config;
        self
    }

    pub fn to_json(&self) -> Value {
        let mut body = Map::with_capacity(self.config.len() + 1);
        body.insert("name".to_string(), Value::String(self.name.clone()));
        for (key, value) in &self.config {
            // `name` always identifies the plugin type
            if key != "name" {
                body.insert(key.clone(), value.clone());
            }
        }
        Value::Object(body)
    }
}
