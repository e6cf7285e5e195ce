use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A route registered on the gateway (`/apis` collection).
///
/// `name` is the addressing key for upserts. `id` and `created_at` are
/// assigned by the gateway and stay at their defaults on desired-state records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Endpoint {
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub path: String,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub target_url: String,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub created_at: i64,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub preserve_host: bool,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub strip_path: bool,
}

impl Endpoint {
    /// Desired-state record for `name`, routed at `/{name}`.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: String::new(),
            path: format!("/{name}"),
            name,
            target_url: String::new(),
            created_at: 0,
            preserve_host: false,
            strip_path: false,
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn with_target_url(mut self, target_url: impl Into<String>) -> Self {
        self.target_url = target_url.into();
        self
    }

    pub fn with_strip_path(mut self, strip_path: bool) -> Self {
        self.strip_path = strip_path;
        self
    }

    pub fn with_preserve_host(mut self, preserve_host: bool) -> Self {
        self.preserve_host = preserve_host;
        self
    }

    /// Gateway creation time. The gateway reports epoch milliseconds; zero
    /// means the record was never created remotely.
    pub fn created(&self) -> Option<DateTime<Utc>> {
        if self.created_at == 0 {
            return None;
        }
        DateTime::from_timestamp_millis(self.created_at)
    }

    /// Fields sent on PATCH/POST, in the order the admin API documents them.
    pub fn form_fields(&self) -> Vec<(String, String)> {
        vec![
            ("strip_path".to_string(), self.strip_path.to_string()),
            ("preserve_host".to_string(), self.preserve_host.to_string()),
            ("name".to_string(), self.name.clone()),
            ("path".to_string(), self.path.clone()),
            ("target_url".to_string(), self.target_url.clone()),
        ]
    }
}
