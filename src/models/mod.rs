mod endpoint;
mod plugin;

pub use endpoint::Endpoint;
pub use plugin::{Plugin, PluginRequest};

use serde::{Deserialize, Deserializer, Serialize};

/// `{ "data": [...] }` wrapper used by every list response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: Vec<T>,
}

/// Missing and `null` fields both decode to the type's default.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
