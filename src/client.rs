//! Admin API client and the two upsert strategies.
//!
//! Endpoints are reconciled update-then-create (PATCH by name, POST on any
//! non-2xx). Plugins are reconciled create-then-update (POST, PATCH on any
//! status >= 400). Neither checks for existence first.

use serde::de::DeserializeOwned;

use crate::error::{ClientError, TransportError};
use crate::models::{Endpoint, Envelope, Plugin, PluginRequest};
use crate::transport::{Body, HttpTransport, Request, Response, Transport};

/// Which request settled an upsert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Created { status: u16 },
    Updated { status: u16 },
}

impl UpsertOutcome {
    pub fn status(&self) -> u16 {
        match self {
            UpsertOutcome::Created { status } | UpsertOutcome::Updated { status } => *status,
        }
    }
}

/// Holds only the base URL and the transport; safe to share across tasks.
pub struct AdminClient<T = HttpTransport> {
    base_url: String,
    transport: T,
}

impl AdminClient<HttpTransport> {
    pub fn new(base_url: impl Into<String>) -> Result<Self, TransportError> {
        Ok(Self::with_transport(base_url, HttpTransport::new()?))
    }
}

impl<T: Transport> AdminClient<T> {
    pub fn with_transport(base_url: impl Into<String>, transport: T) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn apis_url(&self) -> String {
        format!("{}/apis", self.base_url)
    }

    fn api_url(&self, name: &str) -> String {
        format!("{}/apis/{name}", self.base_url)
    }

    fn plugins_url(&self, endpoint_key: &str) -> String {
        format!("{}/apis/{endpoint_key}/plugins", self.base_url)
    }

    pub async fn list_endpoints(&self) -> Result<Vec<Endpoint>, ClientError> {
        self.fetch_list(self.apis_url()).await
    }

    /// `endpoint_key` may be the endpoint's name or its gateway id.
    pub async fn list_plugins(&self, endpoint_key: &str) -> Result<Vec<Plugin>, ClientError> {
        self.fetch_list(self.plugins_url(endpoint_key)).await
    }

    async fn fetch_list<R: DeserializeOwned>(&self, url: String) -> Result<Vec<R>, ClientError> {
        let resp = self.transport.execute(Request::get(url)).await?;
        let envelope: Envelope<R> = serde_json::from_slice(&resp.body)?;
        Ok(envelope.data)
    }

    /// Make the gateway's endpoint named `endpoint.name` match `endpoint`.
    pub async fn upsert_endpoint(&self, endpoint: &Endpoint) -> Result<UpsertOutcome, ClientError> {
        self.update_then_create(endpoint).await
    }

    /// Make the plugin `plugin.name` on `endpoint_key` match `plugin`.
    pub async fn upsert_plugin(
        &self,
        endpoint_key: &str,
        plugin: &PluginRequest,
    ) -> Result<UpsertOutcome, ClientError> {
        self.create_then_update(endpoint_key, plugin).await
    }

    async fn update_then_create(&self, endpoint: &Endpoint) -> Result<UpsertOutcome, ClientError> {
        let body = Body::Form(endpoint.form_fields());

        let updated = self
            .transport
            .execute(Request::patch(self.api_url(&endpoint.name), body.clone()))
            .await?;
        if updated.is_success() {
            return Ok(UpsertOutcome::Updated {
                status: updated.status,
            });
        }

        tracing::debug!(
            endpoint = %endpoint.name,
            status = updated.status,
            "endpoint update rejected, creating"
        );

        let created = self
            .transport
            .execute(Request::post(self.apis_url(), body))
            .await?;
        if created.is_success() {
            Ok(UpsertOutcome::Created {
                status: created.status,
            })
        } else {
            Err(upsert_failure(&created))
        }
    }

    async fn create_then_update(
        &self,
        endpoint_key: &str,
        plugin: &PluginRequest,
    ) -> Result<UpsertOutcome, ClientError> {
        let url = self.plugins_url(endpoint_key);
        let body = Body::Json(plugin.to_json());

        let created = self
            .transport
            .execute(Request::post(url.clone(), body.clone()))
            .await?;
        if created.status < 400 {
            return Ok(UpsertOutcome::Created {
                status: created.status,
            });
        }

        tracing::debug!(
            endpoint = %endpoint_key,
            plugin = %plugin.name,
            status = created.status,
            "plugin create rejected, updating"
        );

        let updated = self.transport.execute(Request::patch(url, body)).await?;
        if updated.is_success() {
            Ok(UpsertOutcome::Updated {
                status: updated.status,
            })
        } else {
            Err(upsert_failure(&updated))
        }
    }
}

fn upsert_failure(resp: &Response) -> ClientError {
    ClientError::UpsertFailure {
        status: resp.status,
        body: resp.text(),
    }
}
