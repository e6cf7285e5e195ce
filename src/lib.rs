pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod transport;

pub use client::{AdminClient, UpsertOutcome};
pub use error::{ClientError, TransportError};
pub use models::{Endpoint, Envelope, Plugin, PluginRequest};
pub use transport::{Body, HttpTransport, Request, Response, Transport};
