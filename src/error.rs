/// Failure to complete an HTTP round trip: connection, timeout, or an
/// unreadable response. The status code is never inspected at this level.
#[derive(Debug)]
pub struct TransportError {
    pub message: String,
    pub timeout: bool,
}

impl std::fmt::Display for TransportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.timeout {
            write!(f, "request timed out: {}", self.message)
        } else {
            write!(f, "{}", self.message)
        }
    }
}

impl std::error::Error for TransportError {}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        TransportError {
            timeout: err.is_timeout(),
            message: err.to_string(),
        }
    }
}

impl From<String> for TransportError {
    fn from(message: String) -> Self {
        TransportError {
            message,
            timeout: false,
        }
    }
}

impl From<&str> for TransportError {
    fn from(message: &str) -> Self {
        TransportError {
            message: message.to_string(),
            timeout: false,
        }
    }
}

#[derive(Debug)]
pub enum ClientError {
    Transport(TransportError),
    Decode(serde_json::Error),
    /// The last request of an upsert came back with a non-success status.
    UpsertFailure { status: u16, body: String },
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientError::Transport(err) => write!(f, "Transport Error: {err}"),
            ClientError::Decode(err) => write!(f, "Decode Error: {err}"),
            ClientError::UpsertFailure { status, body } => {
                write!(f, "Upsert Failed: status {status}: {body}")
            }
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClientError::Transport(err) => Some(err),
            ClientError::Decode(err) => Some(err),
            ClientError::UpsertFailure { .. } => None,
        }
    }
}

impl From<TransportError> for ClientError {
    fn from(err: TransportError) -> Self {
        ClientError::Transport(err)
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err)
    }
}

impl ClientError {
    /// Status code of a failed upsert, if that is what this error is.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::UpsertFailure { status, .. } => Some(*status),
            _ => None,
        }
    }
}
