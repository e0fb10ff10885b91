use thiserror::Error;

/// Top-level error type for the `orion-api` crate.
///
/// Covers construction failures, transport failures, structured broker
/// errors, and response decoding. `orionctl` maps these into user-facing
/// diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    // ── Construction ────────────────────────────────────────────────
    /// The host/port pair did not form a valid base URL.
    #[error("Invalid broker URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The access token contains bytes that cannot be sent as a header.
    #[error("Invalid access token: {message}")]
    InvalidToken { message: String },

    /// The underlying HTTP client could not be built.
    #[error("Failed to build HTTP client: {message}")]
    ClientBuild { message: String },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout).
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    // ── Broker ──────────────────────────────────────────────────────
    /// Structured error from the broker (parsed from the
    /// `{error, description}` payload).
    #[error("Broker error (HTTP {status}): {error}{}", .description.as_deref().map(|d| format!(" -- {d}")).unwrap_or_default())]
    Api {
        status: u16,
        error: String,
        description: Option<String>,
    },

    /// A create succeeded but the response carried no usable
    /// `Location` header to take the new identifier from.
    #[error("Broker response missing Location header")]
    MissingLocation,

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Transport(e) => e.status() == Some(reqwest::StatusCode::NOT_FOUND),
            Self::Api { status: 404, .. } => true,
            _ => false,
        }
    }

    /// Returns `true` if the broker could not be reached at all.
    pub fn is_connect(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_connect() || e.is_timeout(),
            _ => false,
        }
    }
}
