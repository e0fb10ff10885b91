//! CLI error types with miette diagnostics.
//!
//! Maps `orion_api::Error` variants into user-facing errors with
//! actionable help text and a uniform exit-code mapping.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Process exit codes. Usage errors exit with 2 via clap itself.
#[allow(dead_code)]
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Configuration ────────────────────────────────────────────────
    #[error(transparent)]
    #[diagnostic(code(orionctl::config))]
    Config(Box<figment::Error>),

    // ── Client construction ──────────────────────────────────────────
    #[error("Invalid broker connection settings")]
    #[diagnostic(
        code(orionctl::client_config),
        help("Check --host/--port (or the config file) for a well-formed address.")
    )]
    ClientConfig {
        #[source]
        source: orion_api::Error,
    },

    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not connect to the broker")]
    #[diagnostic(
        code(orionctl::connection_failed),
        help(
            "Check that the broker is running and reachable.\n\
             Try: orionctl get version -H <host> -p <port>"
        )
    )]
    ConnectionFailed {
        #[source]
        source: orion_api::Error,
    },

    // ── Resources ────────────────────────────────────────────────────
    #[error("{kind} '{id}' not found")]
    #[diagnostic(
        code(orionctl::not_found),
        help("Run: orionctl get {kind}s to see available ids")
    )]
    NotFound { kind: &'static str, id: String },

    // ── Remote API ───────────────────────────────────────────────────
    #[error("{kind} operation failed")]
    #[diagnostic(code(orionctl::api_error))]
    Api {
        kind: &'static str,
        #[source]
        source: orion_api::Error,
    },

    // ── Create inputs ────────────────────────────────────────────────
    #[error("Could not read resource file '{}'", .path.display())]
    #[diagnostic(code(orionctl::file_read))]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Resource file '{}' is not a valid {kind} definition", .path.display())]
    #[diagnostic(
        code(orionctl::resource_decode),
        help("The file must be a YAML document matching the {kind} schema.")
    )]
    ResourceDecode {
        kind: &'static str,
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    // ── Delete outcome ───────────────────────────────────────────────
    #[error("Failed to delete {failed} of {total} {kind}(s)")]
    #[diagnostic(
        code(orionctl::delete_failed),
        help("Failed ids are listed above; the rest were deleted.")
    )]
    DeleteFailed {
        kind: &'static str,
        failed: usize,
        total: usize,
    },
}

impl From<figment::Error> for CliError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

impl CliError {
    /// Wrap an API-layer error for a resource-kind-aware diagnostic.
    ///
    /// `id` is the identifier the failed operation targeted, when it
    /// targeted one.
    pub fn remote(kind: &'static str, id: Option<&str>, err: orion_api::Error) -> Self {
        if err.is_connect() {
            return Self::ConnectionFailed { source: err };
        }
        if let (true, Some(id)) = (err.is_not_found(), id) {
            return Self::NotFound {
                kind,
                id: id.to_owned(),
            };
        }
        Self::Api { kind, source: err }
    }

    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            _ => exit_code::GENERAL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_maps_404_to_not_found() {
        let err = CliError::remote(
            "subscription",
            Some("sub1"),
            orion_api::Error::Api {
                status: 404,
                error: "NotFound".into(),
                description: None,
            },
        );
        assert_eq!(err.exit_code(), exit_code::NOT_FOUND);
        assert!(matches!(err, CliError::NotFound { kind: "subscription", .. }));
    }

    #[test]
    fn remote_without_id_stays_an_api_error() {
        let err = CliError::remote(
            "registration",
            None,
            orion_api::Error::Api {
                status: 404,
                error: "NotFound".into(),
                description: None,
            },
        );
        assert_eq!(err.exit_code(), exit_code::GENERAL);
        assert!(matches!(err, CliError::Api { .. }));
    }

    #[test]
    fn delete_failure_is_general() {
        let err = CliError::DeleteFailed {
            kind: "subscription",
            failed: 1,
            total: 3,
        };
        assert_eq!(err.exit_code(), exit_code::GENERAL);
    }
}
