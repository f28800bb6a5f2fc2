//! CLI error types with miette diagnostics, and process exit codes.

use miette::Diagnostic;
use thiserror::Error;

use hosptrack_core::TrackOutcome;

use crate::config::ConfigError;

/// Exit codes.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    /// Startup validation failed (bad key) before any request was made.
    pub const INIT_FAILED: i32 = -1;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error("Invalid Torn City API key - exiting.")]
    #[diagnostic(
        code(hosptrack::invalid_key),
        help("Torn API keys are exactly 16 characters. Pass one with --key or TORN_API_KEY.")
    )]
    InvalidApiKey {
        #[source]
        source: hosptrack_api::Error,
    },

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(hosptrack::validation))]
    Validation { field: String, reason: String },

    #[error(transparent)]
    #[diagnostic(
        code(hosptrack::config),
        help("Check the config file passed with --config and any HOSPTRACK_* variables.")
    )]
    Config(Box<figment::Error>),

    #[error("Could not set up the HTTP client")]
    #[diagnostic(code(hosptrack::client))]
    Client {
        #[source]
        source: hosptrack_api::Error,
    },
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => Self::Validation { field, reason },
            ConfigError::Figment(inner) => Self::Config(inner),
        }
    }
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidApiKey { .. } => exit_code::INIT_FAILED,
            Self::Validation { .. } => exit_code::USAGE,
            Self::Config(_) | Self::Client { .. } => exit_code::GENERAL,
        }
    }
}

/// Exit code for a finished tracking run.
///
/// A rejected key exits with the client's negative sentinel; a zero
/// sentinel (API error code 0) still exits non-zero.
pub fn outcome_exit_code(outcome: &TrackOutcome) -> i32 {
    match outcome {
        TrackOutcome::KeyRejected { sentinel } => match i32::try_from(*sentinel) {
            Ok(0) => exit_code::INIT_FAILED,
            Ok(code) => code,
            Err(_) => exit_code::GENERAL,
        },
        TrackOutcome::MembersUnavailable { .. } => exit_code::GENERAL,
        TrackOutcome::NoFaction | TrackOutcome::Hospitalized { .. } => exit_code::SUCCESS,
    }
}

#[cfg(test)]
mod tests {
    use hosptrack_api::FactionId;

    use super::*;

    #[test]
    fn rejected_key_exits_with_sentinel() {
        assert_eq!(
            outcome_exit_code(&TrackOutcome::KeyRejected { sentinel: -2 }),
            -2
        );
        assert_eq!(
            outcome_exit_code(&TrackOutcome::KeyRejected { sentinel: -500 }),
            -500
        );
        assert_eq!(
            outcome_exit_code(&TrackOutcome::KeyRejected { sentinel: 0 }),
            exit_code::INIT_FAILED
        );
    }

    #[test]
    fn graceful_paths_exit_zero() {
        assert_eq!(outcome_exit_code(&TrackOutcome::NoFaction), exit_code::SUCCESS);
        let faction_id = FactionId::new(1).expect("non-zero");
        assert_eq!(
            outcome_exit_code(&TrackOutcome::MembersUnavailable { faction_id }),
            exit_code::GENERAL
        );
    }

    #[test]
    fn invalid_key_maps_to_init_failure() {
        let source = hosptrack_api::ApiKey::new("short").expect_err("rejected");
        let err = CliError::InvalidApiKey { source };
        assert_eq!(err.exit_code(), exit_code::INIT_FAILED);
    }
}
