use std::error::Error as _;

use reqwest::StatusCode;
use thiserror::Error;

/// Every way a worklog submission can fail.
///
/// All variants are terminal: `main` reports the error once and exits with
/// [`WorklogError::exit_code`]. Variants wrapping a library error keep the
/// cause out of their own message; [`WorklogError::display_chain`] appends it.
#[derive(Error, Debug)]
pub enum WorklogError {
    /// A command-line value failed validation. Printed with the usage text.
    #[error("{0}")]
    Usage(String),

    #[error("env var is not set: {name}")]
    MissingEnv { name: &'static str },

    #[error("env var is not valid unicode: {name}")]
    NonUnicodeEnv { name: &'static str },

    #[error("host template must contain exactly one {{issue}} or %s placeholder: {template}")]
    InvalidHostTemplate { template: String },

    #[error("couldn't encode worklog")]
    Serialization(#[source] serde_json::Error),

    #[error("request failed")]
    Transport(#[source] reqwest::Error),

    #[error("couldn't parse response body")]
    ResponseBody(#[source] reqwest::Error),

    #[error("invalid input: {body}")]
    InvalidInput { body: String },

    #[error("server returned: Unauthorized: {body}")]
    Unauthorized { body: String },

    #[error("unhandled response: {}\n{body}", status.as_u16())]
    UnhandledResponse { status: StatusCode, body: String },
}

impl WorklogError {
    /// Process exit status for this failure. Usage errors share clap's code.
    pub fn exit_code(&self) -> u8 {
        match self {
            WorklogError::Usage(_) => 2,
            _ => 1,
        }
    }

    pub fn is_usage(&self) -> bool {
        matches!(self, WorklogError::Usage(_))
    }

    /// The message followed by every underlying cause, joined with `": "`.
    pub fn display_chain(&self) -> String {
        let mut message = self.to_string();
        let mut cause = self.source();
        while let Some(err) = cause {
            message.push_str(": ");
            message.push_str(&err.to_string());
            cause = err.source();
        }
        message
    }
}

pub type Result<T> = std::result::Result<T, WorklogError>;
