use std::ffi::OsString;
use std::fmt;

use crate::error::{Result, WorklogError};

pub const API_TOKEN_VAR: &str = "JIRA_API_TOKEN";
pub const HOST_VAR: &str = "JIRA_HOST";

const ISSUE_PLACEHOLDER: &str = "{issue}";
const LEGACY_PLACEHOLDER: &str = "%s";

/// Settings read from the environment once at startup.
pub struct Config {
    pub api_token: String,
    pub host_template: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var_os(name))
    }

    /// Resolve settings through `lookup`. The token is checked before the host.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let require = |name: &'static str| {
            lookup(name)
                .ok_or(WorklogError::MissingEnv { name })?
                .into_string()
                .map_err(|_| WorklogError::NonUnicodeEnv { name })
        };

        Ok(Self {
            api_token: require(API_TOKEN_VAR)?,
            host_template: require(HOST_VAR)?,
        })
    }

    /// Substitute `issue` into the host template.
    ///
    /// `{issue}` is preferred; a lone `%s` is accepted for older templates.
    pub fn worklog_url(&self, issue: &str) -> Result<String> {
        let template = &self.host_template;
        let placeholder = match (
            template.matches(ISSUE_PLACEHOLDER).count(),
            template.matches(LEGACY_PLACEHOLDER).count(),
        ) {
            (1, _) => ISSUE_PLACEHOLDER,
            (0, 1) => LEGACY_PLACEHOLDER,
            _ => {
                return Err(WorklogError::InvalidHostTemplate {
                    template: template.clone(),
                });
            }
        };

        Ok(template.replacen(placeholder, issue, 1))
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_token", &"<redacted>")
            .field("host_template", &self.host_template)
            .finish()
    }
}
