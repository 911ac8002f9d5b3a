use std::time::Duration;

use reqwest::{Client, StatusCode, header};
use tracing::debug;

use crate::error::{Result, WorklogError};
use crate::worklog::WorkLog;

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Authenticated client for the Jira worklog endpoint.
pub struct JiraClient {
    http: Client,
    api_token: String,
}

impl JiraClient {
    pub fn new(api_token: impl Into<String>) -> Result<Self> {
        Self::with_timeout(api_token, REQUEST_TIMEOUT)
    }

    pub fn with_timeout(api_token: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(WorklogError::Transport)?;

        Ok(Self {
            http,
            api_token: api_token.into(),
        })
    }

    /// POST `worklog` to `url` and interpret the reply.
    pub async fn add_worklog(&self, url: &str, worklog: &WorkLog) -> Result<()> {
        let body = worklog.to_json()?;
        debug!(
            %url,
            comment = worklog.comment(),
            seconds = worklog.time_spent_seconds(),
            "sending worklog"
        );

        let response = self
            .http
            .post(url)
            .header(header::CONTENT_TYPE, "application/json")
            .bearer_auth(&self.api_token)
            .body(body)
            .send()
            .await
            .map_err(WorklogError::Transport)?;

        let status = response.status();
        let text = response.text().await.map_err(WorklogError::ResponseBody)?;
        debug!(status = status.as_u16(), bytes = text.len(), "received response");

        interpret_response(status, text)
    }
}

/// Map a worklog response to success or a fatal error. Only `201 Created`
/// succeeds.
pub fn interpret_response(status: StatusCode, body: String) -> Result<()> {
    match status {
        StatusCode::CREATED => Ok(()),
        StatusCode::BAD_REQUEST => Err(WorklogError::InvalidInput { body }),
        StatusCode::FORBIDDEN => Err(WorklogError::Unauthorized { body }),
        status => Err(WorklogError::UnhandledResponse { status, body }),
    }
}
