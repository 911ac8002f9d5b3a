use serde::Serialize;

use crate::error::{Result, WorklogError};

pub const MINUTES_PER_DAY: i64 = 60 * 24;

/// A Jira worklog entry as sent to the `worklog` endpoint.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct WorkLog {
    comment: String,
    time_spent_seconds: i64,
}

impl WorkLog {
    /// Build a worklog from minutes worked. Minutes must lie strictly between
    /// zero and a full day, so the stored seconds are always below 86400.
    pub fn from_minutes(comment: impl Into<String>, minutes: i64) -> Result<Self> {
        if minutes <= 0 || minutes >= MINUTES_PER_DAY {
            return Err(WorklogError::Usage(
                "minutes must be more than 0 and less than a full day.".to_string(),
            ));
        }

        Ok(Self {
            comment: comment.into(),
            time_spent_seconds: minutes * 60,
        })
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn time_spent_seconds(&self) -> i64 {
        self.time_spent_seconds
    }

    /// Serialize to the JSON request body.
    pub fn to_json(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self).map_err(WorklogError::Serialization)
    }
}
