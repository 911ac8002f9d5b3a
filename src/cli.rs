use clap::{CommandFactory, Parser};

use crate::error::{Result, WorklogError};
use crate::worklog::WorkLog;

const ENV_HELP: &str = "Environment:
  JIRA_API_TOKEN  bearer token for the Jira API
  JIRA_HOST       worklog URL template containing {issue}";

/// jira-worklog - Log time against a Jira issue
#[derive(Parser, Debug)]
#[command(name = "jira-worklog")]
#[command(about = "Log time against a Jira issue")]
#[command(after_help = ENV_HELP)]
#[command(version)]
pub struct Cli {
    /// Jira issue (e.g. BCG-221)
    #[arg(short, long, default_value = "")]
    pub issue_name: String,

    /// Worklog comment
    #[arg(short, long, default_value = "")]
    pub comment: String,

    /// Time worked in minutes
    #[arg(short = 't', long, default_value_t = 0, allow_negative_numbers = true)]
    pub minutes_worked: i64,

    /// Print the request instead of sending it
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Validated input for a single worklog submission.
#[derive(Debug)]
pub struct WorklogRequest {
    pub issue: String,
    pub worklog: WorkLog,
}

impl Cli {
    /// Check the flags in order: issue, minutes, comment. The first failure wins.
    pub fn validate(&self) -> Result<WorklogRequest> {
        if self.issue_name.is_empty() {
            return Err(WorklogError::Usage("issue-name cannot be blank.".to_string()));
        }

        let worklog = WorkLog::from_minutes(self.comment.clone(), self.minutes_worked)?;

        if self.comment.is_empty() {
            return Err(WorklogError::Usage(
                "refusing to log work with empty message.".to_string(),
            ));
        }

        Ok(WorklogRequest {
            issue: self.issue_name.clone(),
            worklog,
        })
    }

    pub fn usage() -> String {
        Self::command().render_help().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn usage_message(args: &[&str]) -> String {
        match Cli::parse_from(args).validate() {
            Err(WorklogError::Usage(message)) => message,
            other => panic!("Expected usage error, got {other:?}"),
        }
    }

    #[test]
    fn test_short_flags() {
        let cli = Cli::parse_from(["jira-worklog", "-i", "BCG-221", "-c", "fixed bug", "-t", "30"]);
        assert_eq!(cli.issue_name, "BCG-221");
        assert_eq!(cli.comment, "fixed bug");
        assert_eq!(cli.minutes_worked, 30);
        assert!(!cli.dry_run);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_long_flags() {
        let cli = Cli::parse_from([
            "jira-worklog",
            "--issue-name",
            "BCG-221",
            "--comment",
            "fixed bug",
            "--minutes-worked",
            "30",
            "--dry-run",
            "--verbose",
        ]);
        let request = cli.validate().unwrap();
        assert_eq!(request.issue, "BCG-221");
        assert_eq!(request.worklog.time_spent_seconds(), 1800);
        assert_eq!(request.worklog.comment(), "fixed bug");
        assert!(cli.dry_run);
        assert!(cli.verbose);
    }

    #[test]
    fn test_negative_minutes_reach_validator() {
        let message = usage_message(&["jira-worklog", "-i", "A-1", "-c", "x", "-t", "-5"]);
        assert_eq!(message, "minutes must be more than 0 and less than a full day.");
    }

    #[test]
    fn test_full_day_rejected() {
        let message = usage_message(&["jira-worklog", "-i", "A-1", "-c", "x", "-t", "1440"]);
        assert!(message.contains("less than a full day"));
    }

    #[test]
    fn test_boundaries_accepted() {
        for minutes in ["1", "1439"] {
            let cli = Cli::parse_from(["jira-worklog", "-i", "A-1", "-c", "x", "-t", minutes]);
            assert!(cli.validate().is_ok());
        }
    }

    #[test]
    fn test_issue_checked_first() {
        let message = usage_message(&["jira-worklog"]);
        assert_eq!(message, "issue-name cannot be blank.");
    }

    #[test]
    fn test_minutes_checked_before_comment() {
        let message = usage_message(&["jira-worklog", "-i", "A-1"]);
        assert!(message.starts_with("minutes"));
    }

    #[test]
    fn test_empty_comment() {
        let message = usage_message(&["jira-worklog", "-i", "A-1", "-t", "30", "-c", ""]);
        assert_eq!(message, "refusing to log work with empty message.");
    }

    #[test]
    fn test_usage_lists_flags() {
        let usage = Cli::usage();
        assert!(usage.contains("--issue-name"));
        assert!(usage.contains("--minutes-worked"));
        assert!(usage.contains("JIRA_HOST"));
    }

    #[test]
    fn test_non_numeric_minutes_is_parse_error() {
        let result = Cli::try_parse_from(["jira-worklog", "-t", "half"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_help_does_not_panic() {
        let result = Cli::try_parse_from(["jira-worklog", "--help"]);
        assert!(result.is_err());
    }
}
