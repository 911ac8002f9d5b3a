mod cli;
mod client;
mod config;
mod error;
mod worklog;

use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Parser;
use cli::Cli;
use client::JiraClient;
use config::Config;
use error::{Result, WorklogError};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::from(err.exit_code())
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn report(err: &WorklogError) {
    if err.is_usage() {
        eprintln!("Error: {err}");
        eprintln!("{}", Cli::usage());
    } else {
        error!("{}", err.display_chain());
    }
}

async fn run(cli: &Cli) -> Result<()> {
    let request = cli.validate()?;
    let config = Config::from_env()?;
    debug!(?config, "resolved configuration");

    let url = config.worklog_url(&request.issue)?;

    if cli.dry_run {
        let body = request.worklog.to_json()?;
        println!("POST {url}");
        println!("{}", String::from_utf8_lossy(&body));
        return Ok(());
    }

    let client = JiraClient::new(config.api_token)?;

    println!("adding worklog for Jira issue: {}..", request.issue);
    client.add_worklog(&url, &request.worklog).await?;
    println!("success: worklog was added for Jira issue: {}", request.issue);

    Ok(())
}
