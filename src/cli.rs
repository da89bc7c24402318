//! CLI argument definitions.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::api::request::HttpMethod;
use crate::config::{env_vars, TempoConfig};

/// Top-level CLI parser for `jira-tempo`.
#[derive(Debug, Parser)]
#[command(name = "jira-tempo", version, about = "Log and list Tempo work-logs")]
pub struct Cli {
    /// Tempo API token.
    #[arg(long, global = true, env = env_vars::API_TOKEN, hide_env_values = true)]
    pub token: Option<String>,
    /// Tempo API base URL [default: https://api.tempo.io].
    #[arg(long, global = true, env = env_vars::SERVER_URL)]
    pub server_url: Option<String>,
    /// Write the last `{status, body, json}` result to this file.
    #[arg(long, global = true)]
    pub result_file: Option<PathBuf>,
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Settings shared by every command.
    #[must_use]
    pub fn config(&self) -> TempoConfig {
        TempoConfig::new(self.server_url.clone(), self.token.clone())
            .with_result_file(self.result_file.clone())
    }
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log time against a JIRA issue.
    Log {
        /// Issue key, e.g. PRJ-1000.
        ticket: String,
        /// Hours spent, e.g. 2, 2h or 1.5h.
        time: String,
        /// Day the work happened (YYYY-MM-DD). Asks before using today.
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Atlassian account id of the author.
        #[arg(long, env = env_vars::ACCOUNT_ID)]
        account_id: String,
        /// Work attribute as key=value. Repeatable.
        #[arg(long = "attribute", short = 'a', value_name = "KEY=VALUE")]
        attributes: Vec<String>,
        /// Free-text description.
        #[arg(long)]
        description: Option<String>,
    },
    /// List work-logs for one issue, or for the current month.
    Worklogs {
        /// Issue key; omit for every work-log this month.
        ticket: Option<String>,
    },
    /// List the accounts usable as work-log types.
    Types,
    /// Call any Tempo endpoint and print the response.
    Api {
        /// Path relative to the server url, e.g. /core/3/worklogs.
        path: Option<String>,
        /// HTTP method.
        #[arg(long, short = 'X', default_value = "GET")]
        method: HttpMethod,
        /// Full URL, used when no path is given.
        #[arg(long)]
        url: Option<String>,
        /// JSON request body.
        #[arg(long)]
        body: Option<String>,
        /// Extra header as "Name: value". Repeatable.
        #[arg(long = "header", short = 'H', value_name = "NAME: VALUE")]
        headers: Vec<String>,
    },
}
