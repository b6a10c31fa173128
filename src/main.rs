// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity signup terminal client
//!
//! Loads the activity catalog and lets the user sign up for or be removed
//! from activities. Commands are read from stdin, one per line:
//!
//! ```text
//! signup <email> <activity name>
//! remove <row>            (row number shown next to each participant)
//! reload
//! show
//! quit
//! ```

use activity_signup::{config::Config, services::ViewSynchronizer, view::RowId};
use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(api = %config.api_base_url, "Starting activity signup client");

    let sync = ViewSynchronizer::from_config(&config).context("Failed to create API client")?;

    // Load failures are rendered into the page; keep going.
    let _ = sync.load_catalog().await;
    println!("{}", sync.snapshot().await);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match Command::parse(&line) {
            Some(Command::Signup { email, activity }) => {
                let _ = sync.signup(&activity, &email).await;
            }
            Some(Command::Remove(row)) => {
                let _ = sync.remove_row(row).await;
            }
            Some(Command::Reload) => {
                let _ = sync.load_catalog().await;
            }
            Some(Command::Show) => {}
            Some(Command::Quit) => break,
            None => {
                eprintln!("commands: signup <email> <activity> | remove <row> | reload | show | quit");
                continue;
            }
        }
        println!("{}", sync.snapshot().await);
    }

    Ok(())
}

/// One line of user input.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Signup { email: String, activity: String },
    Remove(RowId),
    Reload,
    Show,
    Quit,
}

impl Command {
    fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        match verb {
            "signup" => {
                let (email, activity) = rest.split_once(char::is_whitespace)?;
                let activity = activity.trim();
                if activity.is_empty() {
                    return None;
                }
                Some(Command::Signup {
                    email: email.to_string(),
                    activity: activity.to_string(),
                })
            }
            "remove" => rest
                .trim_start_matches('#')
                .parse()
                .ok()
                .map(|n| Command::Remove(RowId(n))),
            "reload" => Some(Command::Reload),
            "show" | "" => Some(Command::Show),
            "quit" | "exit" => Some(Command::Quit),
            _ => None,
        }
    }
}

/// Initialize structured JSON logging on stderr, keeping stdout for the page.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true)
        .with_writer(std::io::stderr);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("activity_signup=debug,info"));

    tracing_subscriber::registry().with(filter).with(format).init();
}
