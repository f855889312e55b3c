use std::process::ExitCode;

use clap::{Parser, Subcommand};
use store_client::StoreClient;

use crate::{commands::ExpenseArgs, error::Result};

mod commands;
mod error;
mod settings;

#[derive(Parser, Debug)]
#[command(name = "outlay")]
#[command(about = "Record and review expenses kept in a remote JSON store")]
struct Cli {
    /// Optional config file path (TOML).
    #[arg(long, global = true)]
    config: Option<String>,
    /// Override the store base URL.
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Record a new expense.
    Add(ExpenseArgs),
    /// List stored expenses, newest first.
    List {
        /// Only show expenses from the default recent window (7 days).
        #[arg(long)]
        recent: bool,
        /// Only show expenses from the last N days (implies `--recent`).
        #[arg(long, value_name = "N")]
        days: Option<u32>,
    },
    /// Change fields of a stored expense.
    Edit {
        #[arg(allow_hyphen_values = true)]
        id: String,
        #[command(flatten)]
        fields: ExpenseArgs,
    },
    /// Remove a stored expense.
    Delete {
        #[arg(allow_hyphen_values = true)]
        id: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut settings = settings::load(cli.config.as_deref())?;
    if let Some(base_url) = cli.base_url {
        settings.store.base_url = base_url;
    }

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "outlay={level},store_client={level}",
            level = settings.app.level
        ))
        .with_writer(std::io::stderr)
        .init();

    let mut client = StoreClient::new(&settings.store.base_url)?;
    if let Some(token) = settings.store.auth {
        client = client.with_auth(token);
    }
    tracing::debug!(base_url = %settings.store.base_url, "store client ready");

    let mut out = std::io::stdout().lock();
    match cli.command {
        Command::Add(fields) => commands::add(&client, &fields, &mut out).await,
        Command::List { recent, days } => {
            let today = chrono::Local::now().date_naive();
            commands::list(&client, recent_window(recent, days), today, &mut out).await
        }
        Command::Edit { id, fields } => commands::edit(&client, &id, &fields, &mut out).await,
        Command::Delete { id } => commands::delete(&client, &id, &mut out).await,
    }
}

/// Day window for `list`; `None` lists the whole collection.
fn recent_window(recent: bool, days: Option<u32>) -> Option<u32> {
    match days {
        Some(days) => Some(days),
        None => recent.then_some(engine::RECENT_DAYS),
    }
}
