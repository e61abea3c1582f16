//! CLI binary for wordscope.
//!
//! Results go to stdout; tracing output goes to stderr.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use wordscope::{AppConfig, Dashboard, SearchHistoryItem, WordscopeError};
use wordscope_search::{ResultRecord, SearchOutcome, SearchType};

/// wordscope: look up related words from the command line.
#[derive(Parser)]
#[command(name = "wordscope", version, about)]
struct Cli {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Command,
}

/// Available commands.
#[derive(Subcommand)]
enum Command {
    /// Start a local session.
    Login {
        /// User name (any non-empty value).
        #[arg(short, long)]
        username: String,
        /// Password (any non-empty value; not checked against a server).
        #[arg(short, long)]
        password: String,
        /// Keep the session for the longer remember-me period.
        #[arg(long)]
        remember_me: bool,
    },

    /// End the local session.
    Logout,

    /// Show whether a session is active.
    Status,

    /// List the available search types.
    Types,

    /// Search for related words.
    Search {
        /// Search type, e.g. `similar-meaning` or `letter-pattern`.
        #[arg(value_parser = parse_search_type)]
        search_type: SearchType,
        /// Query text; interpreted according to the search type.
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Review past searches.
    History {
        #[command(subcommand)]
        action: Option<HistoryAction>,
    },
}

/// History subcommands.
#[derive(Subcommand)]
enum HistoryAction {
    /// List past searches, most recent first.
    List,
    /// Show the results of one past search.
    Show { id: String },
    /// Delete one past search.
    Remove { id: String },
    /// Delete all past searches.
    Clear,
}

fn parse_search_type(value: &str) -> Result<SearchType, String> {
    value.parse().map_err(|e: wordscope_search::SearchError| {
        let names: Vec<_> = SearchType::all().iter().map(SearchType::name).collect();
        format!("{e}; expected one of: {}", names.join(", "))
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("wordscope=info,wordscope_search=info")),
        )
        .init();

    let cli = Cli::parse();

    let config = match cli.config {
        Some(ref path) => AppConfig::from_file(path)?,
        None => AppConfig::load_or_default(&AppConfig::default_config_path())?,
    };

    let mut dashboard = Dashboard::open(&config)?;

    let result = match cli.command {
        Command::Login {
            username,
            password,
            remember_me,
        } => {
            let credential = dashboard
                .session()
                .login(&username, &password, remember_me)?;
            println!("Logged in until {}", format_epoch(credential.expires_in));
            Ok(())
        }
        Command::Logout => {
            dashboard.session().logout();
            println!("Logged out");
            Ok(())
        }
        Command::Status => {
            match dashboard.session().expires_at() {
                Some(expiry) => println!("Logged in until {}", expiry.to_rfc3339()),
                None => println!("Not logged in"),
            }
            Ok(())
        }
        Command::Types => {
            for t in SearchType::all() {
                println!("{:<22} {} (e.g. \"{}\")", t.name(), t.description(), t.example());
            }
            Ok(())
        }
        Command::Search { search_type, text } => {
            run_search(&mut dashboard, search_type, &text.join(" ")).await
        }
        Command::History { action } => {
            run_history(&mut dashboard, action.unwrap_or(HistoryAction::List))
        }
    };

    match result {
        Err(WordscopeError::Unauthenticated) => {
            anyhow::bail!("not logged in; run `wordscope login` first")
        }
        other => Ok(other?),
    }
}

async fn run_search(
    dashboard: &mut Dashboard<wordscope::FileStore, wordscope_search::HttpTransport>,
    search_type: SearchType,
    input: &str,
) -> wordscope::Result<()> {
    let outcome = dashboard.search(search_type, input).await?;
    dashboard.leave();
    match outcome {
        SearchOutcome::Success(records) if records.is_empty() => {
            println!("No results");
        }
        SearchOutcome::Success(records) => {
            println!("Search results ({})", records.len());
            print_records(&records);
        }
        SearchOutcome::Failure(message) => {
            eprintln!("warning: {message}");
        }
    }
    Ok(())
}

fn run_history(
    dashboard: &mut Dashboard<wordscope::FileStore, wordscope_search::HttpTransport>,
    action: HistoryAction,
) -> wordscope::Result<()> {
    match action {
        HistoryAction::List => {
            let items = dashboard.history()?;
            if items.is_empty() {
                println!("No search history");
            }
            for item in items {
                print_item_summary(item);
            }
        }
        HistoryAction::Show { id } => match dashboard.history_item(&id)? {
            Some(item) => {
                print_item_summary(item);
                print_records(&item.results);
            }
            None => println!("No search with id {id}"),
        },
        HistoryAction::Remove { id } => {
            if dashboard.remove_history(&id)? {
                println!("Removed {id}");
            } else {
                println!("No search with id {id}");
            }
        }
        HistoryAction::Clear => {
            dashboard.clear_history()?;
            println!("Search history cleared");
        }
    }
    Ok(())
}

fn print_item_summary(item: &SearchHistoryItem) {
    println!(
        "{}  {}  {}  ({} results)",
        item.id,
        item.timestamp.format("%Y-%m-%d %H:%M:%S"),
        item.query,
        item.results.len()
    );
}

fn print_records(records: &[ResultRecord]) {
    for record in records {
        println!("  {record}");
    }
}

fn format_epoch(secs: i64) -> String {
    chrono::DateTime::from_timestamp(secs, 0)
        .map(|t| t.to_rfc3339())
        .unwrap_or_else(|| secs.to_string())
}
