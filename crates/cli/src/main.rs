//! Journal CLI - read reviews, goals and frameworks from a data directory.

use anyhow::Result;
use clap::{Parser, Subcommand};
use journal_api::{ApiError, JournalService};
use journal_storage::MarkdownStorage;
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "journal")]
#[command(about = "Journaling documents and review feed", long_about = None)]
struct Cli {
    /// Root of the journal data
    #[arg(long, default_value = ".journal")]
    data_dir: std::path::PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the journal directory layout
    Init,
    /// Merged review feed
    Reviews {
        /// all, daily or weekly
        #[arg(long = "type")]
        review_type: Option<String>,
        /// asc or desc
        #[arg(long)]
        sort: Option<String>,
    },
    /// Goal snapshot for a horizon (one-year, three-year, ten-year)
    Goals {
        horizon: String,
    },
    /// Full goals document for a horizon
    Goal {
        horizon: String,
    },
    /// Framework document
    Framework {
        /// annual-review, vivid-vision or ideal-life-costing
        name: String,
    },
    /// Daily review for a date (YYYY-MM-DD)
    Daily {
        date: String,
    },
    /// Weekly review for a week start date (YYYY-MM-DD)
    Weekly {
        date: String,
    },
    /// Draft management
    Draft {
        #[command(subcommand)]
        action: DraftAction,
    },
}

#[derive(Subcommand)]
enum DraftAction {
    /// Print the draft of a document, e.g. `weekly/2025-12-29`
    Show { document: String },
    /// Print whether a draft exists and is worth restoring
    Status { document: String },
    /// Discard the draft of a document
    Clear { document: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let storage = MarkdownStorage::new(&cli.data_dir);
    debug!("Journal data at {}", cli.data_dir.display());
    let service = JournalService::new(storage);

    let outcome = match cli.command {
        Commands::Init => {
            service.storage().init().await?;
            info!("Initialized journal at {}", cli.data_dir.display());
            Ok(0)
        }
        Commands::Reviews { review_type, sort } => {
            render(service.reviews(review_type.as_deref(), sort.as_deref()).await)
        }
        Commands::Goals { horizon } => render(service.goal_snapshot(&horizon).await),
        Commands::Goal { horizon } => render(service.goal_detail(&horizon).await),
        Commands::Framework { name } => render(service.framework(&name).await),
        Commands::Daily { date } => render(service.daily_review(&date).await),
        Commands::Weekly { date } => render(service.weekly_review(&date).await),
        Commands::Draft { action } => match action {
            DraftAction::Show { document } => render(service.draft(&document).await),
            DraftAction::Status { document } => render(service.draft_status(&document).await),
            DraftAction::Clear { document } => {
                let cleared = service.clear_draft(&document).await;
                render(cleared.map(|()| serde_json::json!({ "success": true })))
            }
        },
    };

    match outcome? {
        0 => Ok(()),
        status => std::process::exit(i32::from(status / 100)),
    }
}

/// Print a response or error body. Returns the status code for errors, 0 on success.
fn render<T: Serialize>(result: journal_api::Result<T>) -> Result<u16> {
    match result {
        Ok(value) => {
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok(0)
        }
        Err(e) => report(&e),
    }
}

fn report(error: &ApiError) -> Result<u16> {
    let status = error.status_code();
    eprintln!("{} {}", status, serde_json::to_string(&error.body())?);
    Ok(status)
}
