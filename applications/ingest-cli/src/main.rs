/// Ingest - bulk media importer
use clap::{Parser, Subcommand};
use ingest_cli::{commands, BulkImportArgs, IngestConfig};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "ingest")]
#[command(about = "Bulk import media files into a remote media library", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "INGEST_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload every matching file under a directory
    BulkImport {
        /// Directory to import
        #[arg(long)]
        path: PathBuf,
        /// Track type code to tag uploads with
        #[arg(long)]
        track_type: Option<String>,
        /// File suffixes to import (e.g. .mp3 .flac)
        #[arg(long, num_args = 1..)]
        allowed_extensions: Vec<String>,
        /// Delete each file after a successful upload
        #[arg(long)]
        delete_after_upload: bool,
        /// Delete files that are already known instead of skipping them
        #[arg(long)]
        delete_if_exists: bool,
        /// Keep going after a failed upload instead of stopping
        #[arg(long)]
        continue_on_error: bool,
        /// Descend into symlinked directories
        #[arg(long)]
        follow_links: bool,
    },
    /// List the known track types
    TrackTypes,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ingest=info,ingest_cli=info,ingest_importer=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = IngestConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::BulkImport {
            path,
            track_type,
            allowed_extensions,
            delete_after_upload,
            delete_if_exists,
            continue_on_error,
            follow_links,
        } => {
            let args = BulkImportArgs {
                path,
                track_type,
                allowed_extensions,
                delete_after_upload,
                delete_if_exists,
                continue_on_error,
                follow_links,
            };
            let summary = commands::bulk_import(&config, &args).await?;

            println!("{}", summary.summary_text());
            for (path, error) in &summary.errors {
                println!("  {}: {}", path.display(), error);
            }
        }
        Commands::TrackTypes => {
            let track_types = commands::list_track_types(&config).await?;

            println!("Track types:");
            for track_type in track_types {
                println!("  {} - {}", track_type.code, track_type.type_name);
            }
        }
    }

    Ok(())
}
