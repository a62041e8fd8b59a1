//! `diagnosis-engine` command line interface.
//!
//! Reads survey bundles from disk and prints JSON to stdout. Logs go to stderr.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;

use diagnosis_engine::adapters::{read_document, FileBundleStore};
use diagnosis_engine::application::{
    GenerateCohortReportHandler, GenerateCohortReportQuery, LayoutTemplatesCommand,
    LayoutTemplatesHandler,
};
use diagnosis_engine::config::{EngineConfig, LogFormat, LoggingConfig};
use diagnosis_engine::domain::analysis::CohortFilter;
use diagnosis_engine::domain::placement::{PlacementMode, PlacementSlot};

#[derive(Parser)]
#[command(name = "diagnosis-engine", version, about = "Survey diagnosis and cohort analytics")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a cohort report from a survey bundle
    Report {
        /// Bundle file (.json, .yaml or .yml)
        #[arg(long)]
        bundle: PathBuf,
        /// Cohort filter file; everyone is included when omitted
        #[arg(long)]
        filter: Option<PathBuf>,
    },
    /// Snap a bundle's result templates onto a placement grid
    Layout {
        #[arg(long)]
        bundle: PathBuf,
        /// free, template-4, template-8 or template-16
        #[arg(long)]
        mode: PlacementMode,
    },
    /// Print the slot grid of a placement mode
    Slots {
        #[arg(long)]
        mode: PlacementMode,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SlotListing {
    mode: PlacementMode,
    capacity: Option<usize>,
    slots: Vec<PlacementSlot>,
}

fn init_tracing(logging: &LoggingConfig) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(logging.env_filter())
        .with_writer(std::io::stderr);
    match logging.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.pretty().init(),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = EngineConfig::load()?;
    config.validate()?;
    init_tracing(&config.logging);

    match cli.command {
        Commands::Report { bundle, filter } => {
            let filter: CohortFilter = match filter {
                Some(path) => read_document(&path).await?,
                None => CohortFilter::everyone(),
            };

            let store = Arc::new(FileBundleStore::new(&bundle));
            let handler = GenerateCohortReportHandler::new(store.clone(), store)
                .with_options(config.report_options());

            info!(bundle = %bundle.display(), "Generating cohort report");
            let report = handler.handle(GenerateCohortReportQuery { filter }).await?;
            print_json(&report)?;
        }
        Commands::Layout { bundle, mode } => {
            let store = Arc::new(FileBundleStore::new(&bundle));
            let result = LayoutTemplatesHandler::new(store)
                .handle(LayoutTemplatesCommand { mode })
                .await?;
            print_json(&result)?;
        }
        Commands::Slots { mode } => {
            print_json(&SlotListing {
                mode,
                capacity: mode.capacity(),
                slots: mode.slot_positions().to_vec(),
            })?;
        }
    }

    Ok(())
}
