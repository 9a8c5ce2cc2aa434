mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use pms_suggest_core::SuggestConfig;
use pms_suggest_service::SuggestionService;
use pms_suggest_storage::{SharedStore, SuggestionStore};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pms-suggest")]
#[command(about = "Local suggestion cache for parcel booking", long_about = None)]
struct Cli {
    /// Store file to use instead of the configured one
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Insert or overwrite a customer keyed by mobile number
    AddCustomer {
        name: String,
        mobile: String,
    },
    /// Look up a customer by mobile number
    Get {
        mobile: String,
    },
    /// List customers, optionally filtered by name or mobile fragment
    Customers {
        #[arg(short, long)]
        filter: Option<String>,
    },
    /// Suggestions for a form field: mobile, name, description or remark
    Search {
        field: String,
        partial: String,
    },
    AddDescription {
        text: String,
    },
    AddRemark {
        text: String,
    },
    Descriptions,
    Remarks,
    /// Record the customers and vocabulary of a submitted parcel
    Submit {
        #[arg(long)]
        sender_name: String,
        #[arg(long)]
        sender_mobile: String,
        #[arg(long)]
        receiver_name: String,
        #[arg(long)]
        receiver_mobile: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "")]
        remark: String,
    },
    /// Apply a refresh batch from a JSON file
    Refresh {
        file: PathBuf,
    },
    /// Write every collection to a JSON file
    Export {
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,
    },
    Stats,
}

fn build_service(db: Option<PathBuf>) -> SuggestionService {
    let mut config = SuggestConfig::from_env();
    let store: Arc<dyn SuggestionStore> = match db {
        Some(path) => {
            config = config.with_db_path(path);
            Arc::new(SharedStore::from_config(&config))
        },
        None => pms_suggest_storage::global(),
    };
    SuggestionService::new(store, &config)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let service = build_service(cli.db);

    match cli.command {
        Commands::AddCustomer { name, mobile } => {
            commands::record::add_customer(&service, &name, &mobile).await?;
        },
        Commands::Get { mobile } => commands::search::get(&service, &mobile).await?,
        Commands::Customers { filter } => {
            commands::search::customers(&service, filter.as_deref()).await?;
        },
        Commands::Search { field, partial } => {
            commands::search::suggest(&service, &field, &partial).await?;
        },
        Commands::AddDescription { text } => {
            commands::record::add_description(&service, &text).await?;
        },
        Commands::AddRemark { text } => commands::record::add_remark(&service, &text).await?,
        Commands::Descriptions => commands::search::descriptions(&service).await?,
        Commands::Remarks => commands::search::remarks(&service).await?,
        Commands::Submit {
            sender_name,
            sender_mobile,
            receiver_name,
            receiver_mobile,
            description,
            remark,
        } => {
            let submission = pms_suggest_service::ParcelSubmission {
                sender: pms_suggest_core::Customer::new(sender_name, sender_mobile),
                receiver: pms_suggest_core::Customer::new(receiver_name, receiver_mobile),
                description,
                remark,
            };
            commands::record::submit(&service, &submission).await?;
        },
        Commands::Refresh { file } => commands::record::refresh(&service, &file).await?,
        Commands::Export { out_dir } => commands::export::run(&service, &out_dir).await?,
        Commands::Stats => commands::search::stats(&service).await?,
    }

    Ok(())
}
