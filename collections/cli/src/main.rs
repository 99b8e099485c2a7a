//! Collections CLI - inspect Galaxy dataset collections from the terminal.

use clap::{Parser, Subcommand};
use collections_lib::config::{API_KEY_VAR, URL_VAR};
use collections_lib::{
    CollectionElementsParams, CollectionEntry, CollectionsConfig, DatasetCollections,
    ElementsFromCollectionParams,
};
use color_eyre::eyre::WrapErr;
use serde::Serialize;
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "collections")]
#[command(about = "Inspect Galaxy dataset collections", long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', action = clap::ArgAction::Count, global = true)]
    log_verbosity: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    /// Server URL [env: GALAXY_URL]
    #[arg(long, global = true, value_name = "URL")]
    url: Option<String>,

    /// API key [env: GALAXY_API_KEY]
    #[arg(long, global = true, value_name = "KEY")]
    api_key: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show full metadata for a collection
    Details {
        /// The history dataset collection (HDCA) id
        #[arg(value_name = "HDCA_ID")]
        hdca_id: String,
    },

    /// List one page of a collection's elements as the server returns it
    Contents {
        /// The HDCA the collection belongs to
        #[arg(value_name = "HDCA_ID")]
        hdca_id: String,

        /// The collection to list (the HDCA's own collection or a nested one)
        #[arg(value_name = "COLLECTION_ID")]
        collection_id: String,

        /// Index of the first element [default: server's]
        #[arg(long)]
        offset: Option<u64>,

        /// Maximum number of elements [default: server's]
        #[arg(long)]
        limit: Option<u64>,
    },

    /// List elements of an HDCA, or of a collection nested inside it
    Browse {
        /// The HDCA to start from
        #[arg(value_name = "HDCA_ID")]
        hdca_id: String,

        /// A nested collection id to list instead of the HDCA's own collection
        #[arg(short, long, value_name = "SUB_COLLECTION_ID")]
        element: Option<String>,

        /// Index of the first element [default: 0]
        #[arg(long)]
        offset: Option<u64>,

        /// Maximum number of elements [default: 50]
        #[arg(long)]
        limit: Option<u64>,
    },

    /// Show a collection's display attributes
    Attributes {
        /// The history dataset collection (HDCA) id
        #[arg(value_name = "HDCA_ID")]
        hdca_id: String,
    },
}

/// Initialize tracing subscriber based on verbosity and output format
fn init_tracing(verbose: u8, json: bool) {
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "warn,collections_lib=info,api=info".to_string(),
            2 => "info,collections_lib=debug,api=debug".to_string(),
            _ => "debug,collections_lib=trace,api=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_file(verbose >= 3)
                    .with_line_number(verbose >= 3)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    }
}

/// Environment config with command-line overrides applied.
fn load_config(
    url: Option<String>,
    api_key: Option<String>,
) -> color_eyre::Result<CollectionsConfig> {
    let config = CollectionsConfig::from_lookup(|var| match var {
        URL_VAR if url.is_some() => url.clone(),
        API_KEY_VAR if api_key.is_some() => api_key.clone(),
        _ => std::env::var(var).ok(),
    })
    .wrap_err("loading configuration")?;

    Ok(config)
}

fn print_json<T: Serialize>(value: &T) -> color_eyre::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.log_verbosity, cli.json_logs);

    let config = load_config(cli.url, cli.api_key)?;
    tracing::debug!(?config, "configuration loaded");
    let collections = DatasetCollections::from_config(&config)?;

    match cli.command {
        Commands::Details { hdca_id } => {
            let details = collections
                .fetch_collection_details(&hdca_id)
                .await
                .wrap_err_with(|| format!("fetching details of {hdca_id}"))?;
            print_json(&details)?;
        }
        Commands::Contents {
            hdca_id,
            collection_id,
            offset,
            limit,
        } => {
            let params = CollectionElementsParams {
                hdca_id,
                collection_id,
                offset,
                limit,
            };
            let elements = collections
                .fetch_collection_elements(params)
                .await
                .wrap_err("fetching collection contents")?;
            print_json(&elements)?;
        }
        Commands::Browse {
            hdca_id,
            element,
            offset,
            limit,
        } => {
            let entry = match element {
                Some(sub_collection_id) => {
                    CollectionEntry::sub_collection(hdca_id, sub_collection_id)
                }
                None => {
                    let details = collections
                        .fetch_collection_details(&hdca_id)
                        .await
                        .wrap_err_with(|| format!("fetching details of {hdca_id}"))?;
                    CollectionEntry::from(&details)
                }
            };
            let params = ElementsFromCollectionParams {
                entry,
                offset,
                limit,
            };
            let elements = collections
                .fetch_elements_from_collection(params)
                .await
                .wrap_err("fetching collection elements")?;
            print_json(&elements)?;
        }
        Commands::Attributes { hdca_id } => {
            let attributes = collections
                .fetch_collection_attributes(&hdca_id)
                .await
                .wrap_err_with(|| format!("fetching attributes of {hdca_id}"))?;
            print_json(&attributes)?;
        }
    }

    Ok(())
}
