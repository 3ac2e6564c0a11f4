//! hadith CLI entry point

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use hadith_reader::{
    commands::{
        cmd_category, cmd_chapter, cmd_collection, cmd_collections, cmd_editions, cmd_get,
        cmd_init, cmd_random, cmd_resolve, cmd_search, cmd_speak, print_chapter_page,
        print_collections, print_editions, print_hadith, print_overview, print_reference,
        print_search_results, print_speak_report, SearchOptions, SpeakTarget,
    },
    config::Config,
    error::Result,
    speech::SpeechClient,
    upstream::HttpSource,
    HadithRetrievalService,
};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "hadith")]
#[command(version, about = "Browse, search and study hadith collections", long_about = None)]
struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default configuration file
    Init {
        /// Force overwrite existing config
        #[arg(long)]
        force: bool,
    },

    /// Search hadith text, narrators and Arabic text
    Search {
        /// Text to search for (empty lists everything scanned)
        #[arg(default_value = "")]
        query: String,

        /// Restrict to one collection (e.g. bukhari)
        #[arg(long)]
        collection: Option<String>,

        /// Keep only these grades (Sahih, Hasan, Da'if, Mawdu', Unknown)
        #[arg(long)]
        grade: Vec<String>,

        /// Keep only hadiths from these narrators
        #[arg(long)]
        narrator: Vec<String>,
    },

    /// Show a random hadith
    Random,

    /// Show a hadith by id (e.g. bukhari-1)
    Get {
        /// Hadith id in the form collection-number
        id: String,
    },

    /// List known collections
    Collections,

    /// Show a collection with its chapters and sample hadiths
    Collection {
        /// Collection id (e.g. muslim)
        id: String,
    },

    /// Browse a page of a chapter
    Chapter {
        /// Collection id
        collection: String,

        /// Chapter number (1-based)
        chapter: u32,

        /// Page number (1-based)
        #[arg(long, default_value = "1")]
        page: u32,
    },

    /// Resolve a reference like bukhari:3984 to its chapter
    Resolve {
        /// Reference in the form collection:number
        reference: String,
    },

    /// Search a study category (faith, worship, character, law, prophetic, social)
    Category {
        /// Category name
        name: String,

        /// Restrict to one collection
        #[arg(long)]
        collection: Option<String>,
    },

    /// List upstream editions
    Editions,

    /// Synthesize a hadith's text to an audio file
    Speak {
        /// Hadith id to speak
        #[arg(required_unless_present = "random", conflicts_with = "random")]
        id: Option<String>,

        /// Speak a random hadith instead
        #[arg(long)]
        random: bool,

        /// Output file for the MPEG audio
        #[arg(short, long, default_value = "hadith.mp3")]
        output: PathBuf,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let json = cli.json;
    let config_path = cli.config;

    match cli.command {
        Commands::Init { force } => {
            let base_dir = config_path.as_deref().map(config_base_dir);
            let path = cmd_init(base_dir, force)?;
            println!("✓ hadith initialized");
            println!("  Config: {}", path.display());
        }

        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "hadith", &mut std::io::stdout());
        }

        Commands::Collections => {
            let collections = cmd_collections();
            emit(json, &collections, |c| print_collections(c))?;
        }

        Commands::Resolve { reference } => {
            let target = cmd_resolve(&reference)?;
            emit(json, &target, print_reference)?;
        }

        Commands::Search {
            query,
            collection,
            grade,
            narrator,
        } => {
            let (_, service) = open_service(config_path.as_deref())?;
            let options = SearchOptions {
                collection,
                grades: grade,
                narrators: narrator,
            };
            let report = cmd_search(&service, &query, options).await?;
            emit(json, &report, print_search_results)?;
        }

        Commands::Random => {
            let (_, service) = open_service(config_path.as_deref())?;
            let record = cmd_random(&service).await;
            emit(json, &record, print_hadith)?;
        }

        Commands::Get { id } => {
            let (_, service) = open_service(config_path.as_deref())?;
            let record = cmd_get(&service, &id).await?;
            emit(json, &record, print_hadith)?;
        }

        Commands::Collection { id } => {
            let (_, service) = open_service(config_path.as_deref())?;
            let overview = cmd_collection(&service, &id).await?;
            emit(json, &overview, print_overview)?;
        }

        Commands::Chapter {
            collection,
            chapter,
            page,
        } => {
            let (_, service) = open_service(config_path.as_deref())?;
            let page = cmd_chapter(&service, &collection, chapter, page).await;
            emit(json, &page, print_chapter_page)?;
        }

        Commands::Category { name, collection } => {
            let (_, service) = open_service(config_path.as_deref())?;
            let report = cmd_category(&service, &name, collection.as_deref()).await;
            emit(json, &report, print_search_results)?;
        }

        Commands::Editions => {
            let (_, service) = open_service(config_path.as_deref())?;
            let editions = cmd_editions(&service).await;
            emit(json, &editions, print_editions)?;
        }

        Commands::Speak { id, random, output } => {
            let (config, service) = open_service(config_path.as_deref())?;
            let target = match id {
                Some(id) if !random => SpeakTarget::Id(id),
                _ => SpeakTarget::Random,
            };
            let speech = SpeechClient::from_env(&config.speech)?;
            let report = cmd_speak(&service, &speech, target, &output).await?;
            emit(json, &report, print_speak_report)?;
        }
    }

    Ok(())
}

/// Load the config and build the retrieval service over the CDN
fn open_service(config_path: Option<&Path>) -> Result<(Config, HadithRetrievalService<HttpSource>)> {
    let config = load_config(config_path)?;
    let service = HadithRetrievalService::from_config(&config)?;
    Ok((config, service))
}

/// Print `value` as pretty JSON or through the human-readable printer
fn emit<T: Serialize + ?Sized>(json: bool, value: &T, print: impl FnOnce(&T)) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        print(value);
    }
    Ok(())
}

/// `--config` may name a .toml file or a directory
fn config_base_dir(path: &Path) -> PathBuf {
    if path.extension().is_some_and(|e| e == "toml") {
        path.parent()
            .map(PathBuf::from)
            .unwrap_or_else(Config::default_base_dir)
    } else {
        path.to_path_buf()
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) if path.extension().is_some_and(|e| e == "toml") => Config::load(path),
        Some(dir) => Config::load_from(Some(dir.to_path_buf())),
        None => Config::load_from(None),
    }
}
