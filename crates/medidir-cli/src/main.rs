mod analyze;
mod book;
mod doctors;
mod onboard;

use std::time::Duration;

use clap::{Parser, Subcommand};
use medidir_core::{load_seed, AppConfig, SortBy};
use medidir_scraper::{ProfileFetcher, ProfileUrlValidator};
use medidir_store::{DirectoryStore, FileStorage};
use tracing_subscriber::EnvFilter;

use crate::onboard::Onboarder;

#[derive(Debug, Parser)]
#[command(name = "medidir")]
#[command(about = "Hospital doctor directory")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Scrape a doctor profile URL and add the doctor to the directory
    Add {
        /// Profile URL, e.g. https://www.linqmd.com/doctor/<slug>
        url: String,
    },
    /// Remove a doctor by id
    Remove { id: String },
    /// List doctors
    List {
        /// Case-insensitive match on name or specialty
        #[arg(long)]
        search: Option<String>,
        /// Only doctors with exactly this specialty
        #[arg(long)]
        specialty: Option<String>,
        /// name or experience
        #[arg(long, default_value = "experience")]
        sort: SortBy,
    },
    /// Show departments with doctor counts, or one department's doctors
    Departments {
        #[arg(long)]
        name: Option<String>,
    },
    /// Recommend a specialty from symptoms or a description
    Analyze {
        /// A symptom from the analyzer's list; repeat for several
        #[arg(long = "symptom", conflicts_with = "text")]
        symptoms: Vec<String>,
        /// Free-text description of the symptoms
        #[arg(long)]
        text: Option<String>,
    },
    /// Book an appointment
    Book(book::BookArgs),
    /// Print profile URLs that resolve to bundled demo profiles
    Examples,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = medidir_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let Some(command) = cli.command else {
        println!("medidir: run `medidir --help` for commands");
        return Ok(());
    };

    match command {
        Commands::Add { url } => {
            let mut store = open_store(&config)?;
            let fetcher = ProfileFetcher::from_config(&config)
                .map_err(|e| anyhow::anyhow!("failed to build profile fetcher: {e}"))?;
            let onboarder = Onboarder::new(ProfileUrlValidator::new(&config.profile_host), fetcher);
            let onboarded = onboarder.onboard(&mut store, url.trim()).await?;
            println!("{}", onboarded.message);
            println!("id: {}", onboarded.doctor.id);
        }
        Commands::Remove { id } => doctors::run_remove(&mut open_store(&config)?, &id)?,
        Commands::List {
            search,
            specialty,
            sort,
        } => doctors::run_list(
            &open_store(&config)?,
            search.as_deref(),
            specialty.as_deref(),
            sort,
        ),
        Commands::Departments { name } => {
            doctors::run_departments(&open_store(&config)?, name.as_deref());
        }
        Commands::Analyze { symptoms, text } => {
            let input = analyze::analysis_input(symptoms, text)?;
            let delay = Duration::from_millis(config.analysis_delay_ms);
            analyze::run_analyze(&open_store(&config)?, &input, delay).await;
        }
        Commands::Book(args) => book::run_book(&open_store(&config)?, args)?,
        Commands::Examples => doctors::run_examples(&config.profile_host),
    }

    Ok(())
}

/// Open the file-backed directory, reconciled against the seed list.
fn open_store(config: &AppConfig) -> anyhow::Result<DirectoryStore<FileStorage>> {
    let seed = load_seed(&config.seed_path)?;
    let storage = FileStorage::new(&config.data_dir)?;
    let store = DirectoryStore::load(storage, seed.doctors)?;
    tracing::debug!(
        doctors = store.doctors().len(),
        data_dir = %config.data_dir.display(),
        "directory opened"
    );
    Ok(store)
}
