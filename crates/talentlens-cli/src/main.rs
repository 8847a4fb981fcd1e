//! TalentLens CLI - AI-powered resume screening and ranking

mod commands;

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// TalentLens - AI-powered resume screening and ranking
#[derive(Parser)]
#[command(name = "talentlens")]
#[command(version)]
#[command(about = "Screen and rank resumes against a job profile", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize TalentLens (create config and database)
    Init,

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Show AI provider settings with masked keys
    Settings,

    /// Verify a provider's API key is configured
    Check {
        /// Provider to check (defaults to the configured default)
        provider: Option<String>,
    },

    /// Manage job profiles
    #[command(subcommand)]
    Profile(ProfileCommands),

    /// Upload and analyze resume files
    Upload {
        /// Paths to resume files (.pdf, .doc, .docx)
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// AI provider to use (openai, gemini, groq)
        #[arg(short, long)]
        provider: Option<String>,
    },

    /// Upload a ZIP archive of resumes
    UploadZip {
        /// Path to the ZIP archive
        archive: PathBuf,

        /// AI provider to use (openai, gemini, groq)
        #[arg(short, long)]
        provider: Option<String>,
    },

    /// Import resumes from the configured remote folder
    Import {
        /// Folder to import from (overrides the configured folder)
        #[arg(short, long)]
        folder: Option<String>,

        /// AI provider to use (openai, gemini, groq)
        #[arg(short, long)]
        provider: Option<String>,
    },

    /// List resumes ranked by match score
    Rank {
        /// Filter by ingest source (upload, zip_upload, remote_import)
        #[arg(short, long)]
        source: Option<String>,

        /// Maximum number of resumes to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show details of a resume
    Show {
        /// Resume ID
        id: String,
    },

    /// Delete a resume
    Delete {
        /// Resume ID
        id: String,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Print the config and database file locations
    Path,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., ai.default_provider)
        key: String,

        /// Value to set
        value: String,
    },
}

#[derive(Subcommand)]
enum ProfileCommands {
    /// Create a job profile and make it active
    Create {
        /// Job title
        title: String,

        /// Job description
        #[arg(short, long, default_value = "")]
        description: String,

        /// Required skills, comma separated
        #[arg(short, long, default_value = "")]
        required: String,

        /// Preferred skills, comma separated
        #[arg(short = 'p', long, default_value = "")]
        preferred: String,

        /// Experience level (e.g., Junior, Mid, Senior)
        #[arg(short, long, default_value = "")]
        experience: String,
    },

    /// List all job profiles
    List,

    /// Make a profile the active one
    Activate {
        /// Profile ID
        id: String,
    },

    /// Show the active profile
    Active,

    /// Delete a profile
    Delete {
        /// Profile ID
        id: String,
    },
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("talentlens=debug,info"))
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("talentlens=info,warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Init => commands::init::run(),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::show(),
            ConfigCommands::Path => commands::config::path(),
            ConfigCommands::Set { key, value } => commands::config::set(&key, &value),
        },
        Commands::Settings => commands::settings::run(),
        Commands::Check { provider } => commands::check::run(provider.as_deref()),
        Commands::Profile(cmd) => match cmd {
            ProfileCommands::Create {
                title,
                description,
                required,
                preferred,
                experience,
            } => commands::profile::create(&title, &description, &required, &preferred, &experience),
            ProfileCommands::List => commands::profile::list(),
            ProfileCommands::Activate { id } => commands::profile::activate(&id),
            ProfileCommands::Active => commands::profile::active(),
            ProfileCommands::Delete { id } => commands::profile::delete(&id),
        },
        Commands::Upload { files, provider } => {
            commands::upload::run(&files, provider.as_deref())
        }
        Commands::UploadZip { archive, provider } => {
            commands::upload::run_zip(&archive, provider.as_deref())
        }
        Commands::Import { folder, provider } => {
            commands::import::run(folder.as_deref(), provider.as_deref())
        }
        Commands::Rank { source, limit } => commands::rank::run(source.as_deref(), limit),
        Commands::Show { id } => commands::show::run(&id),
        Commands::Delete { id } => commands::delete::run(&id),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}
