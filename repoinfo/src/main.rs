use clap::{Parser, Subcommand, ValueEnum};
use repoinfo::{extract_repository_info, is_repository, presentation};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "repoinfo")]
#[command(about = "Inspect repository metadata through the git CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether a path is under version control
    Check {
        /// Path to inspect
        path: PathBuf,
    },
    /// Print branches, latest commit, and authors for a repository
    Info {
        /// Path to inspect
        path: PathBuf,
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: Format,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
    Toml,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check { path } => {
            if is_repository(&path) {
                println!("repository: {}", path.display());
            } else {
                println!("not a repository: {}", path.display());
                std::process::exit(1);
            }
        }
        Commands::Info { path, format } => {
            // `None` means not version-controlled; `Err` means metadata
            // could not be read from an apparently valid repository.
            match extract_repository_info(&path)? {
                Some(repo_info) => {
                    info!(path = %path.display(), "extracted repository metadata");
                    let rendered = match format {
                        Format::Text => presentation::render_text(&repo_info),
                        Format::Json => presentation::to_json(&repo_info)?,
                        Format::Toml => presentation::to_toml(&repo_info)?,
                    };
                    println!("{}", rendered);
                }
                None => {
                    println!("not a repository: {}", path.display());
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}
