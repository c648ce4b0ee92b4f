use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{debug, level_filters::LevelFilter};
use tracing_subscriber::EnvFilter;

use finance_networks::{export_entities, load_stories, ExportConfig};

/// Extract entities from annotated finance news stories
#[derive(Parser, Debug)]
#[command(name = "financenetworks")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write every entity mention to a CSV file
    Export {
        /// Prodigy JSONL annotation file
        input: PathBuf,

        /// Destination CSV file
        output: PathBuf,

        /// TOML file with export settings
        #[arg(short, long, env = "FINANCENETWORKS_CONFIG")]
        config: Option<PathBuf>,

        /// Keep duplicate rows
        #[arg(long)]
        keep_duplicates: bool,
    },

    /// Print each story's entities as name:Type
    Show {
        input: PathBuf,

        /// TOML file with export settings
        #[arg(short, long, env = "FINANCENETWORKS_CONFIG")]
        config: Option<PathBuf>,

        /// Characters of context kept on each side of a mention
        #[arg(short, long)]
        window: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        Commands::Export {
            input,
            output,
            config,
            keep_duplicates,
        } => {
            let config = load_config(config.as_deref())?.with_overrides(None, keep_duplicates);

            let summary = export_entities(&input, &output, &config)
                .with_context(|| format!("Failed to export entities from {}", input.display()))?;

            println!(
                "✓ {} stories, {} rows written to {} ({} duplicates dropped)",
                summary.stories,
                summary.written_rows,
                output.display(),
                summary.duplicates_dropped()
            );
        }
        Commands::Show {
            input,
            config,
            window,
        } => {
            let config = load_config(config.as_deref())?.with_overrides(window, false);
            let stories = load_stories(&input)
                .with_context(|| format!("Failed to load stories from {}", input.display()))?;

            for (index, story) in stories.iter().enumerate() {
                for entity in story.entities(config.neighborhood_window) {
                    println!("{}\t{}", index, entity);
                }
            }
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<ExportConfig> {
    let config = ExportConfig::load_or_default(path).with_context(|| match path {
        Some(path) => format!("Failed to load config {}", path.display()),
        None => "Failed to build default config".to_string(),
    })?;
    debug!(window = config.neighborhood_window, dedup = config.drop_duplicates, "config");
    Ok(config)
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    // RUST_LOG wins when set
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
