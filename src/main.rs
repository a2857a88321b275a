use anyhow::Result;
use clap::{Parser, Subcommand};
use dirtools::commands::{AnnotateCommand, Command, ExplodeCommand, TreeCommand};
use dirtools::constants;
use dirtools::contacts::ExplodeOptions;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dirtools")]
#[command(about = "Directory tree printers and a contact CSV exploder")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a directory tree with annotation labels on selected paths
    Annotate {
        /// Directory to print
        #[arg(default_value = constants::annotate::DEFAULT_ROOT)]
        path: PathBuf,

        /// YAML file replacing the built-in annotation table
        #[arg(short, long)]
        annotations: Option<PathBuf>,

        /// Output in JSON format for machine consumption
        #[arg(long)]
        json: bool,
    },

    /// Print a depth-limited directory tree, skipping build and cache directories
    Tree {
        /// Directory to print (defaults to the current directory)
        path: Option<PathBuf>,

        /// Maximum depth below the root to descend
        #[arg(short = 'd', long, default_value_t = constants::tree::DEFAULT_MAX_DEPTH)]
        max_depth: usize,

        /// Output in JSON format for machine consumption
        #[arg(long)]
        json: bool,
    },

    /// Split multi-valued contact columns of an investor CSV into one row per contact
    Explode {
        /// CSV file to read
        #[arg(short, long, default_value = constants::contacts::DEFAULT_INPUT)]
        input: PathBuf,

        /// CSV file to write
        #[arg(short, long, default_value = constants::contacts::DEFAULT_OUTPUT)]
        output: PathBuf,

        /// Column holding contact names (after header normalization)
        #[arg(long, default_value = constants::contacts::NAME_COLUMN)]
        name_column: String,

        /// Column holding contact emails (after header normalization)
        #[arg(long, default_value = constants::contacts::EMAIL_COLUMN)]
        email_column: String,

        /// Keep rows with no contacts instead of dropping them
        #[arg(long)]
        keep_empty: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let command: Box<dyn Command> = match cli.command {
        Commands::Annotate {
            path,
            annotations,
            json,
        } => Box::new(AnnotateCommand {
            root: path,
            annotations,
            json,
        }),
        Commands::Tree {
            path,
            max_depth,
            json,
        } => {
            let root = match path {
                Some(path) => path,
                None => std::env::current_dir()?,
            };
            Box::new(TreeCommand {
                root,
                max_depth,
                json,
            })
        }
        Commands::Explode {
            input,
            output,
            name_column,
            email_column,
            keep_empty,
        } => Box::new(ExplodeCommand {
            input,
            output,
            options: ExplodeOptions {
                name_column,
                email_column,
                keep_empty,
            },
        }),
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    command.execute(&mut out)?;

    Ok(())
}
