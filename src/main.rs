use std::cmp::Ordering;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tool_catalog::version::{compare_strings, is_valid, resolver};

#[derive(Parser)]
#[command(name = "tool-catalog")]
#[command(version, about = "Semantic version engine for the internal tool catalog")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check a version string against the semantic version grammar
    Validate { version: String },
    /// Compare two versions by SemVer precedence
    Compare { left: String, right: String },
    /// Resolve the highest-precedence version among candidates
    Latest {
        /// Candidate version strings; malformed ones are skipped
        candidates: Vec<String>,
        /// Version to fall back to when no candidate validates
        #[arg(long)]
        fallback: Option<String>,
    },
    /// Sort versions from highest to lowest precedence, dropping
    /// malformed candidates and duplicates
    Sort { candidates: Vec<String> },
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Validate { version } => {
            if is_valid(&version) {
                println!("valid");
            } else {
                println!("invalid");
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Compare { left, right } => {
            let symbol = match compare_strings(&left, &right)? {
                Ordering::Less => "<",
                Ordering::Equal => "=",
                Ordering::Greater => ">",
            };
            println!("{left} {symbol} {right}");
        }
        Command::Latest {
            candidates,
            fallback,
        } => match resolver::latest(&candidates, fallback.as_deref()) {
            Some(version) => println!("{version}"),
            None => println!("no version available"),
        },
        Command::Sort { candidates } => {
            for version in resolver::all_sorted(&candidates, None) {
                println!("{version}");
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
