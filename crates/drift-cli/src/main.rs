use std::fs;
use std::io::Read;
use std::process;

use clap::{Parser, Subcommand};

use drift_io::prelude::*;

#[derive(Debug, Parser)]
#[command(name = "drift", version, about = "Drift-tolerant manifest diff and splitting")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Split a multi-document YAML stream into individual documents.
    Split {
        /// Input path, or `-` for stdin
        input: String,
    },
    /// Fingerprint the declared fields of a desired/observed document pair.
    Fingerprint {
        /// Desired (declared) document path
        desired: String,
        /// Observed (live) document path
        observed: String,
        /// Additional field names to ignore at every level
        #[arg(long = "ignore")]
        ignored: Vec<String>,
    },
    /// Print a document as sorted dotted-path key=value lines.
    Flatten {
        /// Input path, or `-` for stdin
        input: String,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.cmd {
        Command::Split { input } => {
            let content = read_input(&input)?;
            let documents = match split_documents(&content) {
                Ok(docs) => docs,
                Err(e) => {
                    eprintln!("{e}");
                    process::exit(2);
                }
            };
            for document in documents {
                println!("{document}");
                println!("---");
            }
        }
        Command::Fingerprint {
            desired,
            observed,
            ignored,
        } => {
            let desired = Manifest::parse(&read_input(&desired)?)?;
            let observed = Manifest::parse(&read_input(&observed)?)?;
            let exclusions = ExclusionSet::with_ignored(ignored);

            match fingerprint(desired.root(), observed.root(), &exclusions) {
                Ok(fp) => println!("{fp}"),
                Err(e) => {
                    // Exact error string, stable for CI / integrations.
                    eprintln!("{e}");
                    process::exit(2);
                }
            }
        }
        Command::Flatten { input } => {
            let manifest = Manifest::parse(&read_input(&input)?)?;
            for (path, value) in flatten(manifest.root()) {
                println!("{path}={value}");
            }
        }
    }

    Ok(())
}

fn read_input(path: &str) -> anyhow::Result<String> {
    if path == "-" {
        let mut content = String::new();
        std::io::stdin().read_to_string(&mut content)?;
        Ok(content)
    } else {
        Ok(fs::read_to_string(path)?)
    }
}
