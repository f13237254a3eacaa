//! ugeo — Command-line interface for ugeo-core
//!
//! Usage examples
//! --------------
//!
//! - Show table sizes
//!   $ ugeo stats
//!
//! - Walk down the hierarchy (names are case-insensitive)
//!   $ ugeo districts
//!   $ ugeo subcounties wakiso
//!   $ ugeo parishes wakiso nangabo
//!   $ ugeo villages wakiso nangabo wampeewo
//!
//! - Walk up from a village
//!   $ ugeo parent katooke
//!   $ ugeo path katooke
//!
//! - Search, optionally with scores and as JSON
//!   $ ugeo search kampala --limit 10 --scores
//!   $ ugeo --json search kira
//!
//! Data source
//! -----------
//!
//! `--input <path>` (or `UGEO_DATA`) selects the dataset. A JSON source gets
//! a binary snapshot written next to it on first use, which later runs load
//! instead. Without either, the dataset bundled with `ugeo-core` is used.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use std::process::ExitCode;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use ugeo_core::{DefaultIndex, SearchOptions};

fn main() -> anyhow::Result<ExitCode> {
    let args = CliArgs::parse();
    init_logging(args.verbose)?;

    let owned;
    let index: &DefaultIndex = match &args.input {
        Some(path) => {
            owned = DefaultIndex::load_from_path(path)
                .with_context(|| format!("loading dataset from {}", path.display()))?;
            &owned
        }
        None => DefaultIndex::load().with_context(|| {
            format!(
                "loading dataset from {} (use --input or UGEO_DATA)",
                DefaultIndex::default_dataset_path().display()
            )
        })?,
    };

    let json = args.json;
    match args.command {
        Commands::Stats => {
            let stats = index.stats();
            if json {
                print_json(&stats)?;
            } else {
                println!("Index statistics:");
                println!("{stats}");
            }
        }

        Commands::Districts => print_names(json, index.districts())?,

        Commands::Subcounties { district } => {
            print_names(json, index.subcounties_in_district(&district))?
        }

        Commands::Parishes {
            district,
            subcounty,
        } => print_names(json, &index.parishes_in_subcounty(&district, &subcounty))?,

        Commands::Villages {
            district,
            subcounty,
            parish,
        } => print_names(json, index.villages_in_parish(&district, &subcounty, &parish))?,

        Commands::Village { name } => match index.location_by_village(&name) {
            Some(loc) if json => print_json(loc)?,
            Some(loc) => {
                println!("Village: {}", loc.village());
                println!("Parish: {}", loc.parish());
                println!("Subcounty: {}", loc.subcounty());
                println!("Constituency: {}", loc.constituency().unwrap_or("-"));
                println!("District: {}", loc.district());
            }
            None => return Ok(not_found("village", &name)),
        },

        Commands::Path { village } => match index.path(&village) {
            Some(path) if json => print_json(&path)?,
            Some(path) => println!("{path}"),
            None => return Ok(not_found("village", &village)),
        },

        Commands::Parent { village } => match index.parent(&village) {
            Some(parent) if json => print_json(&parent)?,
            Some(parent) => {
                println!("Parish: {}", parent.parish);
                println!("Subcounty: {}", parent.subcounty);
                println!("District: {}", parent.district);
            }
            None => return Ok(not_found("village", &village)),
        },

        Commands::Search {
            query,
            limit,
            scores,
        } => {
            let hits = index.search_hits(&query, &SearchOptions::new().limit(limit));
            if json {
                if scores {
                    print_json(&hits)?;
                } else {
                    let locations: Vec<_> = hits.iter().map(|h| h.location).collect();
                    print_json(&locations)?;
                }
            } else if hits.is_empty() {
                println!("No villages found matching: {query}");
            } else {
                for hit in hits {
                    if scores {
                        println!("{:>3}  {}", hit.score, hit.location);
                    } else {
                        println!("{}", hit.location);
                    }
                }
            }
        }

        Commands::Verify => {
            let report = index.verify();
            if json {
                print_json(&report)?;
            } else if report.is_empty() {
                println!("No inconsistencies found");
            } else {
                for finding in &report {
                    println!("{finding}");
                }
            }
            if !report.is_empty() {
                return Ok(ExitCode::FAILURE);
            }
        }

        Commands::Snapshot { out } => {
            index
                .save_as(&out)
                .with_context(|| format!("writing snapshot to {}", out.display()))?;
            info!(path = %out.display(), "snapshot written");
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Structured logging to stderr; `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) -> anyhow::Result<()> {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level.to_string()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_names<S: AsRef<str> + Serialize>(json: bool, names: &[S]) -> anyhow::Result<()> {
    if json {
        return print_json(names);
    }
    for name in names {
        println!("{}", name.as_ref());
    }
    Ok(())
}

fn not_found(kind: &str, name: &str) -> ExitCode {
    eprintln!("No {kind} found for: {name}");
    ExitCode::FAILURE
}
