//! Team Balancer CLI
//!
//! Split a roster of rated players into balanced teams, or move rosters
//! between machines via transportable share codes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tb_cli::{format_teams, load_roster, save_roster};
use tb_core::models::PlayerId;
use tb_core::share::{decode_share, encode_share, merge_by_id, roster_ids};
use tb_core::split_teams_seeded;

#[derive(Parser)]
#[command(name = "tb_cli")]
#[command(about = "Split a roster of rated players into balanced teams", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Split selected players into balanced teams
    Split {
        /// Roster JSON file
        #[arg(long)]
        roster: PathBuf,

        /// Comma-separated player ids to include (defaults to everyone)
        #[arg(long, value_delimiter = ',')]
        ids: Option<Vec<PlayerId>>,

        /// Number of teams
        #[arg(long, default_value_t = 2)]
        teams: usize,

        /// Balance by this tag's ratings instead of the primary rating
        #[arg(long)]
        tag: Option<String>,

        /// Seed for reproducible tie-breaking (random when omitted)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print a transportable share code for a roster
    Share {
        /// Roster JSON file
        #[arg(long)]
        roster: PathBuf,
    },

    /// Merge a share code into a roster file (created if absent)
    Import {
        /// Roster JSON file
        #[arg(long)]
        roster: PathBuf,

        /// Share code produced by `share`
        #[arg(long)]
        code: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Split { roster, ids, teams, tag, seed } => {
            let players = load_roster(&roster)?;
            let selected = ids.unwrap_or_else(|| roster_ids(&players));
            let seed = seed.unwrap_or_else(rand::random);

            let result = split_teams_seeded(&players, &selected, teams, tag.as_deref(), seed)?;
            println!("{}", format_teams(&result, tag.as_deref()));
            println!("\nseed: {seed}");
        }

        Commands::Share { roster } => {
            let players = load_roster(&roster)?;
            println!("{}", encode_share(&players)?);
        }

        Commands::Import { roster, code } => {
            let base = if roster.exists() { load_roster(&roster)? } else { Vec::new() };
            let incoming = decode_share(&code)?;
            let merged = merge_by_id(base, incoming);
            save_roster(&roster, &merged)?;
            println!("merged {} players into {}", merged.len(), roster.display());
        }
    }

    Ok(())
}
