//! Splits a list of names into balanced teams.
//!
//! # Usage
//!
//! ```bash
//! # Names from a file, one per line
//! team-splitter players.txt --teams 3
//!
//! # Names from stdin, with generated team names (remembered for next time)
//! cat players.txt | team-splitter -t 4 --team-names on
//!
//! # Reproducible split, copied to the clipboard
//! team-splitter players.txt -t 2 --seed "friday match" --copy
//! ```

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::io::{self, Read};
use std::path::PathBuf;
use team_splitter::export::{copy_teams, CommandClipboard};
use team_splitter::names::TeamNaming;
use team_splitter::preferences::{toggle_team_names, JsonFileStore, MemoryStore, PreferenceStore};
use team_splitter::render::{DisplayMode, Renderer, TextRenderer};
use team_splitter::roster::parse_roster;
use team_splitter::teams::TeamGenerator;
use team_splitter::Seeder;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum Toggle {
    On,
    Off,
}

#[derive(Debug, Parser)]
#[command(name = "team-splitter", version, about = "Split a list of names into balanced teams")]
struct Args {
    /// File with one name per line (reads stdin when omitted or `-`)
    input: Option<PathBuf>,

    /// Number of teams (at least 2, at most the number of names)
    #[arg(short, long, allow_negative_numbers = true)]
    teams: i64,

    /// Use generated team names; the choice is saved for later runs
    #[arg(long, value_enum)]
    team_names: Option<Toggle>,

    /// Seed making the split reproducible
    #[arg(long)]
    seed: Option<String>,

    /// Copy the teams to the clipboard
    #[arg(short, long)]
    copy: bool,

    /// Program used to copy, e.g. "xclip -selection clipboard"
    #[arg(long, requires = "copy")]
    clipboard_command: Option<String>,

    /// Compact output
    #[arg(long)]
    embed: bool,

    /// Preference file (defaults to the user's config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print debug logs
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    let mode = DisplayMode::detect(args.embed);
    let mut store: Box<dyn PreferenceStore> = match args.config.clone() {
        Some(path) => Box::new(JsonFileStore::new(path)),
        None => match JsonFileStore::default_location() {
            Some(store) => Box::new(store),
            None => {
                warn!("no config directory, preferences will not be saved");
                Box::new(MemoryStore::default())
            }
        },
    };
    let toggle = args.team_names.map(|t| t == Toggle::On);
    let preferences =
        toggle_team_names(store.as_mut(), toggle).context("failed to apply preferences")?;
    debug!(?preferences, ?mode, "starting");

    let text = read_input(args.input.as_ref())?;
    let roster = parse_roster(&text)?;

    let mut generator = TeamGenerator::new().naming(TeamNaming::from(preferences.team_names_enabled));
    if let Some(seed) = &args.seed {
        generator = generator.seed(Seeder::from(seed.as_str()));
    }
    let teams = generator.generate_from(&roster, args.teams)?;

    TextRenderer::new(io::stdout().lock(), mode)
        .render(&teams)
        .context("failed to print the teams")?;

    if args.copy {
        let mut clipboard = match &args.clipboard_command {
            Some(command) => CommandClipboard::with_command(command),
            None => CommandClipboard::detect(),
        };
        let acknowledgment = copy_teams(&teams, &mut clipboard)
            .context("failed to copy to clipboard, please try again")?;
        eprintln!("{acknowledgment}");
    }

    Ok(())
}

fn read_input(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read names from stdin")?;
            Ok(text)
        }
    }
}
