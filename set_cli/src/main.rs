//! set_cli - recommend an armor set from a catalog on disk
//!
//! Reads `armors.toml`, `talismans.toml` and `skills.toml` from a data
//! directory (or one JSON catalog file), searches for the best loadout for
//! the requested skills and prints it as text or JSON.
//!
//! Run with: `set_cli --data <dir> --skill "Attack Boost" --skill "Critical Eye"`

use anyhow::{bail, Context, Result};
use clap::Parser;
use set_core::{Catalog, PriorityMode, Recommender, SearchConfig};
use std::path::{Path, PathBuf};

/// Armor set recommender
#[derive(Parser)]
#[command(name = "set_cli")]
#[command(about = "Find the best armor set for a list of skills", long_about = None)]
#[command(version)]
struct Cli {
    /// Catalog directory, or a single `.json` catalog file
    #[arg(long, short = 'd')]
    data: PathBuf,

    /// Requested skill, in priority order (repeatable)
    #[arg(long = "skill", short = 's', value_name = "NAME")]
    skills: Vec<String>,

    /// Ranking priority: `defense` or `decorations`
    #[arg(long, short = 'p', default_value = "defense")]
    priority: PriorityMode,

    /// Search settings file (TOML)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Print the recommendation as JSON
    #[arg(long)]
    json: bool,

    /// List the catalog's skills and their caps, then exit
    #[arg(long)]
    list_skills: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let catalog = load_catalog(&cli.data)?;

    if cli.list_skills {
        list_skills(&catalog);
        return Ok(());
    }

    if cli.skills.is_empty() {
        bail!("no skills requested, pass at least one --skill");
    }

    let config = match &cli.config {
        Some(path) => SearchConfig::load(path)
            .with_context(|| format!("failed to load search config {}", path.display()))?,
        None => SearchConfig::default(),
    };

    let recommender = Recommender::new(catalog, config);
    let recommendation = recommender
        .recommend(&cli.skills, cli.priority)
        .with_context(|| format!("no recommendation for {}", cli.skills.join(", ")))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&recommendation)?);
    } else {
        print!("{}", recommendation);
    }
    Ok(())
}

fn load_catalog(path: &Path) -> Result<Catalog> {
    let is_json = path.extension().is_some_and(|ext| ext == "json");
    let catalog = if is_json {
        Catalog::load_json(path)
    } else {
        Catalog::load_dir(path)
    }
    .with_context(|| format!("failed to load catalog from {}", path.display()))?;

    tracing::debug!(
        "loaded {} armor pieces, {} talismans, {} skill caps",
        catalog.armors().len(),
        catalog.talismans().len(),
        catalog.skill_caps().len()
    );
    Ok(catalog)
}

fn list_skills(catalog: &Catalog) {
    let caps = catalog.skill_caps();
    let mut names: Vec<&str> = caps.names().collect();
    names.sort_unstable();
    for name in names {
        if let Some(max_level) = caps.cap(name) {
            println!("{} (max level {})", name, max_level);
        }
    }
}
