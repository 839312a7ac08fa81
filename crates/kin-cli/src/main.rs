//! CLI binary for kintree: load a family record, query the graph, and
//! lay out chart rows.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use kin_core::config::KinConfig;
use kin_core::storage;
use kin_core::tree::Tree;
use kin_nav::explore::{explore, explore_down, explore_up, incomplete};
use kin_nav::generation::generation;
use kin_nav::layout::layout;
use kin_nav::path::Navigator;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "kintree", about = "Family graph queries and chart layout")]
struct Cli {
    /// Path to the family record file (JSON)
    #[arg(short, long, global = true, default_value = "family.json")]
    file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a person's details
    Show {
        /// Person identifier
        id: String,
    },

    /// Search people by name substring
    Search {
        /// Text to match anywhere in a name
        text: String,
    },

    /// Signed generation distance between two people
    Generation {
        from: String,
        to: String,
    },

    /// A connecting path between two people
    Path {
        from: String,
        to: String,
    },

    /// People reachable from a person
    Explore {
        /// Starting person identifier
        id: String,

        /// Direction: up, down, both
        #[arg(short, long, default_value = "both")]
        direction: String,

        /// Maximum levels to traverse (unlimited if omitted)
        #[arg(short, long)]
        levels: Option<usize>,
    },

    /// People around the head whose data is not yet complete
    Incomplete {
        /// Maximum levels to consider (unlimited if omitted)
        #[arg(short, long)]
        levels: Option<usize>,
    },

    /// Lay out chart rows around the head
    Layout {
        /// Override the record's head
        #[arg(long)]
        head: Option<String>,

        /// Maximum levels to include (unlimited if omitted)
        #[arg(long)]
        lookback: Option<usize>,

        /// Print the layout as JSON instead of rows
        #[arg(long)]
        json: bool,
    },

    /// Change the designated head and save the record
    SetHead {
        id: String,
    },

    /// Rename a person's identifier everywhere and save the record
    Rename {
        old: String,
        new: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config_dir = cli
        .file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let config = KinConfig::load(config_dir)?;
    let mut tree = storage::load(&cli.file)?;

    match cli.command {
        Commands::Show { id } => cmd_show(&tree, &id),
        Commands::Search { text } => cmd_search(&tree, &text, config.navigation.search_limit),
        Commands::Generation { from, to } => cmd_generation(&tree, &from, &to),
        Commands::Path { from, to } => cmd_path(&tree, &from, &to),
        Commands::Explore {
            id,
            direction,
            levels,
        } => cmd_explore(&tree, &id, &direction, levels),
        Commands::Incomplete { levels } => cmd_incomplete(&tree, levels),
        Commands::Layout {
            head,
            lookback,
            json,
        } => cmd_layout(&tree, &config, head, lookback, json),
        Commands::SetHead { id } => {
            tree.set_head(&id)?;
            storage::save(&cli.file, &tree)
        }
        Commands::Rename { old, new } => {
            tree.rename(&old, &new)?;
            storage::save(&cli.file, &tree)
        }
    }
}

fn cmd_show(tree: &Tree, id: &str) -> Result<()> {
    let person = tree
        .get(id)
        .with_context(|| format!("unknown person: {id}"))?;
    println!("{} ({})", person.name, person.id);
    match (&person.dob, &person.dod) {
        (Some(dob), Some(dod)) => println!("  {dob} - {dod}"),
        (Some(dob), None) => println!("  b: {dob}"),
        (None, Some(dod)) => println!("  d: {dod}"),
        (None, None) => {}
    }
    println!("  sex: {}", format!("{:?}", person.sex).to_lowercase());
    for edge in &person.family {
        let relation = format!("{:?}", edge.relation).to_lowercase();
        if edge.notes.is_empty() {
            println!("  {relation}: {}", edge.person_id);
        } else {
            println!("  {relation}: {} ({})", edge.person_id, edge.notes);
        }
    }
    if !person.notes.is_empty() {
        println!("  notes: {}", person.notes);
    }
    Ok(())
}

fn cmd_search(tree: &Tree, text: &str, limit: usize) -> Result<()> {
    let matches = tree.search_names(text);
    for person in matches.iter().take(limit) {
        println!("{}  {}", person.id, person.name);
    }
    if matches.len() > limit {
        println!("... {} more", matches.len() - limit);
    }
    Ok(())
}

fn cmd_generation(tree: &Tree, from: &str, to: &str) -> Result<()> {
    match generation(tree, from, to) {
        Some(offset) => println!("{offset}"),
        None => println!("not connected"),
    }
    Ok(())
}

fn cmd_path(tree: &Tree, from: &str, to: &str) -> Result<()> {
    let nav = Navigator::new(tree);
    match nav.path(from, to) {
        Some(path) => {
            let ids: Vec<&str> = path.iter().map(|p| p.id.as_str()).collect();
            println!("{}", ids.join(" -> "));
        }
        None => println!("not connected"),
    }
    Ok(())
}

fn cmd_explore(tree: &Tree, id: &str, direction: &str, levels: Option<usize>) -> Result<()> {
    let head = tree
        .get(id)
        .with_context(|| format!("unknown person: {id}"))?;
    let nodes = match direction {
        "up" => explore_up(tree, head, levels),
        "down" => explore_down(tree, head, levels),
        "both" => explore(tree, head, levels),
        other => anyhow::bail!("unknown direction: {other} (expected up, down, or both)"),
    };
    let mut people: Vec<_> = nodes.into_iter().collect();
    people.sort_by(|a, b| a.id.cmp(&b.id));
    for person in people {
        println!("{}  {}", person.id, person.name);
    }
    Ok(())
}

fn cmd_incomplete(tree: &Tree, levels: Option<usize>) -> Result<()> {
    let head = tree.head().context("record has no head")?;
    let mut people: Vec<_> = incomplete(tree, head, levels).into_iter().collect();
    people.sort_by(|a, b| a.id.cmp(&b.id));
    for person in people {
        println!("{}  {}", person.id, person.name);
    }
    Ok(())
}

fn cmd_layout(
    tree: &Tree,
    config: &KinConfig,
    head: Option<String>,
    lookback: Option<usize>,
    json: bool,
) -> Result<()> {
    let head_id = head
        .or_else(|| tree.head().map(|p| p.id.clone()))
        .context("record has no head; pass --head")?;
    let lookback = lookback.or(config.layout.lookback);
    let chart = layout(tree, &head_id, lookback, &config.layout)
        .with_context(|| format!("unknown person: {head_id}"))?;
    if json {
        println!("{}", serde_json::to_string_pretty(&chart)?);
    } else {
        // older generations print first, matching chart top-to-bottom order
        for (g, row) in chart.rows.iter().rev() {
            println!("{g:>3}: {}", row.join(" | "));
        }
    }
    Ok(())
}
