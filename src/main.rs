use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use mdvault::{
    parse_reference, AliasIndex, FirstCandidate, LinkRef, Resolution, TagIndex, Vault, VaultPath,
};

#[derive(Debug, Parser)]
#[command(name = "mdv", version, about = "Markdown vault indexing + link resolution CLI")]
struct Cli {
    /// Path to the vault root.
    #[arg(long, env = "MDVAULT_DIR", global = true)]
    vault: Option<PathBuf>,

    /// Print list output as JSON.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List eligible notes.
    Files,
    /// List the tag catalog, expanded for completion.
    Tags {
        /// Only print candidates matching this prefix.
        #[arg(long)]
        prefix: Option<String>,
    },
    /// List aliases and the notes that own them.
    Aliases,
    /// Resolve a link reference ([[wiki]], [desc](target), or bare target).
    Resolve {
        /// The reference text.
        reference: String,

        /// On an ambiguous match, take the first candidate instead of
        /// listing all of them.
        #[arg(long)]
        first: bool,
    },
    /// Search note bodies with a case-insensitive regex.
    Search {
        /// The pattern.
        pattern: String,
    },
    /// Search note bodies for a literal tag.
    SearchTag {
        /// The tag, with or without leading '#'.
        tag: String,
    },
    /// Print vault counts.
    Stats,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let vault_dir = cli
        .vault
        .clone()
        .context("no vault configured; pass --vault or set MDVAULT_DIR")?;
    let vault = Vault::open(&vault_dir)?;

    match cli.command {
        Command::Files => {
            let mut notes = vault.list_notes();
            notes.sort();
            print_paths(&notes, cli.json)?;
        }
        Command::Tags { prefix } => {
            let mut index = TagIndex::new();
            index.rebuild(&vault);
            let tags: Vec<String> = match prefix {
                Some(prefix) => index.completion_candidates(&prefix),
                None => index.expand_for_completion().into_iter().collect(),
            };
            print_strings(&tags, cli.json)?;
        }
        Command::Aliases => {
            let mut index = AliasIndex::new();
            index.rebuild(&vault);
            if cli.json {
                let map: std::collections::BTreeMap<&str, String> = index
                    .iter()
                    .map(|(alias, path)| (alias, path.as_str_lossy()))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&map)?);
            } else {
                for (alias, path) in index.iter() {
                    println!("{alias}\t{}", path.as_str_lossy());
                }
            }
        }
        Command::Resolve { reference, first } => {
            let link = parse_reference(&reference)
                .with_context(|| format!("not a link reference: {reference:?}"))?;
            run_resolve(&vault, &link, first)?;
        }
        Command::Search { pattern } => {
            let hits = mdvault::search(&vault, &pattern)?;
            print_paths(&hits, cli.json)?;
        }
        Command::SearchTag { tag } => {
            let tag = if tag.starts_with('#') {
                tag
            } else {
                format!("#{tag}")
            };
            let hits = mdvault::search_by_tag(&vault, &tag)?;
            print_paths(&hits, cli.json)?;
        }
        Command::Stats => {
            let notes = vault.list_notes();
            let mut tags = TagIndex::new();
            tags.rebuild(&vault);
            let mut aliases = AliasIndex::new();
            aliases.rebuild(&vault);

            #[derive(serde::Serialize)]
            struct Stats {
                notes: usize,
                tags: usize,
                aliases: usize,
            }
            let stats = Stats {
                notes: notes.len(),
                tags: tags.len(),
                aliases: aliases.len(),
            };
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("notes: {}", stats.notes);
                println!("tags: {}", stats.tags);
                println!("aliases: {}", stats.aliases);
            }
        }
    }

    Ok(())
}

fn run_resolve(vault: &Vault, link: &LinkRef, first: bool) -> anyhow::Result<()> {
    let resolution = if first {
        mdvault::resolve_with(vault, link, &FirstCandidate)
    } else {
        mdvault::resolve(vault, link)
    };

    match resolution {
        Resolution::Resolved(path) => println!("{}", path.as_str_lossy()),
        Resolution::External(url) => println!("external: {url}"),
        Resolution::Ambiguous(candidates) => {
            eprintln!("ambiguous reference; candidates:");
            for c in &candidates {
                println!("{}", c.as_str_lossy());
            }
        }
        Resolution::Missing => anyhow::bail!("no note matches {:?}", link.target),
    }
    Ok(())
}

fn print_paths(paths: &[VaultPath], json: bool) -> anyhow::Result<()> {
    let strings: Vec<String> = paths.iter().map(|p| p.as_str_lossy()).collect();
    print_strings(&strings, json)
}

fn print_strings(strings: &[String], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(strings)?);
    } else {
        for s in strings {
            println!("{s}");
        }
    }
    Ok(())
}
