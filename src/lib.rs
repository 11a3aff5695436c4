mod aliases;
mod config;
mod error;
mod frontmatter;
mod links;
mod resolve;
mod search;
mod tags;
mod vault;

pub use crate::aliases::AliasIndex;
pub use crate::config::VaultConfig;
pub use crate::error::{Error, Result};
pub use crate::frontmatter::{aliases as frontmatter_aliases, extract as extract_frontmatter};
pub use crate::links::{link_at, parse_reference, parse_wiki, LinkKind, LinkRef};
pub use crate::resolve::{resolve, resolve_with, Chooser, FirstCandidate, Resolution};
pub use crate::search::{search, search_by_tag};
pub use crate::tags::{expand_for_completion, find_tags, TagIndex};
pub use crate::vault::{Vault, VaultPath};
