use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::{frontmatter, Vault, VaultPath};

/// Exact-match lookup from alias string to owning note. Rebuilt wholesale
/// from frontmatter; the fresh map replaces the old one in a single
/// assignment. On collision the later document wins and the override is
/// logged.
#[derive(Debug, Clone, Default)]
pub struct AliasIndex {
    aliases: BTreeMap<String, VaultPath>,
}

impl AliasIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rebuild(&mut self, vault: &Vault) {
        let mut fresh: BTreeMap<String, VaultPath> = BTreeMap::new();

        for rel in vault.list_notes() {
            let text = match vault.read_note(&rel) {
                Ok(text) => text,
                Err(err) => {
                    debug!("skipping unreadable note during alias rebuild: {err}");
                    continue;
                }
            };

            // A malformed frontmatter block skips this document only.
            let fm = match frontmatter::extract(&text) {
                Ok(Some(fm)) => fm,
                Ok(None) => continue,
                Err(err) => {
                    warn!(path = %rel.as_str_lossy(), "skipping note with malformed frontmatter: {err}");
                    continue;
                }
            };

            for alias in frontmatter::aliases(&fm) {
                if let Some(prev) = fresh.insert(alias.clone(), rel.clone()) {
                    warn!(
                        %alias,
                        previous = %prev.as_str_lossy(),
                        now = %rel.as_str_lossy(),
                        "alias redefined; later note wins"
                    );
                }
            }
        }

        self.aliases = fresh;
    }

    pub fn resolve(&self, name: &str) -> Option<&VaultPath> {
        self.aliases.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &VaultPath)> {
        self.aliases.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}
