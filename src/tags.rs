use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::Vault;

static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#[A-Za-z0-9_/+-]+").expect("tag pattern compiles"));

/// Scans raw text for tag tokens (`#` followed by alphanumerics, `-`,
/// `_`, `/`, `+`). The scan is not content-aware: tags inside code spans
/// or URLs match too.
pub fn find_tags(text: &str) -> BTreeSet<String> {
    TAG_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Catalog of distinct tags across the vault. Rebuilt wholesale; the new
/// set replaces the old one in a single assignment.
#[derive(Debug, Clone, Default)]
pub struct TagIndex {
    tags: BTreeSet<String>,
}

impl TagIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rebuild(&mut self, vault: &Vault) {
        let mut fresh = BTreeSet::new();
        for rel in vault.list_notes() {
            match vault.read_note(&rel) {
                Ok(text) => fresh.extend(find_tags(&text)),
                Err(err) => debug!("skipping unreadable note during tag rebuild: {err}"),
            }
        }
        self.tags = fresh;
    }

    pub fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Expands each base tag with a lower-cased and a capitalized variant
    /// for completion. Idempotent: expanding an expanded set is a no-op.
    pub fn expand_for_completion(&self) -> BTreeSet<String> {
        expand_for_completion(&self.tags)
    }

    /// Completion-backend contract: expanded tags matching a prefix.
    pub fn completion_candidates(&self, prefix: &str) -> Vec<String> {
        self.expand_for_completion()
            .into_iter()
            .filter(|t| t.starts_with(prefix))
            .collect()
    }
}

pub fn expand_for_completion(tags: &BTreeSet<String>) -> BTreeSet<String> {
    let mut out = BTreeSet::new();
    for tag in tags {
        let base = tag.strip_prefix('#').unwrap_or(tag);
        out.insert(tag.clone());
        out.insert(format!("#{}", base.to_lowercase()));
        out.insert(format!("#{}", capitalize(base)));
    }
    out
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(|c| c.to_lowercase())).collect(),
        None => String::new(),
    }
}
