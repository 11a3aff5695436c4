use regex::RegexBuilder;
use tracing::debug;

use crate::{Result, Vault, VaultPath};

/// Case-insensitive regex search across note bodies. Hits are file-level:
/// a note appears once no matter how many lines match. Unreadable notes
/// are skipped; results are sorted for stable output.
pub fn search(vault: &Vault, pattern: &str) -> Result<Vec<VaultPath>> {
    let re = RegexBuilder::new(pattern).case_insensitive(true).build()?;

    let mut hits = Vec::new();
    for rel in vault.list_notes() {
        match vault.read_note(&rel) {
            Ok(text) => {
                if re.is_match(&text) {
                    hits.push(rel);
                }
            }
            Err(err) => debug!("skipping unreadable note during search: {err}"),
        }
    }
    hits.sort();
    Ok(hits)
}

/// Searches for a literal tag string, case-folded.
pub fn search_by_tag(vault: &Vault, tag: &str) -> Result<Vec<VaultPath>> {
    search(vault, &regex::escape(tag))
}
