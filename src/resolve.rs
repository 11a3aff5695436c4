use std::path::Path;

use crate::{LinkKind, LinkRef, Vault, VaultPath};

/// Outcome of resolving a reference against the vault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Resolved(VaultPath),
    /// Multiple candidates match; the caller picks (no automatic ranking).
    Ambiguous(Vec<VaultPath>),
    /// The target is a URL; hand the raw string to an external opener.
    External(String),
    Missing,
}

/// Disambiguation strategy, injected so the core never does interactive
/// I/O itself. Returns an index into the candidate list, or `None` to
/// leave the ambiguity standing.
pub trait Chooser {
    fn choose(&self, candidates: &[VaultPath]) -> Option<usize>;
}

/// Headless strategy: always take the first (lexicographically smallest)
/// candidate.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstCandidate;

impl Chooser for FirstCandidate {
    fn choose(&self, candidates: &[VaultPath]) -> Option<usize> {
        (!candidates.is_empty()).then_some(0)
    }
}

/// Resolves a reference to a note in the vault.
///
/// Targets containing a colon are URLs and short-circuit to `External`
/// before any filesystem matching, for both link syntaxes. Otherwise the
/// normalized target is suffix-matched against every eligible relative
/// path, freshly enumerated.
pub fn resolve(vault: &Vault, link: &LinkRef) -> Resolution {
    if link.target.contains(':') {
        return Resolution::External(link.target.clone());
    }

    let wanted = normalize_target(link);
    let mut candidates: Vec<VaultPath> = vault
        .list_notes()
        .into_iter()
        .filter(|rel| rel.as_str_lossy().ends_with(&wanted))
        .collect();
    candidates.sort();

    match candidates.len() {
        0 => Resolution::Missing,
        1 => Resolution::Resolved(candidates.remove(0)),
        _ => Resolution::Ambiguous(candidates),
    }
}

/// Resolves, then applies `chooser` to an ambiguous outcome.
pub fn resolve_with(vault: &Vault, link: &LinkRef, chooser: &dyn Chooser) -> Resolution {
    match resolve(vault, link) {
        Resolution::Ambiguous(candidates) => match chooser.choose(&candidates) {
            Some(ix) if ix < candidates.len() => Resolution::Resolved(candidates[ix].clone()),
            _ => Resolution::Ambiguous(candidates),
        },
        other => other,
    }
}

/// Normalizes a link target for matching: `%20` becomes a space, and a
/// wiki target without an extension gets `.md` appended. Markdown targets
/// are taken verbatim, extension included.
pub(crate) fn normalize_target(link: &LinkRef) -> String {
    let mut target = link.target.replace("%20", " ");
    if link.kind == LinkKind::Wiki && !has_extension(&target) {
        target.push_str(".md");
    }
    target
}

fn has_extension(target: &str) -> bool {
    Path::new(target)
        .extension()
        .is_some_and(|e| !e.is_empty())
}
