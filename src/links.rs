use crate::VaultPath;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LinkKind {
    Wiki,
    Markdown,
}

/// A parsed in-text reference: `[[target]]`, `[[target|description]]` or
/// `[description](target)`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LinkRef {
    pub kind: LinkKind,
    pub target: String,
    pub display: Option<String>,
}

impl LinkRef {
    pub fn wiki(target: impl Into<String>) -> Self {
        Self {
            kind: LinkKind::Wiki,
            target: target.into(),
            display: None,
        }
    }

    pub fn markdown(target: impl Into<String>) -> Self {
        Self {
            kind: LinkKind::Markdown,
            target: target.into(),
            display: None,
        }
    }
}

/// Parses the inner text of a wiki link (between `[[` and `]]`).
pub fn parse_wiki(inner: &str) -> Option<LinkRef> {
    let s = inner.trim();
    if s.is_empty() {
        return None;
    }

    let (target, display) = match s.split_once('|') {
        Some((left, right)) => (
            left.trim(),
            Some(right.trim().to_string()).filter(|d| !d.is_empty()),
        ),
        None => (s, None),
    };

    if target.is_empty() {
        return None;
    }

    Some(LinkRef {
        kind: LinkKind::Wiki,
        target: target.to_string(),
        display,
    })
}

/// Parses a free-form reference string: bracketed wiki form, bracketed
/// markdown form, or a bare wiki target.
pub fn parse_reference(s: &str) -> Option<LinkRef> {
    let s = s.trim();
    if let Some(inner) = s.strip_prefix("[[").and_then(|r| r.strip_suffix("]]")) {
        return parse_wiki(inner);
    }
    if let Some((link, _)) = scan_markdown(s, 0) {
        return Some(link);
    }
    if s.is_empty() {
        return None;
    }
    Some(LinkRef::wiki(s))
}

/// Finds the link whose span covers `offset` in `text`, if any. Pure
/// text-offset recognition: no editor state, just the string and a byte
/// position. When `current` names the document containing the text, a
/// wiki reference pointing back at that same document is not offered as
/// followable.
pub fn link_at(text: &str, offset: usize, current: Option<&VaultPath>) -> Option<LinkRef> {
    if let Some((link, span)) = wiki_span_at(text, offset) {
        debug_assert!(span.0 <= offset && offset < span.1);
        if let Some(cur) = current {
            let normalized = crate::resolve::normalize_target(&link);
            if cur.as_str_lossy().ends_with(&normalized) {
                return None;
            }
        }
        return Some(link);
    }

    markdown_span_at(text, offset).map(|(link, _)| link)
}

fn wiki_span_at(text: &str, offset: usize) -> Option<(LinkRef, (usize, usize))> {
    let bytes = text.as_bytes();
    let mut i = 0usize;
    while i + 1 < bytes.len() {
        if bytes[i] != b'[' || bytes[i + 1] != b'[' {
            i += 1;
            continue;
        }
        let start = i;
        let mut j = start + 2;
        let mut end = None;
        while j + 1 < bytes.len() {
            if bytes[j] == b'\n' {
                break;
            }
            if bytes[j] == b']' && bytes[j + 1] == b']' {
                end = Some(j + 2);
                break;
            }
            j += 1;
        }
        let Some(end) = end else {
            i = j;
            continue;
        };

        if (start..end).contains(&offset) {
            return parse_wiki(&text[start + 2..end - 2]).map(|l| (l, (start, end)));
        }
        i = end;
    }
    None
}

fn markdown_span_at(text: &str, offset: usize) -> Option<(LinkRef, (usize, usize))> {
    let mut i = 0usize;
    while i < text.len() {
        let Some((link, (start, end))) = scan_markdown(text, i) else {
            return None;
        };
        if (start..end).contains(&offset) {
            return Some((link, (start, end)));
        }
        if offset < start {
            return None;
        }
        i = end;
    }
    None
}

/// Scans for the first `[description](target)` construct at or after
/// `from`, returning the link and its byte span.
fn scan_markdown(text: &str, from: usize) -> Option<(LinkRef, (usize, usize))> {
    let bytes = text.as_bytes();
    let mut i = from;
    while i < bytes.len() {
        if bytes[i] != b'[' {
            i += 1;
            continue;
        }
        // Wiki brackets are not markdown descriptions.
        if i + 1 < bytes.len() && bytes[i + 1] == b'[' {
            i += 2;
            continue;
        }
        let start = i;
        let mut j = start + 1;
        while j < bytes.len() && bytes[j] != b']' && bytes[j] != b'\n' {
            j += 1;
        }
        if j >= bytes.len() || bytes[j] != b']' || j + 1 >= bytes.len() || bytes[j + 1] != b'(' {
            i = start + 1;
            continue;
        }
        let display = text[start + 1..j].trim();

        let mut k = j + 2;
        while k < bytes.len() && bytes[k] != b')' && bytes[k] != b'\n' {
            k += 1;
        }
        if k >= bytes.len() || bytes[k] != b')' {
            i = start + 1;
            continue;
        }
        let target = text[j + 2..k].trim();
        if target.is_empty() {
            i = k + 1;
            continue;
        }

        let link = LinkRef {
            kind: LinkKind::Markdown,
            target: target.to_string(),
            display: Some(display.to_string()).filter(|d| !d.is_empty()),
        };
        return Some((link, (start, k + 1)));
    }
    None
}
