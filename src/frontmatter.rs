use serde_yaml::{Mapping, Value};

use crate::Result;

/// Extracts the leading frontmatter block, if any.
///
/// A block is present iff the text begins with `---` and a second `---`
/// delimiter follows. Only the first two delimiters are consulted, so a
/// stray `---` later in the body is harmless. A present-but-malformed
/// block is an error; callers doing bulk rebuilds skip the document and
/// continue.
pub fn extract(text: &str) -> Result<Option<Mapping>> {
    if !text.starts_with("---") {
        return Ok(None);
    }

    let mut parts = text.splitn(3, "---");
    let block = match (parts.next(), parts.next(), parts.next()) {
        (Some(_), Some(block), Some(_)) => block,
        _ => return Ok(None),
    };

    match serde_yaml::from_str::<Value>(block)? {
        Value::Null => Ok(Some(Mapping::new())),
        value => Ok(Some(serde_yaml::from_value(value)?)),
    }
}

/// Collects alias declarations from a frontmatter mapping: `alias` (a
/// single string) plus every string entry of `aliases` (a sequence).
/// Both keys may be present at once; empty entries are dropped.
pub fn aliases(fm: &Mapping) -> Vec<String> {
    let mut out = Vec::new();

    if let Some(Value::String(s)) = fm.get(Value::String("alias".into())) {
        let s = s.trim();
        if !s.is_empty() {
            out.push(s.to_string());
        }
    }

    if let Some(Value::Sequence(seq)) = fm.get(Value::String("aliases".into())) {
        for item in seq {
            if let Some(s) = item.as_str() {
                let s = s.trim();
                if !s.is_empty() {
                    out.push(s.to_string());
                }
            }
        }
    }

    out
}
