//! Pulling a JSON array out of a free-text model reply.
//!
//! Models wrap JSON in prose and markdown fences. The scan strips fences,
//! finds the first `[`, and walks forward tracking bracket depth while
//! respecting string literals and escapes. Anything unbalanced returns
//! `None`, which the generator treats as full fallback.

/// Extract the first balanced JSON array from free text.
pub fn extract_json_array(text: &str) -> Option<&str> {
    let cleaned = strip_fences(text);

    let start = cleaned.find('[')?;
    let bytes = cleaned.as_bytes();
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, &b) in bytes[start..].iter().enumerate() {
        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
            continue;
        }
        match b {
            b'"' => in_string = true,
            b'[' => depth += 1,
            b']' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&cleaned[start..start + offset + 1]);
                }
            }
            _ => {}
        }
    }

    None
}

/// Trim markdown code fences from around the payload.
fn strip_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the optional language tag on the opening fence.
    let inner = match inner.find('\n') {
        Some(pos) => &inner[pos + 1..],
        None => inner,
    };
    inner.trim_end().strip_suffix("```").unwrap_or(inner).trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bare_array_passes_through() {
        assert_eq!(extract_json_array(r#"[1, 2, 3]"#), Some("[1, 2, 3]"));
    }

    #[test]
    fn fenced_json_is_unwrapped() {
        let text = "```json\n[{\"name\": \"Gm\"}]\n```";
        assert_eq!(extract_json_array(text), Some(r#"[{"name": "Gm"}]"#));
    }

    #[test]
    fn prose_around_the_array_is_ignored() {
        let text = "Here are your progressions!\n[[1], [2]]\nEnjoy.";
        assert_eq!(extract_json_array(text), Some("[[1], [2]]"));
    }

    #[test]
    fn brackets_inside_strings_do_not_confuse_the_scan() {
        let text = r#"[{"description": "use [stabs] here", "chords": []}]"#;
        assert_eq!(extract_json_array(text), Some(text));
    }

    #[test]
    fn escaped_quotes_inside_strings() {
        let text = r#"[{"description": "say \"hi\" [loudly]"}]"#;
        assert_eq!(extract_json_array(text), Some(text));
    }

    #[test]
    fn unbalanced_or_missing_arrays_are_none() {
        assert_eq!(extract_json_array("no json here"), None);
        assert_eq!(extract_json_array("[1, 2"), None);
        assert_eq!(extract_json_array(""), None);
    }
}
