//! Alias synthesis from parsed type components.

use super::qualifiers::Qualifiers;

/// Build the alias for a parsed type: sign prefix, size prefix, base name
/// (or a qualifier fallback when the base is empty), one `_ptr` per pointer
/// level, then underscore normalization.
///
/// The result only contains ASCII alphanumerics and single underscores, never
/// at either end. It is empty when nothing identifier-like survives.
pub fn synthesize_alias(q: &Qualifiers, base_type_name: &str, pointer_depth: usize) -> String {
    let mut alias = String::new();

    if q.unsigned {
        alias.push('u');
    } else if q.signed {
        alias.push('s');
    }

    if q.short {
        alias.push_str("short_");
    } else if q.long {
        alias.push('l');
    } else if q.long_long {
        alias.push_str("ll");
    }

    let base = identifier_chars(base_type_name);
    if !base.trim_matches('_').is_empty() {
        alias.push_str(&base);
    } else if let Some(fallback) = fallback_base(q) {
        alias.push_str(fallback);
    }

    for _ in 0..pointer_depth {
        alias.push_str("_ptr");
    }

    collapse_underscores(&alias)
}

fn fallback_base(q: &Qualifiers) -> Option<&'static str> {
    if q.short {
        Some("short")
    } else if q.unsigned || q.signed {
        Some("int")
    } else if q.is_struct {
        Some("struct")
    } else {
        None
    }
}

/// Drop `*`, map anything outside `[A-Za-z0-9_]` to `_`.
fn identifier_chars(name: &str) -> String {
    name.chars()
        .filter(|&ch| ch != '*')
        .map(|ch| {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                ch
            } else {
                '_'
            }
        })
        .collect()
}

fn collapse_underscores(alias: &str) -> String {
    alias
        .split('_')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}
