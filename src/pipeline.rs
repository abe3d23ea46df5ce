//! The generation pipeline: extracted types → parsed types → alias pairs.

use std::collections::HashMap;

use rayon::prelude::*;
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::ctype::{ParsedType, parse};
use crate::error::GenError;
use crate::extract::ExtractedType;

/// The `(original, alias)` pair handed to the emitters. `alias` already
/// carries the configured suffix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeAliasPair {
    pub original: String,
    pub alias: String,
}

/// Everything known about one type in a run.
#[derive(Debug, Clone)]
pub struct TypeEntry {
    pub source: ExtractedType,
    pub parsed: ParsedType,
    pub pair: TypeAliasPair,
}

/// Parse every extracted type and attach the alias suffix. Parsing runs in
/// parallel; results come back in extraction order.
pub fn build_entries(types: Vec<ExtractedType>, suffix: &str) -> Vec<TypeEntry> {
    types
        .into_par_iter()
        .map(|source| {
            let parsed = parse(&source.raw);
            let pair = TypeAliasPair {
                original: parsed.original.clone(),
                alias: format!("{}{suffix}", parsed.alias),
            };
            TypeEntry {
                source,
                parsed,
                pair,
            }
        })
        .collect()
}

/// Reject empty aliases and aliases shared by two different types.
pub fn check_aliases(entries: &[TypeEntry]) -> Result<(), GenError> {
    let mut owners: HashMap<&str, &str> = HashMap::new();
    for entry in entries {
        if entry.parsed.alias.is_empty() {
            return Err(GenError::EmptyAlias {
                original: entry.pair.original.clone(),
            });
        }
        if let Some(first) = owners.insert(&entry.pair.alias, &entry.pair.original) {
            return Err(GenError::AliasCollision {
                alias: entry.pair.alias.clone(),
                first: first.to_string(),
                second: entry.pair.original.clone(),
            });
        }
    }
    Ok(())
}

/// Stable short hash of the ordered pair list.
pub fn fingerprint<'a>(pairs: impl IntoIterator<Item = &'a TypeAliasPair>) -> String {
    let mut hasher = Sha256::new();
    hasher.update(b"vecgen-pairs-v1:");
    for pair in pairs {
        hasher.update(pair.original.as_bytes());
        hasher.update(b"\0");
        hasher.update(pair.alias.as_bytes());
        hasher.update(b"\n");
    }
    let hash = hasher.finalize();
    format!("{:x}", hash)[..16].to_string()
}
