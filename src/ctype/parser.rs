//! Raw C type-string parser.
//!
//! Consumes, left to right: leading `*` tokens, then qualifier keywords
//! (`struct`, `long long`/`long`, `short`, `unsigned`, `signed`), then
//! trailing `*` tokens. Whatever is left is the base type name. The parser
//! is total: any input, including garbage, yields a `ParsedType`.

use serde::Serialize;

use super::alias::synthesize_alias;
use super::qualifiers::Qualifiers;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedType {
    /// The trimmed macro argument this was derived from.
    pub original: String,
    /// Prefix and suffix `*` tokens, summed.
    pub pointer_depth: usize,
    pub qualifiers: Qualifiers,
    /// What remains after qualifier and pointer stripping. May be empty.
    pub base_type_name: String,
    /// Synthesized alias, without the caller's `_t` suffix.
    pub alias: String,
}

/// Parse a raw type string into its components and alias.
pub fn parse(raw: &str) -> ParsedType {
    let original = raw.trim();
    let mut cursor = TypeCursor::new(original);

    let mut pointer_depth = cursor.strip_leading_stars();
    let mut qualifiers = Qualifiers::default();
    while cursor.qualifier_pass(&mut qualifiers) {}
    pointer_depth += cursor.strip_trailing_stars();

    let base_type_name = cursor.rest.trim().to_string();
    let alias = synthesize_alias(&qualifiers, &base_type_name, pointer_depth);

    ParsedType {
        original: original.to_string(),
        pointer_depth,
        qualifiers,
        base_type_name,
        alias,
    }
}

struct TypeCursor<'a> {
    rest: &'a str,
}

impl<'a> TypeCursor<'a> {
    fn new(input: &'a str) -> Self {
        Self { rest: input }
    }

    fn strip_leading_stars(&mut self) -> usize {
        let mut count = 0;
        while let Some(after) = self.rest.strip_prefix('*') {
            count += 1;
            self.rest = after.trim_start();
        }
        count
    }

    fn strip_trailing_stars(&mut self) -> usize {
        let mut count = 0;
        self.rest = self.rest.trim_end();
        while let Some(before) = self.rest.strip_suffix('*') {
            count += 1;
            self.rest = before.trim_end();
        }
        count
    }

    /// One ordered pass over the qualifier keywords. Returns whether anything
    /// was consumed; the caller repeats until a pass makes no progress so that
    /// qualifiers written after a later-ordered one are still picked up.
    fn qualifier_pass(&mut self, q: &mut Qualifiers) -> bool {
        let mut consumed = false;

        if self.eat_keyword("struct") {
            q.is_struct = true;
            consumed = true;
        }

        if self.eat_long_long() {
            q.long_long = true;
            consumed = true;
        } else if self.eat_keyword("long") {
            q.long = true;
            consumed = true;
        }

        if self.eat_keyword("short") {
            q.short = true;
            consumed = true;
        }

        if self.eat_keyword("unsigned") {
            q.unsigned = true;
            consumed = true;
        }

        if self.eat_keyword("signed") {
            q.signed = true;
            consumed = true;
        }

        consumed
    }

    fn eat_keyword(&mut self, keyword: &str) -> bool {
        match keyword_tail(self.rest, keyword) {
            Some(tail) => {
                self.rest = tail.trim_start();
                true
            }
            None => false,
        }
    }

    /// `long long` with any run of whitespace between the two words. The
    /// whole matched span is consumed, not a fixed offset.
    fn eat_long_long(&mut self) -> bool {
        let Some(after_first) = self.rest.strip_prefix("long") else {
            return false;
        };
        let second = after_first.trim_start();
        if second.len() == after_first.len() {
            return false;
        }
        match keyword_tail(second, "long") {
            Some(tail) => {
                self.rest = tail.trim_start();
                true
            }
            None => false,
        }
    }
}

/// The text after `keyword` if `text` starts with it as a whole word.
/// A keyword ends at end of input, whitespace, or a `*`.
// Deliberately stricter than a bare prefix match: `structure` stays a base name.
fn keyword_tail<'a>(text: &'a str, keyword: &str) -> Option<&'a str> {
    let tail = text.strip_prefix(keyword)?;
    match tail.chars().next() {
        None => Some(tail),
        Some(ch) if ch.is_whitespace() || ch == '*' => Some(tail),
        Some(_) => None,
    }
}
