//! Token extraction.
//!
//! A token is `{`, one or more characters that are neither braces nor
//! whitespace, then `}`. The inner text is the candidate key, taken verbatim.
//!
//! Scanning is a single left-to-right pass with no backtracking:
//!
//! - `{` (re)opens a candidate, so `{{name}}` yields `name`
//! - `}` closes the open candidate, or is ignored when none is open
//! - whitespace abandons the open candidate
//! - `{}` yields nothing
//!
//! Malformed input is skipped, never reported. Work is linear in the content
//! length.

use std::{collections::HashSet, ops::Range, str::CharIndices};

use serde::Serialize;

use crate::domain::value_objects::PlaceholderKey;

/// One token match inside template content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenOccurrence {
    pub key: PlaceholderKey,
    /// Byte range of the whole token, braces included.
    pub span: Range<usize>,
    /// 1-based line of the opening brace.
    pub line: usize,
    /// 1-based column (in characters) of the opening brace.
    pub column: usize,
}

/// Iterator over every token in `content`, duplicates included.
pub fn scan(content: &str) -> Tokens<'_> {
    Tokens {
        content,
        chars: content.char_indices(),
        open: None,
        line: 1,
        column: 0,
    }
}

/// Distinct keys in first-occurrence order.
pub fn extract(content: &str) -> Vec<PlaceholderKey> {
    let mut seen = HashSet::new();
    scan(content)
        .map(|occurrence| occurrence.key)
        .filter(|key| seen.insert(key.clone()))
        .collect()
}

#[derive(Debug, Clone, Copy)]
struct OpenBrace {
    offset: usize,
    line: usize,
    column: usize,
}

/// Streaming scanner returned by [`scan`].
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    content: &'a str,
    chars: CharIndices<'a>,
    open: Option<OpenBrace>,
    line: usize,
    column: usize,
}

impl Iterator for Tokens<'_> {
    type Item = TokenOccurrence;

    fn next(&mut self) -> Option<Self::Item> {
        for (offset, ch) in self.chars.by_ref() {
            if ch == '\n' {
                self.line += 1;
                self.column = 0;
                self.open = None;
                continue;
            }
            self.column += 1;

            match ch {
                '{' => {
                    self.open = Some(OpenBrace {
                        offset,
                        line: self.line,
                        column: self.column,
                    });
                }
                '}' => {
                    let Some(open) = self.open.take() else {
                        continue;
                    };
                    let inner = &self.content[open.offset + 1..offset];
                    if inner.is_empty() {
                        continue;
                    }
                    return Some(TokenOccurrence {
                        key: PlaceholderKey::from(inner),
                        span: open.offset..offset + 1,
                        line: open.line,
                        column: open.column,
                    });
                }
                c if c.is_whitespace() => self.open = None,
                _ => {}
            }
        }
        None
    }
}
