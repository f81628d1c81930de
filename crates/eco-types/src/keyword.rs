//! Keyword tables with word-boundary, longest-match semantics.
//!
//! Every table in the engine that maps free text to a value (weight bounds,
//! material keywords, product types, rule subjects) is a [`KeywordTable`].
//! Keywords match case-insensitively on word boundaries and tolerate a plain
//! plural suffix, so `"book"` matches `"Books"` but not `"Bookend"`.
//! When several keywords match, the longest one wins, which prefers
//! `"camping chair"` over `"chair"`.

use crate::error::{EcoError, Result};
use crate::normalize::normalize_key;
use regex::Regex;

#[derive(Clone, Debug)]
struct KeywordEntry<T> {
    keyword: String,
    pattern: Regex,
    value: T,
}

/// A keyword that matched some text, with its associated value.
#[derive(Debug, PartialEq)]
pub struct KeywordMatch<'a, T> {
    pub keyword: &'a str,
    pub value: &'a T,
}

/// Ordered keyword → value table.
#[derive(Clone, Debug)]
pub struct KeywordTable<T> {
    entries: Vec<KeywordEntry<T>>,
}

impl<T> Default for KeywordTable<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T> KeywordTable<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(keyword, value)` pairs.
    pub fn from_entries<K, I>(entries: I) -> Result<Self>
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, T)>,
    {
        let mut table = Self::new();
        for (keyword, value) in entries {
            table.insert(keyword.as_ref(), value)?;
        }
        Ok(table)
    }

    /// Add a keyword. Later duplicates of an existing keyword are ignored.
    pub fn insert(&mut self, keyword: &str, value: T) -> Result<()> {
        let keyword = normalize_key(keyword);
        if keyword.is_empty() {
            return Err(EcoError::InvalidKeyword {
                keyword,
                message: "keyword is empty".into(),
            });
        }
        if self.entries.iter().any(|e| e.keyword == keyword) {
            return Ok(());
        }

        let body = keyword
            .split(' ')
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join(r"[\s\-_]+");
        let pattern = Regex::new(&format!(r"(?i)\b{body}(?:s|es)?\b")).map_err(|e| {
            EcoError::InvalidKeyword {
                keyword: keyword.clone(),
                message: e.to_string(),
            }
        })?;

        self.entries.push(KeywordEntry {
            keyword,
            pattern,
            value,
        });
        Ok(())
    }

    /// The longest keyword found in `text`. Ties keep insertion order.
    pub fn longest_match(&self, text: &str) -> Option<KeywordMatch<'_, T>> {
        let mut best: Option<&KeywordEntry<T>> = None;
        for entry in self.entries.iter().filter(|e| e.pattern.is_match(text)) {
            match best {
                Some(current) if current.keyword.len() >= entry.keyword.len() => {}
                _ => best = Some(entry),
            }
        }
        best.map(|e| KeywordMatch {
            keyword: &e.keyword,
            value: &e.value,
        })
    }

    /// Every keyword found in `text`, in insertion order.
    pub fn matches<'a>(&'a self, text: &'a str) -> impl Iterator<Item = KeywordMatch<'a, T>> + 'a {
        self.entries
            .iter()
            .filter(move |e| e.pattern.is_match(text))
            .map(|e| KeywordMatch {
                keyword: &e.keyword,
                value: &e.value,
            })
    }

    pub fn contains_any(&self, text: &str) -> bool {
        self.entries.iter().any(|e| e.pattern.is_match(text))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
