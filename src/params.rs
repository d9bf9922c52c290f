//! The key-value codec shared by the signing pipeline and the token reader.

use crate::error::{ParseError, ParseResult};

/// An insertion-ordered, multi-valued parameter set.
///
/// Keys need not be unique; repeated application parameters keep every
/// occurrence. A fresh list is built per signing call, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamList {
    pairs: Vec<(String, String)>,
}

impl ParamList {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn insert<TKey, TValue>(&mut self, key: TKey, value: TValue)
    where
        TKey: Into<String>,
        TValue: Into<String>,
    {
        self.pairs.push((key.into(), value.into()));
    }

    /// First value recorded for `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &(String, String)> {
        self.pairs.iter()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// A copy containing only the pairs whose key satisfies `predicate`.
    pub fn filtered<F>(&self, mut predicate: F) -> ParamList
    where
        F: FnMut(&str) -> bool,
    {
        ParamList {
            pairs: self
                .pairs
                .iter()
                .filter(|(k, _)| predicate(k))
                .cloned()
                .collect(),
        }
    }

    /// Render every pair as `key=value` (`key="value"` when quoting), sort
    /// the rendered strings lexicographically *as whole strings*, and join
    /// them with `separator`.
    ///
    /// Sorting the rendered strings rather than the keys is the canonical
    /// ordering OAuth 1.0a mandates; the same routine produces the signed
    /// parameter string and both output formats.
    pub fn serialize(&self, separator: &str, quote_values: bool) -> String {
        let mut rendered: Vec<String> = self
            .pairs
            .iter()
            .map(|(k, v)| {
                if quote_values {
                    format!("{}=\"{}\"", k, v)
                } else {
                    format!("{}={}", k, v)
                }
            })
            .collect();
        rendered.sort();
        rendered.join(separator)
    }
}

/// Parse an `&`-joined, percent-encoded `key=value` set.
///
/// Each segment is split on its first `=`; a segment without one fails
/// with [`ParseError::MissingSeparator`]. Empty input yields an empty
/// list, not an error.
pub fn parse_key_value_pairs(encoded: &str) -> ParseResult<ParamList> {
    let mut result = ParamList::new();
    if encoded.is_empty() {
        return Ok(result);
    }
    for segment in encoded.split('&') {
        let mut kv = segment.splitn(2, '=');
        let key = kv.next().unwrap_or_default();
        match kv.next() {
            Some(value) => result.insert(key, value),
            None => return Err(ParseError::MissingSeparator(segment.to_string())),
        }
    }
    Ok(result)
}
