// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Trailer block parsing.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// One `Key: value` line. The value part is optional (`Key:` alone).
    static ref TRAILER_REGEX: Regex =
        Regex::new(r"^(?P<key>[[:word:]][[:word:]\-]*):(?: (?P<value>.*))?$").unwrap();
}

/// A single `Key: value` trailer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trailer {
    pub key: String,
    pub value: String,
}

impl Trailer {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Ordered trailers of one commit. Duplicate keys are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrailerSet {
    trailers: Vec<Trailer>,
}

impl TrailerSet {
    /// Whether any trailer has this key, empty value or not.
    pub fn contains(&self, key: &str) -> bool {
        self.trailers.iter().any(|t| t.key == key)
    }

    /// Whether any trailer has this key and a non-empty value.
    pub fn strict_contains(&self, key: &str) -> bool {
        self.trailers
            .iter()
            .any(|t| t.key == key && !t.value.is_empty())
    }

    /// Value of the first trailer with this key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.trailers
            .iter()
            .find(|t| t.key == key)
            .map(|t| t.value.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Trailer> {
        self.trailers.iter()
    }

    pub fn len(&self) -> usize {
        self.trailers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trailers.is_empty()
    }
}

impl FromIterator<Trailer> for TrailerSet {
    fn from_iter<I: IntoIterator<Item = Trailer>>(iter: I) -> Self {
        Self {
            trailers: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TrailerSet {
    type Item = &'a Trailer;
    type IntoIter = std::slice::Iter<'a, Trailer>;

    fn into_iter(self) -> Self::IntoIter {
        self.trailers.iter()
    }
}

/// Parse a raw trailer block, one trailer per line. Lines that are not
/// `Key: value` are dropped.
///
/// Each line must be a trailer from start to end, so `Log:value` (no space)
/// and `see Log: x` are both dropped rather than read as a `Log` trailer.
/// Blocks produced by `git interpret-trailers --parse` always have the
/// `Key: value` shape.
pub fn parse_trailers(raw: &str) -> TrailerSet {
    raw.lines()
        .filter_map(|line| TRAILER_REGEX.captures(line))
        .map(|captures| {
            Trailer::new(
                captures.name("key").map(|m| m.as_str()).unwrap_or(""),
                captures.name("value").map(|m| m.as_str()).unwrap_or(""),
            )
        })
        .collect()
}
