//! Tokenization granularity: the unit a text is cut into.
//!
//! The granularity is chosen once per conversion and used consistently by
//! the vocabulary builder and the codec. It carries the segmentation
//! strategy, so the two never disagree on how a text is cut.

use compact_str::{CompactString, ToCompactString};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Unit of tokenization: single characters or whitespace-delimited words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// One symbol per Unicode scalar value, whitespace and punctuation
    /// included.
    Char,
    /// One symbol per whitespace-delimited word; splitting produces no
    /// empty segments (leading/trailing whitespace ignored, runs collapsed).
    Word,
}

impl Granularity {
    /// Cut `text` into symbol occurrences, in encounter order.
    pub fn segments(self, text: &str) -> Vec<CompactString> {
        match self {
            Granularity::Char => text.chars().map(|c| c.to_compact_string()).collect(),
            Granularity::Word => text.split_whitespace().map(CompactString::new).collect(),
        }
    }

    /// Separator used when reassembling decoded symbols into text.
    pub fn separator(self) -> &'static str {
        match self {
            Granularity::Char => "",
            Granularity::Word => " ",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Granularity::Char => f.write_str("char"),
            Granularity::Word => f.write_str("word"),
        }
    }
}

/// Error returned when parsing an unknown granularity name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown granularity `{0}`, expected `char` or `word`")]
pub struct ParseGranularityError(pub String);

impl FromStr for Granularity {
    type Err = ParseGranularityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "char" | "character" | "c" => Ok(Granularity::Char),
            "word" | "w" => Ok(Granularity::Word),
            _ => Err(ParseGranularityError(s.to_string())),
        }
    }
}
