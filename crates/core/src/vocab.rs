//! Vocabulary storage and construction.
//!
//! A vocabulary maps each distinct symbol of a source text to a unique
//! positive integer id. Symbols are stored with CompactString and looked up
//! through AHashMap, forward and reverse.

use crate::granularity::Granularity;
use ahash::AHashMap;
use compact_str::CompactString;

/// Forward mapping: symbol -> id
pub type Vocab = AHashMap<CompactString, u32>;

/// Reverse mapping: id -> symbol
pub type VocabR = AHashMap<u32, CompactString>;

/// Deterministic mapping from the distinct symbols of a text to ids `1..=N`.
///
/// Ids are assigned in ascending code-point order of the sorted distinct
/// symbols; id `0` is reserved and never assigned. The reverse view is built
/// once at construction, so decoding never has to derive it.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    vocab: Vocab,
    vocab_r: VocabR,
}

impl Vocabulary {
    /// Build a vocabulary from a text at the given granularity.
    ///
    /// The same text and granularity always produce the identical mapping:
    /// distinct symbols are sorted by code-point order before ids are
    /// assigned, which removes any dependence on hash iteration order.
    /// Empty or whitespace-only text yields an empty vocabulary.
    pub fn from_text(text: &str, granularity: Granularity) -> Self {
        let mut symbols = granularity.segments(text);
        symbols.sort_unstable();
        symbols.dedup();

        let mut vocab = Vocab::with_capacity(symbols.len());
        let mut vocab_r = VocabR::with_capacity(symbols.len());
        for (idx, symbol) in symbols.into_iter().enumerate() {
            let id = idx as u32 + 1;
            vocab_r.insert(id, symbol.clone());
            vocab.insert(symbol, id);
        }

        Self { vocab, vocab_r }
    }

    /// Get the id for a symbol.
    #[inline]
    pub fn get_id(&self, symbol: &str) -> Option<u32> {
        self.vocab.get(symbol).copied()
    }

    /// Get the symbol for an id.
    #[inline]
    pub fn get_symbol(&self, id: u32) -> Option<&str> {
        self.vocab_r.get(&id).map(|s| s.as_str())
    }

    /// Number of distinct symbols.
    #[inline]
    pub fn len(&self) -> usize {
        self.vocab.len()
    }

    /// True if no symbols were found in the source text.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vocab.is_empty()
    }

    /// Iterate `(symbol, id)` pairs in ascending id order.
    ///
    /// Ids are contiguous from 1, so walking `1..=len` recovers the sorted
    /// symbol order the builder assigned.
    pub fn entries(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        (1..=self.vocab.len() as u32).filter_map(|id| self.get_symbol(id).map(|s| (s, id)))
    }
}
