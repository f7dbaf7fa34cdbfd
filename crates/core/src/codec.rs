//! Text <-> token id codec.
//!
//! Applies a built vocabulary to convert text to a sequence of ids and back.
//! Both directions silently skip anything the vocabulary does not know:
//! out-of-vocabulary symbols on encode, unknown ids on decode. No placeholder
//! token is substituted.

use crate::granularity::Granularity;
use crate::vocab::Vocabulary;

/// Codec over a borrowed vocabulary at a fixed granularity.
///
/// The granularity must match the one the vocabulary was built with; mixing
/// them is a caller error and produces garbage output, never a panic.
pub struct Codec<'v> {
    vocab: &'v Vocabulary,
    granularity: Granularity,
}

impl<'v> Codec<'v> {
    /// Create a codec for `vocab` at `granularity`.
    pub fn new(vocab: &'v Vocabulary, granularity: Granularity) -> Self {
        Self { vocab, granularity }
    }

    /// Encode text to ids, one per recognized symbol occurrence, in order.
    ///
    /// Symbols absent from the vocabulary are skipped, so the result is
    /// never longer than the number of segments in the text. With the
    /// vocabulary built from this same text nothing is ever skipped.
    pub fn encode(&self, text: &str) -> Vec<u32> {
        self.granularity
            .segments(text)
            .into_iter()
            .filter_map(|symbol| self.vocab.get_id(&symbol))
            .collect()
    }

    /// Decode ids back to text, joining symbols with the granularity
    /// separator (nothing for char, a single space for word).
    ///
    /// Ids without a symbol are skipped. An empty id sequence decodes to an
    /// empty string.
    pub fn decode(&self, ids: &[u32]) -> String {
        let symbols: Vec<&str> = ids
            .iter()
            .filter_map(|&id| self.vocab.get_symbol(id))
            .collect();
        symbols.join(self.granularity.separator())
    }
}

/// Build a vocabulary from `text` and encode the same text with it.
///
/// This is the conversion entry point the presentation layer calls; the
/// vocabulary is returned so the caller can display the mapping and decode.
pub fn build_and_encode(text: &str, granularity: Granularity) -> (Vocabulary, Vec<u32>) {
    let vocab = Vocabulary::from_text(text, granularity);
    let tokens = Codec::new(&vocab, granularity).encode(text);
    (vocab, tokens)
}

/// Decode `tokens` through `vocab` at `granularity`.
pub fn decode(tokens: &[u32], vocab: &Vocabulary, granularity: Granularity) -> String {
    Codec::new(vocab, granularity).decode(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_mode_concrete_scenario() {
        let (vocab, tokens) = build_and_encode("ab ba", Granularity::Char);
        assert_eq!(tokens, vec![2, 3, 1, 3, 2]);
        assert_eq!(decode(&tokens, &vocab, Granularity::Char), "ab ba");
    }

    #[test]
    fn word_mode_concrete_scenario() {
        let (vocab, tokens) = build_and_encode("the cat sat", Granularity::Word);
        assert_eq!(tokens, vec![3, 1, 2]);
        assert_eq!(decode(&tokens, &vocab, Granularity::Word), "the cat sat");
    }

    #[test]
    fn char_round_trip_is_exact() {
        let text = "Hello, world!\nSecond line\twith tabs  and  runs.";
        let (vocab, tokens) = build_and_encode(text, Granularity::Char);
        assert_eq!(decode(&tokens, &vocab, Granularity::Char), text);
    }

    #[test]
    fn word_round_trip_normalizes_whitespace() {
        let text = "  the   cat\n\tsat  ";
        let (vocab, tokens) = build_and_encode(text, Granularity::Word);
        assert_eq!(decode(&tokens, &vocab, Granularity::Word), "the cat sat");
    }

    #[test]
    fn encode_is_stable_across_round_trips() {
        for granularity in [Granularity::Char, Granularity::Word] {
            let (vocab, tokens) = build_and_encode("abra cadabra", granularity);
            let codec = Codec::new(&vocab, granularity);
            let reencoded = codec.encode(&codec.decode(&tokens));
            assert_eq!(reencoded, tokens);
        }
    }

    #[test]
    fn foreign_vocabulary_drops_unknown_symbols() {
        let vocab = Vocabulary::from_text("abc", Granularity::Char);
        let codec = Codec::new(&vocab, Granularity::Char);
        // 'x' and 'y' are unknown and dropped without a placeholder
        assert_eq!(codec.encode("axbycz"), vec![
            vocab.get_id("a").unwrap(),
            vocab.get_id("b").unwrap(),
            vocab.get_id("c").unwrap(),
        ]);
        // never longer than the segment count
        assert!(codec.encode("xyz").is_empty());
    }

    #[test]
    fn foreign_vocabulary_drops_unknown_words() {
        let vocab = Vocabulary::from_text("the cat sat", Granularity::Word);
        let codec = Codec::new(&vocab, Granularity::Word);
        let tokens = codec.encode("the dog sat");
        assert_eq!(tokens, vec![3, 2]);
        assert_eq!(codec.decode(&tokens), "the sat");
    }

    #[test]
    fn decode_skips_unknown_ids() {
        let vocab = Vocabulary::from_text("ab", Granularity::Char);
        let codec = Codec::new(&vocab, Granularity::Char);
        assert_eq!(codec.decode(&[1, 99, 2, 0]), "ab");
    }

    #[test]
    fn decode_empty_sequence_is_empty_string() {
        let vocab = Vocabulary::from_text("anything", Granularity::Char);
        assert_eq!(decode(&[], &vocab, Granularity::Char), "");
        let vocab = Vocabulary::from_text("any thing", Granularity::Word);
        assert_eq!(decode(&[], &vocab, Granularity::Word), "");
    }

    #[test]
    fn encode_with_empty_vocab_is_empty() {
        let vocab = Vocabulary::from_text("", Granularity::Char);
        let codec = Codec::new(&vocab, Granularity::Char);
        assert!(codec.encode("whatever").is_empty());
    }
}
