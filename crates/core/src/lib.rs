//! toknum-core - text to numeric tokens and back
//!
//! This crate holds the algorithmic core of toknum: building a deterministic
//! vocabulary from a text and mapping text to integer ids and back, at
//! character or word granularity.
//!
//! # Example
//!
//! ```rust
//! use toknum_core::{build_and_encode, decode, Granularity};
//!
//! let (vocab, tokens) = build_and_encode("the cat sat", Granularity::Word);
//! assert_eq!(tokens, vec![3, 1, 2]);
//!
//! let text = decode(&tokens, &vocab, Granularity::Word);
//! assert_eq!(text, "the cat sat");
//! ```
//!
//! Every operation is a pure, synchronous function of its inputs; nothing is
//! persisted between calls and no I/O happens here. Input acquisition (file
//! extraction) and rendering live in the sibling crates.

pub mod codec;
pub mod granularity;
pub mod vocab;

pub use codec::{build_and_encode, decode, Codec};
pub use granularity::{Granularity, ParseGranularityError};
pub use vocab::{Vocab, VocabR, Vocabulary};
