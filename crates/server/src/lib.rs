//! toknum-server - the "render three strings" collaborator
//!
//! Serves an embedded single-page form (granularity selector, file upload,
//! text area) and two JSON endpoints:
//!
//! - `POST /api/convert`: build a vocabulary from the submitted text, encode
//!   it and decode the tokens right back; answers the vocabulary mapping,
//!   the token sequence and the decoded text.
//! - `POST /api/extract?name=<filename>`: raw upload bytes in, extracted
//!   text out.
//!
//! The core stays pure: this crate owns blank-input detection and all
//! rendering concerns.

pub mod api;
pub use api::{ApiError, ConvertRequest, ConvertResponse, ExtractResponse, VocabEntry};

mod http;
pub use http::serve;
