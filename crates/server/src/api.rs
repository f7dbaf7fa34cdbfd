//! JSON API types and handlers.
//!
//! Handlers are pure functions over deserialized bodies, so the whole
//! request surface is testable without a socket. Each conversion builds its
//! own vocabulary and discards it when the response is written; nothing is
//! shared between requests.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use toknum_core::{build_and_encode, decode, Granularity};
use toknum_extract::ExtractError;

/// Body of `POST /api/convert`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertRequest {
    /// Text to tokenize
    pub text: String,
    /// Tokenization granularity (`"char"` or `"word"`)
    pub granularity: Granularity,
}

/// One vocabulary row in a convert response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabEntry {
    pub symbol: String,
    pub id: u32,
}

/// Body of a successful `POST /api/convert` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertResponse {
    /// Vocabulary mapping in ascending id order
    pub vocabulary: Vec<VocabEntry>,
    /// Encoded token sequence
    pub tokens: Vec<u32>,
    /// Result of decoding `tokens` right back
    pub decoded: String,
}

/// Body of a successful `POST /api/extract` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractResponse {
    pub text: String,
}

/// Error body shared by all endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Errors a handler can answer with.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Blank input; the warning the form surfaces to the user
    #[error("Please upload a file or enter text before converting.")]
    EmptyInput,

    /// Malformed request body or query string
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Upload could not be turned into text
    #[error("{0}")]
    Extract(#[from] ExtractError),
}

impl ApiError {
    /// HTTP status code for this error.
    pub fn status(&self) -> u16 {
        match self {
            ApiError::EmptyInput | ApiError::BadRequest(_) => 400,
            ApiError::Extract(ExtractError::UnsupportedFormat(_)) => 415,
            ApiError::Extract(_) => 400,
        }
    }
}

/// Run one conversion: build the vocabulary, encode, decode back.
pub fn handle_convert(request: &ConvertRequest) -> Result<ConvertResponse, ApiError> {
    if request.text.trim().is_empty() {
        return Err(ApiError::EmptyInput);
    }

    let (vocab, tokens) = build_and_encode(&request.text, request.granularity);
    let decoded = decode(&tokens, &vocab, request.granularity);

    tracing::info!(
        granularity = %request.granularity,
        vocab_size = vocab.len(),
        tokens = tokens.len(),
        "converted text"
    );

    let vocabulary = vocab
        .entries()
        .map(|(symbol, id)| VocabEntry {
            symbol: symbol.to_string(),
            id,
        })
        .collect();

    Ok(ConvertResponse {
        vocabulary,
        tokens,
        decoded,
    })
}

/// Turn an uploaded file into text for the form's text area.
pub fn handle_extract(name: &str, bytes: &[u8]) -> Result<ExtractResponse, ApiError> {
    let text = toknum_extract::extract(name, bytes)?;
    tracing::info!(name, chars = text.chars().count(), "extracted upload");
    Ok(ExtractResponse { text })
}
