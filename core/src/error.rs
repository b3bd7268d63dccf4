//! Error types for the todo.ly client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because `del` reports "item not found"
//! for any non-200 regardless of the response body. Remote-reported errors
//! carry the envelope's code and message verbatim; `Auth` is the same shape
//! but distinguishes a rejected login from a rejected request. The core never
//! recovers from any of these — everything propagates to the caller, and the
//! CLI boundary prints the message and exits non-zero.

use thiserror::Error;

/// Errors returned by the client, transport, and repository layers.
#[derive(Debug, Error)]
pub enum Error {
    /// The network round-trip itself failed (connection, DNS, timeout).
    #[error("transport failure: {0}")]
    Transport(String),

    /// The server returned a non-200 status without a usable error body.
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// The service reported an error through the response envelope.
    #[error("{code}: {message}")]
    Api { code: i64, message: String },

    /// The authentication endpoint reported an error through the envelope.
    #[error("authentication failed: {code}: {message}")]
    Auth { code: i64, message: String },

    /// The server returned non-200 for a delete — the item does not exist.
    #[error("item not found")]
    NotFound,

    /// Malformed JSON, or an id argument that is not a number.
    #[error("parse failure: {0}")]
    Parse(String),
}
