//! The service's error/success response envelope.
//!
//! todo.ly answers every request with one response shape that is either an
//! error record or the operation's payload, distinguished only by the
//! `ErrorCode` field. A success payload decodes against the error schema
//! with the code defaulting to 0 ("no error"); an array payload fails the
//! error-schema decode outright, which also reads as "no error". Decoding is
//! therefore an explicit two-step decision: try the error schema, branch on
//! the code, then decode the same bytes against the target schema.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::Error;

/// The envelope's error schema. Both fields default so that a success body
/// missing them still decodes — with code 0, meaning "no error".
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ErrorBody {
    pub error_code: i64,
    pub error_message: String,
}

/// Check a response body against the error schema. Returns the code and
/// message when the service reported an error, `None` otherwise (including
/// when the body does not decode as the error schema at all).
pub fn reported_error(body: &str) -> Option<(i64, String)> {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(err) if err.error_code != 0 => Some((err.error_code, err.error_message)),
        _ => None,
    }
}

/// Decode a response body via the envelope protocol: a reported error fails
/// with [`Error::Api`], otherwise the same bytes decode as `T`.
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T, Error> {
    if let Some((code, message)) = reported_error(body) {
        return Err(Error::Api { code, message });
    }
    serde_json::from_str(body).map_err(|err| Error::Parse(err.to_string()))
}

/// Decode a response body whose success payload is ignored. Matches the
/// service's mutation endpoints, which return an envelope with nothing
/// useful in it on success.
pub fn decode_unit(body: &str) -> Result<(), Error> {
    match reported_error(body) {
        Some((code, message)) => Err(Error::Api { code, message }),
        None => Ok(()),
    }
}
