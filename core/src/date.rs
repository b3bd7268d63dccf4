//! The service's nonstandard timestamp wire format.
//!
//! todo.ly encodes every date as a quoted string of the shape
//! `"/Date(<millis>)/"`, where `<millis>` counts milliseconds since the Unix
//! epoch. Decoding is lenient: a value that does not match the pattern (or is
//! absent, or null) leaves the timestamp at the epoch zero value instead of
//! failing the surrounding record.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Deserializer};

/// Anchored pattern for the wire format, after JSON string unescaping has
/// turned `\/` back into `/`.
static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/Date\((\d+)\)/$").unwrap());

/// A timestamp decoded from the `"/Date(<millis>)/"` wire format.
///
/// The zero value is the Unix epoch. Encoding back to the wire format is not
/// implemented — the service assigns all dates, the client never sends one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsonDate(pub DateTime<Utc>);

impl Default for JsonDate {
    fn default() -> Self {
        JsonDate(DateTime::UNIX_EPOCH)
    }
}

impl JsonDate {
    pub fn timestamp_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    /// True unless the value is the epoch zero value.
    pub fn is_set(&self) -> bool {
        self.0 != DateTime::UNIX_EPOCH
    }
}

impl<'de> Deserialize<'de> for JsonDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map(parse_wire_date).unwrap_or_default())
    }
}

/// Parse one wire date. Anything that fails the pattern, integer parse, or
/// timestamp range lands on the epoch zero value.
fn parse_wire_date(raw: &str) -> JsonDate {
    let millis = DATE_PATTERN
        .captures(raw)
        .and_then(|caps| caps[1].parse::<i64>().ok());
    match millis.and_then(DateTime::from_timestamp_millis) {
        Some(ts) => JsonDate(ts),
        None => JsonDate::default(),
    }
}
