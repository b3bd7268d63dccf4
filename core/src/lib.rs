//! Synchronous API client for the todo.ly to-do service.
//!
//! # Overview
//! Authenticates from `.netrc` credentials, then performs item CRUD over the
//! service's HTTPS/JSON API: its `"/Date(<millis>)/"` timestamp encoding,
//! its single error/success response envelope disambiguated by `ErrorCode`,
//! and its recursive item trees.
//!
//! # Design
//! - `TodolyClient` is stateless — it holds only `base_url`. Each operation
//!   is split into `build_*` (produces an `HttpRequest`) and `parse_*`
//!   (consumes an `HttpResponse`), so the I/O boundary is explicit.
//! - `Transport` executes the round-trip; the production implementation is a
//!   blocking ureq agent with a bounded timeout, tests use in-memory stubs.
//! - `Authenticator` exchanges stored credentials for a token once per
//!   process; `ItemRepository` carries that token through list/add/check/
//!   delete, one sequential round-trip per operation.
//! - Decoding is lenient where the wire is sloppy (dates, absent fields) and
//!   strict where it matters (status codes, the error envelope).

pub mod auth;
pub mod client;
pub mod credentials;
pub mod date;
pub mod envelope;
pub mod error;
pub mod http;
pub mod repo;
pub mod transport;
pub mod types;

pub use auth::Authenticator;
pub use client::{TodolyClient, SERVICE_URL};
pub use credentials::{Credentials, SERVICE_HOST};
pub use date::JsonDate;
pub use error::Error;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use repo::ItemRepository;
pub use transport::{Transport, UreqTransport};
pub use types::{Item, ItemType, Recurrence, RepeatType, Token};
