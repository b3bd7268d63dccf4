//! Stateless request builder and response parser for the todo.ly API.
//!
//! # Design
//! `TodolyClient` holds only `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! [`HttpRequest`] and a `parse_*` method that consumes an [`HttpResponse`],
//! so the I/O boundary stays explicit and every decode path is testable
//! without a network. Status interpretation is strict: the mutating and
//! listing operations fail on any non-200 before attempting a decode, and
//! delete maps non-200 to "item not found" regardless of the body. Only
//! authentication looks at the envelope first — the service reports a
//! rejected login inside it.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use crate::credentials::Credentials;
use crate::envelope;
use crate::error::Error;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreateItem, Item, Token, UpdateChecked};

/// Base URL of the hosted service.
pub const SERVICE_URL: &str = "https://todo.ly";

/// Stateless client for the todo.ly API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values; a
/// [`Transport`](crate::transport::Transport) executes the round-trip in
/// between.
#[derive(Debug, Clone)]
pub struct TodolyClient {
    base_url: String,
}

impl TodolyClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// GET `/api/authentication/token.json`, with HTTP Basic auth when
    /// credentials are present.
    pub fn build_authenticate(&self, credentials: Option<&Credentials>) -> HttpRequest {
        let mut headers = Vec::new();
        if let Some(credentials) = credentials {
            headers.push(("Authorization".to_string(), basic_auth(credentials)));
        }
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}/api/authentication/token.json", self.base_url),
            headers,
            body: None,
        }
    }

    pub fn parse_authenticate(&self, response: HttpResponse) -> Result<Token, Error> {
        if let Some((code, message)) = envelope::reported_error(&response.body) {
            return Err(Error::Auth { code, message });
        }
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|err| Error::Parse(err.to_string()))
    }

    pub fn build_list_items(&self, token: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}/api/items.json", self.base_url),
            headers: vec![token_header(token)],
            body: None,
        }
    }

    pub fn parse_list_items(&self, response: HttpResponse) -> Result<Vec<Item>, Error> {
        check_status(&response)?;
        envelope::decode(&response.body)
    }

    pub fn build_add_item(&self, token: &str, content: &str) -> Result<HttpRequest, Error> {
        let payload = CreateItem {
            content: content.to_string(),
        };
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: format!("{}/api/items.json", self.base_url),
            headers: vec![token_header(token), json_content_type()],
            body: Some(encode_body(&payload)?),
        })
    }

    /// Success is silent: the service assigns the new item's id server-side
    /// and this operation does not surface it.
    pub fn parse_add_item(&self, response: HttpResponse) -> Result<(), Error> {
        check_status(&response)?;
        envelope::decode_unit(&response.body)
    }

    pub fn build_set_checked(
        &self,
        token: &str,
        id: i64,
        checked: bool,
    ) -> Result<HttpRequest, Error> {
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: format!("{}/api/items/{id}.json", self.base_url),
            headers: vec![token_header(token), json_content_type()],
            body: Some(encode_body(&UpdateChecked { checked })?),
        })
    }

    pub fn parse_set_checked(&self, response: HttpResponse) -> Result<(), Error> {
        check_status(&response)?;
        envelope::decode_unit(&response.body)
    }

    pub fn build_delete_item(&self, token: &str, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            url: format!("{}/api/{id}.json", self.base_url),
            headers: vec![token_header(token)],
            body: None,
        }
    }

    /// Any non-200 means the item does not exist, whatever the body says.
    pub fn parse_delete_item(&self, response: HttpResponse) -> Result<(), Error> {
        if response.status != 200 {
            return Err(Error::NotFound);
        }
        envelope::decode_unit(&response.body)
    }
}

fn check_status(response: &HttpResponse) -> Result<(), Error> {
    if response.status == 200 {
        return Ok(());
    }
    Err(Error::HttpStatus {
        status: response.status,
        body: response.body.clone(),
    })
}

fn token_header(token: &str) -> (String, String) {
    ("Token".to_string(), token.to_string())
}

fn json_content_type() -> (String, String) {
    ("content-type".to_string(), "application/json".to_string())
}

fn basic_auth(credentials: &Credentials) -> String {
    let line = format!("{}:{}", credentials.login, credentials.password);
    format!("Basic {}", BASE64.encode(line))
}

fn encode_body<T: serde::Serialize>(payload: &T) -> Result<String, Error> {
    serde_json::to_string(payload).map_err(|err| Error::Parse(err.to_string()))
}
