//! Credential-based token acquisition.
//!
//! One exchange per process invocation: resolve stored credentials, call the
//! authentication endpoint (anonymously when nothing is stored), and return
//! the token the service issued. The token is handed to the repository
//! explicitly and never persisted.

use crate::client::TodolyClient;
use crate::credentials::{self, Credentials};
use crate::error::Error;
use crate::transport::Transport;
use crate::types::Token;

pub struct Authenticator {
    client: TodolyClient,
}

impl Authenticator {
    pub fn new(client: TodolyClient) -> Self {
        Self { client }
    }

    /// Exchange the credentials stored for `todo.ly` for a token.
    pub fn authenticate<T: Transport>(&self, transport: &T) -> Result<Token, Error> {
        let stored = credentials::machine(credentials::SERVICE_HOST);
        if stored.is_none() {
            tracing::debug!("no stored credentials, authenticating anonymously");
        }
        self.authenticate_with(transport, stored.as_ref())
    }

    /// Exchange explicit credentials (or none) for a token.
    pub fn authenticate_with<T: Transport>(
        &self,
        transport: &T,
        credentials: Option<&Credentials>,
    ) -> Result<Token, Error> {
        let request = self.client.build_authenticate(credentials);
        let response = transport.execute(&request)?;
        self.client.parse_authenticate(response)
    }
}
