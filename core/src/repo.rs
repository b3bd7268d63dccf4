//! Item CRUD over an authenticated session.
//!
//! # Design
//! `ItemRepository` ties together the transport, the stateless client, and
//! the token issued at startup. Every operation is one blocking round-trip.
//! The batch forms take the raw command-line arguments, handle them one at a
//! time in input order, and abort the rest of the batch on the first failure
//! — no rollback, so items before the failing one may already be applied. An
//! id argument is parsed immediately before its own round-trip; a
//! non-numeric id therefore fails without a network call for it.

use crate::client::TodolyClient;
use crate::error::Error;
use crate::transport::Transport;
use crate::types::Item;

pub struct ItemRepository<T> {
    transport: T,
    client: TodolyClient,
    token: String,
}

impl<T: Transport> ItemRepository<T> {
    pub fn new(transport: T, client: TodolyClient, token: impl Into<String>) -> Self {
        Self {
            transport,
            client,
            token: token.into(),
        }
    }

    /// Fetch the item collection. Children trees come back as-is.
    pub fn list(&self) -> Result<Vec<Item>, Error> {
        let request = self.client.build_list_items(&self.token);
        let response = self.transport.execute(&request)?;
        self.client.parse_list_items(response)
    }

    /// Create an item from its content. The server assigns the id; success
    /// is silent.
    pub fn add(&self, content: &str) -> Result<(), Error> {
        let request = self.client.build_add_item(&self.token, content)?;
        let response = self.transport.execute(&request)?;
        self.client.parse_add_item(response)
    }

    pub fn set_checked(&self, id: i64, checked: bool) -> Result<(), Error> {
        let request = self.client.build_set_checked(&self.token, id, checked)?;
        let response = self.transport.execute(&request)?;
        self.client.parse_set_checked(response)
    }

    pub fn delete(&self, id: i64) -> Result<(), Error> {
        let request = self.client.build_delete_item(&self.token, id);
        let response = self.transport.execute(&request)?;
        self.client.parse_delete_item(response)
    }

    pub fn add_many(&self, contents: &[String]) -> Result<(), Error> {
        for content in contents {
            self.add(content)?;
        }
        Ok(())
    }

    pub fn set_checked_many(&self, ids: &[String], checked: bool) -> Result<(), Error> {
        for id in ids {
            self.set_checked(parse_id(id)?, checked)?;
        }
        Ok(())
    }

    pub fn delete_many(&self, ids: &[String]) -> Result<(), Error> {
        for id in ids {
            self.delete(parse_id(id)?)?;
        }
        Ok(())
    }
}

fn parse_id(raw: &str) -> Result<i64, Error> {
    raw.parse()
        .map_err(|_| Error::Parse(format!("invalid item id: {raw:?}")))
}
