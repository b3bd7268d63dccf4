//! Full session lifecycle against the live mock server.
//!
//! Starts the mock server on a random port, then exercises authentication
//! and every repository operation over real HTTP through `UreqTransport`,
//! so the request building, the envelope protocol, and the wire date format
//! are all validated end-to-end against an actual server.

use std::net::SocketAddr;
use std::time::Duration;

use todoly_core::{
    Authenticator, Credentials, Error, ItemRepository, TodolyClient, UreqTransport,
};

fn start_mock_server() -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    addr
}

fn transport() -> UreqTransport {
    UreqTransport::with_timeout(Duration::from_secs(5))
}

fn good_credentials() -> Credentials {
    Credentials {
        login: mock_server::LOGIN.to_string(),
        password: mock_server::PASSWORD.to_string(),
    }
}

#[test]
fn full_session_lifecycle() {
    let addr = start_mock_server();
    let client = TodolyClient::new(&format!("http://{addr}"));
    let authenticator = Authenticator::new(client.clone());

    // Step 1: a wrong password is refused through the envelope.
    let bad = Credentials {
        login: mock_server::LOGIN.to_string(),
        password: "wrong".to_string(),
    };
    let err = authenticator
        .authenticate_with(&transport(), Some(&bad))
        .unwrap_err();
    assert!(matches!(err, Error::Auth { code: 102, .. }));

    // Step 2: valid credentials yield the session token.
    let token = authenticator
        .authenticate_with(&transport(), Some(&good_credentials()))
        .unwrap();
    assert_eq!(token.token_string, mock_server::TOKEN);
    assert!(token.expiration_time.is_set());

    let repo = ItemRepository::new(transport(), client, token.token_string);

    // Step 3: list — empty, not an error.
    assert!(repo.list().unwrap().is_empty());

    // Step 4: add an item; success is silent.
    repo.add("Integration test").unwrap();

    // Step 5: the item comes back with a server-assigned id and date.
    let items = repo.list().unwrap();
    assert_eq!(items.len(), 1);
    let item = &items[0];
    assert_eq!(item.content, "Integration test");
    assert!(item.id > 0);
    assert!(item.created_date.is_set());
    assert!(!item.checked);
    assert!(item.children.is_empty());
    let id = item.id;

    // Step 6: check, verify, uncheck.
    repo.set_checked(id, true).unwrap();
    assert!(repo.list().unwrap()[0].checked);
    repo.set_checked(id, false).unwrap();
    assert!(!repo.list().unwrap()[0].checked);

    // Step 7: delete.
    repo.delete(id).unwrap();
    assert!(repo.list().unwrap().is_empty());

    // Step 8: delete again — item not found.
    let err = repo.delete(id).unwrap_err();
    assert!(matches!(err, Error::NotFound));
}

#[test]
fn anonymous_authentication_is_refused() {
    let addr = start_mock_server();
    let client = TodolyClient::new(&format!("http://{addr}"));
    let err = Authenticator::new(client)
        .authenticate_with(&transport(), None)
        .unwrap_err();
    assert!(matches!(err, Error::Auth { code: 102, .. }));
}

#[test]
fn stale_token_surfaces_the_envelope_error() {
    let addr = start_mock_server();
    let client = TodolyClient::new(&format!("http://{addr}"));
    let repo = ItemRepository::new(transport(), client, "stale-token");

    let err = repo.list().unwrap_err();
    match err {
        Error::Api { code, message } => {
            assert_eq!(code, 1);
            assert_eq!(message, "Invalid token");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[test]
fn checking_an_unknown_item_fails_with_the_service_code() {
    let addr = start_mock_server();
    let client = TodolyClient::new(&format!("http://{addr}"));
    let authenticator = Authenticator::new(client.clone());
    let token = authenticator
        .authenticate_with(&transport(), Some(&good_credentials()))
        .unwrap();
    let repo = ItemRepository::new(transport(), client, token.token_string);

    let err = repo.set_checked(999, true).unwrap_err();
    assert!(matches!(err, Error::Api { code: 3, .. }));
}

#[test]
fn unreachable_server_is_a_transport_error() {
    // Nothing listens on this port; bind-then-drop reserves then frees it.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = TodolyClient::new(&format!("http://{addr}"));
    let repo = ItemRepository::new(transport(), client, "tok");
    let err = repo.list().unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
}
