use tokio::net::TcpListener;

/// Standalone entry point for poking at the mock service with curl or the
/// CLI pointed at `--url http://127.0.0.1:<port>`.
#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    println!("mock todo.ly listening on {addr} (login: {})", mock_server::LOGIN);
    mock_server::run(listener).await
}
