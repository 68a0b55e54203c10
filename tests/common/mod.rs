//! Shared utilities for integration testing.

use std::net::SocketAddr;

use sha2::{Digest, Sha256};
use tokio::net::TcpListener;

use todo_service::config::ServiceConfig;
use todo_service::lifecycle::Shutdown;
use todo_service::{HttpServer, TodoStore};

pub const TEST_USER: &str = "test";
pub const TEST_PASSWORD: &str = "integration-secret";

/// A running service instance bound to an ephemeral port.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: reqwest::Client,
    // Dropping the coordinator closes the broadcast channel and stops the
    // server, so it must live as long as the test.
    _shutdown: Shutdown,
}

impl TestApp {
    pub fn url(&self) -> String {
        format!("http://{}/todos", self.addr)
    }

    /// A request builder with valid credentials attached.
    pub fn authed(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder.basic_auth(TEST_USER, Some(TEST_PASSWORD))
    }
}

/// Spawn the real server against an in-memory store.
pub async fn spawn_app() -> TestApp {
    let mut config = ServiceConfig::default();
    config.database.url = "sqlite::memory:".to_string();
    // one connection so every query sees the same in-memory database
    config.database.max_connections = 1;
    config.auth.username = TEST_USER.to_string();
    config.auth.password_sha256 = hex::encode(Sha256::digest(TEST_PASSWORD.as_bytes()));

    let store = TodoStore::connect(&config.database.url, config.database.max_connections)
        .await
        .unwrap();
    store.migrate().await.unwrap();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(config, store);

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    let client = reqwest::Client::builder().no_proxy().build().unwrap();

    TestApp {
        addr,
        client,
        _shutdown: shutdown,
    }
}
