//! End-to-end tests for ChatClothes.
//!
//! Each test gets a fresh temporary data directory. HTTP tests start the
//! real dashboard router on an ephemeral port and talk to it with `reqwest`.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p chatclothes-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `catalog_flow` - Catalog, search and sales over the CSV tables
//! - `accounts_preferences` - Registration, login and recommendations
//! - `dashboard_api` - HTTP dashboard against a live server

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::net::SocketAddr;

use chatclothes_core::{NewProduct, Price, Product, Size};
use chatclothes_dashboard::config::DashboardConfig;
use chatclothes_dashboard::db::Store;
use chatclothes_dashboard::routes;
use chatclothes_dashboard::services::CatalogService;
use chatclothes_dashboard::state::AppState;
use tempfile::TempDir;

/// A store over a temporary data directory.
///
/// The directory is removed when the context is dropped.
pub struct TestStore {
    pub dir: TempDir,
    pub store: Store,
}

impl TestStore {
    /// Open an empty store.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let store = Store::open(dir.path()).expect("Failed to open store");
        Self { dir, store }
    }

    /// Add a product and return it with its assigned ID.
    ///
    /// # Panics
    ///
    /// Panics if the price does not parse or the table cannot be written.
    pub fn add_product(&self, garment: &str, color: &str, size: Size, price: &str, stock: u32) -> Product {
        CatalogService::new(&self.store)
            .add(NewProduct {
                garment: garment.to_owned(),
                color: color.to_owned(),
                size,
                price: Price::parse(price).expect("Invalid test price"),
                image: format!("https://img.example/{garment}.png"),
                stock,
            })
            .expect("Failed to add product")
    }

    /// Raw contents of a table file.
    ///
    /// # Panics
    ///
    /// Panics if the file does not exist.
    #[must_use]
    pub fn read_table(&self, file: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(file)).expect("Failed to read table file")
    }
}

impl Default for TestStore {
    fn default() -> Self {
        Self::new()
    }
}

/// A dashboard server running on an ephemeral port.
pub struct TestServer {
    pub data: TestStore,
    pub client: reqwest::Client,
    addr: SocketAddr,
}

impl TestServer {
    /// Serve the dashboard over `data` until the test runtime shuts down.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot be bound.
    pub async fn start(data: TestStore) -> Self {
        let config = DashboardConfig::from_lookup(|_| None).expect("Default config is valid");
        let state = AppState::new(config, data.store.clone());
        let app = routes::router(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Listener has no address");

        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                report_server_error(&e);
            }
        });

        Self {
            data,
            client: reqwest::Client::new(),
            addr,
        }
    }

    /// Absolute URL for a path on the test server.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }
}

#[allow(clippy::print_stderr)]
fn report_server_error(e: &std::io::Error) {
    eprintln!("Test server stopped: {e}");
}
