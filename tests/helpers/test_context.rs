//! Test context for unified test setup
//!
//! Bundles a mock backend with services wired to it over the real reqwest
//! transport.

use std::sync::Arc;

use yallanow_client::config::Settings;
use yallanow_client::services::{ServiceFactory, StaticTokenProvider};

use super::backend_mock::BackendMockServer;
use super::test_data::TEST_TOKEN;

pub struct TestContext {
    pub backend: BackendMockServer,
    pub settings: Settings,
    pub services: ServiceFactory,
}

impl TestContext {
    /// Context with a signed-in user
    pub async fn new() -> Self {
        Self::with_token(Some(TEST_TOKEN)).await
    }

    /// Context with no signed-in user
    pub async fn unauthenticated() -> Self {
        Self::with_token(None).await
    }

    pub async fn with_token(token: Option<&str>) -> Self {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();

        let backend = BackendMockServer::new().await;
        let settings = backend.settings();
        let tokens = Arc::new(StaticTokenProvider::new(token.map(str::to_string)));
        let services = ServiceFactory::new(&settings, tokens).expect("Failed to build services");

        Self {
            backend,
            settings,
            services,
        }
    }
}
