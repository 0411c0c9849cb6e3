//! Test server wrapper that serves the demo app on a random port

use std::net::SocketAddr;

use reqfault::Catcher;
use reqfault::config::Config;
use tokio_util::sync::CancellationToken;

/// A running test server instance
pub struct TestServer {
    addr: SocketAddr,
    shutdown: CancellationToken,
    client: reqwest::Client,
}

impl TestServer {
    /// Serve the demo app wrapped in a catcher built from `config`
    pub async fn start(config: Config) -> anyhow::Result<Self> {
        reqfault::init_telemetry(config.telemetry.as_ref())?;

        Self::start_with(Catcher::new(&config.catch)).await
    }

    /// Serve the demo app wrapped in an already-built catcher
    pub async fn start_with(catcher: Catcher) -> anyhow::Result<Self> {
        let app = catcher.apply(super::app::router());
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        let client = reqwest::Client::new();

        Ok(Self { addr, shutdown, client })
    }

    /// URL of `path` on the running server
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}
