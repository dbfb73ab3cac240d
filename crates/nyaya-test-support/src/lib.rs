//! In-process mock of the legal-information backend.
//!
//! Each test builds an axum [`Router`] with the routes it needs and serves
//! it on an ephemeral `127.0.0.1` port.

use axum::Router;
use nyaya_config::ApiConfig;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

pub struct MockBackend {
    pub origin: String,
    shutdown_tx: oneshot::Sender<()>,
    server_task: tokio::task::JoinHandle<()>,
}

impl MockBackend {
    /// Serve `app` until [`Self::shutdown`].
    ///
    /// # Panics
    ///
    /// Panics if no local port can be bound.
    pub async fn spawn(app: Router) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("listener should bind");
        let local_addr = listener
            .local_addr()
            .expect("listener address should resolve");
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        let server_task = tokio::spawn(async move {
            let server = axum::serve(listener, app).with_graceful_shutdown(async move {
                let _ = shutdown_rx.await;
            });
            server.await.expect("test server should run");
        });

        Self {
            origin: format!("http://{local_addr}"),
            shutdown_tx,
            server_task,
        }
    }

    #[must_use]
    pub fn api_config(&self) -> ApiConfig {
        api_config_for(&self.origin, 5)
    }

    /// # Panics
    ///
    /// Panics if the server task already stopped or panicked.
    pub async fn shutdown(self) {
        self.shutdown_tx.send(()).expect("shutdown signal should send");
        self.server_task.await.expect("server task should join");
    }
}

#[must_use]
pub fn api_config_for(origin: &str, timeout_secs: u64) -> ApiConfig {
    ApiConfig {
        base_url: origin.to_string(),
        timeout_secs,
        ..ApiConfig::default()
    }
}

/// Origin of a port nothing listens on.
///
/// # Panics
///
/// Panics if no local port can be bound.
pub async fn unreachable_origin() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("listener should bind");
    let addr = listener.local_addr().expect("address should resolve");
    drop(listener);
    format!("http://{addr}")
}
