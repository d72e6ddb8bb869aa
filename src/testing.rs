//! Helpers for tests that talk to a real HTTP server

use std::net::SocketAddr;
use std::sync::Mutex;
use std::time::Duration;

use tokio::{net::TcpListener, sync::oneshot, task::JoinHandle};

use crate::inventory::{Diagnostics, InventoryClient, InventoryError, Stage};

/// An axum server on an ephemeral port, shut down when dropped
pub struct TestServer {
  pub addr: SocketAddr,
  shutdown_tx: Option<oneshot::Sender<()>>,
  handle: Option<JoinHandle<()>>
}

impl TestServer {
  pub async fn start(router: axum::Router) -> Self {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind test listener");
    let addr = listener.local_addr().expect("test listener address");
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let handle = tokio::spawn(async move {
      axum::serve(listener, router)
        .with_graceful_shutdown(async { let _ = shutdown_rx.await; })
        .await
        .ok();
    });

    TestServer { addr, shutdown_tx: Some(shutdown_tx), handle: Some(handle) }
  }

  pub fn base_url(&self) -> String {
    format!("http://{}", self.addr)
  }

  pub fn client(&self) -> InventoryClient {
    InventoryClient::new(&self.base_url()).expect("test server url")
  }

  pub async fn shutdown(mut self) {
    if let Some(tx) = self.shutdown_tx.take() { let _ = tx.send(()); }
    if let Some(handle) = self.handle.take() { let _ = handle.await; }
  }
}

impl Drop for TestServer {
  fn drop(&mut self) {
    if let Some(tx) = self.shutdown_tx.take() { let _ = tx.send(()); }
    if let Some(handle) = self.handle.take() { handle.abort(); }
  }
}

/// Keeps every reported failure so tests can look at them
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
  reports: Mutex<Vec<(Stage, String)>>
}

impl RecordingDiagnostics {
  pub fn reports(&self) -> Vec<(Stage, String)> {
    self.reports.lock().unwrap().clone()
  }

  pub fn stages(&self) -> Vec<Stage> {
    self.reports().into_iter().map(|(stage, _)| stage).collect()
  }
}

impl Diagnostics for RecordingDiagnostics {
  fn report(&self, stage: Stage, error: &InventoryError) {
    self.reports.lock().unwrap().push((stage, error.to_string()));
  }
}

/// Polls `condition` until it holds or `timeout` runs out
pub async fn wait_for<F>(condition: F, timeout: Duration) -> bool
where
  F: Fn() -> bool
{
  let deadline = tokio::time::Instant::now() + timeout;

  while tokio::time::Instant::now() < deadline {
    if condition() { return true; }
    tokio::time::sleep(Duration::from_millis(10)).await;
  }

  condition()
}
