use std::sync::Arc;
use tokio::{sync::mpsc::UnboundedSender, task::JoinHandle};
use tracing::debug;

use super::{DatasetId, Diagnostics, InventoryClient, Stage, Vehicle};

/// What the loaders hand back to whoever owns the UI state
#[derive(Debug, Clone, PartialEq)]
pub enum InventoryEvent {
  DatasetId(DatasetId),
  Vehicles {
    generation: u64,
    dataset_id: DatasetId,
    vehicles: Vec<Vehicle>
  }
}

/// Fetches the dataset id and hands it to `on_fetched`.
/// Any failure goes to `diagnostics` and `on_fetched` is simply never called.
pub async fn fetch_dataset_id<F>(client: &InventoryClient, diagnostics: &dyn Diagnostics, on_fetched: F)
where
  F: FnOnce(DatasetId)
{
  match client.dataset_id().await {
    Ok(id) => on_fetched(id),
    Err(e) => diagnostics.report(Stage::DatasetId, &e)
  }
}

/// Fetches the vehicle list for `dataset_id`. `None` means the failure was
/// already reported and the caller should keep whatever it had.
pub async fn fetch_vehicles(
  client: &InventoryClient,
  diagnostics: &dyn Diagnostics,
  dataset_id: &DatasetId
) -> Option<Vec<Vehicle>> {
  client
    .vehicles(dataset_id)
    .await
    .map_err(|e| diagnostics.report(Stage::Vehicles, &e))
    .ok()
}

/// Runs both fetches as background tasks and reports results over `events`.
///
/// At most one request of each kind is in flight: starting another aborts the
/// previous one. Vehicle results are tagged with a generation number, and only
/// the latest generation is current, so a late answer to a superseded request
/// can be recognised and dropped even if it slipped past the abort.
pub struct Loader {
  client: InventoryClient,
  diagnostics: Arc<dyn Diagnostics>,
  events: UnboundedSender<InventoryEvent>,
  generation: u64,
  dataset_request: Option<JoinHandle<()>>,
  vehicles_request: Option<JoinHandle<()>>
}

impl Loader {
  pub fn new(
    client: InventoryClient,
    diagnostics: Arc<dyn Diagnostics>,
    events: UnboundedSender<InventoryEvent>
  ) -> Self {
    Loader {
      client,
      diagnostics,
      events,
      generation: 0,
      dataset_request: None,
      vehicles_request: None
    }
  }

  pub fn load_dataset_id(&mut self) {
    if let Some(previous) = self.dataset_request.take() { previous.abort(); }

    let client = self.client.clone();
    let diagnostics = self.diagnostics.clone();
    let events = self.events.clone();

    self.dataset_request = Some(tokio::spawn(async move {
      fetch_dataset_id(&client, diagnostics.as_ref(), |id| {
        // receiver gone means the UI is shutting down
        let _ = events.send(InventoryEvent::DatasetId(id));
      }).await
    }));
  }

  /// Starts fetching vehicles for `dataset_id`, superseding any earlier
  /// request. Returns the generation the result will carry.
  pub fn load_vehicles(&mut self, dataset_id: DatasetId) -> u64 {
    if let Some(previous) = self.vehicles_request.take() {
      debug!(generation = self.generation, "superseding vehicle request");
      previous.abort();
    }

    self.generation += 1;
    let generation = self.generation;

    let client = self.client.clone();
    let diagnostics = self.diagnostics.clone();
    let events = self.events.clone();

    self.vehicles_request = Some(tokio::spawn(async move {
      if let Some(vehicles) = fetch_vehicles(&client, diagnostics.as_ref(), &dataset_id).await {
        let _ = events.send(InventoryEvent::Vehicles { generation, dataset_id, vehicles });
      }
    }));

    generation
  }

  pub fn is_current(&self, generation: u64) -> bool {
    generation == self.generation
  }
}

impl Drop for Loader {
  fn drop(&mut self) {
    for request in [self.dataset_request.take(), self.vehicles_request.take()].into_iter().flatten() {
      request.abort();
    }
  }
}
