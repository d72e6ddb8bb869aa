use reqwest::Client;
use tracing::{debug, info, instrument};
use url::Url;

use super::{flatten_dealers, DatasetId, DatasetIdResponse, InventoryError, Result, Vehicle};

/// Thin wrapper over the two inventory endpoints.
/// Cheap to clone, the connection pool is shared.
#[derive(Debug, Clone)]
pub struct InventoryClient {
  http: Client,
  base_url: Url
}

impl InventoryClient {
  pub fn new(base_url: &str) -> Result<Self> {
    let base_url = Url::parse(base_url)?;
    if base_url.cannot_be_a_base() {
      return Err(InventoryError::NotABaseUrl(base_url.to_string()));
    }

    Ok(InventoryClient { http: Client::new(), base_url })
  }

  pub fn base_url(&self) -> &Url { &self.base_url }

  /// `GET /api/datasetId`
  #[instrument(skip(self))]
  pub async fn dataset_id(&self) -> Result<DatasetId> {
    let body = self.get(self.endpoint(&["api", "datasetId"])?).await?;

    let response: DatasetIdResponse = serde_json::from_slice(&body)
      .map_err(|e| InventoryError::malformed(format!("dataset id: {}", e)))?;

    info!(dataset_id = %response.dataset_id, "dataset id fetched");
    Ok(response.dataset_id)
  }

  /// `GET /api/{datasetId}/cheat`, flattened
  #[instrument(skip(self))]
  pub async fn vehicles(&self, dataset_id: &DatasetId) -> Result<Vec<Vehicle>> {
    let body = self.get(self.endpoint(&["api", dataset_id.as_str(), "cheat"])?).await?;
    let vehicles = flatten_dealers(&body)?;

    info!(%dataset_id, count = vehicles.len(), "vehicles fetched");
    Ok(vehicles)
  }

  /// Appends path segments to the base url, percent-encoding each one
  fn endpoint(&self, segments: &[&str]) -> Result<Url> {
    let mut url = self.base_url.clone();
    url
      .path_segments_mut()
      .map_err(|_| InventoryError::NotABaseUrl(self.base_url.to_string()))?
      .pop_if_empty()
      .extend(segments);

    Ok(url)
  }

  async fn get(&self, url: Url) -> Result<Vec<u8>> {
    debug!(%url, "GET");
    let response = self.http.get(url.clone()).send().await?;

    let status = response.status();
    if !status.is_success() {
      return Err(InventoryError::Status { url: url.to_string(), status: status.as_u16() });
    }

    Ok(response.bytes().await?.to_vec())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::testing::TestServer;
  use axum::{extract::Path, http::StatusCode, routing::get, Json, Router};
  use serde_json::json;

  #[test]
  fn endpoints_keep_the_base_path() {
    let client = InventoryClient::new("http://localhost:8080/proxy/").unwrap();
    let url = client.endpoint(&["api", "datasetId"]).unwrap();

    assert_eq!(url.as_str(), "http://localhost:8080/proxy/api/datasetId");
  }

  #[test]
  fn dataset_id_is_one_path_segment() {
    let client = InventoryClient::new("http://localhost:8080").unwrap();
    let url = client.endpoint(&["api", "a/b c", "cheat"]).unwrap();

    assert_eq!(url.as_str(), "http://localhost:8080/api/a%2Fb%20c/cheat");
  }

  #[test]
  fn rejects_urls_without_a_path() {
    assert!(matches!(
      InventoryClient::new("mailto:dealer@example.com"),
      Err(InventoryError::NotABaseUrl(_))
    ));
    assert!(matches!(InventoryClient::new("not a url"), Err(InventoryError::InvalidUrl(_))));
  }

  #[tokio::test]
  async fn fetches_dataset_id() {
    let server = TestServer::start(
      Router::new().route("/api/datasetId", get(|| async { Json(json!({ "datasetId": "Xk9_2" })) }))
    ).await;

    let id = server.client().dataset_id().await.unwrap();
    assert_eq!(id, DatasetId::from("Xk9_2"));
  }

  #[tokio::test]
  async fn non_success_status_is_an_error() {
    let server = TestServer::start(
      Router::new().route("/api/datasetId", get(|| async { StatusCode::SERVICE_UNAVAILABLE }))
    ).await;

    match server.client().dataset_id().await {
      Err(InventoryError::Status { status, url }) => {
        assert_eq!(status, 503);
        assert!(url.ends_with("/api/datasetId"));
      },
      other => panic!("expected status error, got {:?}", other)
    }
  }

  #[tokio::test]
  async fn missing_dataset_id_field_is_malformed() {
    let server = TestServer::start(
      Router::new().route("/api/datasetId", get(|| async { Json(json!({ "id": "Xk9_2" })) }))
    ).await;

    assert!(matches!(server.client().dataset_id().await, Err(InventoryError::Malformed(_))));
  }

  #[tokio::test]
  async fn fetches_and_flattens_vehicles() {
    let server = TestServer::start(
      Router::new().route("/api/:id/cheat", get(|Path(id): Path<String>| async move {
        Json(json!({
          "dealers": [
            { "dealerId": 1, "vehicles": [{ "year": 2020, "model": "A", "make": id }] },
            { "dealerId": 2, "vehicles": [{ "year": 2019, "model": "B", "make": "Y" }] }
          ]
        }))
      }))
    ).await;

    let vehicles = server.client().vehicles(&DatasetId::from("X")).await.unwrap();
    assert_eq!(vehicles, vec![Vehicle::new(2020, "A", "X"), Vehicle::new(2019, "B", "Y")]);
  }

  #[tokio::test]
  async fn unreachable_server_is_a_transport_error() {
    let server = TestServer::start(Router::new()).await;
    let client = server.client();
    server.shutdown().await;

    assert!(matches!(client.dataset_id().await, Err(InventoryError::Transport(_))));
  }
}
