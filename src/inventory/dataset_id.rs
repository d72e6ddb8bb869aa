use std::fmt::{Display, Formatter, Result};
use serde::Deserialize;

/// Opaque token naming which inventory snapshot to fetch.
/// Nothing inside it is interpreted on this side of the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct DatasetId(String);

impl DatasetId {
  pub fn as_str(&self) -> &str { &self.0 }
}

impl From<String> for DatasetId {
  fn from(id: String) -> Self { DatasetId(id) }
}

impl From<&str> for DatasetId {
  fn from(id: &str) -> Self { DatasetId(id.to_owned()) }
}

impl Display for DatasetId {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    write!(f, "{}", self.0)
  }
}

/// Body of `GET /api/datasetId`
#[derive(Debug, Deserialize)]
pub(crate) struct DatasetIdResponse {
  #[serde(rename="datasetId")]
  pub dataset_id: DatasetId
}
