use std::fmt::{Display, Formatter, Result};
use tracing::error;

use super::InventoryError;

/// Which fetch a failure came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
  DatasetId,
  Vehicles
}

impl Display for Stage {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    write!(
      f, "{}",
      match self {
        Stage::DatasetId => "dataset id",
        Stage::Vehicles => "vehicles"
      }
    )
  }
}

/// Where loader failures go. Failures never reach the screen; they are
/// handed to this and otherwise swallowed.
pub trait Diagnostics: Send + Sync {
  fn report(&self, stage: Stage, error: &InventoryError);
}

/// Writes failures to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
  fn report(&self, stage: Stage, error: &InventoryError) {
    error!(%stage, %error, "failed to load inventory");
  }
}
