use serde::Deserialize;
use serde_json::Value;

use super::{InventoryError, Result, Vehicle};

/// A dealer owns vehicles. Only exists long enough to be flattened away.
#[derive(Debug, Deserialize)]
pub struct Dealer {
  #[serde(default)]
  pub vehicles: Vec<Vehicle>
}

/// Parses a `/cheat` body and flattens every dealer's vehicles into one list,
/// dealer order first, then the order within each dealer.
pub fn flatten_dealers(body: &[u8]) -> Result<Vec<Vehicle>> {
  let mut document: Value = serde_json::from_slice(body)
    .map_err(|e| InventoryError::malformed(format!("response is not JSON: {}", e)))?;

  let dealers = match document.get_mut("dealers").map(Value::take) {
    Some(Value::Array(dealers)) => dealers,
    _ => return Err(InventoryError::malformed(
      "the \"dealers\" property was not found or is not an array"
    ))
  };

  let mut vehicles = Vec::new();
  for (index, dealer) in dealers.into_iter().enumerate() {
    let dealer: Dealer = serde_json::from_value(dealer)
      .map_err(|e| InventoryError::malformed(format!("dealer #{}: {}", index, e)))?;

    vehicles.extend(dealer.vehicles);
  }

  Ok(vehicles)
}
