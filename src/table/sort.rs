use std::cmp::Ordering;
use std::fmt::{Display, Formatter, Result};

use crate::inventory::Vehicle;

/// Column a table can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
  Year,
  Model,
  Make
}

impl SortKey {
  pub const ALL: [SortKey; 3] = [SortKey::Year, SortKey::Model, SortKey::Make];

  /// Numeric for the year, code point order for text
  pub fn compare(&self, a: &Vehicle, b: &Vehicle) -> Ordering {
    match self {
      SortKey::Year => a.year.cmp(&b.year),
      SortKey::Model => a.model.cmp(&b.model),
      SortKey::Make => a.make.cmp(&b.make)
    }
  }
}

impl Display for SortKey {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    write!(
      f, "{}",
      match self {
        SortKey::Year => "Year",
        SortKey::Model => "Model",
        SortKey::Make => "Maker"
      }
    )
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
  #[default]
  Ascending,
  Descending
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortConfig {
  /// `None` until the user asks for an order
  pub key: Option<SortKey>,
  pub direction: SortDirection
}

impl SortConfig {
  /// Asking for the key that is already ascending flips it to descending;
  /// anything else starts over at ascending.
  pub fn toggle(self, key: SortKey) -> SortConfig {
    let direction = match self {
      SortConfig { key: Some(current), direction: SortDirection::Ascending } if current == key => SortDirection::Descending,
      _ => SortConfig::default().direction
    };

    SortConfig { key: Some(key), direction }
  }

  /// Reorders `positions` (indices into `vehicles`) in place. Stable, so ties
  /// keep the order they came in with.
  pub fn apply(&self, vehicles: &[Vehicle], positions: &mut [usize]) {
    let key = match self.key {
      Some(key) => key,
      None => return
    };

    positions.sort_by(|&a, &b| {
      let ordering = key.compare(&vehicles[a], &vehicles[b]);
      match self.direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse()
      }
    });
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn same_key_toggles_direction() {
    let year = SortConfig::default().toggle(SortKey::Year);
    assert_eq!(year, SortConfig { key: Some(SortKey::Year), direction: SortDirection::Ascending });

    let year_again = year.toggle(SortKey::Year);
    assert_eq!(year_again.direction, SortDirection::Descending);

    let year_thrice = year_again.toggle(SortKey::Year);
    assert_eq!(year_thrice.direction, SortDirection::Ascending);
  }

  #[test]
  fn other_key_starts_ascending() {
    let config = SortConfig::default()
      .toggle(SortKey::Year)
      .toggle(SortKey::Year)
      .toggle(SortKey::Model);

    assert_eq!(config, SortConfig { key: Some(SortKey::Model), direction: SortDirection::Ascending });
  }

  #[test]
  fn year_sorts_numerically() {
    let vehicles = vec![
      Vehicle::new(2001, "a", "a"),
      Vehicle::new(999, "b", "b"),
      Vehicle::new(10000, "c", "c")
    ];
    let mut positions = vec![0, 1, 2];

    SortConfig::default().toggle(SortKey::Year).apply(&vehicles, &mut positions);
    assert_eq!(positions, vec![1, 0, 2]);
  }

  #[test]
  fn text_sorts_by_code_point() {
    let vehicles = vec![
      Vehicle::new(2000, "civic", "honda"),
      Vehicle::new(2000, "Camry", "Toyota"),
      Vehicle::new(2000, "Accord", "Honda")
    ];
    let mut positions = vec![0, 1, 2];

    // uppercase sorts before lowercase
    SortConfig::default().toggle(SortKey::Model).apply(&vehicles, &mut positions);
    assert_eq!(positions, vec![2, 1, 0]);
  }

  #[test]
  fn descending_keeps_ties_in_place() {
    let vehicles = vec![
      Vehicle::new(2010, "a", "x"),
      Vehicle::new(2012, "b", "x"),
      Vehicle::new(2010, "c", "x")
    ];
    let mut positions = vec![0, 1, 2];

    SortConfig::default()
      .toggle(SortKey::Year)
      .toggle(SortKey::Year)
      .apply(&vehicles, &mut positions);

    assert_eq!(positions, vec![1, 0, 2]);
  }

  #[test]
  fn no_key_leaves_order_alone() {
    let vehicles = vec![Vehicle::new(2, "b", "b"), Vehicle::new(1, "a", "a")];
    let mut positions = vec![0, 1];

    SortConfig::default().apply(&vehicles, &mut positions);
    assert_eq!(positions, vec![0, 1]);
  }
}
