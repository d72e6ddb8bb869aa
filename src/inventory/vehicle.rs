use std::fmt::{Display, Formatter, Result};
use serde::Deserialize;

/// Model year. The API usually sends a number, but a numeric string is
/// accepted too, so comparisons are always numeric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "RawYear")]
pub struct Year(pub i64);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawYear {
  Number(i64),
  Text(String)
}

impl TryFrom<RawYear> for Year {
  type Error = String;

  fn try_from(raw: RawYear) -> std::result::Result<Self, Self::Error> {
    match raw {
      RawYear::Number(n) => Ok(Year(n)),
      RawYear::Text(s) => s
        .trim()
        .parse()
        .map(Year)
        .map_err(|_| format!("year {:?} is not a number", s))
    }
  }
}

impl Display for Year {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    write!(f, "{}", self.0)
  }
}

/// One inventory record. There is no identity field worth trusting, so
/// position in the flattened list stands in for one.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Vehicle {
  pub year: Year,
  pub model: String,
  pub make: String
}

#[cfg(test)]
impl Vehicle {
  pub fn new(year: i64, model: impl Into<String>, make: impl Into<String>) -> Self {
    Vehicle { year: Year(year), model: model.into(), make: make.into() }
  }
}
