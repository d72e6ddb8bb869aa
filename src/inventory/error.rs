use thiserror::Error;

pub type Result<T> = std::result::Result<T, InventoryError>;

/// Everything that can go wrong between asking the inventory API a question
/// and holding a usable answer.
#[derive(Error, Debug)]
pub enum InventoryError {
  /// The request never produced a response
  #[error("request failed: {0}")]
  Transport(#[from] reqwest::Error),

  /// A response arrived, but not a 2xx one
  #[error("{url} answered with HTTP {status}")]
  Status { url: String, status: u16 },

  /// The body parsed (or failed to) into something other than what we expect
  #[error("malformed response: {0}")]
  Malformed(String),

  #[error("invalid API url: {0}")]
  InvalidUrl(#[from] url::ParseError),

  #[error("API url cannot carry a path: {0}")]
  NotABaseUrl(String)
}

impl InventoryError {
  pub fn malformed(message: impl Into<String>) -> Self {
    InventoryError::Malformed(message.into())
  }
}
