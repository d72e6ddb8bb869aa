mod client;
mod dataset_id;
mod dealer;
mod diagnostics;
mod error;
mod loader;
mod vehicle;

pub use client::*;
pub use dataset_id::*;
pub use dealer::*;
pub use diagnostics::*;
pub use error::*;
pub use loader::*;
pub use vehicle::*;
