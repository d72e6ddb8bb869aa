mod filter;
mod sort;
mod view;

pub use filter::*;
pub use sort::*;
pub use view::*;
