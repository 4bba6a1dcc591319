//! CLI command handlers.

mod origins;
mod product;
mod resolve;

pub use origins::run_origins;
pub use product::run_product;
pub use resolve::run_resolve;
