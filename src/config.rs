//! Configuration loader and schema types.
//!
//! Settings tune how records are built (hash chunk size, decoder strictness)
//! and are loaded from an optional TOML file plus environment overrides.

mod load;
mod schema;

pub use load::{default_config_path, resolve_config_path};
pub use schema::*;
