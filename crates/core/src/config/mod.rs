//! Configuration loading and schema definitions
//!
//! Settings shared by the `fixtools` binary and anything embedding the index.

mod loader;
mod schema;

pub use loader::{expand_path, Config};
pub use schema::*;
