//! CLI command implementations

pub mod bench;
pub mod check;
pub mod score;
pub mod search;
