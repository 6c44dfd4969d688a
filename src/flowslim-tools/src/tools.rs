//! Built-in tools for flowslim.

pub mod filter_schema;
