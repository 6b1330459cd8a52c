//! Policy module: Ignore rules loaded from root-level policy files
//!
//! Compiles `.gitignore`, `.dockerignore` and `.csbignore` from the root of
//! the tree into a single ordered rule list. Nested policy files are never
//! discovered or merged.

mod matcher;

pub use matcher::IgnoreMatcher;
