//! Traversal module: Concurrent directory walk
//!
//! Lists directories and hashes files on a bounded pool of tokio tasks,
//! consulting the ignore matcher for every entry.

mod walker;

pub use walker::walk;
