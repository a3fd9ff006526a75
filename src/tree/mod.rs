// src/tree/mod.rs — Hierarchical record trees
//
// `build_tree` nests flat id/parent records into a forest; `flatten_tree`
// turns a forest back into a pre-order sequence annotated with depth. Both
// take ownership of their input and keep no state between calls.

pub mod builder;
pub mod flattener;
mod key;

pub use builder::{build_tree, TreeBuilder};
pub use flattener::flatten_tree;
