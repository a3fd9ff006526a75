// src/lib.rs — Library root for khelpers

pub mod array;
pub mod cli;
pub mod datetime;
pub mod files;
pub mod infra;
pub mod number;
pub mod record;
pub mod text;
pub mod tree;

pub use infra::errors::HelperError;
pub use record::{Forest, Record};
pub use tree::{build_tree, flatten_tree, TreeBuilder};
