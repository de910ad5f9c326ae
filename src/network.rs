pub mod error;
pub mod graph;
