//! Integration tests for the Ghbook repository tooling

mod route_contents;
mod tree_filtering;
mod tree_structure;
