//! Ghbook: GitHub Repository Exploration and Collaborator Management
//!
//! A small tool for working with GitHub repositories: listing a repository's
//! file tree as a compact, filtered directory map, and bulk-adding
//! collaborators with per-user reporting.

pub mod cli;
pub mod collab;
pub mod config;
pub mod error;
pub mod github;
pub mod logging;
pub mod tree;
