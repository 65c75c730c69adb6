//! Subcommand modules for the `bitree` binary.

pub mod build;
pub mod free;
pub mod height;
pub mod nodelevel;
pub mod path;
pub mod postorder;
pub mod utils;
