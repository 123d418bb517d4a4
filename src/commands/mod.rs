//! Command implementations for sapp CLI

pub mod completions;
pub mod helpers;
pub mod init;
pub mod prompt;
pub mod sym;
pub mod version;
