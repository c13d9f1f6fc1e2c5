//! Command implementations for docdate CLI

pub mod completions;
pub mod helpers;
pub mod serve;
pub mod update;
pub mod version;
