//! wavcodec CLI library
//!
//! Command implementations behind the `wavcodec` binary. Each command owns
//! its file handles and passes buffered streams to the `wavcodec` crate.

pub mod commands;
