//! m365-lib: Core types and logic for the m365 CLI
//!
//! This crate provides the building blocks used by the `m365` binary:
//! - `Connection`: persisted access tokens and the discovered SharePoint URL
//! - `RequestClient`: authenticated HTTP requests with error extraction
//! - `CommandContext`: what every command runs against
//! - `commands`: one module per CLI command, each with validated options

pub mod commands;
pub mod connection;
pub mod consts;
pub mod context;
pub mod platform;
pub mod prompt;
pub mod request;
pub mod retry;
pub mod spo;
pub mod validation;
