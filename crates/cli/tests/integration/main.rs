//! End-to-end tests running the `m365` binary against a mock Graph /
//! SharePoint server.

mod aad_tests;
mod common;
mod graph_tests;
mod spo_tests;
