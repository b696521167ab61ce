//! Internal test modules - whitebox tests with crate access
//!
//! Harness-based acceptance tests drive the terminal host with synthetic
//! events; snapshot tests pin what the host draws.

mod view_snapshots;
