//! In-memory adapters used by tests and deterministic local runs.

mod client;

pub use client::{ElbCall, ElbOperation, InMemoryElbClient};
