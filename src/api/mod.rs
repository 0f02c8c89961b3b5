//! API Client
//!
//! HTTP access to the public explorer stats endpoint.

pub mod client;

pub use client::{fetch_counters, STATS_URL};
