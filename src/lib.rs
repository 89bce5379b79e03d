//! Aggregation gateway over two Formula 1 data providers.
//!
//! Seasons up to 2022 are served from the Jolpica archive
//! (Ergast-compatible); later seasons come from the OpenF1 live provider.
//! Each endpoint picks a provider by year, chains the upstream calls the
//! data depends on, and reshapes the payloads into a single JSON envelope.
//! Everything is stateless and request-scoped: no persistence, no caching,
//! no retries.

pub mod aggregator;
pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod upstream;
