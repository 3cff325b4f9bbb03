//! Data layer for the Omnitrix alien explorer.
//!
//! Queries go to the alien-statistics backend through [`gateway::ApiClient`].
//! When the backend cannot answer, [`fallback`] computes a substitute from a
//! bundled sample set. The latest cluster and projection results are kept in
//! a [`cache::ResultCache`] so they can be shown before any network call.

pub mod cache;
pub mod config;
pub mod error;
pub mod explorer;
pub mod fallback;
pub mod gateway;
pub mod models;

pub use explorer::Explorer;
