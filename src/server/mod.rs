//! Server module for building the fleet HTTP server
//!
//! This module provides a `ServerBuilder` that assembles:
//! - the record service over the configured store
//! - the REST routes under `/rest/ships`
//! - health check routes

pub mod builder;
pub mod exposure;
pub mod host;
pub mod router;

pub use builder::ServerBuilder;
pub use exposure::RestExposure;
pub use host::ServerHost;
