//! Catalog access for cask
//!
//! This crate provides:
//! - The [`CatalogGateway`] fetch contract
//! - A stub gateway and an in-memory fixture gateway
//! - The factory that resolves which one the process uses

pub mod error;
pub mod factory;
pub mod fixture;
pub mod gateway;
pub mod stub;

pub use error::{GatewayError, Result};
pub use factory::{from_config, gateway};
pub use fixture::{CatalogRecord, FixtureGateway};
pub use gateway::CatalogGateway;
pub use stub::StubGateway;
