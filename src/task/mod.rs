//! Task list and task management.
//!
//! Task lists group tasks; tasks move once from incomplete to complete. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Orchestration services in [`services`]
//! - Use cases with pagination defaults in [`application`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
