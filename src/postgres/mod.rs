//! `PostgreSQL`-backed repository implementations.
//!
//! Enable with the `postgres` feature. Suitable for distributed
//! deployments where multiple instances share principal and capacity
//! state.

mod capacity;
mod principal;

pub use capacity::PostgresCapacityRepository;
pub use principal::PostgresPrincipalRepository;
