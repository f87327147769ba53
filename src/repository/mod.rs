//! Repository traits and data types.
//!
//! Storage abstractions for the crate. Implement these traits to use your
//! own database, or enable the `postgres` feature for ready-made `sqlx`
//! implementations and the `mocks` feature for in-memory ones.

mod capacity;
mod principal;

#[cfg(any(test, feature = "mocks"))]
mod capacity_mock;
#[cfg(any(test, feature = "mocks"))]
mod principal_mock;

pub use capacity::CapacityRepository;
pub use principal::{NewPrincipal, Principal, PrincipalRepository};

#[cfg(any(test, feature = "mocks"))]
pub use capacity_mock::MockCapacityRepository;
#[cfg(any(test, feature = "mocks"))]
pub use principal_mock::MockPrincipalRepository;
