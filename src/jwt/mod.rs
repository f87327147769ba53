//! Stateless JWT claims tokens.
//!
//! Tokens are self-contained and signed with a process-wide secret; there
//! is no server-side session record and no revocation. A compromised token
//! stays valid until its expiry.
//!
//! # Example
//!
//! ```rust
//! use vestibule::jwt::{JwtConfig, JwtService};
//! use vestibule::Role;
//! use uuid::Uuid;
//!
//! let config = JwtConfig::new("an-example-secret-of-32-bytes!!!").unwrap();
//! let service = JwtService::new(config);
//!
//! let token = service
//!     .issue("john@example.com", Role::Member, Uuid::new_v4())
//!     .unwrap();
//! let claims = service.decode(&token).unwrap();
//! assert_eq!(claims.role, Role::Member);
//! ```

mod claims;
mod config;
mod service;

pub use claims::Claims;
pub use config::JwtConfig;
pub use service::JwtService;
