//! Infrastructure layer for external integrations.
//!
//! - [`persistence`] - PostgreSQL and SQLite repository implementations
//! - [`dns`] - System hostname resolution

pub mod dns;
pub mod persistence;
