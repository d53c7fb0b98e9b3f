//! Domain layer containing business entities and contracts.
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`host_resolver`] - DNS lookup contract for URL validation
//!
//! The domain layer has no dependencies on the infrastructure or presentation
//! layers. Business logic lives in [`crate::application::services`].

pub mod entities;
pub mod host_resolver;
pub mod repositories;
