//! DNS resolution backed by the operating system resolver.

pub mod system_resolver;

pub use system_resolver::SystemHostResolver;
