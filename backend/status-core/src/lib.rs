//! Status-code metadata resolution.
//!
//! - [`resolver`]: provider-first, table-second lookups that never fail
//! - [`fallback`]: the bundled multilingual tables
//! - [`provider`] / [`catalog`]: the optional external data source
//! - [`lookup`]: request validation and the public error taxonomy
//! - [`config`]: file + environment configuration

pub mod catalog;
pub mod config;
pub mod error;
pub mod fallback;
pub mod lookup;
pub mod provider;
pub mod resolver;

#[cfg(test)]
mod tests;

pub use provider::StatusProvider;
pub use resolver::Resolver;
