//! Shared primitives for the status-meaning workspace.
//!
//! This crate holds the small, dependency-free building blocks every other
//! crate leans on:
//!
//! - [`HttpStatusCode`] and [`StatusCategory`]: the numeric code and its
//!   range-derived category
//!
//! ## Architecture
//!
//! - **common** (this crate): primitives
//! - **models**: pure data built on the primitives, plus `ErrorLocation`
//! - **status-core**: resolution logic operating on models
//! - **status-meaning**: HTTP application wiring everything together

pub mod http_status;


pub use http_status::{HttpStatusCode, StatusCategory};
