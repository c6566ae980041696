//! # Userstore Core
//!
//! The domain layer of the user-record service.
//! This crate contains the domain model, error taxonomy, and the ports
//! (capability traits) that infrastructure must implement. It carries
//! zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{AuthError, StoreError};
