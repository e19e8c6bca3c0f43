//! HTTP client for the backend matcher service.
//!
//! The backend owns enrollment, matching and persistence; this crate only
//! speaks its wire contract. Field names on the DTOs are the wire names.

pub mod client;
pub mod types;

pub use client::{GateClient, GateError};
pub use types::{AccessDecision, AccessStats, Recognition, RegisteredAccess, Usuario};
