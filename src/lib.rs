//! FinAegis ledger API client.
//!
//! Provides typed models and async methods for the FinAegis HTTP API:
//! accounts, transactions, transfers, assets, baskets, exchange rates,
//! webhooks, and the GCU composite-currency index. Every public method
//! performs one authenticated round trip; transient failures on idempotent
//! methods are retried with exponential backoff, and non-2xx responses are
//! mapped to a typed error taxonomy callers can branch on.

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod resources;
pub mod transport;

pub use client::FinAegis;
pub use config::{ClientConfig, Environment};
pub use error::{FinAegisError, Result};
