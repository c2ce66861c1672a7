//! REST backend surface: typed records and the stateless HTTP client.

pub mod client;
pub mod types;

pub use client::ApiClient;
