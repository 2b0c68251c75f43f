// src/lib.rs
// Client for the Warungin POS backend. The backend owns every business
// rule; this crate owns the session token pair, the authenticated
// request pipeline with its refresh-and-retry cycle, and the advisory
// void policy, plus typed wrappers for the domain endpoints.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod policy;
pub mod session;

pub use client::ApiClient;
pub use error::ApiError;
pub use session::{FileSessionStore, MemorySessionStore, SessionStore, TokenPair};
