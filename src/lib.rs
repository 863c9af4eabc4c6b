//! # skillswap-gateway
//!
//! REST API gateway for the BisaBelajar skill-swap negotiation workflow.
//!
//! A swap is a proposed exchange of one user's skill for another's. The
//! requester opens a proposal; only the responder may accept or reject
//! it; `accepted` and `rejected` are terminal. This crate owns that
//! lifecycle — validation, response authorization, and the state guard —
//! and exposes it over HTTP. The user and skill directories are external
//! collaborators consumed read-only.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── SwapService (service/)
//!     │
//!     ├── SwapStore (persistence/)
//!     │
//!     └── PostgreSQL
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod service;
