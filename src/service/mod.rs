//! Service layer: swap negotiation business logic.
//!
//! [`SwapService`] validates proposals against the user and skill
//! directories, authorizes responses, and drives the state machine
//! through the store's conditional transition.

pub mod swap_service;

pub use swap_service::{NewProposal, SwapPage, SwapService};
