//! Data Transfer Objects for REST request/response serialization.
//!
//! Wire-format quirks (string-or-number skill ids) are resolved here;
//! everything past this layer works with canonical domain types.

pub mod common_dto;
pub mod swap_dto;

pub use common_dto::*;
pub use swap_dto::*;
