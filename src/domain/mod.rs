//! Domain layer: identifiers, the swap lifecycle state machine, and the
//! swap entity with its denormalized read model.
//!
//! Everything here is plain data and pure transition rules. Validation
//! that needs the user or skill directories lives in the service layer.

pub mod ids;
pub mod status;
pub mod swap;

pub use ids::{SkillId, SkillIdParam, SwapId, UserId};
pub use status::SwapStatus;
pub use swap::{NewSwap, SkillRecord, SwapDetail, SwapRecord, UserRecord};
