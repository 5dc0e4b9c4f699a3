//! Shared types for memberbook
//!
//! The member record and its create/update payloads, used by the gateway,
//! service and console layers.

pub mod models;

// Re-exports
pub use models::{Member, MemberCreate, MemberUpdate};
pub use serde::{Deserialize, Serialize};
