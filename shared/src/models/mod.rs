//! Data models

pub mod member;

pub use member::{Member, MemberCreate, MemberUpdate};
