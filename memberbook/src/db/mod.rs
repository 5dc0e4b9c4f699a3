//! Database access layer

pub mod connection;
pub mod members;
pub mod schema;
