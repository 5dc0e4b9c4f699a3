//! Service layer — transaction boundaries

pub mod members;
