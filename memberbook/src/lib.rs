//! memberbook — console member-record manager
//!
//! Layering, bottom-up: `db::connection` (connection + transaction
//! lifecycle), `db::members` (one parameterized statement per call),
//! `service::members` (the transaction boundary), `view::console` (the
//! menu shell).

pub mod config;
pub mod db;
pub mod error;
pub mod service;
pub mod view;

pub use config::{Config, DatabaseConfig};
pub use error::{DbError, DbOp};
