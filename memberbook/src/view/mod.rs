//! Console shell

pub mod console;
