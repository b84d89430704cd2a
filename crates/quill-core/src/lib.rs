//! Core types and trait definitions for the Quill journal.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

pub mod entry;
pub mod error;
pub mod journal;
pub mod policy;
pub mod refresh;
pub mod session;
pub mod store;

pub use error::{Error, Result};
