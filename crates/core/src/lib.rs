//! Core types for pms-suggest
//!
//! Domain types, match policies and configuration shared by the storage,
//! service and CLI crates.

mod constants;
mod customer;
mod env_config;
mod error;
mod matching;

pub use constants::*;
pub use customer::*;
pub use env_config::*;
pub use error::*;
pub use matching::*;
