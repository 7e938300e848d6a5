//! Lume Core - Foundational types for the Lume point-field engine
//!
//! This crate provides the types the other Lume crates depend on:
//! - `Vec2` - 2D position type, `Pod` so buffers of it can be viewed as flat floats
//! - Error types and Result alias

mod error;
mod types;

pub use error::{LumeError, Result};
pub use types::Vec2;
