//! Core business logic
//!
//! This module contains the engine: metadata flattening, table accumulation,
//! and the recursive export walk.

pub mod export;
pub mod flatten;
pub mod table;
