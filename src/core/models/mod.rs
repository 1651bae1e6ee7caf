// src/core/models/mod.rs

pub mod slot;
pub mod parking_lot;

pub use slot::*;
pub use parking_lot::*;
