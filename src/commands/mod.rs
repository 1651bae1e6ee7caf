// src/commands/mod.rs

pub mod common;
pub mod dispatcher;
