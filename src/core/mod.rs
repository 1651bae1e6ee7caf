// src/core/mod.rs

pub mod errors;
pub mod file_system;
pub mod models;
pub mod parking_service;
pub mod reporting;
