// lib.rs - Library exports for integration tests

pub mod address;
pub mod artifacts;
pub mod bootstrap;
pub mod chain;
pub mod config;
pub mod error;
