//! Shared primitives used by all server console crates.
//!
//! This crate is intentionally minimal and dependency-light, so it can sit at the bottom of the
//! dependency graph. Access levels live here because every other layer compares against them.

pub mod access;
pub mod config;
pub mod error;
pub mod ids;
