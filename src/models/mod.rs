//! Data structures.

pub mod config;
