//! Core logic: policy, credential store, configuration.

pub mod config;
pub mod credstore;
pub mod error;
pub mod paths;
pub mod policy;
