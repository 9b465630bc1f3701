//! Single-user local password gate.
//!
//! Enforces a complexity policy on new passwords, keeps one credential record
//! on disk, and runs an interactive login / change-password menu against it.
//!
//! ## Modules
//! - `cli` — Argument parsing, logging setup, console terminal
//! - `core` — Policy, credential store, configuration
//! - `models` — Config file structures
//! - `session` — Menu state machine
//! - `util` — Filesystem helpers

pub mod cli;
pub mod constants;
pub mod core;
pub mod models;
pub mod session;
pub mod util;
