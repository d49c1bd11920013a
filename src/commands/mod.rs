//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `shell.rs` — the interactive inspection session (menu loop).
//! - `runtime.rs` — one-shot subcommands: demo/check.
//!
//! ## Principles
//! - Parse/match operator and CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod runtime;
pub mod shell;

pub use runtime::handle_runtime_commands;
