//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `generate.rs` — proposal file generation.
//! - `check.rs` — config/output discovery, loading and the property passes.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Keep progress lines and the failure message stable; scripts depend on them.

pub mod check;
pub mod generate;

pub use check::handle_check_command;
pub use generate::handle_generate_command;
