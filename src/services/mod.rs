//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `checker.rs` — the three property passes and the fail-fast driver.
//! - `logs.rs` — config/output parsing and length alignment.
//! - `discovery.rs` — `procNN.*` naming and path pairing.
//! - `generator.rs` — randomized proposal files.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Property checks are pure functions over loaded data.
//! - File access lives in `logs.rs` and `generator.rs` only.
//! - Keep command handlers thin; delegate to services.

pub mod checker;
pub mod discovery;
pub mod generator;
pub mod logs;
pub mod output;
