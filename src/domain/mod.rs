//! Shared data model layer (structs/constants only).
//!
//! ## Purpose
//! - Keep proposal/decision/report structs in one place.
//! - Avoid cyclic imports and duplicated type definitions.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — value sets, loaded files, violations, reports.
//! - `errors.rs` — input-format failures.
//! - `constants.rs` — file naming and output strings.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem side effects.
//!
//! ## Compatibility note
//! Changes in `CheckReport`/`GenerateReport` affect `--json` outputs.
//! Keep schema-impacting changes synchronized with `docs/contracts/*`.

pub mod constants;
pub mod errors;
pub mod models;
