//! Convenience re-exports for common `easel-rs` types.
//!
//! Meant to be glob-imported by frontends:
//!
//! ```
//! use easel_rs::prelude::*;
//! ```
//!
//! This pulls in the types needed for the vast majority of callers: the
//! [`PromptFields`] state struct with its field handles, the assembler and
//! its config, the option catalogs, and the form schema. The log-capture
//! layer is included because every interactive frontend wants it.

// ── Field state ─────────────────────────────────────────────────────
pub use crate::fields::{ChoiceField, FlagField, PromptFields, TextField};

// ── Assembly ────────────────────────────────────────────────────────
pub use crate::assemble::{AssembleConfig, PromptParts, assemble, assemble_parts};

// ── Catalogs ────────────────────────────────────────────────────────
pub use crate::catalog::{Catalog, OptionGroup, UNSET_VALUE};

// ── Form schema ─────────────────────────────────────────────────────
pub use crate::form::{Control, FORM, FieldSpec, FormSection};

// ── Log capture ─────────────────────────────────────────────────────
pub use crate::trace::{LogBuffer, LogCaptureLayer, LogLevel, LogLine};
