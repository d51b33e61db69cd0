//! Domain read models, drafts and patches for the seven card-index entities.
//!
//! # Responsibility
//! - Define the record shapes returned by repositories, with foreign
//!   references already resolved to display values.
//! - Define draft/patch inputs carrying raw operator strings.
//!
//! # Invariants
//! - Patch fields use `None` for "keep stored value" (coalesce merge).
//! - Records substitute [`REFERENCE_NOT_FOUND`] for dangling source and
//!   person references instead of dropping rows.

pub mod coordinate;
pub mod event;
pub mod interaction;
pub mod person;
pub mod place;
pub mod source;
pub mod text;

/// Display fallback for a foreign reference whose row no longer exists.
pub const REFERENCE_NOT_FOUND: &str = "reference not found";
