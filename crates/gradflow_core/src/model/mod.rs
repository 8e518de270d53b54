//! Domain model for the GradFlow project-management core.
//!
//! # Responsibility
//! - Define canonical entity records shared by store, board and services.
//! - Keep cross-entity links as typed id references, never nested copies.
//!
//! # Invariants
//! - Every entity is identified by a stable generated id.
//! - Entities are owned by exactly one store dictionary; other entities may
//!   only hold id references to them.

pub mod feedback;
pub mod ids;
pub mod milestone;
pub mod project;
pub mod submission;
pub mod task;
pub mod user;

use std::time::{SystemTime, UNIX_EPOCH};

/// Returns the current wall-clock time as Unix epoch milliseconds.
///
/// Clock regressions are clamped to zero instead of panicking; timestamps
/// are advisory metadata, never ordering keys on their own.
pub fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}

/// Normalizes attachment URL input: trims entries and drops blanks.
///
/// Order of the surviving entries is preserved.
pub fn normalize_attachments(urls: &[String]) -> Vec<String> {
    urls.iter()
        .map(|url| url.trim())
        .filter(|url| !url.is_empty())
        .map(str::to_string)
        .collect()
}
