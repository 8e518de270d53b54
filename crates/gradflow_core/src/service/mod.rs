//! Use-case services above the entity store.
//!
//! # Responsibility
//! - Host flows that combine store mutations with external collaborators
//!   (REST-backed directories, upload results) behind trait seams.

pub mod assignment;
