//! Shared types and seams for the build scheme tree view.
//!
//! The build manager (scheme discovery, running detection) and the host view
//! system (painting, refresh machinery) are external collaborators. This crate
//! only describes the contracts between them and the tree provider.

pub mod host;
pub mod manager;
pub mod scheme;

pub use scheme::{Scheme, SchemeStatus};
