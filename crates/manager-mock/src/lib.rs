//! Deterministic in-memory build manager.
//!
//! Tests and the terminal host script scheme lists, defaults, running state and
//! refresh windows through [`MockBuildManager`], or load them from a JSON
//! [`SchemeFixture`].

mod fixture;
mod manager;

pub use fixture::{FixtureError, SchemeFixture};
pub use manager::MockBuildManager;
