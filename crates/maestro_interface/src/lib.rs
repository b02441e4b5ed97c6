//! Trait definitions for the Maestro orchestration library.
//!
//! The orchestration services work exclusively against [`ModelDriver`], so
//! any implementation satisfying the contract (HTTP clients, test mocks)
//! plugs in without touching chain logic.

mod driver;

pub use driver::{DriverSet, Generation, ModelDriver};
