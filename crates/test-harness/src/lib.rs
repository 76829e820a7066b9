//! Test fixture and assertion helpers for exercising the lip pipeline
//! against the deterministic mock kernel.

pub mod assertions;
pub mod helpers;

pub use assertions::*;
pub use helpers::{HarnessError, LipFixture, SocketBaseGenerator};
