//! Random SOCP structure generation.
//!
//! This module contains the main types for synthesizing the dimensions and
//! cone structure of a random feasible SOCP:
//!
//! - [`SplitFractions`] and [`ProblemDimensions`] derive the matrix shape
//!   and the per-cone row budgets from the requested variable count.
//! - [`partition_soc_rows`] splits the residual rows into randomly sized
//!   second-order cones from an injected random source.
//! - [`ConeStructure`] assembles the result and audits its row coverage.
//! - [`SolveSettings`] is the parameter record handed to a downstream
//!   solve routine.
//!
//! The collaborators that consume these outputs (feasible data generation
//! and the numeric solve itself) are declared as traits in [`traits`] and
//! are not implemented here.

// internal module structure
mod dimensions;
mod errors;
mod partition;
mod report;
mod settings;
mod structure;

pub mod traits;

#[cfg(feature = "serde")]
mod json;

//export flattened
pub use dimensions::*;
pub use errors::*;
pub use partition::*;
pub use report::*;
pub use settings::*;
pub use structure::*;

#[cfg(feature = "serde")]
pub use json::*;
