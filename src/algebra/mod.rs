//! Scalar traits for the floating point values used by the generator.

mod floats;
pub use floats::*;
