//!  __conegen__ generates the structure of random second-order cone programs
//! (SOCPs) that are primal and dual feasible by construction, for use as
//! solver test instances.  Problems take the standard conic form
//!
//! ```text
//! minimize    c'x
//! subject to  Ax <=_K b
//! ```
//!
//! where `K` is a product of a zero cone, a nonnegative cone and a number of
//! second-order cones.  Given a variable count `n`, the generated matrix `A`
//! is `3n` by `n` with about `sqrt(n)` nonzeros per column, and the `3n`
//! constraint rows are split among the cone types according to a pair of
//! user-chosen fractions.  The second-order cone sizes are drawn at random
//! from a seeded generator, so any reported structure can be reproduced
//! exactly from its seed.
//!
//! The crate produces dimensions, cone structure and a downstream solver
//! parameter record.  Populating the structure with concrete feasible
//! problem data, and solving it, are left to collaborators implementing the
//! traits in [`generator::traits`].

pub mod algebra;
pub mod generator;
