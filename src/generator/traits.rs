//! Boundary traits for the collaborators that consume a generated
//! structure.
//!
//! The generator's obligation ends at a valid, fully covering
//! [`ConeStructure`](super::ConeStructure) with matching
//! [`ProblemDimensions`](super::ProblemDimensions).  Producing concrete
//! feasible problem data for that structure, and solving it, are
//! performed by external components implementing the traits below.

use super::{ConeStructure, ProblemDimensions, SolveSettings};
use crate::algebra::FloatT;
use rand::Rng;

/// A source of complete problem instances for a generated structure.
///
/// Implementations construct a sparse constraint matrix with
/// `dims.col_nnz` nonzeros per column together with a cost and
/// right-hand-side pair, arranged so that the problem is primal and dual
/// feasible with a known optimal solution pair.
pub trait InstanceGenerator<T: FloatT> {
    /// Concrete problem data, including the known optimal primal/dual pair
    type Instance;
    /// Failure type for instance construction
    type Error;

    /// Build an instance whose rows follow `cones` and whose matrix
    /// matches `dims`.  Randomness is drawn from the same caller-owned
    /// source used for the cone partition.
    fn generate<R: Rng>(
        &self,
        dims: &ProblemDimensions,
        cones: &ConeStructure,
        rng: &mut R,
    ) -> Result<Self::Instance, Self::Error>;
}

/// A numeric solve routine for generated instances.
pub trait SolveEngine<T: FloatT> {
    /// Problem data type accepted by the engine
    type Instance;
    /// Result summary returned after a solve
    type Summary;

    /// Solve `instance` over the cones in `cones`, using the parameters
    /// in `settings`.
    fn solve(
        &mut self,
        instance: &Self::Instance,
        cones: &ConeStructure,
        settings: &SolveSettings<T>,
    ) -> Self::Summary;
}
