use super::{partition_soc_rows, CoverageMismatch, ProblemDimensions};
use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single cone block declaration, in the order a conic solver API
/// expects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ConeBlock {
    /// The zero cone (equality constraint rows) of dimension `usize`
    ZeroCone(usize),
    /// The nonnegative orthant of dimension `usize`
    NonnegativeCone(usize),
    /// The second-order cone of dimension `usize`
    SecondOrderCone(usize),
}

impl ConeBlock {
    /// number of constraint rows this block covers
    pub fn nrows(&self) -> usize {
        match self {
            ConeBlock::ZeroCone(dim) => *dim,
            ConeBlock::NonnegativeCone(dim) => *dim,
            ConeBlock::SecondOrderCone(dim) => *dim,
        }
    }
}

/// The cone partition of the constraint rows of a generated problem.
///
/// Rows are assigned first to the zero cone, then to the nonnegative
/// cone, with the remainder split among second-order cones of randomly
/// drawn sizes.  The structure is assembled once and then handed
/// unchanged to the downstream instance generator.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConeStructure {
    /// rows pinned to equality constraints
    pub zero_rows: usize,
    /// rows pinned to nonnegativity constraints
    pub linear_rows: usize,
    /// second-order cone sizes, in generation order
    pub soc_sizes: Vec<usize>,
}

impl ConeStructure {
    /// Assemble a structure from explicit per-cone row counts.
    pub fn new(zero_rows: usize, linear_rows: usize, soc_sizes: Vec<usize>) -> Self {
        Self {
            zero_rows,
            linear_rows,
            soc_sizes,
        }
    }

    /// Assemble a structure for the given dimensions, drawing the
    /// second-order cone sizes from `rng`.
    pub fn from_dimensions<R: Rng>(dims: &ProblemDimensions, rng: &mut R) -> Self {
        let soc_sizes = partition_soc_rows(dims.soc_rows, dims.max_q, rng);
        Self::new(dims.zero_rows, dims.linear_rows, soc_sizes)
    }

    /// rows covered by the second-order cones
    pub fn soc_rows(&self) -> usize {
        self.soc_sizes.iter().sum()
    }

    /// number of second-order cones
    pub fn num_soc_cones(&self) -> usize {
        self.soc_sizes.len()
    }

    /// rows covered across all cone types
    pub fn rows_covered(&self) -> usize {
        self.zero_rows + self.linear_rows + self.soc_rows()
    }

    /// Ordered cone block declarations for a solver API.  Empty zero or
    /// nonnegative blocks are omitted.
    pub fn blocks(&self) -> Vec<ConeBlock> {
        let mut blocks = Vec::with_capacity(2 + self.soc_sizes.len());

        if self.zero_rows > 0 {
            blocks.push(ConeBlock::ZeroCone(self.zero_rows));
        }
        if self.linear_rows > 0 {
            blocks.push(ConeBlock::NonnegativeCone(self.linear_rows));
        }
        for &dim in self.soc_sizes.iter() {
            blocks.push(ConeBlock::SecondOrderCone(dim));
        }
        blocks
    }

    /// Audit that the structure covers every one of `m` constraint rows
    /// exactly.  A mismatch signals a boundary-condition bug in the
    /// partition and is surfaced to the caller rather than swallowed.
    pub fn check_coverage(&self, m: usize) -> Result<(), CoverageMismatch> {
        let covered = self.rows_covered();
        if covered == m {
            Ok(())
        } else {
            Err(CoverageMismatch { covered, total: m })
        }
    }
}

// ---------------------------------------------------------
// unit tests
// ---------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_ordering() {
        let cones = ConeStructure::new(4, 6, vec![3, 5]);
        assert_eq!(
            cones.blocks(),
            vec![
                ConeBlock::ZeroCone(4),
                ConeBlock::NonnegativeCone(6),
                ConeBlock::SecondOrderCone(3),
                ConeBlock::SecondOrderCone(5),
            ]
        );
        assert_eq!(cones.rows_covered(), 18);
        assert_eq!(cones.num_soc_cones(), 2);
    }

    #[test]
    fn test_blocks_skip_empty_leading_cones() {
        let cones = ConeStructure::new(0, 0, vec![2]);
        assert_eq!(cones.blocks(), vec![ConeBlock::SecondOrderCone(2)]);
    }

    #[test]
    fn test_coverage_audit() {
        let cones = ConeStructure::new(1, 2, vec![3]);
        assert!(cones.check_coverage(6).is_ok());

        let err = cones.check_coverage(7).unwrap_err();
        assert_eq!(err, CoverageMismatch {
            covered: 6,
            total: 7
        });
    }
}
