use super::GeneratorError;
use crate::algebra::*;
use num_traits::ToPrimitive;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fractions of the constraint rows assigned to the zero and
/// nonnegative cones.
///
/// Each fraction must lie in `[0,1)` and the pair must sum to at most
/// one.  Whatever is left over is partitioned among second-order cones.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SplitFractions<T = f64> {
    /// fraction of rows used as equality (zero cone) constraints
    pub zero: T,
    /// fraction of rows used as nonnegativity (LP cone) constraints
    pub linear: T,
}

impl<T> SplitFractions<T>
where
    T: FloatT,
{
    /// Create a validated fraction pair.
    pub fn new(zero: T, linear: T) -> Result<Self, GeneratorError> {
        let split = Self { zero, linear };
        split.validate()?;
        Ok(split)
    }

    /// Check the fraction pair against its admissible range.  Values are
    /// rejected rather than clamped.
    pub fn validate(&self) -> Result<(), GeneratorError> {
        let unit = |v: T| v >= T::zero() && v < T::one();

        if unit(self.zero) && unit(self.linear) && self.zero + self.linear <= T::one() {
            Ok(())
        } else {
            Err(GeneratorError::BadSplitFractions {
                zero: self.zero.to_f64().unwrap_or(f64::NAN),
                linear: self.linear.to_f64().unwrap_or(f64::NAN),
            })
        }
    }
}

impl<T> Default for SplitFractions<T>
where
    T: FloatT,
{
    fn default() -> Self {
        Self {
            zero: (0.1).as_T(),
            linear: (0.3).as_T(),
        }
    }
}

/// Matrix dimensions and per-cone row budgets for a generated problem.
///
/// All fields are derived deterministically from the variable count and
/// the split fractions; randomness enters only later, when the
/// second-order cone rows are partitioned.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProblemDimensions {
    /// number of primal variables (columns of A)
    pub n: usize,
    /// number of constraint rows, fixed at 3n
    pub m: usize,
    /// nonzeros per column of A
    pub col_nnz: usize,
    /// total nonzeros in A
    pub nnz: usize,
    /// largest admissible single second-order cone
    pub max_q: usize,
    /// rows assigned to the zero cone
    pub zero_rows: usize,
    /// rows assigned to the nonnegative cone
    pub linear_rows: usize,
    /// rows left over for the second-order cones
    pub soc_rows: usize,
}

impl ProblemDimensions {
    /// Derive the dimensions of a random problem with `n` variables.
    ///
    /// The constraint matrix is `3n` by `n` with `ceil(sqrt(n))` nonzeros
    /// per column, so density shrinks as problems grow.  The cone size cap
    /// is `ceil(m / ln(m))`, which keeps the partition away from both the
    /// one-giant-cone and the all-singletons extremes.
    pub fn new<T>(n: usize, split: &SplitFractions<T>) -> Result<Self, GeneratorError>
    where
        T: FloatT,
    {
        split.validate()?;

        // n = 0 and n = 1 would produce a degenerate cap
        if n < 2 {
            return Err(GeneratorError::ProblemTooSmall(n));
        }

        let m = 3 * n;
        let col_nnz = (n as f64).sqrt().ceil() as usize;
        let nnz = n * col_nnz;
        let max_q = (m as f64 / (m as f64).ln()).ceil() as usize;

        let zero_rows = floor_frac(m, split.zero);
        let linear_rows = floor_frac(m, split.linear);
        let soc_rows = m - zero_rows - linear_rows;

        Ok(Self {
            n,
            m,
            col_nnz,
            nnz,
            max_q,
            zero_rows,
            linear_rows,
            soc_rows,
        })
    }

    /// Fraction of entries of A that are structurally nonzero.
    pub fn density(&self) -> f64 {
        self.col_nnz as f64 / self.m as f64
    }
}

// floor(rows * frac) for frac in [0,1].  The result lies in [0, rows],
// so the cast back to usize cannot fail.
fn floor_frac<T: FloatT>(rows: usize, frac: T) -> usize {
    let rows_t: T = rows.as_T();
    (rows_t * frac).floor().to_usize().unwrap()
}

// ---------------------------------------------------------
// unit tests
// ---------------------------------------------------------

#[test]
fn test_floor_frac() {
    assert_eq!(floor_frac(300, 0.1), 30);
    assert_eq!(floor_frac(300, 0.3), 90);
    assert_eq!(floor_frac(10, 0.0), 0);
    assert_eq!(floor_frac(10, 0.99), 9);
    assert_eq!(floor_frac(7, 0.5f32), 3);
}
