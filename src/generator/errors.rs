use thiserror::Error;

/// Error type returned by problem dimension configuration.
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// Split fractions outside `[0,1)`, or summing to more than one
    #[error("bad row split: p_f = {zero}, p_l = {linear} (each must lie in [0,1) with p_f + p_l <= 1)")]
    BadSplitFractions {
        /// requested zero cone fraction
        zero: f64,
        /// requested nonnegative cone fraction
        linear: f64,
    },
    /// Problem too small to derive a meaningful cone size cap
    #[error("problem size n = {0} is too small to derive a cone size cap")]
    ProblemTooSmall(usize),
}

/// Discrepancy between the rows assigned to cones and the constraint
/// row count of the problem.
///
/// This is a boundary-condition audit failure rather than a hard fault:
/// the report prints it as a warning, and callers decide whether to
/// discard the structure.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("cone structure covers {covered} rows out of {total}")]
pub struct CoverageMismatch {
    /// rows assigned across all cones
    pub covered: usize,
    /// constraint rows in the problem
    pub total: usize,
}

/// Error type returned by settings validation
#[derive(Error, Debug)]
pub enum SettingsError {
    /// A field holds a value outside its admissible range
    #[error("bad value for field {0}")]
    BadFieldValue(&'static str),
}
