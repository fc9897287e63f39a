use super::{ConeStructure, ProblemDimensions, SolveSettings};
use crate::algebra::FloatT;
use itertools::Itertools;
use std::io::Write;

/// Storage estimates, in bytes, for the arrays of a compressed sparse
/// column matrix with the generated dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StorageEstimate {
    /// bytes held by the nonzero values
    pub nzval_bytes: usize,
    /// bytes held by the row indices
    pub rowval_bytes: usize,
    /// bytes held by the column pointers
    pub colptr_bytes: usize,
}

impl StorageEstimate {
    /// Estimate storage for scalar type `T` and native `usize` indices.
    pub fn for_dimensions<T: FloatT>(dims: &ProblemDimensions) -> Self {
        let fbytes = core::mem::size_of::<T>();
        let ibytes = core::mem::size_of::<usize>();

        Self {
            nzval_bytes: dims.nnz * fbytes,
            rowval_bytes: dims.nnz * ibytes,
            colptr_bytes: (dims.n + 1) * ibytes,
        }
    }
}

fn gigabytes(bytes: usize) -> f64 {
    bytes as f64 / f64::powi(2.0, 30)
}

fn _bool_on_off(v: bool) -> &'static str {
    match v {
        true => "on",
        false => "off",
    }
}

// cone size listings are truncated beyond this many entries
const MAX_SIZES_LISTED: usize = 64;

/// Write the human-readable summary of a generated structure: the seed,
/// the matrix shape and storage estimates, and the cone partition with
/// its row coverage audit.
pub fn write_report<T: FloatT>(
    out: &mut dyn Write,
    seed: u64,
    dims: &ProblemDimensions,
    cones: &ConeStructure,
) -> std::io::Result<()> {
    writeln!(out, "seed = {seed}")?;

    let storage = StorageEstimate::for_dimensions::<T>(dims);

    writeln!(out)?;
    writeln!(
        out,
        "A is {} by {}, with {} nonzeros per column.",
        dims.m, dims.n, dims.col_nnz
    )?;
    writeln!(
        out,
        "A has {} nonzeros ({:.4}% dense).",
        dims.nnz,
        100.0 * dims.density()
    )?;
    writeln!(
        out,
        "Nonzeros of A take {:.6} GB of storage.",
        gigabytes(storage.nzval_bytes)
    )?;
    writeln!(
        out,
        "Row idxs of A take {:.6} GB of storage.",
        gigabytes(storage.rowval_bytes)
    )?;
    writeln!(
        out,
        "Col ptrs of A take {:.6} GB of storage.",
        gigabytes(storage.colptr_bytes)
    )?;

    writeln!(out)?;
    writeln!(out, "cones:")?;
    writeln!(out, "  zero (equality) rows = {}", cones.zero_rows)?;
    writeln!(out, "  nonnegative rows     = {}", cones.linear_rows)?;
    writeln!(
        out,
        "  second-order cones   = {}, covering {} rows",
        cones.num_soc_cones(),
        cones.soc_rows()
    )?;
    _write_soc_sizes(out, &cones.soc_sizes)?;

    match cones.check_coverage(dims.m) {
        Ok(()) => writeln!(
            out,
            "  rows covered         = {} out of {}",
            cones.rows_covered(),
            dims.m
        )?,
        Err(gap) => writeln!(out, "  WARNING: {gap}")?,
    }

    writeln!(out)?;
    out.flush()?;

    std::io::Result::Ok(())
}

/// Write the solver parameter record in summary form.
pub fn write_settings_summary<T: FloatT>(
    out: &mut dyn Write,
    settings: &SolveSettings<T>,
) -> std::io::Result<()> {
    let set = settings;

    writeln!(out, "settings:")?;
    writeln!(
        out,
        "  max iters = {}, eps = {:.1e}, alpha = {:.2}",
        set.max_iters, set.eps, set.alpha
    )?;
    writeln!(
        out,
        "  rho_x = {:.1e}, scale = {:.1}, cg rate = {:.1}",
        set.rho_x, set.scale, set.cg_rate
    )?;
    writeln!(
        out,
        "  normalize = {}, warm start = {}, verbose = {}",
        _bool_on_off(set.normalize),
        _bool_on_off(set.warm_start),
        _bool_on_off(set.verbose)
    )?;
    writeln!(out)?;

    std::io::Result::Ok(())
}

fn _write_soc_sizes(out: &mut dyn Write, sizes: &[usize]) -> std::io::Result<()> {
    if sizes.is_empty() {
        return writeln!(out, "  sizes = []");
    }

    if sizes.len() <= MAX_SIZES_LISTED {
        writeln!(out, "  sizes = [{}]", sizes.iter().format(", "))
    } else {
        // print the leading entries and the final one
        writeln!(
            out,
            "  sizes = [{}, ..., {}]",
            sizes[..MAX_SIZES_LISTED - 1].iter().format(", "),
            sizes[sizes.len() - 1]
        )
    }
}

// ---------------------------------------------------------
// unit tests
// ---------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::SplitFractions;

    fn report_for(cones: &ConeStructure) -> String {
        let split = SplitFractions::<f64>::default();
        let dims = ProblemDimensions::new(100, &split).unwrap();
        let mut buffer = Vec::new();
        write_report::<f64>(&mut buffer, 42, &dims, cones).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_report_contents() {
        let cones = ConeStructure::new(30, 90, vec![100, 80]);
        let report = report_for(&cones);

        assert!(report.contains("seed = 42"));
        assert!(report.contains("A is 300 by 100, with 10 nonzeros per column."));
        assert!(report.contains("A has 1000 nonzeros"));
        assert!(report.contains("sizes = [100, 80]"));
        assert!(report.contains("rows covered         = 300 out of 300"));
        assert!(!report.contains("WARNING"));
    }

    #[test]
    fn test_report_flags_coverage_gap() {
        let cones = ConeStructure::new(30, 90, vec![100]);
        let report = report_for(&cones);

        assert!(report.contains("WARNING: cone structure covers 220 rows out of 300"));
    }

    #[test]
    fn test_settings_summary() {
        let settings = SolveSettings::<f64>::default();
        let mut buffer = Vec::new();
        write_settings_summary(&mut buffer, &settings).unwrap();
        let summary = String::from_utf8(buffer).unwrap();

        assert!(summary.contains("max iters = 2500"));
        assert!(summary.contains("normalize = on, warm start = off, verbose = on"));
    }

    #[test]
    fn test_storage_estimate() {
        let dims = ProblemDimensions::new(100, &SplitFractions::<f64>::default()).unwrap();
        let est = StorageEstimate::for_dimensions::<f64>(&dims);
        assert_eq!(est.nzval_bytes, 1000 * 8);
        assert_eq!(est.rowval_bytes, 1000 * core::mem::size_of::<usize>());
        assert_eq!(est.colptr_bytes, 101 * core::mem::size_of::<usize>());
    }
}
