//! Command line front end for the random SOCP structure generator.
//!
//! ```bash
//! random_socp 1000             # default fractions, wall clock seed
//! random_socp 1000 0.1 0.3     # explicit fractions
//! random_socp 1000 0.1 0.3 --seed 42
//! ```

use anyhow::Result;
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use std::io::stdout;

use conegen::generator::{
    wall_clock_seed, write_report, write_settings_summary, ConeStructure, ProblemDimensions,
    SolveSettings, SplitFractions,
};

#[derive(Parser, Debug)]
#[command(name = "random_socp")]
#[command(about = "Generate the cone structure of a random primal-dual feasible SOCP")]
#[command(after_long_help = "\
Creates an SOCP with n variables and 3n constraint rows, where a p_f \
fraction of rows correspond to equality constraints, a p_l fraction of \
rows correspond to LP constraints, and the remaining rows are involved \
in second-order cone constraints of randomly drawn sizes.

Note that p_f + p_l must be at most 1, and that p_f should stay below \
1/3, since that already corresponds to as many equality constraints as \
variables.")]
struct Args {
    /// number of variables (columns of A); rows are fixed at 3n
    n: usize,

    /// fraction of rows used as equality constraints
    #[arg(default_value_t = 0.1)]
    p_f: f64,

    /// fraction of rows used as LP (nonnegativity) constraints
    #[arg(default_value_t = 0.3)]
    p_l: f64,

    /// random seed; defaults to the wall clock
    #[arg(long)]
    seed: Option<u64>,

    /// write the generated instance description to a JSON file
    #[cfg(feature = "serde")]
    #[arg(long, value_name = "PATH")]
    json_out: Option<std::path::PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(wall_clock_seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let split = SplitFractions::new(args.p_f, args.p_l)?;
    let dims = ProblemDimensions::new(args.n, &split)?;
    let cones = ConeStructure::from_dimensions(&dims, &mut rng);

    let settings = SolveSettings::<f64>::default();

    let out = &mut stdout();
    write_report::<f64>(out, seed, &dims, &cones)?;
    write_settings_summary(out, &settings)?;

    #[cfg(feature = "serde")]
    if let Some(path) = args.json_out.as_ref() {
        use conegen::generator::InstanceDescription;

        let description = InstanceDescription {
            seed,
            dimensions: dims,
            cones,
            settings,
        };
        let mut file = std::fs::File::create(path)?;
        description.write_to_file(&mut file)?;
    }

    Ok(())
}
