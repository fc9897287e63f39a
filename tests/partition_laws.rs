use conegen::generator::*;
use rand::{rngs::StdRng, SeedableRng};

// laws the randomized partition must satisfy for any seed:
// every row lands in exactly one cone, and no cone exceeds the cap

#[test]
fn partition_covers_every_row() {
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);

        for (soc_rows, max_q) in [(180, 53), (1, 1), (500, 7), (1000, 999), (64, 64)] {
            let sizes = partition_soc_rows(soc_rows, max_q, &mut rng);
            assert_eq!(sizes.iter().sum::<usize>(), soc_rows);
        }
    }
}

#[test]
fn partition_respects_the_cap() {
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let sizes = partition_soc_rows(10_000, 37, &mut rng);

        // the trailing remainder cone is bounded by the cap as well
        assert!(sizes.iter().all(|&q| (1..=37).contains(&q)));
    }
}

#[test]
fn partition_is_deterministic_for_a_fixed_seed() {
    let mut rng_a = StdRng::seed_from_u64(42);
    let mut rng_b = StdRng::seed_from_u64(42);

    let a = partition_soc_rows(180, 53, &mut rng_a);
    let b = partition_soc_rows(180, 53, &mut rng_b);
    assert_eq!(a, b);

    // a different seed is allowed to differ; consuming further draws
    // from the same stream must not repeat the first partition
    let c = partition_soc_rows(180, 53, &mut rng_a);
    assert_eq!(c.iter().sum::<usize>(), 180);
}

#[test]
fn partition_of_zero_rows_is_empty() {
    let mut rng = StdRng::seed_from_u64(0);
    assert!(partition_soc_rows(0, 53, &mut rng).is_empty());
}

#[test]
fn partition_at_exactly_the_cap_is_one_cone() {
    // the loop draws only while remaining > max_q, so a budget of
    // exactly max_q becomes the single trailing cone
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(partition_soc_rows(53, 53, &mut rng), vec![53]);
}

#[test]
fn partition_just_above_the_cap_draws_once() {
    // one row over the cap forces exactly one draw plus the remainder
    let mut rng = StdRng::seed_from_u64(7);
    let sizes = partition_soc_rows(54, 53, &mut rng);

    assert_eq!(sizes.len(), 2);
    assert_eq!(sizes[0] + sizes[1], 54);
    assert!((1..=53).contains(&sizes[0]));
}

// the full pipeline: n = 100 with the default split and seed 42

#[test]
fn pipeline_reference_scenario() {
    let split = SplitFractions::new(0.1, 0.3).unwrap();
    let dims = ProblemDimensions::new(100, &split).unwrap();

    let mut rng = StdRng::seed_from_u64(42);
    let cones = ConeStructure::from_dimensions(&dims, &mut rng);

    assert_eq!(cones.zero_rows, 30);
    assert_eq!(cones.linear_rows, 90);
    assert_eq!(cones.soc_rows(), 180);
    assert!(cones.soc_sizes.iter().all(|&q| (1..=53).contains(&q)));

    // full coverage: 30 + 90 + sum(soc_sizes) == 300
    assert_eq!(cones.rows_covered(), 300);
    assert!(cones.check_coverage(dims.m).is_ok());
}

#[test]
fn pipeline_is_deterministic_for_a_fixed_seed() {
    let split = SplitFractions::new(0.1, 0.3).unwrap();

    let run = || {
        let dims = ProblemDimensions::new(100, &split).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        ConeStructure::from_dimensions(&dims, &mut rng)
    };

    assert_eq!(run(), run());
}

#[test]
fn pipeline_block_list_matches_the_structure() {
    let split = SplitFractions::new(0.1, 0.3).unwrap();
    let dims = ProblemDimensions::new(100, &split).unwrap();

    let mut rng = StdRng::seed_from_u64(42);
    let cones = ConeStructure::from_dimensions(&dims, &mut rng);
    let blocks = cones.blocks();

    assert_eq!(blocks[0], ConeBlock::ZeroCone(30));
    assert_eq!(blocks[1], ConeBlock::NonnegativeCone(90));
    assert_eq!(blocks.len(), 2 + cones.num_soc_cones());
    assert_eq!(blocks.iter().map(ConeBlock::nrows).sum::<usize>(), 300);
}

#[test]
fn pipeline_with_no_soc_residual() {
    // p_f + p_l = 1: everything is zero or nonnegative cone rows
    let split = SplitFractions::new(0.5, 0.5).unwrap();
    let dims = ProblemDimensions::new(100, &split).unwrap();

    let mut rng = StdRng::seed_from_u64(1);
    let cones = ConeStructure::from_dimensions(&dims, &mut rng);

    assert!(cones.soc_sizes.is_empty());
    assert!(cones.check_coverage(dims.m).is_ok());
}
