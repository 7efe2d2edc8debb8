use blocklist_test::{Blocks, Driver, init_tracing};

//  Number of operations per seed.
const STEPS: usize = 2_000;

#[test]
fn random_distinct_blocks() {
    init_tracing();

    let pool = Blocks::distinct(8);

    for seed in 0..16 {
        let mut driver = Driver::new(seed, &pool);
        driver.run(STEPS);
    }
}

#[test]
fn random_identical_blocks() {
    init_tracing();

    //  Identical fields exercise identity, rather than equality, comparisons.
    let pool = Blocks::identical(8);

    for seed in 0..16 {
        let mut driver = Driver::new(seed, &pool);
        driver.run(STEPS);
    }
}

#[test]
fn random_single_block() {
    init_tracing();

    //  A single block, inserted repeatedly, exercises first-occurrence semantics.
    let pool = Blocks::identical(1);

    for seed in 0..4 {
        let mut driver = Driver::new(seed, &pool);
        driver.run(STEPS);
    }
}
