use std::{
    collections::HashMap,
    env,
    error::Error,
    sync::{OnceLock, RwLock},
};

use rand::{random, rngs::StdRng, Rng, SeedableRng};
use rust_decimal::Decimal;

pub const DEFAULT_TEST_SEED_ENV: &str = "DEFAULT_TEST_SEED";

/// Decimal places of the generated quantities.
pub const QUANTITY_SCALE: u32 = 3;

static SEEDS: OnceLock<RwLock<HashMap<&'static str, u64>>> = OnceLock::new();

fn seeds_lock() -> &'static RwLock<HashMap<&'static str, u64>> {
    SEEDS.get_or_init(|| RwLock::new(HashMap::new()))
}

fn seed_for(key: &'static str) -> Result<u64, Box<dyn Error>> {
    let mut seeds = seeds_lock().write()?;
    Ok(*seeds.entry(key).or_insert_with(|| {
        let seed = env::var(key)
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or_else(random);
        println!("Using seed {} for {}", seed, key);
        seed
    }))
}

/// Rng seeded from `DEFAULT_TEST_SEED`, or from a random seed printed for replay.
pub fn get_seeded_rng() -> Result<StdRng, Box<dyn Error>> {
    get_seeded_rng_from_scope(DEFAULT_TEST_SEED_ENV)
}

pub fn get_seeded_rng_from_scope(key: &'static str) -> Result<StdRng, Box<dyn Error>> {
    Ok(StdRng::seed_from_u64(seed_for(key)?))
}

/// A non-negative quantity in `[0, max_units]` with [`QUANTITY_SCALE`] decimal places.
pub fn random_quantity(rng: &mut impl Rng, max_units: u32) -> Decimal {
    let factor = 10i64.pow(QUANTITY_SCALE);
    let mantissa = rng.gen_range(0..=i64::from(max_units) * factor);
    Decimal::new(mantissa, QUANTITY_SCALE)
}

pub fn random_quantities(rng: &mut impl Rng, count: usize, max_units: u32) -> Vec<(Decimal, Decimal)> {
    (0..count)
        .map(|_| (random_quantity(rng, max_units), random_quantity(rng, max_units)))
        .collect()
}
