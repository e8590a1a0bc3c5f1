//! Random demo datasets, one family per measurement scale
//!
//! Generation is seeded so a demo can be reproduced with `--seed`.

use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::str::FromStr;

const FRUITS: &[&str] = &["Manzana", "Pera", "Banano", "Uva", "Naranja", "Sandía", "Mango"];
const COLORS: &[&str] = &["Rojo", "Azul", "Verde", "Amarillo", "Naranja", "Morado", "Rosa"];
const SATISFACTION: &[&str] = &[
    "Muy Insatisfecho",
    "Insatisfecho",
    "Neutral",
    "Satisfecho",
    "Muy Satisfecho",
];
const SIZES: &[&str] = &["XS", "S", "M", "L", "XL", "XXL"];
const QUALITY: &[&str] = &["Malo", "Regular", "Bueno"];

/// Which kind of data to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DemoKind {
    Nominal,
    Ordinal,
    Discrete,
    Continuous,
}

impl DemoKind {
    pub fn all() -> &'static [DemoKind] {
        &[
            DemoKind::Nominal,
            DemoKind::Ordinal,
            DemoKind::Discrete,
            DemoKind::Continuous,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            DemoKind::Nominal => "nominal",
            DemoKind::Ordinal => "ordinal",
            DemoKind::Discrete => "discrete",
            DemoKind::Continuous => "continuous",
        }
    }
}

impl FromStr for DemoKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DemoKind::all()
            .iter()
            .copied()
            .find(|k| k.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!(
                    "Unknown demo kind '{}'. Valid kinds: nominal, ordinal, discrete, continuous",
                    s
                )
            })
    }
}

impl std::fmt::Display for DemoKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A generated dataset
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemoDataset {
    pub kind: DemoKind,
    pub seed: u64,
    pub values: Vec<String>,
}

impl DemoDataset {
    /// Values joined the way a user would type them
    pub fn text(&self) -> String {
        self.values.join(", ")
    }
}

fn pick<R: Rng + ?Sized>(rng: &mut R, items: &[&str], count: usize) -> Vec<String> {
    (0..count)
        .filter_map(|_| items.choose(rng).map(|s| s.to_string()))
        .collect()
}

fn integers<R: Rng + ?Sized>(rng: &mut R, low: i64, high: i64, count: usize) -> Vec<String> {
    (0..count)
        .map(|_| rng.random_range(low..=high).to_string())
        .collect()
}

fn decimals<R: Rng + ?Sized>(
    rng: &mut R,
    low: f64,
    high: f64,
    places: usize,
    count: usize,
) -> Vec<String> {
    (0..count)
        .map(|_| format!("{:.*}", places, rng.random_range(low..high)))
        .collect()
}

/// Number of value families per kind, each drawn with equal odds
fn family_count(kind: DemoKind) -> usize {
    match kind {
        DemoKind::Nominal | DemoKind::Discrete => 2,
        DemoKind::Ordinal | DemoKind::Continuous => 3,
    }
}

fn generate_values<R: Rng + ?Sized>(kind: DemoKind, rng: &mut R) -> Vec<String> {
    let family = rng.random_range(0..family_count(kind));
    match (kind, family) {
        (DemoKind::Nominal, 0) => pick(rng, FRUITS, 30),
        (DemoKind::Nominal, _) => pick(rng, COLORS, 30),
        (DemoKind::Ordinal, 0) => pick(rng, SATISFACTION, 30),
        (DemoKind::Ordinal, 1) => pick(rng, SIZES, 35),
        (DemoKind::Ordinal, _) => pick(rng, QUALITY, 25),
        (DemoKind::Discrete, 0) => integers(rng, 0, 5, 40),
        (DemoKind::Discrete, _) => integers(rng, 17, 25, 50),
        (DemoKind::Continuous, 0) => decimals(rng, 1.50, 1.95, 2, 30),
        (DemoKind::Continuous, 1) => decimals(rng, 0.0, 5.0, 1, 35),
        (DemoKind::Continuous, _) => decimals(rng, 35.0, 40.0, 1, 25),
    }
}

/// Generate a dataset; a random kind is chosen when `kind` is `None`
pub fn generate(kind: Option<DemoKind>, seed: Option<u64>) -> DemoDataset {
    let seed = seed.unwrap_or_else(rand::random);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let kind = match kind {
        Some(kind) => kind,
        None => DemoKind::all()
            .choose(&mut rng)
            .copied()
            .unwrap_or(DemoKind::Nominal),
    };
    DemoDataset {
        kind,
        seed,
        values: generate_values(kind, &mut rng),
    }
}
