//! Seeded random instances.
//!
//! Weights are drawn uniformly from `[min_weight, max_weight]`. When an
//! arc count is given, surplus arcs are removed at random, but the arcs
//! of one random Hamiltonian cycle are never removed, so every generated
//! instance has at least one tour.

use rand::Rng;
use u_numflow::random::{create_rng, shuffle};

use crate::bnb::START;
use crate::error::TspError;
use crate::matrix::{Cost, CostMatrix, NO_EDGE};

/// Parameters for [`generate`].
///
/// # Examples
///
/// ```
/// use u_tsp::generate::{generate, InstanceConfig};
///
/// let config = InstanceConfig::default()
///     .with_cities(6)
///     .with_weights(1, 50)
///     .with_arcs(12)
///     .with_seed(7);
/// let matrix = generate(&config).unwrap();
/// assert_eq!(matrix.size(), 6);
/// ```
#[derive(Debug, Clone)]
pub struct InstanceConfig {
    /// Number of cities.
    pub cities: usize,

    /// Smallest edge weight.
    pub min_weight: Cost,

    /// Largest edge weight.
    pub max_weight: Cost,

    /// Number of directed arcs to keep, in `[cities, cities * (cities - 1)]`.
    /// `None` keeps all of them.
    pub arcs: Option<usize>,

    /// Random seed.
    pub seed: u64,
}

impl Default for InstanceConfig {
    fn default() -> Self {
        Self {
            cities: 5,
            min_weight: 1,
            max_weight: 10,
            arcs: None,
            seed: 1,
        }
    }
}

impl InstanceConfig {
    /// Sets the number of cities.
    pub fn with_cities(mut self, n: usize) -> Self {
        self.cities = n;
        self
    }

    /// Sets the inclusive weight range.
    pub fn with_weights(mut self, min: Cost, max: Cost) -> Self {
        self.min_weight = min;
        self.max_weight = max;
        self
    }

    /// Sets the number of directed arcs to keep.
    pub fn with_arcs(mut self, arcs: usize) -> Self {
        self.arcs = Some(arcs);
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), TspError> {
        if self.cities < 2 {
            return Err(TspError::InvalidConfig(format!(
                "at least 2 cities required, got {}",
                self.cities
            )));
        }
        if self.min_weight > self.max_weight {
            return Err(TspError::InvalidConfig(format!(
                "weight range {}..={} is empty",
                self.min_weight, self.max_weight
            )));
        }
        if self.max_weight >= NO_EDGE {
            return Err(TspError::InvalidConfig(
                "max_weight collides with the no-edge sentinel".into(),
            ));
        }
        if let Some(arcs) = self.arcs {
            let max_arcs = self
                .cities
                .checked_mul(self.cities - 1)
                .ok_or_else(|| {
                    TspError::InvalidConfig(format!("{} cities is too many", self.cities))
                })?;
            if arcs < self.cities || arcs > max_arcs {
                return Err(TspError::InvalidConfig(format!(
                    "arcs must be in {}..={max_arcs}, got {arcs}",
                    self.cities
                )));
            }
        }
        Ok(())
    }
}

/// Generates a random instance.
pub fn generate(config: &InstanceConfig) -> Result<CostMatrix, TspError> {
    config.validate()?;

    let mut rng = create_rng(config.seed);
    let size = config.cities;
    let mut matrix = CostMatrix::from_fn(size, |_, _| {
        rng.random_range(config.min_weight..=config.max_weight)
    })?;

    let Some(arcs) = config.arcs else {
        return Ok(matrix);
    };

    // backbone cycle: START -> order[0] -> ... -> order[n-2] -> START
    let mut order: Vec<usize> = (0..size).filter(|&c| c != START).collect();
    shuffle(&mut order, &mut rng);
    let mut backbone = vec![false; size * size];
    let mut prev = START;
    for &city in order.iter().chain(std::iter::once(&START)) {
        backbone[prev * size + city] = true;
        prev = city;
    }

    let mut removable: Vec<(usize, usize)> = (0..size)
        .flat_map(|i| (0..size).map(move |j| (i, j)))
        .filter(|&(i, j)| i != j && !backbone[i * size + j])
        .collect();
    shuffle(&mut removable, &mut rng);

    let surplus = size * (size - 1) - arcs;
    for &(i, j) in removable.iter().take(surplus) {
        matrix.set(i, j, NO_EDGE);
    }

    Ok(matrix)
}
