//! Square matrices over city pairs.
//!
//! Both tables are stored flat in row-major order and indexed by city
//! index pairs. The distance matrix is built once per run and never
//! mutated; the pheromone matrix is rewritten once per iteration by the
//! evaporation/deposit update.

use crate::geometry::City;

/// Precomputed all-pairs Euclidean distance table.
///
/// Symmetric with a zero diagonal.
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    num_cities: usize,
    values: Vec<f64>,
}

impl DistanceMatrix {
    /// Builds the distance table from a city list. O(n²) time and space.
    pub fn from_cities(cities: &[City]) -> Self {
        let n = cities.len();
        let mut values = vec![0.0; n * n];
        for i in 0..n {
            for j in 0..n {
                values[i * n + j] = cities[i].distance_to(&cities[j]);
            }
        }
        Self {
            num_cities: n,
            values,
        }
    }

    /// Number of cities the table covers.
    pub fn num_cities(&self) -> usize {
        self.num_cities
    }

    /// Distance between cities `i` and `j`.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.num_cities + j]
    }
}

/// Shared edge-desirability table.
///
/// Same dimensions as the distance matrix, initialized uniformly, and
/// updated once per iteration: evaporation across every entry first, then
/// the ants' symmetric deposits.
#[derive(Debug, Clone)]
pub struct PheromoneMatrix {
    num_cities: usize,
    values: Vec<f64>,
}

impl PheromoneMatrix {
    /// Creates a table with every entry set to `initial`.
    pub fn new(num_cities: usize, initial: f64) -> Self {
        Self {
            num_cities,
            values: vec![initial; num_cities * num_cities],
        }
    }

    /// Number of cities the table covers.
    pub fn num_cities(&self) -> usize {
        self.num_cities
    }

    /// Pheromone level on the edge between cities `i` and `j`.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.num_cities + j]
    }

    /// Scales every entry by `1 - rate`.
    pub fn evaporate(&mut self, rate: f64) {
        for value in &mut self.values {
            *value *= 1.0 - rate;
        }
    }

    /// Adds `amount` to the edge in both directions.
    pub fn deposit(&mut self, a: usize, b: usize, amount: f64) {
        self.values[a * self.num_cities + b] += amount;
        self.values[b * self.num_cities + a] += amount;
    }
}
