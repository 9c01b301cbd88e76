//! ACO execution loop.
//!
//! # Algorithm
//!
//! 1. Build the distance matrix and initialize the pheromone matrix
//! 2. Each iteration:
//!    a. Every ant resets, starts at a uniformly random city, and extends
//!    its tour via roulette-wheel selection until all cities are visited,
//!    then closes the cycle
//!    b. The global best tour is updated on strict improvement
//!    c. The pheromone matrix evaporates, then every ant deposits
//!    `q / tour_length` on each edge of its tour
//! 3. Terminate after exactly `max_iterations` iterations
//!
//! # Reference
//!
//! Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a Colony
//! of Cooperating Agents", *IEEE Transactions on Systems, Man, and
//! Cybernetics* 26(1), 29-41.

use super::ant::Ant;
use super::config::AcoConfig;
use super::matrix::{DistanceMatrix, PheromoneMatrix};
use super::selection::select_next_city;
use crate::geometry::City;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Result of an ACO run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoResult {
    /// Best tour found, as a permutation of city indices.
    pub best_tour: Vec<usize>,

    /// Full cycle length of the best tour.
    pub best_length: f64,

    /// Total iterations executed.
    pub iterations: usize,

    /// Iteration at which the best tour was found.
    pub best_iteration: usize,

    /// Best length at the end of each iteration.
    pub cost_history: Vec<f64>,
}

impl AcoResult {
    /// The best tour with the starting city repeated at the end, denoting
    /// closure of the cycle.
    pub fn closed_tour(&self) -> Vec<usize> {
        let mut closed = self.best_tour.clone();
        if let Some(&first) = self.best_tour.first() {
            closed.push(first);
        }
        closed
    }
}

/// Executes the ACO colony loop.
///
/// # Usage
///
/// ```
/// use ant_colony_tsp::aco::{AcoConfig, AcoRunner};
/// use ant_colony_tsp::geometry::City;
///
/// let cities = vec![
///     City::new(0.0, 0.0),
///     City::new(4.0, 0.0),
///     City::new(4.0, 3.0),
/// ];
/// let config = AcoConfig::default().with_max_iterations(20).with_seed(42);
/// let result = AcoRunner::run(&cities, &config);
/// assert_eq!(result.best_tour.len(), 3);
/// ```
pub struct AcoRunner;

impl AcoRunner {
    /// Runs the optimization over the given cities.
    ///
    /// Instances with fewer than 2 cities have a trivial optimal tour and
    /// return immediately with `best_length` 0 and no iterations executed.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call [`AcoConfig::validate`]
    /// first to get a descriptive error).
    pub fn run(cities: &[City], config: &AcoConfig) -> AcoResult {
        config.validate().expect("invalid AcoConfig");

        let num_cities = cities.len();
        if num_cities < 2 {
            return AcoResult {
                best_tour: (0..num_cities).collect(),
                best_length: 0.0,
                iterations: 0,
                best_iteration: 0,
                cost_history: Vec::new(),
            };
        }

        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::seed_from_u64(rand::random()),
        };

        let distances = DistanceMatrix::from_cities(cities);
        let mut pheromones = PheromoneMatrix::new(num_cities, config.initial_pheromone);
        let mut ants: Vec<Ant> = (0..config.num_ants).map(|_| Ant::new(num_cities)).collect();

        let mut best_tour: Vec<usize> = Vec::new();
        let mut best_length = f64::INFINITY;
        let mut best_iteration = 0;
        let mut cost_history = Vec::with_capacity(config.max_iterations);

        for iteration in 0..config.max_iterations {
            // Ants are evaluated in slot order so best-tour ties resolve
            // identically across runs with the same seed.
            for ant in &mut ants {
                ant.reset();
                let start = rng.random_range(0..num_cities);
                ant.visit(start, &distances);

                while ant.tour().len() < num_cities {
                    let current = match ant.current_city() {
                        Some(city) => city,
                        None => break,
                    };
                    match select_next_city(
                        current,
                        ant.visited(),
                        &distances,
                        &pheromones,
                        config.alpha,
                        config.beta,
                        &mut rng,
                    ) {
                        Some(next) => ant.visit(next, &distances),
                        None => break,
                    }
                }
                ant.complete_tour(&distances);

                if ant.tour_length() < best_length {
                    best_length = ant.tour_length();
                    best_tour = ant.tour().to_vec();
                    best_iteration = iteration;
                }
            }

            update_pheromones(&mut pheromones, &ants, config);
            cost_history.push(best_length);
        }

        AcoResult {
            best_tour,
            best_length,
            iterations: config.max_iterations,
            best_iteration,
            cost_history,
        }
    }
}

/// Evaporation across every entry, then symmetric deposits from every
/// completed tour. Runs to completion between iterations; construction
/// never observes a partially updated matrix.
fn update_pheromones(pheromones: &mut PheromoneMatrix, ants: &[Ant], config: &AcoConfig) {
    pheromones.evaporate(config.evaporation_rate);

    for ant in ants {
        // A zero-length tour (degenerate instance) would deposit infinity.
        if ant.tour_length() <= 0.0 {
            continue;
        }
        let contribution = config.q / ant.tour_length();
        let tour = ant.tour();

        for edge in tour.windows(2) {
            pheromones.deposit(edge[0], edge[1], contribution);
        }
        if tour.len() > 1 {
            pheromones.deposit(tour[tour.len() - 1], tour[0], contribution);
        }
    }
}
