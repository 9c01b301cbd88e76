//! Ant Colony Optimization for the symmetric Traveling Salesman Problem.
//!
//! Approximates a low-cost closed tour over a set of 2-D cities using a
//! colony of simulated ants. Each iteration, every ant builds a complete
//! tour by repeatedly choosing its next city with probability proportional
//! to `pheromone^alpha * (1/distance)^beta`; afterwards the shared pheromone
//! matrix evaporates and every ant reinforces the edges of its tour in
//! inverse proportion to the tour's length, biasing later iterations toward
//! shorter cycles.
//!
//! - **[`geometry`]**: 2-D cities and Euclidean distance.
//! - **[`aco`]**: distance and pheromone matrices, per-ant tour
//!   construction, roulette-wheel city selection, and the iteration loop.
//!
//! The solver is a fixed-budget stochastic heuristic: it runs exactly
//! `max_iterations` iterations, single-threaded, and is fully reproducible
//! given a seed.
//!
//! # Example
//!
//! ```
//! use ant_colony_tsp::aco::{AcoConfig, AcoRunner};
//! use ant_colony_tsp::geometry::City;
//!
//! let cities = vec![
//!     City::new(0.0, 0.0),
//!     City::new(10.0, 0.0),
//!     City::new(10.0, 10.0),
//!     City::new(0.0, 10.0),
//! ];
//!
//! let config = AcoConfig::default()
//!     .with_num_ants(10)
//!     .with_max_iterations(50)
//!     .with_seed(42);
//!
//! let result = AcoRunner::run(&cities, &config);
//!
//! assert_eq!(result.best_tour.len(), cities.len());
//! println!(
//!     "best tour {:?} with length {}",
//!     result.closed_tour(),
//!     result.best_length
//! );
//! ```

pub mod aco;
pub mod geometry;
