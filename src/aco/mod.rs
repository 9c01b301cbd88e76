//! Ant Colony Optimization (ACO).
//!
//! A population-based constructive metaheuristic. A colony of ants builds
//! one complete tour each per iteration, choosing every step by
//! roulette-wheel selection over `pheromone^alpha * (1/distance)^beta`.
//! After all ants finish, the shared pheromone matrix evaporates and each
//! ant deposits pheromone on the edges of its tour in inverse proportion
//! to the tour's length.
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//!   Colony of Cooperating Agents"
//! - Dorigo & Gambardella (1997), "Ant Colony System: A Cooperative Learning
//!   Approach to the Traveling Salesman Problem"

mod ant;
mod config;
mod matrix;
mod runner;
mod selection;

pub use ant::Ant;
pub use config::AcoConfig;
pub use matrix::{DistanceMatrix, PheromoneMatrix};
pub use runner::{AcoResult, AcoRunner};
pub use selection::select_next_city;
