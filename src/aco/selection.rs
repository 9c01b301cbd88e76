//! Probabilistic next-city selection.
//!
//! Each construction step scores every unvisited city by combining the
//! pheromone level on the connecting edge with the inverse of its distance,
//! then samples the next city by roulette-wheel (score-proportionate)
//! selection.

use super::matrix::{DistanceMatrix, PheromoneMatrix};
use rand::Rng;

/// Desirability assigned to a zero-distance (coincident) city.
///
/// `1/distance` is undefined there; coincident cities are instead treated
/// as maximally attractive with a large finite score, so no infinity or
/// NaN reaches the wheel.
const ZERO_DISTANCE_SCORE: f64 = 1e12;

/// Chooses the next city for an ant standing at `current`.
///
/// Every unvisited city `i` is scored
/// `pheromone[current][i]^alpha * (1/distance[current][i])^beta`. A uniform
/// value `r` in `[0, total)` is drawn and the unvisited cities are walked in
/// index order, accumulating scores; the first city whose cumulative score
/// reaches `r` is selected.
///
/// If the accumulation never reaches `r` (floating-point rounding when `r`
/// lands next to `total`) or the score total is zero, the first unvisited
/// city in index order is returned. The policy therefore always yields an
/// unvisited city while one remains, and `None` once all are visited.
pub fn select_next_city<R: Rng>(
    current: usize,
    visited: &[bool],
    distances: &DistanceMatrix,
    pheromones: &PheromoneMatrix,
    alpha: f64,
    beta: f64,
    rng: &mut R,
) -> Option<usize> {
    let num_cities = visited.len();
    let mut scores = vec![0.0; num_cities];
    let mut total = 0.0;

    for city in 0..num_cities {
        if visited[city] {
            continue;
        }
        let score = desirability(
            pheromones.get(current, city),
            distances.get(current, city),
            alpha,
            beta,
        );
        scores[city] = score;
        total += score;
    }

    if total > 0.0 {
        let r = rng.random_range(0.0..total);
        let mut cumulative = 0.0;
        for city in 0..num_cities {
            if visited[city] {
                continue;
            }
            cumulative += scores[city];
            if cumulative >= r {
                return Some(city);
            }
        }
    }

    // Rounding (or an all-zero wheel) left the draw unreached.
    visited.iter().position(|&v| !v)
}

fn desirability(pheromone: f64, distance: f64, alpha: f64, beta: f64) -> f64 {
    if distance == 0.0 {
        return ZERO_DISTANCE_SCORE;
    }
    pheromone.powf(alpha) * (1.0 / distance).powf(beta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::City;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn fixture(cities: &[City]) -> (DistanceMatrix, PheromoneMatrix) {
        let distances = DistanceMatrix::from_cities(cities);
        let pheromones = PheromoneMatrix::new(cities.len(), 1.0);
        (distances, pheromones)
    }

    #[test]
    fn test_single_unvisited_city_is_certain() {
        let cities = vec![
            City::new(0.0, 0.0),
            City::new(1.0, 0.0),
            City::new(2.0, 0.0),
        ];
        let (distances, pheromones) = fixture(&cities);
        let visited = vec![true, false, true];
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        for _ in 0..100 {
            let next =
                select_next_city(0, &visited, &distances, &pheromones, 1.0, 5.0, &mut rng);
            assert_eq!(next, Some(1));
        }
    }

    #[test]
    fn test_never_returns_visited_city() {
        let cities = vec![
            City::new(0.0, 0.0),
            City::new(1.0, 1.0),
            City::new(5.0, 2.0),
            City::new(3.0, 8.0),
        ];
        let (distances, pheromones) = fixture(&cities);
        let visited = vec![true, false, true, false];
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        for _ in 0..1000 {
            let next = select_next_city(2, &visited, &distances, &pheromones, 1.0, 5.0, &mut rng)
                .unwrap();
            assert!(!visited[next], "selected an already visited city {next}");
        }
    }

    #[test]
    fn test_all_visited_returns_none() {
        let cities = vec![City::new(0.0, 0.0), City::new(1.0, 0.0)];
        let (distances, pheromones) = fixture(&cities);
        let visited = vec![true, true];
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let next = select_next_city(0, &visited, &distances, &pheromones, 1.0, 5.0, &mut rng);
        assert_eq!(next, None);
    }

    #[test]
    fn test_nearer_city_is_favored() {
        // City 1 sits at distance 1, city 2 at distance 10.
        let cities = vec![
            City::new(0.0, 0.0),
            City::new(1.0, 0.0),
            City::new(10.0, 0.0),
        ];
        let (distances, pheromones) = fixture(&cities);
        let visited = vec![true, false, false];
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        let mut counts = [0u32; 3];
        let n = 10000;
        for _ in 0..n {
            let next = select_next_city(0, &visited, &distances, &pheromones, 1.0, 5.0, &mut rng)
                .unwrap();
            counts[next] += 1;
        }
        // With beta = 5 the near city dominates the wheel
        assert!(
            counts[1] > 9000,
            "expected the near city to dominate, got counts: {counts:?}"
        );
    }

    #[test]
    fn test_coincident_city_is_maximally_attractive() {
        // City 1 coincides with city 0; city 2 is one unit away.
        let cities = vec![
            City::new(0.0, 0.0),
            City::new(0.0, 0.0),
            City::new(1.0, 0.0),
        ];
        let (distances, pheromones) = fixture(&cities);
        let visited = vec![true, false, false];
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        let mut coincident_picks = 0u32;
        let n = 1000;
        for _ in 0..n {
            let next = select_next_city(0, &visited, &distances, &pheromones, 1.0, 5.0, &mut rng)
                .unwrap();
            if next == 1 {
                coincident_picks += 1;
            }
        }
        assert!(
            coincident_picks > 990,
            "expected the coincident city to dominate, got {coincident_picks}/{n}"
        );
    }

    #[test]
    fn test_zero_pheromone_falls_back_to_first_unvisited() {
        let cities = vec![
            City::new(0.0, 0.0),
            City::new(1.0, 0.0),
            City::new(2.0, 0.0),
        ];
        let distances = DistanceMatrix::from_cities(&cities);
        let mut pheromones = PheromoneMatrix::new(3, 1.0);
        pheromones.evaporate(1.0); // every score becomes 0 at alpha > 0
        let visited = vec![true, false, false];
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        let next = select_next_city(0, &visited, &distances, &pheromones, 1.0, 5.0, &mut rng);
        assert_eq!(next, Some(1));
    }

    #[test]
    fn test_scores_stay_finite_with_coincident_cities() {
        let cities = vec![City::new(2.0, 2.0), City::new(2.0, 2.0)];
        let (distances, pheromones) = fixture(&cities);
        let visited = vec![true, false];
        let mut rng = ChaCha8Rng::seed_from_u64(11);

        let next = select_next_city(0, &visited, &distances, &pheromones, 1.0, 5.0, &mut rng);
        assert_eq!(next, Some(1));
    }
}
