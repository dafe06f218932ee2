//! Ant Colony Optimization for N-queens.
//!
//! This module implements the top-level search loop: it owns the pheromone
//! matrix and the seeded random source, and iterates colony construction and
//! pheromone updates until a conflict-free board is found or the iteration
//! budget runs out.

use crate::board::Placement;
use crate::colony;
use crate::error::AcoError;
use crate::pheromone::PheromoneMatrix;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// ACO configuration parameters
#[derive(Debug, Clone)]
pub struct AcoConfig {
    /// Board size (number of queens and columns)
    pub dim: usize,
    /// Number of ants per iteration
    pub num_ants: usize,
    /// Maximum number of iterations
    pub max_iterations: usize,
    /// Evaporation multiplier (rho), in (0, 1]
    pub evaporation_rate: f64,
    /// Pheromone importance (alpha)
    pub alpha: f64,
    /// Heuristic importance (beta)
    pub beta: f64,
    /// Random seed; None draws one from entropy and runs are not reproducible
    pub seed: Option<u64>,
}

impl Default for AcoConfig {
    fn default() -> Self {
        AcoConfig {
            dim: 8,
            num_ants: 200,
            max_iterations: 50,
            evaporation_rate: 0.95,
            alpha: 1.0,
            beta: 3.0,
            seed: None,
        }
    }
}

impl AcoConfig {
    /// Reject parameters that would make the probability model undefined.
    pub fn validate(&self) -> Result<(), AcoError> {
        if self.dim == 0 {
            return Err(AcoError::invalid("dim", "board size must be positive"));
        }
        if self.num_ants == 0 {
            return Err(AcoError::invalid("num_ants", "colony must not be empty"));
        }
        if !self.evaporation_rate.is_finite()
            || self.evaporation_rate <= 0.0
            || self.evaporation_rate > 1.0
        {
            return Err(AcoError::invalid(
                "evaporation_rate",
                format!("must be in (0, 1], got {}", self.evaporation_rate),
            ));
        }
        if !self.alpha.is_finite() || self.alpha < 0.0 {
            return Err(AcoError::invalid(
                "alpha",
                format!("must be a non-negative finite value, got {}", self.alpha),
            ));
        }
        if !self.beta.is_finite() || self.beta < 0.0 {
            return Err(AcoError::invalid(
                "beta",
                format!("must be a non-negative finite value, got {}", self.beta),
            ));
        }
        Ok(())
    }
}

/// Ant Colony Optimization solver for N-queens
#[derive(Debug)]
pub struct AntColonyOptimizer {
    config: AcoConfig,
    pheromone: PheromoneMatrix,
    rng: ChaCha8Rng,
}

impl AntColonyOptimizer {
    pub fn new(config: AcoConfig) -> Result<Self, AcoError> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let pheromone = PheromoneMatrix::new(config.dim);

        Ok(AntColonyOptimizer {
            config,
            pheromone,
            rng,
        })
    }

    /// Current pheromone levels (read-only)
    pub fn pheromone(&self) -> &PheromoneMatrix {
        &self.pheromone
    }

    pub fn config(&self) -> &AcoConfig {
        &self.config
    }

    /// Run the ACO search.
    ///
    /// Each iteration builds a colony, deposits pheromone for every ant,
    /// tracks the best placement (ties go to the lowest ant index) and then
    /// evaporates the whole matrix. A fitness-0 placement short-circuits the
    /// loop and is returned with `solved` set; exhausting the budget returns
    /// the best record seen, which is a normal outcome as well.
    pub fn run(&mut self) -> Result<Placement, AcoError> {
        let start = std::time::Instant::now();

        let mut best_rows: Vec<usize> = Vec::new();
        let mut best_fitness = usize::MAX;
        let mut fitness_history = Vec::with_capacity(self.config.max_iterations);
        let mut iteration = 0;
        let mut solved = false;

        while iteration < self.config.max_iterations {
            let colony = colony::build_colony(&self.pheromone, &self.config, &mut self.rng)?;
            iteration += 1;

            if colony.solved {
                // The solving ant is always the last one constructed. The
                // round ends here, before any deposit for it happens.
                if let Some(ant) = colony.ants.last() {
                    best_rows = ant.rows.clone();
                    best_fitness = 0;
                }
                solved = true;
                fitness_history.push(0);
                log::info!("solved at iteration {}", iteration);
                break;
            }

            self.pheromone.deposit(&colony);

            if let Some(round_best) = colony.ants.iter().min_by_key(|ant| ant.fitness) {
                log::debug!(
                    "iteration {}: round best fitness {}",
                    iteration,
                    round_best.fitness
                );
                if round_best.fitness < best_fitness {
                    best_fitness = round_best.fitness;
                    best_rows = round_best.rows.clone();
                }
            }

            self.pheromone.evaporate(self.config.evaporation_rate);
            fitness_history.push(best_fitness);
        }

        let mut placement = if best_rows.is_empty() {
            let mut empty = Placement::new();
            empty.algorithm = "ACO".to_string();
            empty
        } else {
            Placement::from_rows(best_rows, best_fitness, "ACO")
        };
        placement.solved = solved || best_fitness == 0;
        placement.computation_time = start.elapsed().as_secs_f64();
        placement.iterations = Some(iteration);
        placement.fitness_history = fitness_history;

        Ok(placement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn four_queens_config(seed: u64) -> AcoConfig {
        AcoConfig {
            dim: 4,
            num_ants: 200,
            max_iterations: 50,
            evaporation_rate: 0.95,
            alpha: 1.0,
            beta: 3.0,
            seed: Some(seed),
        }
    }

    #[test]
    fn test_fresh_pheromone_uniform() {
        for dim in [1, 4, 8] {
            let config = AcoConfig {
                dim,
                seed: Some(0),
                ..Default::default()
            };
            let optimizer = AntColonyOptimizer::new(config).unwrap();
            let expected = 1.0 / dim as f64;
            for r in 0..dim {
                for c in 0..dim {
                    assert_eq!(optimizer.pheromone().get(r, c), expected);
                }
            }
        }
    }

    #[test]
    fn test_optimizer_is_debuggable() {
        // unwrap_err in the tests below needs the Ok type to be Debug.
        let optimizer = AntColonyOptimizer::new(four_queens_config(0)).unwrap();
        let dump = format!("{:?}", optimizer);
        assert!(dump.contains("AntColonyOptimizer"));
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        let bad_configs = [
            AcoConfig {
                dim: 0,
                ..Default::default()
            },
            AcoConfig {
                num_ants: 0,
                ..Default::default()
            },
            AcoConfig {
                evaporation_rate: 0.0,
                ..Default::default()
            },
            AcoConfig {
                evaporation_rate: 1.5,
                ..Default::default()
            },
            AcoConfig {
                alpha: -0.5,
                ..Default::default()
            },
            AcoConfig {
                beta: f64::NAN,
                ..Default::default()
            },
        ];

        for config in bad_configs {
            let err = AntColonyOptimizer::new(config).unwrap_err();
            assert!(matches!(err, AcoError::InvalidParameter { .. }));
        }
    }

    #[test]
    fn test_zero_iterations_yields_empty_record() {
        let config = AcoConfig {
            dim: 4,
            max_iterations: 0,
            seed: Some(1),
            ..Default::default()
        };
        let placement = AntColonyOptimizer::new(config).unwrap().run().unwrap();
        assert!(placement.rows.is_empty());
        assert_eq!(placement.fitness, usize::MAX);
        assert!(!placement.solved);
        assert_eq!(placement.iterations, Some(0));
        assert_eq!(placement.algorithm, "ACO");
    }

    #[test]
    fn test_dim_one_solves_immediately() {
        let config = AcoConfig {
            dim: 1,
            num_ants: 3,
            max_iterations: 10,
            seed: Some(5),
            ..Default::default()
        };
        let placement = AntColonyOptimizer::new(config).unwrap().run().unwrap();
        assert!(placement.solved);
        assert_eq!(placement.fitness, 0);
        assert_eq!(placement.rows, vec![0]);
        assert_eq!(placement.iterations, Some(1));
        assert_eq!(placement.algorithm, "ACO");
    }

    #[test]
    fn test_same_seed_reproduces_run() {
        let a = AntColonyOptimizer::new(four_queens_config(42))
            .unwrap()
            .run()
            .unwrap();
        let b = AntColonyOptimizer::new(four_queens_config(42))
            .unwrap()
            .run()
            .unwrap();
        assert_eq!(a.rows, b.rows);
        assert_eq!(a.fitness, b.fitness);
        assert_eq!(a.iterations, b.iterations);
        assert_eq!(a.fitness_history, b.fitness_history);
    }

    #[test]
    fn test_best_fitness_history_non_increasing() {
        let config = AcoConfig {
            dim: 8,
            num_ants: 30,
            max_iterations: 25,
            seed: Some(13),
            ..Default::default()
        };
        let placement = AntColonyOptimizer::new(config).unwrap().run().unwrap();
        for window in placement.fitness_history.windows(2) {
            assert!(
                window[1] <= window[0],
                "best-ever fitness increased: {} -> {}",
                window[0],
                window[1]
            );
        }
    }

    #[test]
    fn test_solved_placements_are_valid_boards() {
        let placement = AntColonyOptimizer::new(four_queens_config(3))
            .unwrap()
            .run()
            .unwrap();
        if placement.solved {
            assert_eq!(placement.fitness, 0);
            assert!(placement.is_valid());
        }
    }

    #[test]
    fn test_four_queens_solved_for_most_seeds() {
        // The 4-queens instance is easy at this budget; require at least 80%
        // of fixed seeds to reach fitness 0 rather than pinning one seed.
        let solved = (0..20u64)
            .filter(|&seed| {
                let placement = AntColonyOptimizer::new(four_queens_config(seed))
                    .unwrap()
                    .run()
                    .unwrap();
                placement.solved && placement.is_valid()
            })
            .count();

        assert!(solved >= 16, "only {solved}/20 seeds solved 4-queens");
    }
}
