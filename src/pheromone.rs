//! Pheromone matrix and the deposit/evaporation cycle.

use crate::colony::Colony;

/// Pheromone levels over (row, column) edges of the board.
///
/// Indexed `[row][column]`; entry `(r, c)` is the learned desirability of
/// placing column `c`'s queen on row `r`. Owned by the optimizer, read
/// during colony construction and written only between rounds.
#[derive(Debug, Clone)]
pub struct PheromoneMatrix {
    dim: usize,
    levels: Vec<Vec<f64>>,
}

impl PheromoneMatrix {
    /// Create a dim x dim matrix with every entry at `1/dim`.
    pub fn new(dim: usize) -> Self {
        let initial = 1.0 / dim as f64;
        PheromoneMatrix {
            dim,
            levels: vec![vec![initial; dim]; dim],
        }
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    #[inline]
    pub fn get(&self, row: usize, column: usize) -> f64 {
        self.levels[row][column]
    }

    /// Pheromone levels of one board column, indexed by row.
    pub fn column(&self, column: usize) -> Vec<f64> {
        self.levels.iter().map(|row| row[column]).collect()
    }

    /// Reinforce the edges used by every ant of a colony.
    ///
    /// Each (row, column) edge of each placement receives
    /// `1 / (tally[column] + 1)^(dim/2)`, so edges belonging to low-conflict
    /// columns are rewarded far more strongly. All deposits of a round happen
    /// before evaporation.
    pub fn deposit(&mut self, colony: &Colony) {
        let exponent = self.dim as f64 / 2.0;

        for ant in &colony.ants {
            for (column, &row) in ant.rows.iter().enumerate() {
                let amount = 1.0 / (ant.tally[column] as f64 + 1.0).powf(exponent);
                self.levels[row][column] += amount;
            }
        }
    }

    /// Uniform multiplicative decay of the whole matrix, applied once per
    /// round even to edges nobody visited.
    pub fn evaporate(&mut self, rho: f64) {
        for row in &mut self.levels {
            for level in row.iter_mut() {
                *level *= rho;
            }
        }
    }
}
