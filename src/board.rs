//! Board placement representation and rendering.
//!
//! This module provides the result type returned by the optimizer: a full
//! queen placement together with its fitness and search metadata.

use serde::{Deserialize, Serialize};

/// A finished N-queens placement produced by the solver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Placement {
    /// Row index chosen for each column (entry c is the row of column c's queen)
    pub rows: Vec<usize>,
    /// Number of columns involved in at least one conflict (0 = valid board)
    pub fitness: usize,
    /// Whether a conflict-free board was found
    pub solved: bool,
    /// Algorithm that generated this placement
    pub algorithm: String,
    /// Computation time in seconds
    pub computation_time: f64,
    /// Number of iterations actually run
    pub iterations: Option<usize>,
    /// Best-ever fitness after each completed iteration
    pub fitness_history: Vec<usize>,
}

impl Placement {
    /// Create an empty placement with no record yet
    pub fn new() -> Self {
        Placement {
            rows: Vec::new(),
            fitness: usize::MAX,
            solved: false,
            algorithm: String::new(),
            computation_time: 0.0,
            iterations: None,
            fitness_history: Vec::new(),
        }
    }

    /// Create a placement from chosen rows and a known fitness
    pub fn from_rows(rows: Vec<usize>, fitness: usize, algorithm: &str) -> Self {
        Placement {
            rows,
            fitness,
            solved: fitness == 0,
            algorithm: algorithm.to_string(),
            computation_time: 0.0,
            iterations: None,
            fitness_history: Vec::new(),
        }
    }

    pub fn dim(&self) -> usize {
        self.rows.len()
    }

    /// Check the placement against the actual attack rules, independently of
    /// the tally that produced its fitness: every column occupied, every row
    /// in range, no pair sharing a row or a diagonal.
    pub fn is_valid(&self) -> bool {
        let dim = self.rows.len();
        if dim == 0 {
            return false;
        }
        if self.rows.iter().any(|&r| r >= dim) {
            return false;
        }

        for i in 0..dim {
            for j in i + 1..dim {
                let (ri, rj) = (self.rows[i], self.rows[j]);
                if ri == rj {
                    return false;
                }
                // |ri - rj| == j - i, written without signed math
                if ri + j == rj + i || rj + j == ri + i {
                    return false;
                }
            }
        }

        true
    }

    /// Render the board as an N x N grid of 0/1 cells, one row per line;
    /// cell (i, j) is 1 iff rows[j] == i.
    pub fn render_grid(&self) -> String {
        let dim = self.rows.len();
        let mut grid = String::with_capacity(dim * (2 * dim + 1));

        for i in 0..dim {
            for j in 0..dim {
                if j > 0 {
                    grid.push(' ');
                }
                grid.push(if self.rows[j] == i { '1' } else { '0' });
            }
            grid.push('\n');
        }

        grid
    }
}

impl Default for Placement {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Placement ({})", self.algorithm)?;
        if self.fitness == usize::MAX {
            writeln!(f, "  Fitness: -")?;
        } else {
            writeln!(f, "  Fitness: {}", self.fitness)?;
        }
        writeln!(f, "  Solved: {}", self.solved)?;
        writeln!(f, "  Time: {:.4}s", self.computation_time)?;
        if let Some(iter) = self.iterations {
            writeln!(f, "  Iterations: {}", iter)?;
        }
        writeln!(f, "  Rows: {:?}", self.rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_creation() {
        let placement = Placement::new();
        assert!(placement.rows.is_empty());
        assert!(!placement.solved);
        assert_eq!(placement.fitness, usize::MAX);
    }

    #[test]
    fn test_known_four_queens_solution_valid() {
        let placement = Placement::from_rows(vec![1, 3, 0, 2], 0, "test");
        assert!(placement.is_valid());
        assert!(placement.solved);
    }

    #[test]
    fn test_row_and_diagonal_attacks_invalid() {
        assert!(!Placement::from_rows(vec![2, 2, 0, 3], 2, "test").is_valid());
        assert!(!Placement::from_rows(vec![0, 1, 3, 2], 2, "test").is_valid());
    }

    #[test]
    fn test_single_queen_valid() {
        assert!(Placement::from_rows(vec![0], 0, "test").is_valid());
    }

    #[test]
    fn test_render_grid() {
        let placement = Placement::from_rows(vec![1, 3, 0, 2], 0, "test");
        let grid = placement.render_grid();
        let lines: Vec<&str> = grid.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "0 0 1 0");
        assert_eq!(lines[1], "1 0 0 0");
        assert_eq!(lines[2], "0 0 0 1");
        assert_eq!(lines[3], "0 1 0 0");
    }
}
