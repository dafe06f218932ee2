//! Colony construction: probabilistic move selection and per-ant placement
//! building.
//!
//! Each ant builds one placement per iteration, column by column. The only
//! state shared between ants is the read-only pheromone matrix; every ant
//! carries its own placement and conflict tally.

use crate::conflicts;
use crate::error::AcoError;
use crate::optimizer::AcoConfig;
use crate::pheromone::PheromoneMatrix;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// One ant's finished placement for a single iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AntResult {
    /// Row chosen for each column
    pub rows: Vec<usize>,
    /// Per-column conflict tally accumulated during construction
    pub tally: Vec<u32>,
    /// Number of columns with a nonzero tally entry
    pub fitness: usize,
}

/// All ants evaluated in one iteration.
#[derive(Debug, Clone)]
pub struct Colony {
    pub ants: Vec<AntResult>,
    /// True when construction stopped early because an ant reached fitness 0.
    /// The solving ant is the last entry of `ants`.
    pub solved: bool,
}

/// Sample the row for the next column from the categorical distribution
/// induced by pheromone and conflict counts.
///
/// Weight per row r is `tau[r]^alpha * (1/(conflicts[r]+1))^beta`. The weights
/// are normalized by their sum and sampled by roulette wheel; a zero or
/// non-finite sum, or any negative/NaN weight, is a fatal
/// [`AcoError::DegenerateDistribution`].
pub fn choose_row(
    pheromone_column: &[f64],
    conflict_counts: &[u32],
    alpha: f64,
    beta: f64,
    column: usize,
    rng: &mut ChaCha8Rng,
) -> Result<usize, AcoError> {
    let mut weights = Vec::with_capacity(pheromone_column.len());
    for (tau, &count) in pheromone_column.iter().zip(conflict_counts) {
        let eta = 1.0 / (count as f64 + 1.0);
        weights.push(tau.powf(alpha) * eta.powf(beta));
    }

    let total: f64 = weights.iter().sum();
    if !total.is_finite() || total <= 0.0 || weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
        return Err(AcoError::DegenerateDistribution {
            column,
            weight_sum: total,
        });
    }

    // Roulette wheel
    let mut pick = rng.gen::<f64>() * total;
    for (row, &weight) in weights.iter().enumerate() {
        pick -= weight;
        if pick <= 0.0 {
            return Ok(row);
        }
    }

    // Floating-point slack can leave pick marginally positive
    Ok(weights.len() - 1)
}

/// Build one ant's placement, threading its conflict tally.
fn construct_placement(
    pheromone: &PheromoneMatrix,
    config: &AcoConfig,
    rng: &mut ChaCha8Rng,
) -> Result<AntResult, AcoError> {
    let dim = config.dim;
    let mut rows = Vec::with_capacity(dim);
    let mut tally = vec![0u32; dim];

    for column in 0..dim {
        let candidates = conflicts::conflicts_for_column(&rows, dim);
        let row = choose_row(
            &pheromone.column(column),
            &candidates,
            config.alpha,
            config.beta,
            column,
            rng,
        )?;
        rows.push(row);
        conflicts::record_move(&rows, &candidates, &mut tally);
    }

    let fitness = conflicts::fitness(&tally);
    Ok(AntResult {
        rows,
        tally,
        fitness,
    })
}

/// Build placements for the entire colony for one iteration.
///
/// Construction stops as soon as an ant reaches fitness 0: the colony is
/// returned with `solved` set and the remaining ants of the round are never
/// built, which is where the search terminates.
pub fn build_colony(
    pheromone: &PheromoneMatrix,
    config: &AcoConfig,
    rng: &mut ChaCha8Rng,
) -> Result<Colony, AcoError> {
    let mut ants = Vec::with_capacity(config.num_ants);

    for _ in 0..config.num_ants {
        let ant = construct_placement(pheromone, config, rng)?;
        let solved = ant.fitness == 0;
        ants.push(ant);

        if solved {
            return Ok(Colony { ants, solved: true });
        }
    }

    Ok(Colony {
        ants,
        solved: false,
    })
}
