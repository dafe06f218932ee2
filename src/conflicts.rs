//! Conflict counting for partial queen placements.
//!
//! A placement assigns one row per column, columns filled in increasing
//! order, so only row and diagonal attacks can occur. This module computes
//! the candidate conflict vector consulted before each move and maintains
//! the per-column conflict tally after a move is committed.

/// Number of already-placed queens attacking each candidate row of the next
/// column.
///
/// `placed[j]` is the row of the queen in column `j`; the target column is
/// `placed.len()`. Entry `r` of the result counts the placed queens that
/// share a row or a diagonal with a queen at `(r, target)`. Each attacking
/// queen contributes exactly one to the count, whichever predicate fired.
///
/// An empty placement yields an all-zero vector.
pub fn conflicts_for_column(placed: &[usize], dim: usize) -> Vec<u32> {
    let col = placed.len();
    let mut counts = vec![0u32; dim];

    for (r, count) in counts.iter_mut().enumerate() {
        for (j, &row) in placed.iter().enumerate() {
            // Diagonals rewritten with additions only, so usize cannot underflow:
            // col - r == j - row  <=>  col + row == j + r
            // col + r == j + row  stays as written
            if row == r || col + row == j + r || col + r == j + row {
                *count += 1;
            }
        }
    }

    counts
}

/// Update the conflict tally after committing a move.
///
/// `placed` already contains the chosen row in its last slot. The current
/// column gets a single increment when the chosen row had any candidate
/// conflicts. Every earlier column is then re-checked against the new queen
/// with the three attack predicates applied independently, so one pair of
/// queens can add more than one increment to a tally entry. That additive
/// multiplicity is deliberate; the tally measures conflict magnitude, not a
/// boolean in-conflict flag.
pub fn record_move(placed: &[usize], candidate_conflicts: &[u32], tally: &mut [u32]) {
    let col = placed.len() - 1;
    let chosen = placed[col];

    if candidate_conflicts[chosen] != 0 {
        tally[col] += 1;
    }

    for (j, &row) in placed[..col].iter().enumerate() {
        if row == chosen {
            tally[j] += 1;
        }
        // row + j == col + chosen: the new queen sits on column j's "/" diagonal
        if row + j == col + chosen {
            tally[j] += 1;
        }
        // row - j == chosen - col  <=>  row + col == chosen + j
        if row + col == chosen + j {
            tally[j] += 1;
        }
    }
}

/// Fitness of a finished placement given its tally: the number of columns
/// involved in at least one conflict. Zero means a valid board.
pub fn fitness(tally: &[u32]) -> usize {
    tally.iter().filter(|&&t| t != 0).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replay a full placement through the incremental bookkeeping and
    /// return its tally.
    fn replay(rows: &[usize], dim: usize) -> Vec<u32> {
        let mut placed = Vec::with_capacity(dim);
        let mut tally = vec![0u32; dim];

        for &row in rows {
            let candidates = conflicts_for_column(&placed, dim);
            placed.push(row);
            record_move(&placed, &candidates, &mut tally);
        }

        tally
    }

    #[test]
    fn test_empty_placement_has_no_conflicts() {
        let counts = conflicts_for_column(&[], 5);
        assert_eq!(counts, vec![0; 5]);
    }

    #[test]
    fn test_single_queen_attacks() {
        // Queen at (row 1, column 0); candidates for column 1.
        let counts = conflicts_for_column(&[1], 4);
        // Row 0 and row 2 are on its diagonals, row 1 shares the row.
        assert_eq!(counts, vec![1, 1, 1, 0]);
    }

    #[test]
    fn test_attacker_counted_once_per_queen() {
        // Two queens both attacking row 2 of column 2.
        let counts = conflicts_for_column(&[0, 2], 4);
        assert_eq!(counts[2], 2);
    }

    #[test]
    fn test_valid_four_queens_scores_zero() {
        let tally = replay(&[1, 3, 0, 2], 4);
        assert_eq!(tally, vec![0; 4]);
        assert_eq!(fitness(&tally), 0);
    }

    #[test]
    fn test_same_row_pair_tallied_on_both_columns() {
        let tally = replay(&[0, 0], 2);
        // Column 1's queen saw one candidate conflict; column 0 is charged
        // retroactively for the row attack.
        assert_eq!(tally[0], 1);
        assert_eq!(tally[1], 1);
        assert_eq!(fitness(&tally), 2);
    }

    #[test]
    fn test_diagonal_pair_tallied() {
        let tally = replay(&[0, 1], 2);
        assert_eq!(tally[0], 1);
        assert_eq!(tally[1], 1);
    }

    #[test]
    fn test_all_same_row_accumulates() {
        let tally = replay(&[0, 0, 0], 3);
        // Column 0 is attacked by columns 1 and 2 on the same row.
        assert_eq!(tally[0], 2);
        assert!(tally.iter().all(|&t| t > 0));
        assert_eq!(fitness(&tally), 3);
    }

    #[test]
    fn test_tally_monotone_during_replay() {
        let rows = [0, 2, 1, 3, 0];
        let dim = 5;
        let mut placed = Vec::new();
        let mut tally = vec![0u32; dim];
        let mut previous = tally.clone();

        for &row in &rows {
            let candidates = conflicts_for_column(&placed, dim);
            placed.push(row);
            record_move(&placed, &candidates, &mut tally);

            for (now, before) in tally.iter().zip(&previous) {
                assert!(now >= before);
            }
            previous = tally.clone();
        }
    }

    #[test]
    fn test_dim_one_trivially_solved() {
        let tally = replay(&[0], 1);
        assert_eq!(fitness(&tally), 0);
    }
}
