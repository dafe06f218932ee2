//! Benchmarking and experimentation module.
//!
//! The natural experiment for a stochastic constraint solver is a sweep over
//! random seeds of one configuration: how often does it reach a conflict-free
//! board, and how fast. This module collects per-seed records, aggregates
//! statistics and exports CSV/text reports.

use crate::error::AcoError;
use crate::optimizer::{AcoConfig, AntColonyOptimizer};

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;

/// Result of one seeded run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRecord {
    /// Seed used for this run
    pub seed: u64,
    /// Board size
    pub dim: usize,
    /// Colony size
    pub num_ants: usize,
    /// Iteration cap
    pub max_iterations: usize,
    /// Final best fitness; None when no placement was produced
    pub fitness: Option<usize>,
    /// Whether a conflict-free board was found
    pub solved: bool,
    /// Iterations actually run
    pub iterations: usize,
    /// Computation time in seconds
    pub time: f64,
}

/// Aggregated statistics over a sweep
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepStatistics {
    /// Number of runs
    pub num_runs: usize,
    /// Number of solved runs
    pub num_solved: usize,
    /// Fraction of runs reaching fitness 0
    pub solve_rate: f64,
    /// Average final fitness
    pub avg_fitness: f64,
    /// Best final fitness
    pub best_fitness: usize,
    /// Worst final fitness
    pub worst_fitness: usize,
    /// Standard deviation of final fitness
    pub std_fitness: f64,
    /// Average iterations used by solved runs
    pub avg_iterations_to_solve: Option<f64>,
    /// Average time per run
    pub avg_time: f64,
    /// Total time
    pub total_time: f64,
}

/// Sweep configuration
#[derive(Debug, Clone)]
pub struct SweepConfig {
    /// Number of seeds to run (seeds are base_seed..base_seed + num_seeds)
    pub num_seeds: usize,
    /// First seed of the range
    pub base_seed: u64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        SweepConfig {
            num_seeds: 20,
            base_seed: 0,
        }
    }
}

/// Seed-sweep engine
pub struct SeedSweep {
    config: SweepConfig,
    records: Vec<RunRecord>,
}

impl SeedSweep {
    pub fn new(config: SweepConfig) -> Self {
        SeedSweep {
            config,
            records: Vec::new(),
        }
    }

    /// Run the configured number of seeds against one solver configuration.
    /// The seed in `aco` is ignored; each run gets its own from the range.
    pub fn run(&mut self, aco: &AcoConfig) -> Result<(), AcoError> {
        for offset in 0..self.config.num_seeds {
            let seed = self.config.base_seed + offset as u64;
            let run_config = AcoConfig {
                seed: Some(seed),
                ..aco.clone()
            };

            log::info!("sweep: dim {} seed {}", run_config.dim, seed);
            let placement = AntColonyOptimizer::new(run_config.clone())?.run()?;

            self.records.push(RunRecord {
                seed,
                dim: run_config.dim,
                num_ants: run_config.num_ants,
                max_iterations: run_config.max_iterations,
                fitness: (placement.fitness != usize::MAX).then_some(placement.fitness),
                solved: placement.solved,
                iterations: placement.iterations.unwrap_or(0),
                time: placement.computation_time,
            });
        }

        Ok(())
    }

    /// Compute aggregate statistics over all recorded runs
    pub fn compute_statistics(&self) -> Option<SweepStatistics> {
        let finished: Vec<&RunRecord> = self
            .records
            .iter()
            .filter(|r| r.fitness.is_some())
            .collect();

        if finished.is_empty() {
            return None;
        }

        let fitnesses: Vec<usize> = finished.iter().filter_map(|r| r.fitness).collect();
        let times: Vec<f64> = finished.iter().map(|r| r.time).collect();

        let avg_fitness = fitnesses.iter().sum::<usize>() as f64 / fitnesses.len() as f64;
        let variance = fitnesses
            .iter()
            .map(|&f| (f as f64 - avg_fitness).powi(2))
            .sum::<f64>()
            / fitnesses.len() as f64;

        let num_solved = finished.iter().filter(|r| r.solved).count();
        let solved_iterations: Vec<usize> = finished
            .iter()
            .filter(|r| r.solved)
            .map(|r| r.iterations)
            .collect();
        let avg_iterations_to_solve = if solved_iterations.is_empty() {
            None
        } else {
            Some(solved_iterations.iter().sum::<usize>() as f64 / solved_iterations.len() as f64)
        };

        Some(SweepStatistics {
            num_runs: finished.len(),
            num_solved,
            solve_rate: num_solved as f64 / finished.len() as f64,
            avg_fitness,
            best_fitness: fitnesses.iter().copied().min().unwrap_or(0),
            worst_fitness: fitnesses.iter().copied().max().unwrap_or(0),
            std_fitness: variance.sqrt(),
            avg_iterations_to_solve,
            avg_time: times.iter().sum::<f64>() / times.len() as f64,
            total_time: times.iter().sum(),
        })
    }

    /// Export per-run records to CSV
    pub fn export_to_csv<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        let file = File::create(path)?;
        let mut writer = csv::Writer::from_writer(file);

        for record in &self.records {
            writer.serialize(record)?;
        }

        writer.flush()?;
        Ok(())
    }

    /// Generate summary report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();

        report.push_str("========================================\n");
        report.push_str("     ACO N-Queens Seed Sweep Report\n");
        report.push_str("========================================\n\n");

        match self.compute_statistics() {
            Some(stats) => {
                report.push_str(&format!(
                    "Solved: {}/{} ({:.1}%)\n",
                    stats.num_solved,
                    stats.num_runs,
                    stats.solve_rate * 100.0
                ));
                report.push_str(&format!(
                    "Fitness: avg {:.2} (std {:.2}), best {}, worst {}\n",
                    stats.avg_fitness, stats.std_fitness, stats.best_fitness, stats.worst_fitness
                ));
                if let Some(avg_iter) = stats.avg_iterations_to_solve {
                    report.push_str(&format!("Avg iterations to solve: {:.1}\n", avg_iter));
                }
                report.push_str(&format!(
                    "Time: avg {:.4}s, total {:.4}s\n",
                    stats.avg_time, stats.total_time
                ));
            }
            None => report.push_str("No completed runs.\n"),
        }

        report.push_str("\nPer-seed results:\n");
        report.push_str(&format!(
            "{:<8} {:>8} {:>8} {:>12} {:>10}\n",
            "seed", "fitness", "solved", "iterations", "time"
        ));
        report.push_str(&"-".repeat(50));
        report.push('\n');
        for record in &self.records {
            let fitness = record
                .fitness
                .map(|f| f.to_string())
                .unwrap_or_else(|| "-".to_string());
            report.push_str(&format!(
                "{:<8} {:>8} {:>8} {:>12} {:>10.4}\n",
                record.seed, fitness, record.solved, record.iterations, record.time
            ));
        }

        report
    }

    /// Get all records
    pub fn records(&self) -> &[RunRecord] {
        &self.records
    }
}
