//! ACO N-Queens Solver - Command Line Interface

use clap::{Parser, Subcommand};
use nqueens_aco_solver::benchmark::{SeedSweep, SweepConfig};
use nqueens_aco_solver::optimizer::{AcoConfig, AntColonyOptimizer};
use nqueens_aco_solver::visualization::Visualizer;

use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "nqueens-aco-solver")]
#[command(author = "M2 AI2D Student")]
#[command(version = "1.0")]
#[command(about = "An Ant Colony Optimization solver for the N-queens problem")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve one N-queens instance
    Solve {
        /// Board size
        #[arg(short, long, default_value = "8")]
        dim: usize,

        /// Colony size (ants per iteration)
        #[arg(short = 'a', long, default_value = "200")]
        ants: usize,

        /// Maximum number of iterations
        #[arg(short = 'i', long, default_value = "50")]
        iterations: usize,

        /// Evaporation multiplier rho, in (0, 1]
        #[arg(long, default_value = "0.95")]
        rho: f64,

        /// Pheromone exponent
        #[arg(long, default_value = "1.0")]
        alpha: f64,

        /// Heuristic exponent
        #[arg(long, default_value = "3.0")]
        beta: f64,

        /// Random seed (omit for a non-reproducible run)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Output solution to JSON file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Save an SVG (and PNG if a renderer is available) of the board
        #[arg(long)]
        visualize: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Run one configuration across a range of seeds
    Sweep {
        /// Board size
        #[arg(short, long, default_value = "8")]
        dim: usize,

        /// Colony size (ants per iteration)
        #[arg(short = 'a', long, default_value = "200")]
        ants: usize,

        /// Maximum number of iterations
        #[arg(short = 'i', long, default_value = "50")]
        iterations: usize,

        /// Evaporation multiplier rho, in (0, 1]
        #[arg(long, default_value = "0.95")]
        rho: f64,

        /// Pheromone exponent
        #[arg(long, default_value = "1.0")]
        alpha: f64,

        /// Heuristic exponent
        #[arg(long, default_value = "3.0")]
        beta: f64,

        /// Number of seeds to run
        #[arg(short, long, default_value = "20")]
        seeds: usize,

        /// First seed of the range
        #[arg(long, default_value = "0")]
        base_seed: u64,

        /// Output directory for CSV and report
        #[arg(short, long, default_value = "results")]
        output: PathBuf,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            dim,
            ants,
            iterations,
            rho,
            alpha,
            beta,
            seed,
            output,
            visualize,
            verbose,
        } => {
            let config = AcoConfig {
                dim,
                num_ants: ants,
                max_iterations: iterations,
                evaporation_rate: rho,
                alpha,
                beta,
                seed,
            };
            solve(config, output, visualize, verbose);
        }

        Commands::Sweep {
            dim,
            ants,
            iterations,
            rho,
            alpha,
            beta,
            seeds,
            base_seed,
            output,
        } => {
            let config = AcoConfig {
                dim,
                num_ants: ants,
                max_iterations: iterations,
                evaporation_rate: rho,
                alpha,
                beta,
                seed: None,
            };
            sweep(config, seeds, base_seed, &output);
        }
    }
}

fn solve(config: AcoConfig, output: Option<PathBuf>, visualize: Option<PathBuf>, verbose: bool) {
    println!(
        "Solving {}-queens with {} ants, {} iterations...",
        config.dim, config.num_ants, config.max_iterations
    );

    let mut optimizer = match AntColonyOptimizer::new(config) {
        Ok(opt) => opt,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let placement = match optimizer.run() {
        Ok(placement) => placement,
        Err(e) => {
            eprintln!("Search failed: {}", e);
            std::process::exit(1);
        }
    };

    println!("\n========== Results ==========");
    if !placement.rows.is_empty() {
        println!("{}", placement.render_grid());
    }
    if placement.fitness == usize::MAX {
        println!("Fitness: - (no placement constructed)");
    } else {
        println!("Fitness: {}", placement.fitness);
    }
    println!("Solved: {}", placement.solved);
    println!("Time: {:.4}s", placement.computation_time);
    if let Some(iter) = placement.iterations {
        println!("Iterations: {}", iter);
    }

    if verbose {
        println!("\nRows: {:?}", placement.rows);
        println!("Fitness history: {:?}", placement.fitness_history);
    }

    if let Some(out_path) = output {
        match serde_json::to_string_pretty(&placement) {
            Ok(json) => match std::fs::write(&out_path, json) {
                Ok(()) => println!("\nSolution saved to {:?}", out_path),
                Err(e) => eprintln!("Failed to write output: {}", e),
            },
            Err(e) => eprintln!("Failed to serialize solution: {}", e),
        }
    }

    if let Some(svg_path) = visualize {
        let viz = Visualizer::new();
        let svg = viz.generate_svg(&placement);
        match viz.save_svg(&svg, &svg_path) {
            Ok(()) => println!("Board saved to {:?}", svg_path),
            Err(e) => eprintln!("Failed to save SVG: {}", e),
        }

        let png_path = svg_path.with_extension("png");
        match viz.save_png(&svg, &png_path) {
            Ok(()) => println!("Board saved to {:?}", png_path),
            Err(e) => println!("PNG conversion skipped ({})", e),
        }
    }
}

fn sweep(config: AcoConfig, seeds: usize, base_seed: u64, output: &PathBuf) {
    println!(
        "Sweeping {}-queens across {} seeds (starting at {})...",
        config.dim, seeds, base_seed
    );

    let mut sweep = SeedSweep::new(SweepConfig {
        num_seeds: seeds,
        base_seed,
    });

    if let Err(e) = sweep.run(&config) {
        eprintln!("Sweep failed: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = std::fs::create_dir_all(output) {
        eprintln!("Failed to create output directory: {}", e);
        std::process::exit(1);
    }

    let csv_path = output.join("sweep.csv");
    match sweep.export_to_csv(&csv_path) {
        Ok(()) => println!("Results exported to {:?}", csv_path),
        Err(e) => eprintln!("Failed to export results: {}", e),
    }

    let report = sweep.generate_report();
    println!("\n{}", report);

    let report_path = output.join("report.txt");
    match std::fs::write(&report_path, &report) {
        Ok(()) => println!("Report saved to {:?}", report_path),
        Err(e) => eprintln!("Failed to save report: {}", e),
    }
}
