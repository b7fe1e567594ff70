use std::io::{self, Write};
use std::process;

use aco_tsp::component::City;
use aco_tsp::solver::Solver;
use aco_tsp::utils::config::{Arguments, Config};
use aco_tsp::utils::error::Error;
use aco_tsp::utils::report::{Report, Trial};
use aco_tsp::utils::tsplib;


const SWEEP_RUNS: usize = 3;
const RHO_GRID: [f64; 3] = [0.05, 0.20, 0.35];
const ALPHA_GRID: [f64; 3] = [0.5, 1.0, 1.5];
const BETA_GRID: [f64; 3] = [2.0, 3.5, 5.0];


fn main() {
    let args: Arguments = argh::from_env();
    let mut config = Config::load_file(&args.config)
        .unwrap_or_else(|err| bail(err));
    config.override_from_args(&args);
    let cities = tsplib::load_instance(&args.instance)
        .unwrap_or_else(|err| bail(err));

    let stdout = io::stdout();
    let mut report = Report::new(stdout.lock());
    let outcome = if args.sweep {
        sweep(&cities, &config, &mut report)
    } else {
        single(&cities, &config)
    };
    if let Err(err) = outcome {
        bail(err);
    }
}

fn single(cities: &[City], config: &Config) -> Result<(), Error> {
    let mut solver = Solver::new(cities.to_vec(), config.clone())?;
    let outcome = solver.solve();
    solver.show_results(&outcome);
    Ok(())
}

/// Reproduce the experiment harness: both variants at the configured base
/// values first, then every grid combination of alpha, beta and rho with
/// everything else held at base, each averaged over repeated runs.
fn sweep<W: Write>(cities: &[City], config: &Config,
                   report: &mut Report<W>) -> Result<(), Error> {
    report.preamble(cities.len(), config.known_optimal_length)?;
    for algorithm in &["acs", "eas"] {
        report.section(&format!("base case, {}", algorithm))?;
        let base = varied(config, algorithm, config.pheromone_weight,
                          config.heuristic_weight, config.evaporation_rate);
        trials(cities, &base, report)?;
    }
    for &rho in RHO_GRID.iter() {
        for &alpha in ALPHA_GRID.iter() {
            for &beta in BETA_GRID.iter() {
                // the base combination already ran above
                if alpha == config.pheromone_weight
                    && beta == config.heuristic_weight
                    && rho == config.evaporation_rate {
                    continue;
                }
                for algorithm in &["acs", "eas"] {
                    report.section(algorithm)?;
                    report.parameters(alpha, beta, rho)?;
                    let variant = varied(config, algorithm, alpha, beta, rho);
                    trials(cities, &variant, report)?;
                }
            }
        }
    }
    Ok(())
}

fn varied(config: &Config, algorithm: &str, alpha: f64, beta: f64, rho: f64) -> Config {
    let mut varied = config.clone();
    varied.algorithm = algorithm.to_string();
    varied.pheromone_weight = alpha;
    varied.heuristic_weight = beta;
    varied.evaporation_rate = rho;
    varied
}

fn trials<W: Write>(cities: &[City], config: &Config,
                    report: &mut Report<W>) -> Result<(), Error> {
    let mut runs = Vec::with_capacity(SWEEP_RUNS);
    for nth in 0..SWEEP_RUNS {
        let mut trial = config.clone();
        trial.seed = config.seed.wrapping_add(nth as u64);
        let mut solver = Solver::new(cities.to_vec(), trial)?;
        let outcome = solver.solve();
        report.run(nth, outcome.length, outcome.elapsed)?;
        runs.push(Trial { length: outcome.length, elapsed: outcome.elapsed });
    }
    report.average(&runs, config.known_optimal_length)?;
    Ok(())
}

fn bail(err: Error) -> ! {
    eprintln!("{}", err);
    process::exit(1);
}
