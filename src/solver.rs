use std::fmt::Write;
use std::time::{Duration, Instant};

use crate::algorithm::{Acs, Algorithm, AlgorithmEnum, Eas};
use crate::component::City;
use crate::utils::config::Config;
use crate::utils::error::Error;


/// Facade over one algorithm run: owns the variant, validates the
/// configuration up front and exposes the best tour once solved. Each
/// solver carries its own pheromone matrix, so independent trials never
/// contaminate each other.
pub struct Solver {
    pub algorithm: AlgorithmEnum,
    pub config: Config,
}

pub struct Outcome {
    pub route: Vec<usize>,
    pub length: f64,
    pub elapsed: Duration,
}


impl Solver {
    pub fn new(cities: Vec<City>, config: Config) -> Result<Self, Error> {
        config.validate()?;
        if cities.len() < 2 {
            return Err(Error::TooFewCities(cities.len()));
        }
        let algorithm: AlgorithmEnum = match config.algorithm.as_str() {
            "acs" => Acs::new(&cities, &config).into(),
            "eas" => Eas::new(&cities, &config).into(),
            other => return Err(Error::UnknownAlgorithm(other.to_string())),
        };
        Ok(Solver { algorithm, config })
    }
    pub fn solve(&mut self) -> Outcome {
        let timeout = Duration::from_secs(self.config.timeout);
        let start = Instant::now();
        self.algorithm.run(start + timeout);
        let elapsed = start.elapsed();
        let route = self.algorithm.best_tour()
            .map(|tour| tour.route())
            .unwrap_or_default();
        Outcome { route, length: self.algorithm.best_length(), elapsed }
    }
    pub fn show_results(&self, outcome: &Outcome) {
        let mut msg = String::new();
        writeln!(msg, "best tour has length {:.2}, ratio {:.4} of optimal",
                 outcome.length,
                 outcome.length / self.config.known_optimal_length).unwrap();
        writeln!(msg, "- route {:?}", outcome.route).unwrap();
        writeln!(msg, "- found with {} in {:.3} seconds",
                 self.config.algorithm, outcome.elapsed.as_secs_f64()).unwrap();
        print!("{}", msg);
    }
}
