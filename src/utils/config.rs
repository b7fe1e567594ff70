use std::fs;

use argh::FromArgs;
use serde::Deserialize;

use super::error::Error;

/// An ant-colony heuristic solver for symmetric TSP instances
#[derive(FromArgs)]
pub struct Arguments {
    /// path to a TSPLIB-style instance file
    #[argh(positional)]
    pub instance: String,
    /// known optimal tour length of the instance
    #[argh(positional)]
    pub optimal: f64,
    /// path to configuration file
    #[argh(option, short='c', default="String::from(\"data/config/default.yaml\")")]
    pub config: String,
    /// override algorithm variant, `acs` or `eas`
    #[argh(option, short='a')]
    pub algorithm: Option<String>,
    /// override random seed
    #[argh(option, short='s')]
    pub seed: Option<u64>,
    /// override elitism weight for EAS
    #[argh(option, short='e')]
    pub elitism: Option<f64>,
    /// run the averaged parameter sweep instead of a single trial
    #[argh(switch)]
    pub sweep: bool,
}

#[derive(Deserialize, Clone, Debug)]
pub struct Config {
    pub algorithm: String,
    pub colony_size: usize,
    pub iterations: usize,
    pub pheromone_weight: f64,
    pub heuristic_weight: f64,
    pub evaporation_rate: f64,
    pub exploitation_probability: f64,
    pub local_decay_weight: f64,
    pub elitism_factor: f64,
    pub quality_threshold: f64,
    pub known_optimal_length: f64,
    pub timeout: u64,
    pub seed: u64,
}

impl Config {
    pub fn load_file(path: &str) -> Result<Self, Error> {
        let text = fs::read_to_string(path)
            .map_err(|err| Error::ReadFile(path.to_string(), err))?;
        let config = serde_yaml::from_str(&text)?;
        Ok(config)
    }
    pub fn override_from_args(&mut self, args: &Arguments) {
        self.known_optimal_length = args.optimal;
        if let Some(algorithm) = &args.algorithm {
            self.algorithm = algorithm.clone();
        }
        if let Some(seed) = args.seed {
            self.seed = seed;
        }
        if let Some(elitism) = args.elitism {
            self.elitism_factor = num::clamp(elitism, 0.0, 9999999.9);
        }
    }
    /// Out-of-range parameters are rejected up front, never clamped.
    pub fn validate(&self) -> Result<(), Error> {
        if self.colony_size == 0 {
            return Err(Error::EmptyColony);
        }
        if self.iterations == 0 {
            return Err(Error::ZeroIterations);
        }
        ensure_range("pheromone_weight", "[0, inf)", self.pheromone_weight,
                     self.pheromone_weight >= 0.0)?;
        ensure_range("heuristic_weight", "[0, inf)", self.heuristic_weight,
                     self.heuristic_weight >= 0.0)?;
        ensure_range("evaporation_rate", "(0, 1]", self.evaporation_rate,
                     self.evaporation_rate > 0.0 && self.evaporation_rate <= 1.0)?;
        ensure_range("exploitation_probability", "[0, 1]", self.exploitation_probability,
                     (0.0..=1.0).contains(&self.exploitation_probability))?;
        ensure_range("local_decay_weight", "[0, 1]", self.local_decay_weight,
                     (0.0..=1.0).contains(&self.local_decay_weight))?;
        ensure_range("elitism_factor", "[0, inf)", self.elitism_factor,
                     self.elitism_factor >= 0.0)?;
        ensure_range("quality_threshold", "(0, 1]", self.quality_threshold,
                     self.quality_threshold > 0.0 && self.quality_threshold <= 1.0)?;
        ensure_range("known_optimal_length", "(0, inf)", self.known_optimal_length,
                     self.known_optimal_length > 0.0)?;
        Ok(())
    }
}

fn ensure_range(name: &'static str, range: &'static str, value: f64,
                within: bool) -> Result<(), Error> {
    match within {
        true => Ok(()),
        false => Err(Error::ParameterOutOfRange(name, range, value)),
    }
}
