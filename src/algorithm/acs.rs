use std::time::Instant;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;

use super::Algorithm;
use super::base::ant::{nearest_neighbor_tour, Ant};
use crate::component::{City, EdgeMatrix, Tour};
use crate::utils::config::Config;


/// Ant Colony System. Ants advance in lock-step, one edge position at a
/// time, and every walked edge is worn toward the baseline before the next
/// colony-wide step, so each ant observes the traffic of the whole colony.
pub struct Acs {
    colony_size: usize,
    iterations: usize,
    pheromone_weight: f64,
    heuristic_weight: f64,
    evaporation_rate: f64,
    exploitation_probability: f64,
    local_decay_weight: f64,
    known_optimal_length: f64,
    quality_threshold: f64,
    matrix: EdgeMatrix,
    baseline: f64,
    rng: ChaChaRng,
    best_tour: Option<Tour>,
    best_length: f64,
}


impl Acs {
    pub fn new(cities: &[City], config: &Config) -> Self {
        let mut matrix = EdgeMatrix::new(cities);
        let mut rng = ChaChaRng::seed_from_u64(config.seed);
        // one greedy tour calibrates the initial pheromone scale
        let start = rng.gen_range(0..cities.len());
        let bootstrap = nearest_neighbor_tour(&matrix, start);
        let baseline = 1.0 / (config.colony_size as f64 * bootstrap.length());
        matrix.initialize_uniform(baseline);
        Acs {
            colony_size: config.colony_size,
            iterations: config.iterations,
            pheromone_weight: config.pheromone_weight,
            heuristic_weight: config.heuristic_weight,
            evaporation_rate: config.evaporation_rate,
            exploitation_probability: config.exploitation_probability,
            local_decay_weight: config.local_decay_weight,
            known_optimal_length: config.known_optimal_length,
            quality_threshold: config.quality_threshold,
            matrix,
            baseline,
            rng,
            best_tour: None,
            best_length: f64::INFINITY,
        }
    }
    fn generate_ants(&self) -> Vec<Ant> {
        let size = self.matrix.size();
        // start cities are spread round-robin over the city set, wrapping
        // when the colony outnumbers the cities
        (0..self.colony_size)
            .map(|slot| Ant::new(slot % size, size))
            .collect()
    }
    fn step_colony(&mut self, ants: &mut [Ant]) {
        for ant in ants.iter_mut() {
            let draw = self.rng.gen_range(0.0..1.0);
            if draw < self.exploitation_probability {
                ant.step_greedy(&self.matrix, self.heuristic_weight);
            } else {
                ant.step_probabilistic(&self.matrix, self.pheromone_weight,
                                       self.heuristic_weight, &mut self.rng);
            }
        }
    }
    // One wear per ant-traversal, applied sequentially: two ants walking the
    // same edge in the same step wear it twice.
    fn wear_walked(&mut self, ants: &[Ant]) {
        for ant in ants {
            self.matrix.wear(ant.current(), ant.previous(),
                             self.local_decay_weight, self.baseline);
        }
    }
    fn deposit_best(&mut self) {
        if let Some(best) = &self.best_tour {
            let deposit = self.evaporation_rate / self.best_length;
            for &(source, dest) in best.hops() {
                self.matrix.reinforce(source, dest, deposit);
            }
        }
    }
}

impl Algorithm for Acs {
    fn run(&mut self, deadline: Instant) {
        let size = self.matrix.size();
        #[allow(unused_variables)]
        let mut epoch = 0;
        for _ in 0..self.iterations {
            epoch += 1;
            let mut ants = self.generate_ants();

            // phase 1: every ant takes its next edge; phase 2: wear every
            // just-walked edge, only then may the next step be chosen
            for _ in 0..size - 1 {
                self.step_colony(&mut ants);
                self.wear_walked(&ants);
            }
            for ant in ants.iter_mut() {
                ant.return_home(&self.matrix);
            }
            self.wear_walked(&ants);

            for ant in ants {
                let tour = ant.into_tour();
                debug_assert_eq!(tour.len(), size);
                if tour.length() < self.best_length {
                    self.best_length = tour.length();
                    self.best_tour = Some(tour);
                }
            }

            self.matrix.evaporate(self.evaporation_rate);
            self.deposit_best();

            if self.best_length / self.known_optimal_length <= self.quality_threshold {
                break;
            }
            if Instant::now() >= deadline {
                break;
            }
        }
        #[cfg(debug_assertions)]
        println!("acs stopped after {} iterations", epoch);
    }
    fn best_tour(&self) -> Option<&Tour> {
        self.best_tour.as_ref()
    }
    fn best_length(&self) -> f64 {
        self.best_length
    }
}
