use std::time::Instant;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use super::Algorithm;
use super::base::ant::Ant;
use crate::component::{City, EdgeMatrix, Tour};
use crate::utils::config::Config;


const INIT_PHEROMONE: f64 = 1.0;


/// Elitist Ant System. Every ant constructs its tour independently and only
/// reads the matrix; all pheromone writes happen in the global update, where
/// the best-known tour receives an extra elitist deposit.
pub struct Eas {
    colony_size: usize,
    iterations: usize,
    pheromone_weight: f64,
    heuristic_weight: f64,
    evaporation_rate: f64,
    elitism_factor: f64,
    known_optimal_length: f64,
    quality_threshold: f64,
    matrix: EdgeMatrix,
    rng: ChaChaRng,
    best_tour: Option<Tour>,
    best_length: f64,
}


impl Eas {
    pub fn new(cities: &[City], config: &Config) -> Self {
        let mut matrix = EdgeMatrix::new(cities);
        matrix.initialize_uniform(INIT_PHEROMONE);
        let rng = ChaChaRng::seed_from_u64(config.seed);
        Eas {
            colony_size: config.colony_size,
            iterations: config.iterations,
            pheromone_weight: config.pheromone_weight,
            heuristic_weight: config.heuristic_weight,
            evaporation_rate: config.evaporation_rate,
            elitism_factor: config.elitism_factor,
            known_optimal_length: config.known_optimal_length,
            quality_threshold: config.quality_threshold,
            matrix,
            rng,
            best_tour: None,
            best_length: f64::INFINITY,
        }
    }
    fn generate_ants(&self) -> Vec<Ant> {
        let size = self.matrix.size();
        (0..self.colony_size)
            .map(|slot| Ant::new(slot % size, size))
            .collect()
    }
    fn lay_down(&mut self, ants: &[Ant]) {
        for ant in ants {
            let deposit = 1.0 / ant.tour().length();
            for &(source, dest) in ant.tour().hops() {
                self.matrix.reinforce(source, dest, deposit);
            }
        }
    }
    fn lay_elite(&mut self) {
        if let Some(best) = &self.best_tour {
            let bonus = self.elitism_factor / self.best_length;
            for &(source, dest) in best.hops() {
                self.matrix.reinforce(source, dest, bonus);
            }
        }
    }
}

impl Algorithm for Eas {
    fn run(&mut self, deadline: Instant) {
        let size = self.matrix.size();
        #[allow(unused_variables)]
        let mut epoch = 0;
        for _ in 0..self.iterations {
            epoch += 1;
            let mut ants = self.generate_ants();
            for ant in ants.iter_mut() {
                ant.construct(&self.matrix, self.pheromone_weight,
                              self.heuristic_weight, &mut self.rng);
            }

            for ant in &ants {
                debug_assert_eq!(ant.tour().len(), size);
                if ant.tour().length() < self.best_length {
                    self.best_length = ant.tour().length();
                    self.best_tour = Some(ant.tour().clone());
                }
            }

            self.matrix.evaporate(self.evaporation_rate);
            self.lay_down(&ants);
            self.lay_elite();

            if self.best_length / self.known_optimal_length <= self.quality_threshold {
                break;
            }
            if Instant::now() >= deadline {
                break;
            }
        }
        #[cfg(debug_assertions)]
        println!("eas stopped after {} iterations", epoch);
    }
    fn best_tour(&self) -> Option<&Tour> {
        self.best_tour.as_ref()
    }
    fn best_length(&self) -> f64 {
        self.best_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn unit_square() -> Vec<City> {
        vec![
            City::new(0, 0.0, 0.0),
            City::new(1, 0.0, 1.0),
            City::new(2, 1.0, 1.0),
            City::new(3, 1.0, 0.0),
        ]
    }

    fn config() -> Config {
        Config {
            algorithm: "eas".to_string(),
            colony_size: 8,
            iterations: 500,
            pheromone_weight: 1.0,
            heuristic_weight: 3.5,
            evaporation_rate: 0.1,
            exploitation_probability: 0.9,
            local_decay_weight: 0.1,
            elitism_factor: 20.0,
            quality_threshold: 1.0,
            known_optimal_length: 4.0,
            timeout: 10,
            seed: 42,
        }
    }

    #[test]
    fn it_finds_the_unit_square_perimeter() {
        let mut eas = Eas::new(&unit_square(), &config());
        eas.run(Instant::now() + Duration::from_secs(10));
        assert_eq!(eas.best_length(), 4.0);
        let mut route = eas.best_tour().map(Tour::route).unwrap_or_default();
        route.sort_unstable();
        assert_eq!(route, vec![0, 1, 2, 3]);
    }

    #[test]
    fn it_deposits_on_every_ant_tour() {
        let mut eas = Eas::new(&unit_square(), &config());
        let mut rng = ChaChaRng::seed_from_u64(7);
        let mut ant = Ant::new(0, 4);
        ant.construct(&eas.matrix, 1.0, 3.5, &mut rng);
        let &(source, dest) = &ant.tour().hops()[0];
        let before = eas.matrix.pheromone(source, dest);
        let deposit = 1.0 / ant.tour().length();
        eas.lay_down(&[ant]);
        assert!((eas.matrix.pheromone(source, dest) - (before + deposit)).abs() < 1e-12);
        assert_eq!(eas.matrix.pheromone(source, dest), eas.matrix.pheromone(dest, source));
    }

    #[test]
    fn it_skips_the_elite_bonus_when_elitism_is_zero() {
        let mut config = config();
        config.elitism_factor = 0.0;
        config.iterations = 1;
        let mut eas = Eas::new(&unit_square(), &config);
        eas.run(Instant::now() + Duration::from_secs(10));
        let snapshot = eas.matrix.clone();
        eas.lay_elite();
        for source in 0..4 {
            for dest in 0..4 {
                assert_eq!(eas.matrix.pheromone(source, dest),
                           snapshot.pheromone(source, dest));
            }
        }
    }
}
