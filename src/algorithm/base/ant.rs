use itertools::Itertools;
use ordered_float::OrderedFloat;
use rand::Rng;
use rand_chacha::ChaChaRng;

use crate::component::EdgeMatrix;
use crate::component::Tour;


// coincident cities yield zero-length edges; treat them as maximally
// attractive while keeping every weight finite
const ZERO_LENGTH_VISIBILITY: f64 = 1e12;


/// One construction agent. Lives for a single iteration; everything it
/// learns is folded back into the pheromone matrix by the coordinator.
pub struct Ant {
    start: usize,
    current: usize,
    previous: usize,
    allowed: Vec<usize>,
    tour: Tour,
}


impl Ant {
    pub fn new(start: usize, size: usize) -> Self {
        debug_assert!(start < size);
        let allowed = (0..size)
            .filter(|&city| city != start)
            .collect();
        let tour = Tour::with_capacity(size);
        Ant { start, current: start, previous: start, allowed, tour }
    }
    pub fn current(&self) -> usize {
        self.current
    }
    pub fn previous(&self) -> usize {
        self.previous
    }
    pub fn tour(&self) -> &Tour {
        &self.tour
    }
    pub fn into_tour(self) -> Tour {
        self.tour
    }
    /// Greedy exploitation rule: argmax of pheromone × visibility^β over the
    /// allowed set, strict comparison, so exact ties keep the candidate met
    /// first in allowed order.
    pub fn step_greedy(&mut self, matrix: &EdgeMatrix, heuristic_weight: f64) {
        assert!(!self.allowed.is_empty(), "ant stepped with no city left to visit");
        let mut best_index = 0;
        let mut best_value = 0.0;
        for (index, &city) in self.allowed.iter().enumerate() {
            let trail = matrix.pheromone(self.current, city);
            let value = trail * visibility(matrix.length(self.current, city)).powf(heuristic_weight);
            if value > best_value {
                best_value = value;
                best_index = index;
            }
        }
        self.travel(best_index, matrix);
    }
    /// Roulette-wheel exploration rule over the allowed set, walked in
    /// allowed order. The last candidate catches any rounding shortfall of
    /// the cumulative sum.
    pub fn step_probabilistic(&mut self, matrix: &EdgeMatrix, pheromone_weight: f64,
                              heuristic_weight: f64, rng: &mut ChaChaRng) {
        assert!(!self.allowed.is_empty(), "ant stepped with no city left to visit");
        let total: f64 = self.allowed.iter()
            .map(|&city| self.desirability(matrix, city, pheromone_weight, heuristic_weight))
            .sum();
        let draw = rng.gen_range(0.0..1.0);
        let mut cumulative = 0.0;
        let mut chosen = self.allowed.len() - 1;
        for (index, &city) in self.allowed.iter().enumerate() {
            cumulative += self.desirability(matrix, city, pheromone_weight, heuristic_weight) / total;
            if draw < cumulative {
                chosen = index;
                break;
            }
        }
        self.travel(chosen, matrix);
    }
    /// Distance-only step for the nearest-neighbor bootstrap tour.
    pub fn step_nearest(&mut self, matrix: &EdgeMatrix) {
        let nearest = self.allowed.iter()
            .position_min_by_key(|&&city| OrderedFloat(matrix.length(self.current, city)))
            .expect("ant stepped with no city left to visit");
        self.travel(nearest, matrix);
    }
    /// Forced final hop back to the starting city, no stochastic choice.
    pub fn return_home(&mut self, matrix: &EdgeMatrix) {
        debug_assert!(self.allowed.is_empty(), "ant went home with cities left to visit");
        self.tour.push(self.current, self.start, matrix.length(self.current, self.start));
        self.previous = self.current;
        self.current = self.start;
    }
    /// Full independent construction, the EAS schedule.
    pub fn construct(&mut self, matrix: &EdgeMatrix, pheromone_weight: f64,
                     heuristic_weight: f64, rng: &mut ChaChaRng) {
        for _ in 0..matrix.size() - 1 {
            self.step_probabilistic(matrix, pheromone_weight, heuristic_weight, rng);
        }
        self.return_home(matrix);
    }
    fn desirability(&self, matrix: &EdgeMatrix, city: usize,
                    pheromone_weight: f64, heuristic_weight: f64) -> f64 {
        matrix.pheromone(self.current, city).powf(pheromone_weight)
            * visibility(matrix.length(self.current, city)).powf(heuristic_weight)
    }
    fn travel(&mut self, index: usize, matrix: &EdgeMatrix) {
        let next = self.allowed.remove(index);
        self.tour.push(self.current, next, matrix.length(self.current, next));
        self.previous = self.current;
        self.current = next;
    }
}

pub fn nearest_neighbor_tour(matrix: &EdgeMatrix, start: usize) -> Tour {
    let mut ant = Ant::new(start, matrix.size());
    for _ in 0..matrix.size() - 1 {
        ant.step_nearest(matrix);
    }
    ant.return_home(matrix);
    ant.into_tour()
}

fn visibility(length: f64) -> f64 {
    if length > 0.0 { 1.0 / length } else { ZERO_LENGTH_VISIBILITY }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::City;
    use rand::SeedableRng;

    fn unit_square() -> EdgeMatrix {
        let cities = vec![
            City::new(0, 0.0, 0.0),
            City::new(1, 0.0, 1.0),
            City::new(2, 1.0, 1.0),
            City::new(3, 1.0, 0.0),
        ];
        EdgeMatrix::new(&cities)
    }

    #[test]
    fn it_builds_nearest_neighbor_tours() {
        let matrix = unit_square();
        let tour = nearest_neighbor_tour(&matrix, 0);
        assert_eq!(tour.length(), 4.0);
        assert_eq!(tour.route(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn it_prefers_strong_trails_when_greedy() {
        let mut matrix = unit_square();
        matrix.initialize_uniform(1.0);
        matrix.reinforce(0, 3, 5.0);
        let mut ant = Ant::new(0, 4);
        ant.step_greedy(&matrix, 1.0);
        assert_eq!(ant.current(), 3);
        assert_eq!(ant.previous(), 0);
    }

    #[test]
    fn it_breaks_greedy_ties_in_allowed_order() {
        let mut matrix = unit_square();
        matrix.initialize_uniform(1.0);
        // cities 1 and 3 are both at distance 1 from city 0
        let mut ant = Ant::new(0, 4);
        ant.step_greedy(&matrix, 2.0);
        assert_eq!(ant.current(), 1);
    }

    #[test]
    fn it_completes_probabilistic_tours() {
        let mut matrix = unit_square();
        matrix.initialize_uniform(1.0);
        let mut rng = ChaChaRng::seed_from_u64(7);
        let mut ant = Ant::new(2, 4);
        ant.construct(&matrix, 1.0, 2.0, &mut rng);
        let tour = ant.into_tour();
        assert_eq!(tour.len(), 4);
        assert_eq!(tour.hops().last().map(|hop| hop.1), Some(2));
        let mut route = tour.route();
        route.sort_unstable();
        assert_eq!(route, vec![0, 1, 2, 3]);
    }

    #[test]
    fn it_survives_zero_length_edges() {
        let cities = vec![
            City::new(0, 0.0, 0.0),
            City::new(1, 0.0, 0.0),
            City::new(2, 1.0, 0.0),
        ];
        let mut matrix = EdgeMatrix::new(&cities);
        matrix.initialize_uniform(1.0);
        let mut greedy = Ant::new(0, 3);
        greedy.step_greedy(&matrix, 2.0);
        assert_eq!(greedy.current(), 1);
        let mut rng = ChaChaRng::seed_from_u64(7);
        let mut ant = Ant::new(0, 3);
        ant.construct(&matrix, 1.0, 2.0, &mut rng);
        assert!(ant.tour().length().is_finite());
        assert_eq!(ant.tour().len(), 3);
    }
}
