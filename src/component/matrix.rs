use super::City;


/// One directed city pair. The length is fixed at construction; only the
/// pheromone level changes afterwards.
#[derive(Clone, Debug)]
pub struct Edge {
    source: usize,
    dest: usize,
    length: f64,
    pheromone: f64,
}

/// Dense N×N matrix of edges, one per ordered city pair. Owned by a single
/// run and handed by reference to the ants, never shared between runs.
#[derive(Clone)]
pub struct EdgeMatrix {
    edges: Vec<Edge>,
    size: usize,
}


impl Edge {
    fn new(source: &City, dest: &City) -> Self {
        Edge {
            source: source.id,
            dest: dest.id,
            length: source.distance_to(dest),
            pheromone: 0.0,
        }
    }
    pub fn source(&self) -> usize {
        self.source
    }
    pub fn dest(&self) -> usize {
        self.dest
    }
    pub fn length(&self) -> f64 {
        self.length
    }
    pub fn pheromone(&self) -> f64 {
        self.pheromone
    }
}

impl EdgeMatrix {
    pub fn new(cities: &[City]) -> Self {
        let size = cities.len();
        let mut edges = Vec::with_capacity(size * size);
        for source in cities {
            for dest in cities {
                edges.push(Edge::new(source, dest));
            }
        }
        EdgeMatrix { edges, size }
    }
    pub fn size(&self) -> usize {
        self.size
    }
    pub fn length(&self, source: usize, dest: usize) -> f64 {
        self.edges[self.index(source, dest)].length
    }
    pub fn pheromone(&self, source: usize, dest: usize) -> f64 {
        self.edges[self.index(source, dest)].pheromone
    }
    /// Reset every trail to the same constant, used once at setup.
    pub fn initialize_uniform(&mut self, value: f64) {
        debug_assert!(value.is_finite() && value >= 0.0);
        for edge in self.edges.iter_mut() {
            edge.pheromone = value;
        }
    }
    /// Proportional decay of all trails, applied once per iteration after
    /// every ant has finished its tour.
    pub fn evaporate(&mut self, factor: f64) {
        debug_assert!((0.0..=1.0).contains(&factor));
        for edge in self.edges.iter_mut() {
            edge.pheromone *= 1.0 - factor;
        }
    }
    /// Additive deposit, always written to both directions so the matrix
    /// stays pheromone-symmetric at rest.
    pub fn reinforce(&mut self, source: usize, dest: usize, amount: f64) {
        debug_assert!(amount.is_finite() && amount >= 0.0);
        let forward = self.index(source, dest);
        self.edges[forward].pheromone += amount;
        let backward = self.index(dest, source);
        self.edges[backward].pheromone += amount;
    }
    /// Decay toward a baseline level, applied the instant an edge is walked
    /// (ACS only). Distinct from end-of-iteration evaporation.
    pub fn wear(&mut self, source: usize, dest: usize, weight: f64, baseline: f64) {
        debug_assert!((0.0..=1.0).contains(&weight));
        for index in [self.index(source, dest), self.index(dest, source)] {
            let edge = &mut self.edges[index];
            edge.pheromone = (1.0 - weight) * edge.pheromone + weight * baseline;
        }
    }
    fn index(&self, source: usize, dest: usize) -> usize {
        debug_assert!(source < self.size && dest < self.size);
        source * self.size + dest
    }
}
