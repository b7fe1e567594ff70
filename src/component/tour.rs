/// An ordered sequence of directed hops forming one ant's candidate
/// solution, with its running total length. A finished tour over N cities
/// holds exactly N hops and ends back at its starting city.
#[derive(Clone, Debug, Default)]
pub struct Tour {
    hops: Vec<(usize, usize)>,
    length: f64,
}

impl Tour {
    pub fn with_capacity(size: usize) -> Self {
        Tour { hops: Vec::with_capacity(size), length: 0.0 }
    }
    pub fn push(&mut self, source: usize, dest: usize, length: f64) {
        debug_assert!(length.is_finite() && length >= 0.0);
        self.hops.push((source, dest));
        self.length += length;
    }
    pub fn len(&self) -> usize {
        self.hops.len()
    }
    pub fn is_empty(&self) -> bool {
        self.hops.is_empty()
    }
    pub fn length(&self) -> f64 {
        self.length
    }
    pub fn hops(&self) -> &[(usize, usize)] {
        &self.hops
    }
    /// Visiting order, one entry per city for a completed tour.
    pub fn route(&self) -> Vec<usize> {
        self.hops.iter().map(|&(source, _)| source).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_accumulates_hop_lengths() {
        let mut tour = Tour::with_capacity(3);
        tour.push(0, 2, 1.5);
        tour.push(2, 1, 2.0);
        tour.push(1, 0, 0.5);
        assert_eq!(tour.len(), 3);
        assert_eq!(tour.length(), 4.0);
    }

    #[test]
    fn it_reports_the_visiting_order() {
        let mut tour = Tour::with_capacity(3);
        tour.push(1, 0, 1.0);
        tour.push(0, 2, 1.0);
        tour.push(2, 1, 1.0);
        assert_eq!(tour.route(), vec![1, 0, 2]);
        assert_eq!(tour.hops().last(), Some(&(2, 1)));
    }
}
