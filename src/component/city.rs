#[derive(Clone, Debug)]
pub struct City {
    pub id: usize,
    pub x: f64,
    pub y: f64,
}

impl City {
    pub fn new(id: usize, x: f64, y: f64) -> Self {
        City { id, x, y }
    }
    pub fn distance_to(&self, other: &City) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_measures_euclidean_distance() {
        let origin = City::new(0, 0.0, 0.0);
        let corner = City::new(1, 3.0, 4.0);
        assert_eq!(origin.distance_to(&corner), 5.0);
        assert_eq!(corner.distance_to(&origin), 5.0);
        assert_eq!(origin.distance_to(&origin), 0.0);
    }
}
