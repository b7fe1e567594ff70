mod city;
mod matrix;
mod tour;

pub use city::City;
pub use matrix::Edge;
pub use matrix::EdgeMatrix;
pub use tour::Tour;
