pub mod algorithm;
pub mod component;
pub mod solver;
pub mod utils;
