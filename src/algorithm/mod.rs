mod base;
mod acs;
mod eas;
mod algorithm;

pub use algorithm::Algorithm;
pub use algorithm::AlgorithmEnum;
pub use acs::Acs;
pub use base::ant::nearest_neighbor_tour;
pub use base::ant::Ant;
pub use eas::Eas;
