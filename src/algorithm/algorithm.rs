use std::time::Instant;
use enum_dispatch::enum_dispatch;
use super::acs::Acs;
use super::eas::Eas;
use crate::component::Tour;


#[enum_dispatch]
pub enum AlgorithmEnum {
    Acs,
    Eas,
}

#[enum_dispatch(AlgorithmEnum)]
pub trait Algorithm {
    /// Run construction/update cycles until the quality target is reached,
    /// the deadline passes, or the iteration budget is exhausted. The
    /// deadline is checked at iteration boundaries only, so an in-progress
    /// iteration always completes.
    fn run(&mut self, deadline: Instant);
    fn best_tour(&self) -> Option<&Tour>;
    fn best_length(&self) -> f64;
}
