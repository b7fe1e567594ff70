use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("colony size must be positive")]
    EmptyColony,
    #[error("iteration budget must be positive")]
    ZeroIterations,
    #[error("{0} must lie in {1}, got {2}")]
    ParameterOutOfRange(&'static str, &'static str, f64),
    #[error("an instance needs at least 2 cities, got {0}")]
    TooFewCities(usize),
    #[error("unknown algorithm `{0}`, expected `acs` or `eas`")]
    UnknownAlgorithm(String),
    #[error("failed to read `{0}`")]
    ReadFile(String, #[source] std::io::Error),
    #[error("malformed tsp instance: {0}")]
    MalformedInstance(String),
    #[error("malformed config: {0}")]
    MalformedConfig(#[from] serde_yaml::Error),
    #[error("failed to write report")]
    WriteReport(#[from] std::io::Error),
}
