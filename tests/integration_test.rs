use aco_tsp::solver::Solver;
use aco_tsp::utils::config::Config;
use aco_tsp::utils::tsplib;

fn setup(algorithm: &str) -> Solver {
    let cities = tsplib::load_instance("data/instance/square.tsp").unwrap();
    let mut config = Config::load_file("data/config/default.yaml").unwrap();
    config.algorithm = algorithm.to_string();
    config.known_optimal_length = 4.0;
    config.timeout = 30;
    Solver::new(cities, config).unwrap()
}

#[test]
fn it_runs_acs() {
    let mut solver = setup("acs");
    let outcome = solver.solve();
    assert_eq!(outcome.length, 4.0);
    let mut route = outcome.route;
    route.sort_unstable();
    assert_eq!(route, vec![0, 1, 2, 3]);
}

#[test]
fn it_runs_eas() {
    let mut solver = setup("eas");
    let outcome = solver.solve();
    assert_eq!(outcome.length, 4.0);
    let mut route = outcome.route;
    route.sort_unstable();
    assert_eq!(route, vec![0, 1, 2, 3]);
}

#[test]
fn it_reproduces_runs_with_a_fixed_seed() {
    let first = setup("eas").solve();
    let second = setup("eas").solve();
    assert_eq!(first.length, second.length);
    assert_eq!(first.route, second.route);
}
