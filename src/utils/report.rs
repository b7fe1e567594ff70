use std::io::{self, Write};
use std::time::Duration;

/// One completed run of a trial, as recorded by the sweep driver.
pub struct Trial {
    pub length: f64,
    pub elapsed: Duration,
}

/// Comma-delimited experiment log, one writer per output stream.
pub struct Report<W: Write> {
    out: W,
}

impl<W: Write> Report<W> {
    pub fn new(out: W) -> Self {
        Report { out }
    }
    pub fn preamble(&mut self, cities: usize, optimal: f64) -> io::Result<()> {
        writeln!(self.out, "cities, {}, optimal, {}", cities, optimal)
    }
    pub fn section(&mut self, title: &str) -> io::Result<()> {
        writeln!(self.out, "\n{}", title)
    }
    pub fn parameters(&mut self, alpha: f64, beta: f64, rho: f64) -> io::Result<()> {
        writeln!(self.out, "alpha, {}, beta, {}, rho, {}", alpha, beta, rho)
    }
    pub fn run(&mut self, nth: usize, length: f64, elapsed: Duration) -> io::Result<()> {
        writeln!(self.out, "run {}, {}, {:.3}", nth + 1, length, elapsed.as_secs_f64())
    }
    pub fn average(&mut self, trials: &[Trial], optimal: f64) -> io::Result<()> {
        let (length, time) = averaged(trials);
        writeln!(self.out, "average length, {}, average time, {:.3}, tour ratio, {}",
                 length, time, length / optimal)
    }
}

fn averaged(trials: &[Trial]) -> (f64, f64) {
    debug_assert!(!trials.is_empty());
    let runs = trials.len() as f64;
    let length = trials.iter().map(|trial| trial.length).sum::<f64>() / runs;
    let time = trials.iter().map(|trial| trial.elapsed.as_secs_f64()).sum::<f64>() / runs;
    (length, time)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_averages_trials() {
        let trials = vec![
            Trial { length: 4.0, elapsed: Duration::from_millis(100) },
            Trial { length: 6.0, elapsed: Duration::from_millis(300) },
        ];
        let (length, time) = averaged(&trials);
        assert_eq!(length, 5.0);
        assert!((time - 0.2).abs() < 1e-12);
    }

    #[test]
    fn it_writes_delimited_records() {
        let mut report = Report::new(Vec::new());
        report.preamble(4, 4.0).unwrap();
        report.run(0, 4.0, Duration::from_millis(250)).unwrap();
        let trials = vec![Trial { length: 4.0, elapsed: Duration::from_millis(250) }];
        report.average(&trials, 4.0).unwrap();
        let text = String::from_utf8(report.out).unwrap();
        assert!(text.contains("cities, 4, optimal, 4"));
        assert!(text.contains("run 1, 4, 0.250"));
        assert!(text.contains("tour ratio, 1"));
    }
}
