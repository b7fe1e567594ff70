use std::fs;
use std::str::FromStr;

use super::error::Error;
use crate::component::City;

/// Load the city list of a TSPLIB-style instance: the `DIMENSION` header
/// fixes the count, `NODE_COORD_SECTION` lists `id x y` per line with
/// 1-based ids.
pub fn load_instance(path: &str) -> Result<Vec<City>, Error> {
    let text = fs::read_to_string(path)
        .map_err(|err| Error::ReadFile(path.to_string(), err))?;
    parse_instance(&text)
}

fn parse_instance(text: &str) -> Result<Vec<City>, Error> {
    let mut lines = text.lines().map(str::trim);
    let mut dimension = 0usize;
    loop {
        let line = lines.next()
            .ok_or_else(|| Error::MalformedInstance("missing NODE_COORD_SECTION".to_string()))?;
        if line == "NODE_COORD_SECTION" {
            break;
        }
        let mut tokens = line.split_whitespace();
        if let Some("DIMENSION") | Some("DIMENSION:") = tokens.next() {
            let count = tokens.last()
                .ok_or_else(|| Error::MalformedInstance("DIMENSION header has no value".to_string()))?;
            dimension = count.parse()
                .map_err(|_| Error::MalformedInstance(format!("bad DIMENSION value `{}`", count)))?;
        }
    }
    if dimension < 2 {
        return Err(Error::TooFewCities(dimension));
    }
    let mut cities = Vec::with_capacity(dimension);
    for _ in 0..dimension {
        let line = lines.next()
            .ok_or_else(|| Error::MalformedInstance("truncated NODE_COORD_SECTION".to_string()))?;
        let mut tokens = line.split_whitespace();
        let number: usize = field(&mut tokens, "city number")?;
        let x: f64 = field(&mut tokens, "x coordinate")?;
        let y: f64 = field(&mut tokens, "y coordinate")?;
        if number == 0 {
            return Err(Error::MalformedInstance("city numbers are 1-based".to_string()));
        }
        cities.push(City::new(number - 1, x, y));
    }
    Ok(cities)
}

fn field<'a, T, I>(tokens: &mut I, what: &str) -> Result<T, Error>
where
    T: FromStr,
    I: Iterator<Item = &'a str>,
{
    let token = tokens.next()
        .ok_or_else(|| Error::MalformedInstance(format!("missing {}", what)))?;
    token.parse()
        .map_err(|_| Error::MalformedInstance(format!("bad {} `{}`", what, token)))
}
