use std::fs;
use std::io::Read;

use crate::city::City;
use crate::error::{Error, Result};
use crate::io::options::SolverOptions;

/// Reads city records from the configured input file, or stdin when no
/// `--input` was given.
pub fn read_cities(options: &SolverOptions) -> Result<Vec<City>> {
    let text = match options.input_path() {
        Some(path) => fs::read_to_string(path).map_err(|e| {
            Error::invalid_input(format!("cannot read input file {}: {e}", path.display()))
        })?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    parse_cities(&text)
}

/// Parses one city per line as three whitespace-separated integers
/// `id x y`. Blank lines are skipped. Ids must be dense and zero-based in
/// input order; the distance matrix and visit bitset index by id.
pub fn parse_cities(text: &str) -> Result<Vec<City>> {
    let mut cities = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        let [id, x, y] = fields[..] else {
            return Err(Error::invalid_input(format!(
                "line {}: expected `id x y` but got {} fields",
                idx + 1,
                fields.len()
            )));
        };

        let id: usize = id.parse().map_err(|_| {
            Error::invalid_input(format!("line {}: invalid city id: {id}", idx + 1))
        })?;
        let x: i64 = x.parse().map_err(|_| {
            Error::invalid_input(format!("line {}: invalid x coordinate: {x}", idx + 1))
        })?;
        let y: i64 = y.parse().map_err(|_| {
            Error::invalid_input(format!("line {}: invalid y coordinate: {y}", idx + 1))
        })?;

        if id != cities.len() {
            return Err(Error::invalid_input(format!(
                "line {}: city ids must be dense and zero-based; expected {} but got {id}",
                idx + 1,
                cities.len()
            )));
        }
        cities.push(City::new(id, x, y));
    }
    Ok(cities)
}

#[cfg(test)]
mod tests {
    use super::parse_cities;

    #[test]
    fn well_formed_records_parse() {
        let cities = parse_cities("0 10 20\n1 -5 7\n2 0 0\n").unwrap();
        assert_eq!(cities.len(), 3);
        assert_eq!(cities[1].x, -5);
        assert_eq!(cities[1].y, 7);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let cities = parse_cities("\n0 1 2\n\n1 3 4\n\n").unwrap();
        assert_eq!(cities.len(), 2);
    }

    #[test]
    fn empty_input_yields_no_cities() {
        assert!(parse_cities("").unwrap().is_empty());
    }

    #[test]
    fn wrong_field_count_is_rejected() {
        assert!(parse_cities("0 1\n").is_err());
        assert!(parse_cities("0 1 2 3\n").is_err());
    }

    #[test]
    fn non_numeric_fields_are_rejected() {
        assert!(parse_cities("a 1 2\n").is_err());
        assert!(parse_cities("0 x 2\n").is_err());
        assert!(parse_cities("0 1 y\n").is_err());
    }

    #[test]
    fn non_dense_ids_are_rejected() {
        assert!(parse_cities("1 0 0\n").is_err());
        assert!(parse_cities("0 0 0\n2 1 1\n").is_err());
    }
}
