use std::fmt::Write as _;
use std::fs;
use std::io::Write as _;

use crate::error::{Error, Result};
use crate::io::options::SolverOptions;
use crate::tour::Tour;

/// Writes the tour to the configured destination: first line the rounded
/// total length, then one city id per line in visit order.
pub fn write_tour(tour: &Tour, options: &SolverOptions) -> Result<()> {
    let rendered = render_tour(tour);
    match options.output_path() {
        Some(path) => fs::write(&path, rendered).map_err(|e| {
            Error::other(format!("cannot write tour to {}: {e}", path.display()))
        }),
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(rendered.as_bytes())?;
            Ok(())
        }
    }
}

fn render_tour(tour: &Tour) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", tour.length);
    for id in &tour.route {
        let _ = writeln!(out, "{id}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::render_tour;
    use crate::tour::Tour;

    #[test]
    fn length_comes_first_then_ids_in_visit_order() {
        let tour = Tour::new(vec![1, 0, 3, 2], 4);
        assert_eq!(render_tour(&tour), "4\n1\n0\n3\n2\n");
    }

    #[test]
    fn empty_tour_renders_only_the_length() {
        assert_eq!(render_tour(&Tour::default()), "0\n");
    }
}
