use std::time::Instant;

use log::info;

use tsp_kdnn::{logging, read_cities, solve_tsp, write_tour, Result, SolverOptions};

fn main() -> Result<()> {
    let now = Instant::now();
    let options = SolverOptions::from_args()?;
    logging::init_logger(&options)?;

    let cities = read_cities(&options)?;
    info!("input: n={}", cities.len());

    let tour = solve_tsp(&cities)?;
    write_tour(&tour, &options)?;

    info!(
        "output: n={} length={} time={:.2}s",
        tour.len(),
        tour.length,
        now.elapsed().as_secs_f32()
    );

    Ok(())
}
