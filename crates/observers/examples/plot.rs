//! Interactive comparison of Heun and RK4 against closed-form solutions.
//!
//! Each mode integrates one built-in scenario with both methods and opens a
//! plot window overlaying the two numerical trajectories and the exact curve.
//!
//! # Usage
//!
//! ```text
//! cargo run --example plot --features plot -- population
//! cargo run --example plot --features plot -- tumor
//! cargo run --example plot --features plot -- fall
//! cargo run --example plot --features plot -- fall 13
//! ```
//!
//! # Modes
//!
//! - **population [points]**: logistic growth from 100 toward 5000.
//! - **tumor [points]**: Gompertz growth from 10 mm³ toward 1000 mm³.
//! - **fall [points]**: a skydiver accelerating to terminal velocity.
//!
//! The optional point count overrides the scenario's grid. Coarse grids such
//! as `fall 7` make Heun's drift visible while RK4 stays on the exact curve.

use std::error::Error;

use fixstep_models::Scenario;
use fixstep_observers::{PlotObserver, ShowConfig};
use fixstep_solvers::fixed_step::{heun, rk4};

fn main() -> Result<(), Box<dyn Error>> {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "population".into());
    let (mut scenario, y_label) = match mode.as_str() {
        "population" => (Scenario::population(), "N (individuals)"),
        "tumor" => (Scenario::tumor(), "V (mm³)"),
        "fall" => (Scenario::free_fall(), "v (m/s)"),
        other => {
            eprintln!("Unknown mode: {other}");
            eprintln!("Usage: plot [population|tumor|fall] [points]");
            std::process::exit(1);
        }
    };

    if let Some(points) = std::env::args().nth(2) {
        scenario.points = points.parse().unwrap_or_else(|_| {
            eprintln!("Invalid point count, expected an integer such as 21");
            std::process::exit(1);
        });
    }

    compare(&scenario, y_label)
}

/// Plots Heun, RK4, and the exact solution for one scenario.
fn compare(scenario: &Scenario, y_label: &str) -> Result<(), Box<dyn Error>> {
    let grid = scenario.grid()?;
    let mut obs = PlotObserver::<3>::new(["Heun", "RK4", "Exact"]);

    let heun = heun::solve_unobserved(&scenario.problem, scenario.initial, &grid);
    let rk4 = rk4::solve_unobserved(&scenario.problem, scenario.initial, &grid);

    obs.record_trajectory(0, grid.points(), &heun.values);
    obs.record_trajectory(1, grid.points(), &rk4.values);

    // A dense exact curve makes the numerical points easy to judge.
    let fine = fixstep_core::Grid::linspace(grid.start(), grid.end(), 1001)?;
    obs.record_trajectory(2, fine.points(), &scenario.exact(&fine));

    let h = grid.step().unwrap_or_default();
    obs.show(
        ShowConfig::new()
            .title(format!("{} (h = {h})", scenario.name))
            .legend()
            .x_label("t")
            .y_label(y_label),
    )?;

    Ok(())
}
