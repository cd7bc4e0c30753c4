//! Prints the first Heun and RK4 steps of every built-in scenario.
//!
//! ```text
//! cargo run --example narrate
//! cargo run --example narrate -- 3
//! ```
//!
//! The optional argument sets how many steps to narrate.

use std::error::Error;

use fixstep_models::Scenario;
use fixstep_observers::Narrator;
use fixstep_solvers::fixed_step::{heun, rk4};

fn main() -> Result<(), Box<dyn Error>> {
    let steps = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => 1,
    };

    for scenario in Scenario::presets() {
        let grid = scenario.grid()?;

        let mut narrator = Narrator::new(String::new()).steps(steps);
        let heun = heun::solve(&scenario.problem, scenario.initial, &grid, &mut narrator);
        println!("== {} / Heun ==", scenario.name);
        print!("{}", narrator.finish()?);
        println!("final: y({}) = {}\n", grid.end(), heun.last());

        let mut narrator = Narrator::new(String::new()).steps(steps);
        let rk4 = rk4::solve(&scenario.problem, scenario.initial, &grid, &mut narrator);
        println!("== {} / RK4 ==", scenario.name);
        print!("{}", narrator.finish()?);
        println!("final: y({}) = {}\n", grid.end(), rk4.last());
    }

    Ok(())
}
