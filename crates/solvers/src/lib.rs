//! Fixed-step integrators for scalar ODEs.
//!
//! The integrators advance `dy/dt = f(t, y)` across a uniform [`Grid`],
//! producing one value per grid point. All of them share the driver in
//! [`fixed_step`] and differ only in their single-step formula:
//!
//! - [`fixed_step::heun`]: second-order predictor-corrector
//! - [`fixed_step::rk4`]: classical fourth-order Runge-Kutta
//! - [`fixed_step::euler`]: first-order explicit Euler
//!
//! For plain slices of time points, [`solve_heun`] and [`solve_rk4`] validate
//! the points and return just the trajectory.

pub mod fixed_step;

use fixstep_core::{Grid, RightHandSide};

use fixed_step::{Error, heun, rk4};

/// Integrates `f` over the time points `t` with Heun's method.
///
/// Returns one value per time point, starting with `y0`.
///
/// # Errors
///
/// Returns [`Error::InvalidGrid`] if `t` is empty, contains non-finite values,
/// does not strictly increase, or is not uniformly spaced.
pub fn solve_heun<F: RightHandSide>(f: &F, y0: f64, t: &[f64]) -> Result<Vec<f64>, Error> {
    let grid = Grid::try_from(t)?;
    Ok(heun::solve_unobserved(f, y0, &grid).values)
}

/// Integrates `f` over the time points `t` with classical RK4.
///
/// Returns one value per time point, starting with `y0`.
///
/// # Errors
///
/// Returns [`Error::InvalidGrid`] if `t` is empty, contains non-finite values,
/// does not strictly increase, or is not uniformly spaced.
pub fn solve_rk4<F: RightHandSide>(f: &F, y0: f64, t: &[f64]) -> Result<Vec<f64>, Error> {
    let grid = Grid::try_from(t)?;
    Ok(rk4::solve_unobserved(f, y0, &grid).values)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use fixstep_core::GridError;

    #[test]
    fn slice_entry_points_return_full_trajectories() {
        let t = [0.0, 0.5, 1.0, 1.5];
        let f = |_t: f64, y: f64| -y;

        let heun = solve_heun(&f, 1.0, &t).unwrap();
        let rk4 = solve_rk4(&f, 1.0, &t).unwrap();

        assert_eq!(heun.len(), t.len());
        assert_eq!(rk4.len(), t.len());
        assert_eq!(heun[0], 1.0);
        assert_eq!(rk4[0], 1.0);
        assert_relative_eq!(rk4[3], (-1.5_f64).exp(), max_relative = 1e-2);
    }

    #[test]
    fn slice_entry_points_reject_invalid_grids() {
        let f = |_t: f64, y: f64| y;

        assert!(matches!(
            solve_heun(&f, 1.0, &[]),
            Err(Error::InvalidGrid(GridError::Empty))
        ));
        assert!(matches!(
            solve_rk4(&f, 1.0, &[0.0, 0.1, 0.3]),
            Err(Error::InvalidGrid(GridError::NonUniform { index: 2 }))
        ));
        assert!(matches!(
            solve_rk4(&f, 1.0, &[0.0, -0.1]),
            Err(Error::InvalidGrid(GridError::NotIncreasing { index: 1 }))
        ));
    }

    #[test]
    fn single_point_slice_is_valid() {
        let f = |_t: f64, _y: f64| -> f64 { unreachable!("no steps to take") };

        assert_eq!(solve_heun(&f, 4.2, &[1.0]).unwrap(), vec![4.2]);
        assert_eq!(solve_rk4(&f, 4.2, &[1.0]).unwrap(), vec![4.2]);
    }
}
