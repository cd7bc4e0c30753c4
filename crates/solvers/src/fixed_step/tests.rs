use std::cell::Cell;

use approx::assert_relative_eq;

use fixstep_core::Grid;

use super::{
    Action, Event, Method, Point, Status, euler::Euler, heun, heun::Heun, integrate,
    integrate_unobserved, rk4, rk4::Rk4,
};

/// Endpoint error for `dy/dt = -1.5 y`, `y(0) = 1`, integrated to `t = 2`.
fn decay_error<M: Method>(method: &M, steps: usize) -> f64 {
    let lambda = 1.5;
    let grid = Grid::linspace(0.0, 2.0, steps + 1).unwrap();
    let f = move |_t: f64, y: f64| -lambda * y;

    let solution = integrate_unobserved(method, &f, 1.0, &grid);
    (solution.last() - (-lambda * 2.0_f64).exp()).abs()
}

/// Ratios of endpoint errors for 20 → 40 and 40 → 80 steps.
fn convergence_ratios<M: Method>(method: &M) -> [f64; 2] {
    let coarse = decay_error(method, 20);
    let medium = decay_error(method, 40);
    let fine = decay_error(method, 80);
    [coarse / medium, medium / fine]
}

#[test]
fn halving_the_step_shows_each_method_order() {
    for ratio in convergence_ratios(&Euler) {
        assert!((1.8..2.2).contains(&ratio), "Euler ratio {ratio}");
    }
    for ratio in convergence_ratios(&Heun) {
        assert!((3.6..4.6).contains(&ratio), "Heun ratio {ratio}");
    }
    for ratio in convergence_ratios(&Rk4) {
        assert!((14.0..18.5).contains(&ratio), "RK4 ratio {ratio}");
    }
}

#[test]
fn rk4_is_more_accurate_than_heun_at_equal_step() {
    for steps in [10, 20, 40] {
        assert!(decay_error(&Rk4, steps) < decay_error(&Heun, steps));
        assert!(decay_error(&Heun, steps) < decay_error(&Euler, steps));
    }
}

#[test]
fn single_point_grid_returns_initial_value_without_evaluating() {
    let grid = Grid::linspace(0.0, 1.0, 1).unwrap();
    let calls = Cell::new(0_usize);
    let f = |_t: f64, y: f64| {
        calls.set(calls.get() + 1);
        y
    };

    let heun = heun::solve_unobserved(&f, 7.5, &grid);
    let rk4 = rk4::solve_unobserved(&f, 7.5, &grid);

    assert_eq!(heun.values, vec![7.5]);
    assert_eq!(rk4.values, vec![7.5]);
    assert_eq!(heun.status, Status::Complete);
    assert_eq!(heun.evaluations, 0);
    assert_eq!(calls.get(), 0);
}

#[test]
fn evaluation_counts_match_stage_counts() {
    let grid = Grid::linspace(0.0, 5.0, 26).unwrap();
    let calls = Cell::new(0_usize);
    let f = |_t: f64, y: f64| {
        calls.set(calls.get() + 1);
        -y
    };

    let heun = heun::solve_unobserved(&f, 1.0, &grid);
    assert_eq!(calls.replace(0), 2 * 25);
    assert_eq!(heun.evaluations, 2 * 25);

    let rk4 = rk4::solve_unobserved(&f, 1.0, &grid);
    assert_eq!(calls.get(), 4 * 25);
    assert_eq!(rk4.evaluations, 4 * 25);
}

#[test]
fn trajectory_matches_grid_and_keeps_initial_value() {
    let grid = Grid::linspace(-1.0, 3.0, 17).unwrap();
    let y0 = 0.123_456_789;
    let f = |t: f64, y: f64| t.sin() * y;

    for solution in [
        heun::solve_unobserved(&f, y0, &grid),
        rk4::solve_unobserved(&f, y0, &grid),
    ] {
        assert_eq!(solution.values.len(), grid.len());
        assert_eq!(solution.steps, grid.steps());
        assert_eq!(solution.values[0].to_bits(), y0.to_bits());
    }
}

#[test]
fn equilibrium_start_stays_constant() {
    // The logistic carrying capacity is an equilibrium.
    let grid = Grid::linspace(0.0, 20.0, 101).unwrap();
    let f = |_t: f64, n: f64| 0.000_095 * n * (5000.0 - n);

    for solution in [
        heun::solve_unobserved(&f, 5000.0, &grid),
        rk4::solve_unobserved(&f, 5000.0, &grid),
    ] {
        assert!(solution.values.iter().all(|&n| n == 5000.0));
    }
}

#[test]
fn repeated_runs_are_bit_identical() {
    let grid = Grid::linspace(0.0, 10.0, 51).unwrap();
    let f = |t: f64, y: f64| (t * y).cos() - 0.3 * y;

    let first = rk4::solve_unobserved(&f, 0.5, &grid);
    let second = rk4::solve_unobserved(&f, 0.5, &grid);
    let bits = |values: &[f64]| values.iter().map(|v| v.to_bits()).collect::<Vec<_>>();

    assert_eq!(bits(&first.values), bits(&second.values));
    assert_eq!(
        bits(&heun::solve_unobserved(&f, 0.5, &grid).values),
        bits(&heun::solve_unobserved(&f, 0.5, &grid).values)
    );
}

#[test]
fn events_cover_initial_point_and_every_step() {
    let grid = Grid::linspace(0.0, 1.0, 5).unwrap();
    let f = |_t: f64, y: f64| y;

    let mut events = Vec::new();
    let solution = integrate(&Heun, &f, 1.0, &grid, |event: &heun::Event| {
        events.push(*event);
        None
    });

    assert_eq!(events.len(), 5);
    assert_eq!(events[0], Event::Initial(Point { t: 0.0, y: 1.0 }));
    assert_eq!(
        events.iter().map(Event::step).collect::<Vec<_>>(),
        vec![0, 1, 2, 3, 4]
    );

    for (i, event) in events.iter().enumerate().skip(1) {
        let Event::Advanced { from, to, h, .. } = event else {
            panic!("expected a step event");
        };
        assert_relative_eq!(*h, 0.25);
        assert_eq!(from.y, solution.values[i - 1]);
        assert_eq!(to.y, solution.values[i]);
        assert_eq!(to.t, grid.points()[i]);
    }
}

#[test]
fn observer_can_stop_early() {
    let grid = Grid::linspace(0.0, 10.0, 101).unwrap();
    let f = |_t: f64, y: f64| 0.1 * y;

    let solution = rk4::solve(&f, 1.0, &grid, |event: &rk4::Event| {
        (event.step() >= 5).then_some(Action::StopEarly)
    });

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.steps, 5);
    assert_eq!(solution.values.len(), 6);
    assert_eq!(solution.evaluations, 20);
}

#[test]
fn observer_can_stop_before_the_first_step() {
    let grid = Grid::linspace(0.0, 1.0, 11).unwrap();
    let f = |_t: f64, _y: f64| -> f64 { panic!("should not be evaluated") };

    let solution = heun::solve(&f, 3.0, &grid, |_event: &heun::Event| {
        Some(Action::StopEarly)
    });

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.values, vec![3.0]);
    assert_eq!(solution.evaluations, 0);
}

#[test]
fn non_finite_values_propagate_and_are_reported() {
    // The slope turns NaN at t = 0.5, which Heun's corrector first samples
    // at the end of step 5.
    let grid = Grid::linspace(0.0, 1.0, 11).unwrap();
    let f = |t: f64, y: f64| if t >= 0.5 { f64::NAN } else { y };

    let mut non_finite_steps = Vec::new();
    let solution = heun::solve(&f, 1.0, &grid, |event: &heun::Event| {
        if !event.is_finite() {
            non_finite_steps.push(event.step());
        }
        None
    });

    assert_eq!(solution.status, Status::Complete);
    assert_eq!(solution.values.len(), 11);
    assert_eq!(solution.first_non_finite, Some(5));
    assert!(!solution.is_finite());
    assert!(solution.values[..5].iter().all(|y| y.is_finite()));
    assert!(solution.values[5..].iter().all(|y| y.is_nan()));
    assert_eq!(non_finite_steps, vec![5, 6, 7, 8, 9, 10]);
}

#[test]
fn non_finite_initial_value_is_reported_at_index_zero() {
    let grid = Grid::linspace(0.0, 1.0, 3).unwrap();

    let solution = rk4::solve_unobserved(&|_t: f64, y: f64| y, f64::INFINITY, &grid);

    assert_eq!(solution.first_non_finite, Some(0));
    assert_eq!(solution.values.len(), 3);
}

#[test]
fn finite_runs_report_no_non_finite_index() {
    let grid = Grid::linspace(0.0, 1.0, 11).unwrap();

    let solution = heun::solve_unobserved(&|_t: f64, y: f64| -y, 1.0, &grid);

    assert!(solution.is_finite());
    assert_eq!(solution.first_non_finite, None);
}

#[test]
fn method_constants_describe_each_formula() {
    assert_eq!((Euler::NAME, Euler::ORDER, Euler::EVALUATIONS), ("Euler", 1, 1));
    assert_eq!((Heun::NAME, Heun::ORDER, Heun::EVALUATIONS), ("Heun", 2, 2));
    assert_eq!((Rk4::NAME, Rk4::ORDER, Rk4::EVALUATIONS), ("RK4", 4, 4));
}
