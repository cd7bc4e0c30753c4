use fixstep_core::{Grid, Observer, RightHandSide};

use super::{Action, Event, Interval, Method, Point, Solution, Status};

/// Integrates `f` across `grid` with the given method.
///
/// # Algorithm
///
/// 1. Record `y0` and emit [`Event::Initial`].
/// 2. Take the step size `h` once from the grid.
/// 3. For each interval `[t[i], t[i + 1]]`:
///    - Advance `y[i]` with [`Method::step`].
///    - Record `y[i + 1]`, noting the first non-finite value.
///    - Emit [`Event::Advanced`] with the method's stages.
///    - If the observer returns [`Action::StopEarly`], terminate.
/// 4. Return the solution with the full trajectory.
///
/// A single-point grid returns `[y0]` without evaluating `f`.
pub fn integrate<M, F, Obs>(method: &M, f: &F, y0: f64, grid: &Grid, mut observer: Obs) -> Solution
where
    M: Method,
    F: RightHandSide,
    Obs: Observer<Event<M::Stages>, Action>,
{
    let mut values = Vec::with_capacity(grid.len());
    values.push(y0);
    let mut first_non_finite = (!y0.is_finite()).then_some(0);

    let initial = Event::Initial(Point {
        t: grid.start(),
        y: y0,
    });
    if let Some(Action::StopEarly) = observer.observe(&initial) {
        return finish::<M>(Status::StoppedByObserver, values, first_non_finite);
    }

    let Some(h) = grid.step() else {
        return finish::<M>(Status::Complete, values, first_non_finite);
    };

    let mut y = y0;
    for (index, (t, t_next)) in grid.intervals().enumerate() {
        let step = index + 1;
        let (y_next, stages) = method.step(f, Interval { t, t_next, h }, y);

        values.push(y_next);
        if first_non_finite.is_none() && !y_next.is_finite() {
            first_non_finite = Some(step);
        }

        let event = Event::Advanced {
            step,
            from: Point { t, y },
            to: Point {
                t: t_next,
                y: y_next,
            },
            h,
            stages,
        };
        y = y_next;

        if let Some(Action::StopEarly) = observer.observe(&event) {
            return finish::<M>(Status::StoppedByObserver, values, first_non_finite);
        }
    }

    finish::<M>(Status::Complete, values, first_non_finite)
}

/// Integrates `f` across `grid` without observation.
///
/// This is a convenience wrapper around [`integrate`] that discards events.
pub fn integrate_unobserved<M, F>(method: &M, f: &F, y0: f64, grid: &Grid) -> Solution
where
    M: Method,
    F: RightHandSide,
{
    integrate(method, f, y0, grid, ())
}

fn finish<M: Method>(status: Status, values: Vec<f64>, first_non_finite: Option<usize>) -> Solution {
    let steps = values.len() - 1;
    Solution {
        status,
        values,
        steps,
        evaluations: steps * M::EVALUATIONS,
        first_non_finite,
    }
}
