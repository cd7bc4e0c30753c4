//! Plotting observer for comparing trajectories.
//!
//! See [`PlotObserver`] and [`Plottable`] for usage.

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};
use fixstep_core::Observer;
use fixstep_solvers::fixed_step::Event;

/// Configuration for rendering a [`PlotObserver`] result.
///
/// Construct with [`ShowConfig::new`] and chain builder methods as needed.
///
/// # Example
///
/// ```ignore
/// obs.show(ShowConfig::new().title("Logistic growth").legend().x_label("t"))?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct ShowConfig {
    title: Option<String>,
    legend: bool,
    x_label: Option<String>,
    y_label: Option<String>,
}

impl ShowConfig {
    /// Creates a config with no title, no legend, and unlabeled axes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enables a legend labeling each trace by name.
    #[must_use]
    pub fn legend(mut self) -> Self {
        self.legend = true;
        self
    }

    /// Labels the horizontal axis.
    #[must_use]
    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = Some(label.into());
        self
    }

    /// Labels the vertical axis.
    #[must_use]
    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = Some(label.into());
        self
    }
}

/// Extracts plottable data from an integrator event.
///
/// Return `None` from [`x`][Plottable::x] to skip the event entirely, or
/// `None` in a trace slot to skip that trace for the event.
///
/// Every [`fixed_step::Event`](Event) is `Plottable<1>`, plotting the state
/// against time.
pub trait Plottable<const N: usize> {
    /// The x-axis value for this event, or `None` to skip recording entirely.
    fn x(&self) -> Option<f64>;

    /// The y-axis values for each trace.
    fn traces(&self) -> [Option<f64>; N];
}

impl<S> Plottable<1> for Event<S> {
    fn x(&self) -> Option<f64> {
        Some(self.point().t)
    }

    fn traces(&self) -> [Option<f64>; 1] {
        let y = self.point().y;
        [y.is_finite().then_some(y)]
    }
}

/// An observer that collects traces and displays them in an egui window.
///
/// The const generic `N` is the number of traces. Data arrives either from
/// observed events, by passing `&mut PlotObserver` to an integrator, or
/// explicitly through [`record`][PlotObserver::record] and
/// [`record_trajectory`][PlotObserver::record_trajectory].
///
/// # Example
///
/// ```ignore
/// let grid = scenario.grid()?;
/// let mut obs = PlotObserver::<1>::new(["Heun"]);
/// heun::solve(&scenario.problem, scenario.initial, &grid, &mut obs);
/// obs.show(ShowConfig::new().title(&scenario.name))?;
/// ```
#[derive(Debug, Clone)]
pub struct PlotObserver<const N: usize> {
    names: [String; N],
    data: [Vec<[f64; 2]>; N],
}

impl<const N: usize> PlotObserver<N> {
    /// Creates an observer with the given trace names.
    pub fn new(names: [&str; N]) -> Self {
        Self {
            names: names.map(str::to_owned),
            data: std::array::from_fn(|_| Vec::new()),
        }
    }

    /// Records a single data point across all traces.
    ///
    /// For each trace slot, `None` skips recording for that trace.
    pub fn record(&mut self, x: f64, traces: [Option<f64>; N]) {
        for (points, y) in self.data.iter_mut().zip(traces) {
            if let Some(y) = y {
                points.push([x, y]);
            }
        }
    }

    /// Appends a whole trajectory to one trace.
    ///
    /// Pairs are taken up to the shorter of `times` and `values`, and
    /// non-finite values are skipped.
    ///
    /// # Panics
    ///
    /// Panics if `trace >= N`.
    pub fn record_trajectory(&mut self, trace: usize, times: &[f64], values: &[f64]) {
        let points = &mut self.data[trace];
        points.extend(
            times
                .iter()
                .zip(values)
                .filter(|(_, y)| y.is_finite())
                .map(|(&t, &y)| [t, y]),
        );
    }

    /// Opens a blocking egui window displaying all collected traces.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self, config: ShowConfig) -> Result<(), eframe::Error> {
        let options = eframe::NativeOptions::default();
        let title = config.title.clone().unwrap_or_default();
        let traces: Vec<(String, Vec<[f64; 2]>)> = self.names.into_iter().zip(self.data).collect();

        eframe::run_native(
            &title,
            options,
            Box::new(move |_cc| Ok(Box::new(PlotApp { traces, config }))),
        )
    }
}

impl<const N: usize, E, A> Observer<E, A> for PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if let Some(x) = event.x() {
            self.record(x, event.traces());
        }
        None
    }
}

/// Allows `&mut PlotObserver<N>` to be passed to integrators that take an
/// observer by value, so [`PlotObserver::show`] can be called after the run.
impl<const N: usize, E, A> Observer<E, A> for &mut PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}

struct PlotApp {
    traces: Vec<(String, Vec<[f64; 2]>)>,
    config: ShowConfig,
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut plot = Plot::new("plot_observer");
            if self.config.legend {
                plot = plot.legend(Legend::default());
            }
            if let Some(label) = &self.config.x_label {
                plot = plot.x_axis_label(label.clone());
            }
            if let Some(label) = &self.config.y_label {
                plot = plot.y_axis_label(label.clone());
            }
            plot.show(ui, |plot_ui| {
                for (name, points) in &self.traces {
                    let points: PlotPoints = points.iter().copied().collect();
                    plot_ui.line(Line::new(points).name(name));
                }
            });
        });
    }
}
