//! Trajectory plot for visualizing where searches went.
//!
//! See [`TrajectoryPlot`] for usage.

use eframe::egui::{self, Color32};
use egui_plot::{HLine, Legend, Line, MarkerShape, Plot, PlotPoints, Points, VLine};

/// Colors cycled through for successive trajectories.
const PALETTE: [Color32; 4] = [
    Color32::from_rgb(214, 39, 40),
    Color32::from_rgb(44, 160, 44),
    Color32::from_rgb(148, 103, 189),
    Color32::from_rgb(255, 127, 14),
];

const CURVE_COLOR: Color32 = Color32::from_rgb(31, 119, 180);

/// Configuration for rendering a [`TrajectoryPlot`].
///
/// Construct with [`ShowConfig::new`] and chain builder methods as needed.
///
/// # Example
///
/// ```ignore
/// plot.show(ShowConfig::new().title("Hill climbing").legend())?;
/// ```
pub struct ShowConfig {
    title: Option<String>,
    legend: bool,
    axes: bool,
}

impl ShowConfig {
    /// Creates a new `ShowConfig` with defaults: no title, no legend, axes drawn.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: None,
            legend: false,
            axes: true,
        }
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enables a legend labeling the curve, each path, and each root.
    #[must_use]
    pub fn legend(mut self) -> Self {
        self.legend = true;
        self
    }

    /// Hides the faint `x = 0` and `y = 0` reference lines.
    #[must_use]
    pub fn hide_axes(mut self) -> Self {
        self.axes = false;
        self
    }
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// The path one search took, as `(x, f(x))` points.
struct Trajectory {
    name: String,
    points: Vec<[f64; 2]>,
}

impl Trajectory {
    /// The final estimate is the last point of the path.
    fn end(&self) -> Option<[f64; 2]> {
        self.points.last().copied()
    }
}

/// A function curve overlaid with the trajectories of searches over it.
///
/// Create with [`TrajectoryPlot::new`], which samples the function over a
/// range. Add one trajectory per search with
/// [`add_trajectory`][TrajectoryPlot::add_trajectory], passing the search's
/// path. Each trajectory is drawn as connected markers, and its last point is
/// marked as the root estimate. Call [`show`][TrajectoryPlot::show] to open
/// the window.
///
/// # Example
///
/// ```ignore
/// let f = |x: f64| -x * x + 4.0 * x + 2.0;
/// let mut plot = TrajectoryPlot::new("f(x)", f, [0.0, 4.0], 400);
///
/// for start in [1.0, 3.0] {
///     let solution = hill_climbing::search(f, start, &Config::default());
///     plot.add_trajectory(format!("Path from x={start:.1}"), &solution.path, f);
/// }
///
/// plot.show(ShowConfig::new().title("Hill climbing").legend())?;
/// ```
pub struct TrajectoryPlot {
    curve_name: String,
    curve: Vec<[f64; 2]>,
    trajectories: Vec<Trajectory>,
}

impl TrajectoryPlot {
    /// Samples `f` at `samples` evenly spaced points over `range`, endpoints
    /// included.
    ///
    /// Fewer than two samples yields a single point at the start of the range.
    pub fn new(
        curve_name: impl Into<String>,
        f: impl Fn(f64) -> f64,
        range: [f64; 2],
        samples: usize,
    ) -> Self {
        let [lo, hi] = range;
        let curve = if samples < 2 {
            vec![[lo, f(lo)]]
        } else {
            #[allow(clippy::cast_precision_loss)]
            let step = (hi - lo) / (samples - 1) as f64;
            (0..samples)
                .map(|i| {
                    #[allow(clippy::cast_precision_loss)]
                    let x = lo + step * i as f64;
                    [x, f(x)]
                })
                .collect()
        };

        Self {
            curve_name: curve_name.into(),
            curve,
            trajectories: Vec::new(),
        }
    }

    /// Records a search path, evaluating `f` at every visited point.
    ///
    /// An empty path is ignored.
    pub fn add_trajectory(&mut self, name: impl Into<String>, path: &[f64], f: impl Fn(f64) -> f64) {
        if path.is_empty() {
            return;
        }
        self.trajectories.push(Trajectory {
            name: name.into(),
            points: path.iter().map(|&x| [x, f(x)]).collect(),
        });
    }

    /// Returns the number of recorded trajectories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.trajectories.len()
    }

    /// Returns `true` if no trajectory has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trajectories.is_empty()
    }

    /// Opens a blocking egui window displaying the curve and all trajectories.
    ///
    /// Blocks until the window is closed by the user.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self, config: ShowConfig) -> Result<(), eframe::Error> {
        let options = eframe::NativeOptions::default();
        let title = config.title.unwrap_or_default();

        eframe::run_native(
            &title,
            options,
            Box::new(move |_cc| {
                Ok(Box::new(TrajectoryApp {
                    plot: self,
                    legend: config.legend,
                    axes: config.axes,
                }))
            }),
        )
    }
}

/// The egui [`eframe::App`] that renders a [`TrajectoryPlot`].
struct TrajectoryApp {
    plot: TrajectoryPlot,
    legend: bool,
    axes: bool,
}

impl eframe::App for TrajectoryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut plot = Plot::new("trajectory_plot")
                .x_axis_label("x")
                .y_axis_label("f(x)");
            if self.legend {
                plot = plot.legend(Legend::default());
            }
            let axes = self.axes;
            let data = &self.plot;

            plot.show(ui, |plot_ui| {
                if axes {
                    let faint = Color32::from_gray(160);
                    plot_ui.hline(HLine::new(0.0).color(faint));
                    plot_ui.vline(VLine::new(0.0).color(faint));
                }

                let curve: PlotPoints = data.curve.iter().copied().collect();
                plot_ui.line(Line::new(curve).color(CURVE_COLOR).name(&data.curve_name));

                for (trajectory, color) in data.trajectories.iter().zip(PALETTE.iter().cycle()) {
                    let path: PlotPoints = trajectory.points.iter().copied().collect();
                    plot_ui.line(Line::new(path).color(*color).name(&trajectory.name));

                    let markers: PlotPoints = trajectory.points.iter().copied().collect();
                    plot_ui.points(
                        Points::new(markers)
                            .color(*color)
                            .radius(3.0)
                            .name(&trajectory.name),
                    );

                    if let Some(end) = trajectory.end() {
                        plot_ui.points(
                            Points::new(vec![end])
                                .color(*color)
                                .shape(MarkerShape::Asterisk)
                                .radius(9.0)
                                .name(format!("Root ≈ {:.2}", end[0])),
                        );
                    }
                }
            });
        });
    }
}
