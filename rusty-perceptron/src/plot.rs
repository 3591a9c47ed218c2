//! Visualization of a trained 2-D classifier.
//!
//! The classifier hands out a [`VisualizationState`] and any [`Plotter`] can
//! consume it. The bitmap implementation needs the `plotting` feature.

use ndarray::ArrayView1;

use crate::{
    boundary::DecisionBoundary, classifier::Hyperparameters, error::Result,
    history::TrainingHistory,
};

/// Step between consecutive boundary points along the first feature.
pub const BOUNDARY_STEP: f64 = 0.1;

/// Read-only view of everything needed to draw a 2-D classifier.
#[derive(Debug, Clone, Copy)]
pub struct VisualizationState<'a> {
    pub history: &'a TrainingHistory,
    pub weights: ArrayView1<'a, f64>,
    pub boundary: DecisionBoundary,
    pub hyperparameters: Hyperparameters,
}

impl VisualizationState<'_> {
    /// Labeled points as `(x1, x2, label)`, bias column dropped.
    pub fn points(&self) -> Vec<(f64, f64, u8)> {
        self.history
            .iter()
            .map(|(x, y)| (x[1], x[2], y))
            .collect()
    }

    /// Boundary polyline over the observed range of the first feature.
    pub fn boundary_line(&self) -> Vec<(f64, f64)> {
        match self.history.column_range(1) {
            Some((lo, hi)) => self.boundary.sample_line(lo, hi, BOUNDARY_STEP),
            None => vec![],
        }
    }

    pub fn title(&self) -> String {
        format!(
            "Perceptron - Epochs: {}, Step Size: {}",
            self.hyperparameters.epochs, self.hyperparameters.step_size
        )
    }
}

/// Renders a classifier's state somewhere.
pub trait Plotter {
    fn render(&mut self, state: &VisualizationState<'_>) -> Result<()>;
}

#[cfg(feature = "plotting")]
pub use bitmap::{plot_epoch_errors, BitmapPlotter};

#[cfg(feature = "plotting")]
mod bitmap {
    use std::path::PathBuf;

    use plotters::prelude::*;

    use super::{Plotter, VisualizationState};
    use crate::{
        classifier::EpochErrors,
        error::{PerceptronError, Result},
    };

    const BOUNDARY_COLOR: RGBColor = RGBColor(211, 211, 211);

    fn plotting_error<E: std::fmt::Display>(e: E) -> PerceptronError {
        PerceptronError::Plotting(e.to_string())
    }

    /// Writes the scatter plot and boundary to a PNG file.
    pub struct BitmapPlotter {
        path: PathBuf,
        size: (u32, u32),
    }

    impl BitmapPlotter {
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self {
                path: path.into(),
                size: (1024, 768),
            }
        }

        pub fn with_size(mut self, width: u32, height: u32) -> Self {
            self.size = (width, height);
            self
        }
    }

    impl Plotter for BitmapPlotter {
        fn render(&mut self, state: &VisualizationState<'_>) -> Result<()> {
            let points = state.points();
            let (x_lo, x_hi) = state.history.column_range(1).unwrap_or((-1.0, 1.0));
            let (y_lo, y_hi) = state.history.column_range(2).unwrap_or((-1.0, 1.0));

            let root = BitMapBackend::new(&self.path, self.size).into_drawing_area();
            root.fill(&WHITE).map_err(plotting_error)?;

            let mut ctx = ChartBuilder::on(&root)
                .set_label_area_size(LabelAreaPosition::Left, 40)
                .set_label_area_size(LabelAreaPosition::Bottom, 40)
                .caption(state.title(), ("sans-serif", 30))
                .build_cartesian_2d((x_lo - 1.0)..(x_hi + 1.0), (y_lo - 1.0)..(y_hi + 1.0))
                .map_err(plotting_error)?;

            ctx.configure_mesh().draw().map_err(plotting_error)?;

            ctx.draw_series(points.iter().map(|(x1, x2, y)| {
                let color = if *y == 1 { GREEN } else { RED };
                Circle::new((*x1, *x2), 3, color.filled())
            }))
            .map_err(plotting_error)?;

            ctx.draw_series(DashedLineSeries::new(
                state.boundary_line(),
                6,
                4,
                BOUNDARY_COLOR.stroke_width(2),
            ))
            .map_err(plotting_error)?;

            root.present().map_err(plotting_error)?;
            tracing::info!(path = %self.path.display(), points = points.len(), "plot written");
            Ok(())
        }
    }

    /// Misclassified examples per batch epoch.
    pub fn plot_epoch_errors(epoch_errors: &[EpochErrors], path: &str) -> Result<()> {
        let max_epoch = epoch_errors.iter().map(|e| e.epoch).max().unwrap_or(0);
        let max_errors = epoch_errors
            .iter()
            .map(|e| e.misclassified)
            .max()
            .unwrap_or(0);

        let root = BitMapBackend::new(path, (1920, 1080)).into_drawing_area();
        root.fill(&WHITE).map_err(plotting_error)?;

        let mut ctx = ChartBuilder::on(&root)
            .set_label_area_size(LabelAreaPosition::Left, 40)
            .set_label_area_size(LabelAreaPosition::Bottom, 40)
            .caption("Misclassified per epoch", ("sans-serif", 40))
            .build_cartesian_2d(0..(max_epoch + 1), 0..(max_errors + 1))
            .map_err(plotting_error)?;

        ctx.configure_mesh().draw().map_err(plotting_error)?;

        ctx.draw_series(LineSeries::new(
            epoch_errors.iter().map(<(usize, usize)>::from),
            &GREEN,
        ))
        .map_err(plotting_error)?;

        root.present().map_err(plotting_error)?;
        Ok(())
    }
}
