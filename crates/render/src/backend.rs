// Copyright 2025 Redis Laned Contributors
// SPDX-License-Identifier: Apache-2.0

//! The chart rendering capability interface.
//!
//! Charts are plain data: report modules fill in the description types
//! below and a [`ChartBackend`] turns them into image artifacts. All x
//! axes are categorical; series values align positionally with the tick
//! or cluster labels.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised by a chart backend.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The backend failed to draw or write the artifact.
    #[error("failed to render chart {path}: {message}")]
    Backend {
        /// Artifact path that could not be produced.
        path: PathBuf,
        /// Backend-specific failure description.
        message: String,
    },
}

impl RenderError {
    /// Wrap a backend failure for `path`.
    pub fn while_drawing(path: &Path, err: impl std::fmt::Display) -> Self {
        Self::Backend {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }
}

/// A named series with one value per x tick (or cluster).
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledSeries {
    /// Legend label.
    pub label: String,
    /// One value per tick, positionally aligned.
    pub points: Vec<f64>,
}

/// A single labelled bar.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    /// Tick label under the bar.
    pub label: String,
    /// Bar height.
    pub value: f64,
}

/// An annotation anchored to a data point inside the plot area.
#[derive(Debug, Clone, PartialEq)]
pub struct Callout {
    /// Annotation text.
    pub text: String,
    /// Index of the x tick the annotation points at.
    pub x_index: usize,
    /// Y coordinate of the annotated point, in data units.
    pub y: f64,
}

/// A line chart over a categorical x axis.
#[derive(Debug, Clone, PartialEq)]
pub struct LineChart {
    /// Chart title.
    pub title: String,
    /// X axis description.
    pub x_desc: String,
    /// Y axis description.
    pub y_desc: String,
    /// Tick labels along the x axis.
    pub x_ticks: Vec<String>,
    /// Line series, one point per tick.
    pub series: Vec<LabeledSeries>,
    /// Optional point-anchored annotation.
    pub callout: Option<Callout>,
}

/// A clustered bar chart: one cluster per tick, one bar per series.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedBarChart {
    /// Chart title.
    pub title: String,
    /// X axis description.
    pub x_desc: String,
    /// Y axis description.
    pub y_desc: String,
    /// Cluster labels along the x axis.
    pub clusters: Vec<String>,
    /// Bar series, one value per cluster.
    pub series: Vec<LabeledSeries>,
}

/// A simple bar chart with per-bar value labels.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    /// Chart title.
    pub title: String,
    /// Y axis description.
    pub y_desc: String,
    /// The bars, in display order.
    pub bars: Vec<Bar>,
    /// Suffix appended to each bar's value label, e.g. `" µs"`.
    pub value_suffix: String,
    /// Optional free-standing note drawn inside the plot area.
    pub note: Option<String>,
}

/// The rendering capability the reports depend on.
///
/// Implementations must write exactly one artifact per call to the
/// given path, overwriting any previous file.
pub trait ChartBackend {
    /// File extension (without dot) of artifacts this backend writes.
    fn extension(&self) -> &'static str;

    /// Render a line chart to `path`.
    fn draw_line_chart(&self, chart: &LineChart, path: &Path) -> Result<(), RenderError>;

    /// Render a clustered bar chart to `path`.
    fn draw_grouped_bar_chart(
        &self,
        chart: &GroupedBarChart,
        path: &Path,
    ) -> Result<(), RenderError>;

    /// Render an annotated bar chart to `path`.
    fn draw_bar_chart(&self, chart: &BarChart, path: &Path) -> Result<(), RenderError>;
}
