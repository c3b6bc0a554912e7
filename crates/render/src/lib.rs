// Copyright 2025 Redis Laned Contributors
// SPDX-License-Identifier: Apache-2.0

//! Chart rendering capability for lanechart.
//!
//! This crate is the presentation seam of the pipeline: report modules
//! describe charts as data ([`LineChart`], [`GroupedBarChart`],
//! [`BarChart`]) and hand them to a [`ChartBackend`]. The bundled
//! [`PlottersBackend`] renders SVG artifacts; any other backend can be
//! substituted without touching the report logic.
//!
//! Styling is an explicit [`ChartStyle`] value passed to the backend at
//! construction, scoped to one invocation. There is no process-wide
//! mutable rendering configuration.

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod backend;
pub mod plotters_backend;
pub mod style;

pub use backend::{
    Bar, BarChart, Callout, ChartBackend, GroupedBarChart, LabeledSeries, LineChart, RenderError,
};
pub use plotters_backend::PlottersBackend;
pub use style::{ChartStyle, Rgb};
