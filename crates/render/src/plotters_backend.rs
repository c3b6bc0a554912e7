// Copyright 2025 Redis Laned Contributors
// SPDX-License-Identifier: Apache-2.0

//! Plotters-based SVG rendering.
//!
//! Implements [`ChartBackend`] with the plotters SVG backend. All three
//! chart kinds share the same skeleton: white canvas, categorical x
//! axis with index-based ticks, mesh, series, then legend and callouts.

use crate::backend::{BarChart, ChartBackend, GroupedBarChart, LineChart, RenderError};
use crate::style::{ChartStyle, Rgb};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;

const X_LABEL_AREA: u32 = 60;
const Y_LABEL_AREA: u32 = 90;

/// [`ChartBackend`] implementation rendering SVG artifacts via plotters.
pub struct PlottersBackend {
    style: ChartStyle,
}

impl PlottersBackend {
    /// Create a backend with the given style configuration.
    pub fn new(style: ChartStyle) -> Self {
        Self { style }
    }

    fn series_color(&self, index: usize) -> RGBColor {
        to_backend_color(self.style.series_color(index))
    }

    fn try_line_chart(
        &self,
        chart: &LineChart,
        path: &Path,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let root =
            SVGBackend::new(path, (self.style.width, self.style.height)).into_drawing_area();
        root.fill(&WHITE)?;

        let ticks = chart.x_ticks.len();
        let y_max = padded_max(
            chart.series.iter().flat_map(|s| s.points.iter().copied()),
            1.25,
        );

        let mut area = ChartBuilder::on(&root)
            .caption(
                chart.title.as_str(),
                ("sans-serif", self.style.title_font_size),
            )
            .margin(self.style.margin)
            .x_label_area_size(X_LABEL_AREA)
            .y_label_area_size(Y_LABEL_AREA)
            .build_cartesian_2d(-0.5..(ticks as f64 - 0.5), 0.0..y_max)?;

        area.configure_mesh()
            .disable_x_mesh()
            .x_labels(ticks)
            .x_label_formatter(&|x| tick_label(&chart.x_ticks, *x))
            .x_desc(chart.x_desc.as_str())
            .y_desc(chart.y_desc.as_str())
            .label_style(("sans-serif", self.style.tick_font_size))
            .axis_desc_style(("sans-serif", self.style.axis_font_size))
            .draw()?;

        for (series_idx, series) in chart.series.iter().enumerate() {
            let color = self.series_color(series_idx);
            let points: Vec<(f64, f64)> = series
                .points
                .iter()
                .enumerate()
                .map(|(tick_idx, value)| (tick_idx as f64, *value))
                .collect();

            area.draw_series(LineSeries::new(points.clone(), color.stroke_width(3)))?
                .label(series.label.as_str())
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(3))
                });

            area.draw_series(PointSeries::of_element(
                points,
                5,
                color.filled(),
                &|coord, size, style| EmptyElement::at(coord) + Circle::new((0, 0), size, style),
            ))?;
        }

        if let Some(callout) = &chart.callout {
            area.draw_series(std::iter::once(Text::new(
                callout.text.clone(),
                (callout.x_index as f64, callout.y + y_max * 0.06),
                ("sans-serif", self.style.value_font_size)
                    .into_font()
                    .color(&BLACK)
                    .pos(Pos::new(HPos::Center, VPos::Bottom)),
            )))?;
        }

        area.configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(("sans-serif", self.style.legend_font_size))
            .draw()?;

        root.present()?;
        Ok(())
    }

    fn try_grouped_bar_chart(
        &self,
        chart: &GroupedBarChart,
        path: &Path,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let root =
            SVGBackend::new(path, (self.style.width, self.style.height)).into_drawing_area();
        root.fill(&WHITE)?;

        let clusters = chart.clusters.len();
        let series_count = chart.series.len().max(1);
        let y_max = padded_max(
            chart.series.iter().flat_map(|s| s.points.iter().copied()),
            1.25,
        );

        let mut area = ChartBuilder::on(&root)
            .caption(
                chart.title.as_str(),
                ("sans-serif", self.style.title_font_size),
            )
            .margin(self.style.margin)
            .x_label_area_size(X_LABEL_AREA)
            .y_label_area_size(Y_LABEL_AREA)
            .build_cartesian_2d(-0.5..(clusters as f64 - 0.5), 0.0..y_max)?;

        area.configure_mesh()
            .disable_x_mesh()
            .x_labels(clusters)
            .x_label_formatter(&|x| tick_label(&chart.clusters, *x))
            .x_desc(chart.x_desc.as_str())
            .y_desc(chart.y_desc.as_str())
            .label_style(("sans-serif", self.style.tick_font_size))
            .axis_desc_style(("sans-serif", self.style.axis_font_size))
            .draw()?;

        let group_width = 0.75;
        let bar_width = group_width / series_count as f64;

        for (series_idx, series) in chart.series.iter().enumerate() {
            let color = self.series_color(series_idx);
            let offset = (series_idx as f64 - (series_count as f64 - 1.0) / 2.0) * bar_width;

            area.draw_series(series.points.iter().enumerate().map(|(cluster_idx, value)| {
                let x_center = cluster_idx as f64 + offset;
                Rectangle::new(
                    [
                        (x_center - bar_width / 2.0 + 0.02, 0.0),
                        (x_center + bar_width / 2.0 - 0.02, *value),
                    ],
                    color.filled(),
                )
            }))?
            .label(series.label.as_str())
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 20, y + 5)], color.filled()));
        }

        area.configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(("sans-serif", self.style.legend_font_size))
            .draw()?;

        root.present()?;
        Ok(())
    }

    fn try_bar_chart(
        &self,
        chart: &BarChart,
        path: &Path,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let root =
            SVGBackend::new(path, (self.style.width, self.style.height)).into_drawing_area();
        root.fill(&WHITE)?;

        let bars = chart.bars.len();
        let labels: Vec<String> = chart.bars.iter().map(|b| b.label.clone()).collect();
        let y_max = padded_max(chart.bars.iter().map(|b| b.value), 1.3);

        let mut area = ChartBuilder::on(&root)
            .caption(
                chart.title.as_str(),
                ("sans-serif", self.style.title_font_size),
            )
            .margin(self.style.margin)
            .x_label_area_size(X_LABEL_AREA)
            .y_label_area_size(Y_LABEL_AREA)
            .build_cartesian_2d(-0.5..(bars as f64 - 0.5), 0.0..y_max)?;

        area.configure_mesh()
            .disable_x_mesh()
            .x_labels(bars)
            .x_label_formatter(&|x| tick_label(&labels, *x))
            .y_desc(chart.y_desc.as_str())
            .label_style(("sans-serif", self.style.tick_font_size))
            .axis_desc_style(("sans-serif", self.style.axis_font_size))
            .draw()?;

        let half_width = 0.3;

        for (bar_idx, bar) in chart.bars.iter().enumerate() {
            // Leading bar is the baseline and keeps the muted color.
            let color = if bar_idx == 0 {
                to_backend_color(self.style.neutral_color)
            } else {
                self.series_color(bar_idx - 1)
            };

            area.draw_series(std::iter::once(Rectangle::new(
                [
                    (bar_idx as f64 - half_width, 0.0),
                    (bar_idx as f64 + half_width, bar.value),
                ],
                color.filled(),
            )))?;

            area.draw_series(std::iter::once(Text::new(
                format!("{:.1}{}", bar.value, chart.value_suffix),
                (bar_idx as f64, bar.value + y_max * 0.02),
                ("sans-serif", self.style.value_font_size)
                    .into_font()
                    .color(&BLACK)
                    .pos(Pos::new(HPos::Center, VPos::Bottom)),
            )))?;
        }

        if let Some(note) = &chart.note {
            area.draw_series(std::iter::once(Text::new(
                note.clone(),
                ((bars as f64 - 1.0) / 2.0, y_max * 0.85),
                ("sans-serif", self.style.value_font_size)
                    .into_font()
                    .color(&BLACK)
                    .pos(Pos::new(HPos::Center, VPos::Center)),
            )))?;
        }

        root.present()?;
        Ok(())
    }
}

impl ChartBackend for PlottersBackend {
    fn extension(&self) -> &'static str {
        "svg"
    }

    fn draw_line_chart(&self, chart: &LineChart, path: &Path) -> Result<(), RenderError> {
        self.try_line_chart(chart, path)
            .map_err(|err| RenderError::while_drawing(path, err))
    }

    fn draw_grouped_bar_chart(
        &self,
        chart: &GroupedBarChart,
        path: &Path,
    ) -> Result<(), RenderError> {
        self.try_grouped_bar_chart(chart, path)
            .map_err(|err| RenderError::while_drawing(path, err))
    }

    fn draw_bar_chart(&self, chart: &BarChart, path: &Path) -> Result<(), RenderError> {
        self.try_bar_chart(chart, path)
            .map_err(|err| RenderError::while_drawing(path, err))
    }
}

fn to_backend_color(Rgb(r, g, b): Rgb) -> RGBColor {
    RGBColor(r, g, b)
}

/// Label for a categorical tick at fractional position `x`, mapping the
/// index to `labels`. Empty for off-integer positions so plotters only
/// draws one label per category.
fn tick_label(labels: &[String], x: f64) -> String {
    let idx = x.round() as usize;
    if x >= 0.0 && idx < labels.len() && (x - idx as f64).abs() < 0.3 {
        labels[idx].clone()
    } else {
        String::new()
    }
}

/// Largest value in `values` scaled by `padding`, with a positive floor
/// so degenerate all-zero series still get a drawable axis.
fn padded_max(values: impl Iterator<Item = f64>, padding: f64) -> f64 {
    let max = values.fold(0.0_f64, f64::max);
    if max > 0.0 {
        max * padding
    } else {
        1.0
    }
}
