// src/plot_framework.rs

use log::{info, warn};
use plotters::backend::BitMapBackend;
use plotters::chart::{ChartBuilder, SeriesLabelPosition};
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::{Circle, PathElement, Text};
use plotters::series::{DashedLineSeries, LineSeries};
use plotters::style::colors::{BLACK, RED, WHITE};
use plotters::style::{Color, IntoFont, RGBColor};

use std::error::Error;
use std::ops::Range;
use std::path::Path;

use crate::constants::{
    DASH_GAP_PX, DASH_LENGTH_PX, FONT_SIZE_AXIS_LABEL, FONT_SIZE_CHART_TITLE, FONT_SIZE_LEGEND,
    FONT_SIZE_MAIN_TITLE, FONT_SIZE_MESSAGE, LINE_WIDTH_LEGEND, PLOT_HEIGHT, PLOT_WIDTH,
    RANGE_PADDING_FRACTION, RANGE_PADDING_MIN, WAYPOINT_MARKER_RADIUS,
};

/// Calculate plot range with padding.
/// Adds 15% padding, or a fixed padding for very small ranges.
pub fn calculate_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    let range = (max - min).abs();
    let padding = if range < 1e-6 {
        RANGE_PADDING_MIN
    } else {
        range * RANGE_PADDING_FRACTION
    };
    (min - padding, max + padding)
}

/// Tick label text: `k`/`M` suffixes for large values, two decimals for small fractional ones.
pub fn format_axis_value(v: f64) -> String {
    if v.abs() >= 1_000_000.0 {
        format!("{:.1}M", v / 1_000_000.0)
    } else if v.abs() >= 1000.0 {
        format!("{:.1}k", v / 1000.0)
    } else if v.abs() < 10.0 && v.fract() != 0.0 {
        format!("{:.2}", v)
    } else {
        format!("{:.0}", v)
    }
}

/// Draw a "Data Unavailable" message on a plot area.
pub fn draw_unavailable_message(
    area: &DrawingArea<BitMapBackend, Shift>,
    plot_type: &str,
    reason: &str,
) -> Result<(), Box<dyn Error>> {
    const CHAR_WIDTH_RATIO: f32 = 0.6; // Approximate character width relative to font size

    let (x_range, y_range) = area.get_pixel_range();
    let (width, height) = (x_range.end - x_range.start, y_range.end - y_range.start);
    let message = format!("{plot_type} Data Unavailable: {reason}");

    let estimated_text_width = (message.len() as f32 * FONT_SIZE_MESSAGE as f32 * CHAR_WIDTH_RATIO) as i32;
    let center_x = width / 2 - estimated_text_width / 2;
    let center_y = height / 2 - FONT_SIZE_MESSAGE / 2;

    let text_style = ("sans-serif", FONT_SIZE_MESSAGE).into_font().color(&RED);
    area.draw(&Text::new(message, (center_x, center_y), text_style))?;
    Ok(())
}

/// How a series is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesStyle {
    Line,
    DashedLine,
    /// Filled circles at each point, no connecting line.
    Markers,
}

#[derive(Clone)]
pub struct PlotSeries {
    pub data: Vec<(f64, f64)>,
    /// Empty labels are left out of the legend.
    pub label: String,
    pub color: RGBColor,
    pub stroke_width: u32,
    pub style: SeriesStyle,
}

impl PlotSeries {
    pub fn new(data: Vec<(f64, f64)>, label: &str, color: RGBColor, stroke_width: u32) -> Self {
        Self {
            data,
            label: label.to_string(),
            color,
            stroke_width,
            style: SeriesStyle::Line,
        }
    }

    pub fn with_style(mut self, style: SeriesStyle) -> Self {
        self.style = style;
        self
    }
}

#[derive(Clone)]
pub struct PlotConfig {
    pub title: String,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    pub series: Vec<PlotSeries>,
    pub x_label: String,
    pub y_label: String,
}

impl PlotConfig {
    /// Fits the ranges to the finite points of `series`.
    ///
    /// The y range is always padded; the x range only when `pad_x` is set or
    /// when all points share one x value. Returns `None` if no point is finite.
    pub fn fitted(
        title: &str,
        series: Vec<PlotSeries>,
        x_label: &str,
        y_label: &str,
        pad_x: bool,
    ) -> Option<Self> {
        let (x_min, x_max, y_min, y_max) = data_bounds(&series)?;
        let (x_lo, x_hi) = if pad_x || x_max - x_min < 1e-9 {
            calculate_range(x_min, x_max)
        } else {
            (x_min, x_max)
        };
        let (y_lo, y_hi) = calculate_range(y_min, y_max);
        Some(Self {
            title: title.to_string(),
            x_range: x_lo..x_hi,
            y_range: y_lo..y_hi,
            series,
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
        })
    }
}

/// `(x_min, x_max, y_min, y_max)` over every finite point of every series.
pub fn data_bounds(series: &[PlotSeries]) -> Option<(f64, f64, f64, f64)> {
    series
        .iter()
        .flat_map(|s| s.data.iter())
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .fold(None, |acc, &(x, y)| match acc {
            None => Some((x, x, y, y)),
            Some((x0, x1, y0, y1)) => Some((x0.min(x), x1.max(x), y0.min(y), y1.max(y))),
        })
}

/// Draws a single chart from a PlotConfig.
fn draw_single_chart(
    area: &DrawingArea<BitMapBackend, Shift>,
    plot_config: &PlotConfig,
) -> Result<(), Box<dyn Error>> {
    let mut chart = ChartBuilder::on(area)
        .caption(&plot_config.title, ("sans-serif", FONT_SIZE_CHART_TITLE))
        .margin(5)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(plot_config.x_range.clone(), plot_config.y_range.clone())?;

    chart
        .configure_mesh()
        .x_desc(&plot_config.x_label)
        .y_desc(&plot_config.y_label)
        .x_labels(20)
        .y_labels(10)
        .x_label_formatter(&|x| format_axis_value(*x))
        .y_label_formatter(&|y| format_axis_value(*y))
        .light_line_style(WHITE.mix(0.7))
        .label_style(("sans-serif", FONT_SIZE_AXIS_LABEL))
        .draw()?;

    let mut legend_series_count = 0;

    for s in &plot_config.series {
        if s.data.is_empty() {
            continue;
        }
        let color = s.color;
        let style = color.stroke_width(s.stroke_width);

        let annotation = match s.style {
            SeriesStyle::Line => chart.draw_series(LineSeries::new(s.data.iter().cloned(), style))?,
            SeriesStyle::DashedLine => chart.draw_series(DashedLineSeries::new(
                s.data.iter().cloned(),
                DASH_LENGTH_PX,
                DASH_GAP_PX,
                style,
            ))?,
            SeriesStyle::Markers => chart.draw_series(
                s.data
                    .iter()
                    .map(|&point| Circle::new(point, WAYPOINT_MARKER_RADIUS, color.filled())),
            )?,
        };

        if s.label.is_empty() {
            continue;
        }
        match s.style {
            SeriesStyle::Markers => {
                annotation.label(&s.label).legend(move |(x, y)| {
                    Circle::new((x + 10, y), WAYPOINT_MARKER_RADIUS, color.filled())
                });
            }
            SeriesStyle::Line | SeriesStyle::DashedLine => {
                annotation.label(&s.label).legend(move |(x, y)| {
                    PathElement::new(
                        vec![(x, y), (x + 20, y)],
                        color.stroke_width(LINE_WIDTH_LEGEND),
                    )
                });
            }
        }
        legend_series_count += 1;
    }

    if legend_series_count > 0 {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(("sans-serif", FONT_SIZE_LEGEND))
            .draw()?;
    }

    Ok(())
}

/// Creates an image with `rows` charts stacked vertically.
///
/// `get_plot_config` is called once per row; rows that return `None`, have no
/// points or have empty ranges get a placeholder message instead of a chart.
pub fn draw_stacked_plot<F>(
    output_path: &Path,
    root_name: &str,
    plot_type_name: &str,
    rows: usize,
    mut get_plot_config: F,
) -> Result<(), Box<dyn Error>>
where
    F: FnMut(usize) -> Option<PlotConfig>,
{
    let root_area = BitMapBackend::new(output_path, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    root_area.fill(&WHITE)?;
    root_area.draw(&Text::new(
        root_name,
        (10, 10),
        ("sans-serif", FONT_SIZE_MAIN_TITLE)
            .into_font()
            .color(&BLACK),
    ))?;
    let margined_root_area = root_area.margin(50, 5, 5, 5);
    let sub_plot_areas = margined_root_area.split_evenly((rows, 1));
    let mut any_row_plotted = false;

    for (row_index, area) in sub_plot_areas.iter().enumerate() {
        match get_plot_config(row_index) {
            Some(plot_config) => {
                let has_data = plot_config.series.iter().any(|s| !s.data.is_empty());
                let valid_ranges = plot_config.x_range.end > plot_config.x_range.start
                    && plot_config.y_range.end > plot_config.y_range.start;
                if has_data && valid_ranges {
                    draw_single_chart(area, &plot_config)?;
                    any_row_plotted = true;
                } else {
                    let reason = if !has_data {
                        "No data points"
                    } else {
                        "Invalid ranges"
                    };
                    draw_unavailable_message(area, plot_type_name, reason)?;
                }
            }
            None => {
                draw_unavailable_message(area, plot_type_name, "No finite samples")?;
            }
        }
    }

    root_area.present()?;
    if any_row_plotted {
        info!("  Plot saved as {:?}.", output_path);
    } else {
        warn!(
            "  {:?} saved with placeholder messages only: no data available to plot.",
            output_path
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use plotters::style::colors::BLUE;

    #[test]
    fn test_calculate_range_pads_fifteen_percent() {
        let (lo, hi) = calculate_range(0.0, 10.0);
        assert!((lo + 1.5).abs() < 1e-12);
        assert!((hi - 11.5).abs() < 1e-12);
    }

    #[test]
    fn test_calculate_range_flat_and_swapped() {
        assert_eq!(calculate_range(2.0, 2.0), (1.5, 2.5));
        let (lo, hi) = calculate_range(10.0, 0.0);
        assert!(lo < 0.0 && hi > 10.0);
    }

    #[test]
    fn test_format_axis_value() {
        assert_eq!(format_axis_value(0.0), "0");
        assert_eq!(format_axis_value(0.25), "0.25");
        assert_eq!(format_axis_value(-3.5), "-3.50");
        assert_eq!(format_axis_value(42.0), "42");
        assert_eq!(format_axis_value(1500.0), "1.5k");
        assert_eq!(format_axis_value(2_500_000.0), "2.5M");
    }

    #[test]
    fn test_data_bounds_skips_non_finite() {
        let series = vec![
            PlotSeries::new(vec![(0.0, 1.0), (f64::NAN, 100.0), (2.0, -1.0)], "a", BLUE, 1),
            PlotSeries::new(vec![(1.0, f64::INFINITY), (3.0, 0.5)], "b", BLUE, 1),
        ];
        assert_eq!(data_bounds(&series), Some((0.0, 3.0, -1.0, 1.0)));
        assert_eq!(data_bounds(&[]), None);
    }

    #[test]
    fn test_fitted_time_axis_is_not_padded() {
        let series = vec![PlotSeries::new(vec![(0.0, 0.0), (10.0, 2.0)], "x", BLUE, 1)];
        let config = PlotConfig::fitted("x vs Time", series.clone(), "Time (s)", "x (m)", false).unwrap();
        assert_eq!(config.x_range, 0.0..10.0);
        assert!(config.y_range.start < 0.0 && config.y_range.end > 2.0);

        let padded = PlotConfig::fitted("y vs x", series, "x (m)", "y (m)", true).unwrap();
        assert!(padded.x_range.start < 0.0 && padded.x_range.end > 10.0);
    }

    #[test]
    fn test_fitted_single_time_sample_gets_width() {
        let series = vec![PlotSeries::new(vec![(5.0, 1.0)], "x", BLUE, 1)];
        let config = PlotConfig::fitted("x vs Time", series, "Time (s)", "x (m)", false).unwrap();
        assert_eq!(config.x_range, 4.5..5.5);
    }

    #[test]
    fn test_fitted_without_points() {
        let series = vec![PlotSeries::new(vec![], "x", BLUE, 1)];
        assert!(PlotConfig::fitted("x vs Time", series, "Time (s)", "x (m)", false).is_none());
    }
}

// src/plot_framework.rs
