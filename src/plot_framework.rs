// src/plot_framework.rs

use plotters::backend::{BitMapBackend, DrawingBackend};
use plotters::chart::{ChartBuilder, SeriesLabelPosition};
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::{Circle, PathElement, Rectangle, Text};
use plotters::series::LineSeries;
use plotters::style::colors::{BLACK, RED, WHITE};
use plotters::style::{Color, IntoFont, RGBColor};

use std::error::Error;
use std::ops::Range;

use crate::channel_names::CHANNEL_COUNT;
use crate::constants::{
    COLOR_CENTER_MARKER, FONT_SIZE_CHART_TITLE, FONT_SIZE_LABEL, FONT_SIZE_MAIN_TITLE,
    FONT_SIZE_MESSAGE, LINE_WIDTH_LEGEND, PLOT_HEIGHT, PLOT_WIDTH,
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
    let padding = if range < 1e-6 { 0.5 } else { range * 0.15 };
    (min - padding, max + padding)
}

/// Draw a "Data Unavailable" message on a plot area.
pub fn draw_unavailable_message(
    area: &DrawingArea<BitMapBackend, plotters::coord::Shift>,
    chart_name: &str,
    plot_type: &str,
    reason: &str,
) -> Result<(), Box<dyn Error>> {
    let (x_range, y_range) = area.get_pixel_range();
    let (width, height) = (
        (x_range.end - x_range.start) as u32,
        (y_range.end - y_range.start) as u32,
    );
    let message = if chart_name.is_empty() {
        format!("{plot_type} Data Unavailable: {reason}")
    } else {
        format!("{chart_name} {plot_type} Data Unavailable: {reason}")
    };

    // Rough centering from estimated glyph width.
    let estimated_text_width = (message.len() as f32 * FONT_SIZE_MESSAGE as f32 * 0.6) as i32;
    let center_x = width as i32 / 2 - estimated_text_width / 2;
    let center_y = height as i32 / 2 - FONT_SIZE_MESSAGE / 2;

    let text_style = ("sans-serif", FONT_SIZE_MESSAGE).into_font().color(&RED);
    area.draw(&Text::new(message, (center_x, center_y), text_style))?;
    Ok(())
}

#[derive(Clone)]
pub struct PlotSeries {
    pub data: Vec<(f64, f64)>,
    pub label: String,
    pub color: RGBColor,
    pub stroke_width: u32,
}

/// A shaded vertical band (a clipped odor pulse) drawn behind the series.
#[derive(Clone)]
pub struct ShadedSpan {
    pub x_min: f64,
    pub x_max: f64,
    pub color: RGBColor,
    pub opacity: f64, // 0.0 to 1.0
}

/// A single filled-circle marker in data coordinates.
#[derive(Clone)]
pub struct PointMarker {
    pub x: f64,
    pub y: f64,
    pub color: RGBColor,
    pub size: u32,
}

#[derive(Clone)]
pub struct PlotConfig {
    pub title: String,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    pub series: Vec<PlotSeries>,
    pub x_label: String,
    pub y_label: String,
    pub spans: Vec<ShadedSpan>,
    pub point_markers: Vec<PointMarker>,
    /// X position of the vertical center-frame marker, if any.
    pub marker_x: Option<f64>,
    /// Draw a horizontal zero reference line.
    pub zero_line: bool,
}

/// Draws a single chart using a PlotConfig struct.
fn draw_single_chart_with_config(
    area: &DrawingArea<BitMapBackend, plotters::coord::Shift>,
    plot_config: &PlotConfig,
) -> Result<(), Box<dyn Error>> {
    let mut chart = ChartBuilder::on(area)
        .caption(&plot_config.title, ("sans-serif", FONT_SIZE_CHART_TITLE))
        .margin(5)
        .x_label_area_size(30)
        .y_label_area_size(60)
        .build_cartesian_2d(plot_config.x_range.clone(), plot_config.y_range.clone())?;

    chart
        .configure_mesh()
        .x_desc(plot_config.x_label.as_str())
        .y_desc(plot_config.y_label.as_str())
        .x_labels(10)
        .y_labels(5)
        .light_line_style(&WHITE.mix(0.7))
        .label_style(("sans-serif", FONT_SIZE_LABEL))
        .draw()?;

    // Shaded spans go in first so the signal stays readable on top of them.
    for span in &plot_config.spans {
        chart.draw_series(std::iter::once(Rectangle::new(
            [
                (span.x_min, plot_config.y_range.start),
                (span.x_max, plot_config.y_range.end),
            ],
            span.color.mix(span.opacity).filled(),
        )))?;
    }

    if plot_config.zero_line {
        chart.draw_series(LineSeries::new(
            vec![
                (plot_config.x_range.start, 0.0),
                (plot_config.x_range.end, 0.0),
            ],
            BLACK.stroke_width(1),
        ))?;
    }

    if let Some(marker_x) = plot_config.marker_x {
        chart.draw_series(LineSeries::new(
            vec![
                (marker_x, plot_config.y_range.start),
                (marker_x, plot_config.y_range.end),
            ],
            COLOR_CENTER_MARKER.stroke_width(1),
        ))?;
    }

    let mut any_label = false;
    for series in &plot_config.series {
        if series.data.is_empty() {
            continue;
        }
        let color = series.color;
        let drawn = chart.draw_series(LineSeries::new(
            series.data.iter().cloned(),
            color.stroke_width(series.stroke_width),
        ))?;
        if !series.label.is_empty() {
            any_label = true;
            drawn.label(series.label.as_str()).legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(LINE_WIDTH_LEGEND))
            });
        }
    }

    for marker in &plot_config.point_markers {
        let color = marker.color;
        chart.draw_series(std::iter::once(Circle::new(
            (marker.x, marker.y),
            marker.size,
            color.filled(),
        )))?;
    }

    if any_label {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .label_font(("sans-serif", FONT_SIZE_LABEL))
            .draw()?;
    }

    Ok(())
}

/// Creates a stacked plot image with one row per derived channel.
/// The closure supplies each channel's plot payload, or None when the channel
/// could not be derived; those rows get a placeholder message instead.
pub fn draw_stacked_channel_plot<'a, F>(
    output_filename: &'a str,
    root_name: &str,
    plot_type_name: &str,
    mut get_channel_plot_data: F,
) -> Result<(), Box<dyn Error>>
where
    F: FnMut(usize) -> Option<PlotConfig>,
    <BitMapBackend<'a> as DrawingBackend>::ErrorType: 'static,
{
    let root_area =
        BitMapBackend::new(output_filename, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    root_area.fill(&WHITE)?;
    root_area.draw(&Text::new(
        root_name.to_string(),
        (10, 10),
        ("sans-serif", FONT_SIZE_MAIN_TITLE).into_font().color(&BLACK),
    ))?;
    let margined_root_area = root_area.margin(50, 5, 5, 5);
    let sub_plot_areas = margined_root_area.split_evenly((CHANNEL_COUNT, 1));
    let mut any_channel_plotted = false;

    #[allow(clippy::needless_range_loop)]
    for channel_index in 0..CHANNEL_COUNT {
        let area = &sub_plot_areas[channel_index];
        match get_channel_plot_data(channel_index) {
            Some(plot_config) => {
                let has_data = plot_config.series.iter().any(|s| !s.data.is_empty());
                let valid_ranges = plot_config.x_range.end > plot_config.x_range.start
                    && plot_config.y_range.end > plot_config.y_range.start;
                if has_data && valid_ranges {
                    draw_single_chart_with_config(area, &plot_config)?;
                    any_channel_plotted = true;
                } else {
                    let reason = if !has_data {
                        "No data points"
                    } else {
                        "Invalid ranges"
                    };
                    draw_unavailable_message(
                        area,
                        crate::channel_names::CHANNEL_NAMES[channel_index],
                        plot_type_name,
                        reason,
                    )?;
                }
            }
            None => {
                let reason = "Calculation/Data Extraction Failed";
                draw_unavailable_message(
                    area,
                    crate::channel_names::CHANNEL_NAMES[channel_index],
                    plot_type_name,
                    reason,
                )?;
            }
        }
    }

    if any_channel_plotted {
        root_area.present()?;
        println!("  Stacked plot saved as '{output_filename}'.");
    } else {
        root_area.present()?;
        println!("  Skipping '{output_filename}' plot saving: No data available for any channel to plot, only placeholder messages shown.");
    }
    Ok(())
}

/// Creates a single-chart image (used for the trajectory path plot).
pub fn draw_single_plot<'a>(
    output_filename: &'a str,
    root_name: &str,
    plot_type_name: &str,
    plot_config: Option<PlotConfig>,
) -> Result<(), Box<dyn Error>>
where
    <BitMapBackend<'a> as DrawingBackend>::ErrorType: 'static,
{
    let root_area =
        BitMapBackend::new(output_filename, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    root_area.fill(&WHITE)?;
    root_area.draw(&Text::new(
        root_name.to_string(),
        (10, 10),
        ("sans-serif", FONT_SIZE_MAIN_TITLE).into_font().color(&BLACK),
    ))?;
    let chart_area = root_area.margin(50, 5, 5, 5);

    match plot_config {
        Some(plot_config)
            if plot_config.x_range.end > plot_config.x_range.start
                && plot_config.y_range.end > plot_config.y_range.start =>
        {
            draw_single_chart_with_config(&chart_area, &plot_config)?;
            root_area.present()?;
            println!("  Plot saved as '{output_filename}'.");
        }
        _ => {
            draw_unavailable_message(&chart_area, "", plot_type_name, "No data points")?;
            root_area.present()?;
            println!("  Skipping '{output_filename}' plot saving: No data available.");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calculate_range_pads_by_fifteen_percent() {
        let (min, max) = calculate_range(0.0, 10.0);
        assert!((min - (-1.5)).abs() < 1e-9);
        assert!((max - 11.5).abs() < 1e-9);
    }

    #[test]
    fn calculate_range_handles_flat_signal() {
        let (min, max) = calculate_range(2.0, 2.0);
        assert!(min < 2.0 && max > 2.0);
    }

    #[test]
    fn calculate_range_accepts_swapped_bounds() {
        assert_eq!(calculate_range(10.0, 0.0), calculate_range(0.0, 10.0));
    }
}

// src/plot_framework.rs
