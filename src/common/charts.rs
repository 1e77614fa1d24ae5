//! Chart rendering primitives built on the [`plotters`] crate
//!
//! All charts are saved as PNG files with fixed 1200x800 resolution. Artifacts
//! are first rendered under a temporary name and then renamed into place, so
//! an interrupted render never leaves a partial file under a final artifact
//! name; re-running the pipeline simply overwrites earlier artifacts.
//!
//! # Headless Compatibility
//! Rendering uses plotters' bitmap backend so charts can be produced in
//! headless environments (Docker/CI) without a display server.

use plotters::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during chart generation
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),

    #[error("Failed to save plot to file: {0}")]
    FileSave(#[from] std::io::Error),
}

type Result<T> = core::result::Result<T, PlotError>;

/// Chart resolution shared by every artifact
const CHART_SIZE: (u32, u32) = (1200, 800);

/// Scatter point radius in pixels
const POINT_SIZE: i32 = 3;

/// Creates a single-series line chart and saves it as a PNG file
///
/// Points are sorted by their x value before rendering, so callers may pass
/// rows in file order. The full point set is drawn as one connected line.
///
/// # Arguments
/// * `points` - (x, y) pairs, in any order
/// * `title` - Chart title displayed at the top of the plot
/// * `x_label` - Label for the X-axis
/// * `y_label` - Label for the Y-axis
/// * `output_path` - Path where the PNG file should be saved
///
/// # Returns
/// * `Ok(())` - If the chart was successfully created and saved
/// * `Err(PlotError)` - If an error occurred during chart generation
pub fn line_chart(
    points: &[(f64, f64)],
    title: &str,
    x_label: &str,
    y_label: &str,
    output_path: &Path,
) -> Result<()> {
    let mut points = points.to_vec();
    points.sort_by(|a, b| a.0.total_cmp(&b.0));

    write_atomically(output_path, |render_path| {
        let drawing_area = BitMapBackend::new(render_path, CHART_SIZE).into_drawing_area();
        drawing_area
            .fill(&WHITE)
            .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

        let (x_min, x_max) = axis_range(points.iter().map(|(x, _)| *x));
        let (y_min, y_max) = axis_range(points.iter().map(|(_, y)| *y));

        let mut chart = ChartBuilder::on(&drawing_area)
            .caption(title, ("sans-serif", 40))
            .margin(20)
            .x_label_area_size(60)
            .y_label_area_size(85)
            .build_cartesian_2d(x_min..x_max, y_min..y_max)
            .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

        chart
            .configure_mesh()
            .x_desc(x_label)
            .y_desc(y_label)
            .label_style(("sans-serif", 25))
            .draw()
            .map_err(|e| PlotError::Drawing(e.to_string()))?;

        chart
            .draw_series(LineSeries::new(points.iter().copied(), &BLUE))
            .map_err(|e| PlotError::Drawing(e.to_string()))?;

        drawing_area
            .present()
            .map_err(|e| PlotError::Drawing(e.to_string()))?;

        Ok(())
    })
}

/// Creates a single-series scatter chart and saves it as a PNG file
///
/// Unordered points drawn as filled circles; otherwise identical in styling
/// and failure behavior to [`line_chart`].
pub fn scatter_chart(
    points: &[(f64, f64)],
    title: &str,
    x_label: &str,
    y_label: &str,
    output_path: &Path,
) -> Result<()> {
    write_atomically(output_path, |render_path| {
        let drawing_area = BitMapBackend::new(render_path, CHART_SIZE).into_drawing_area();
        drawing_area
            .fill(&WHITE)
            .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

        let (x_min, x_max) = axis_range(points.iter().map(|(x, _)| *x));
        let (y_min, y_max) = axis_range(points.iter().map(|(_, y)| *y));

        let mut chart = ChartBuilder::on(&drawing_area)
            .caption(title, ("sans-serif", 40))
            .margin(20)
            .x_label_area_size(60)
            .y_label_area_size(85)
            .build_cartesian_2d(x_min..x_max, y_min..y_max)
            .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

        chart
            .configure_mesh()
            .x_desc(x_label)
            .y_desc(y_label)
            .label_style(("sans-serif", 25))
            .draw()
            .map_err(|e| PlotError::Drawing(e.to_string()))?;

        chart
            .draw_series(
                points
                    .iter()
                    .map(|&(x, y)| Circle::new((x, y), POINT_SIZE, BLUE.filled())),
            )
            .map_err(|e| PlotError::Drawing(e.to_string()))?;

        drawing_area
            .present()
            .map_err(|e| PlotError::Drawing(e.to_string()))?;

        Ok(())
    })
}

/// Creates a multi-series scatter chart with one legend entry per series
///
/// Each series is drawn in its own palette color; series order determines
/// color and legend order, so callers should pass series in a deterministic
/// order.
///
/// # Arguments
/// * `series` - (label, points) pairs, one entry per series
/// * `title` - Chart title displayed at the top of the plot
/// * `x_label` - Label for the X-axis
/// * `y_label` - Label for the Y-axis
/// * `output_path` - Path where the PNG file should be saved
pub fn grouped_scatter_chart(
    series: &[(String, Vec<(f64, f64)>)],
    title: &str,
    x_label: &str,
    y_label: &str,
    output_path: &Path,
) -> Result<()> {
    let (x_min, x_max) = axis_range(
        series
            .iter()
            .flat_map(|(_, points)| points.iter().map(|(x, _)| *x)),
    );
    let (y_min, y_max) = axis_range(
        series
            .iter()
            .flat_map(|(_, points)| points.iter().map(|(_, y)| *y)),
    );

    write_atomically(output_path, |render_path| {
        let drawing_area = BitMapBackend::new(render_path, CHART_SIZE).into_drawing_area();
        drawing_area
            .fill(&WHITE)
            .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

        let mut chart = ChartBuilder::on(&drawing_area)
            .caption(title, ("sans-serif", 40))
            .margin(20)
            .x_label_area_size(60)
            .y_label_area_size(85)
            .build_cartesian_2d(x_min..x_max, y_min..y_max)
            .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

        chart
            .configure_mesh()
            .x_desc(x_label)
            .y_desc(y_label)
            .label_style(("sans-serif", 25))
            .draw()
            .map_err(|e| PlotError::Drawing(e.to_string()))?;

        for (index, (label, points)) in series.iter().enumerate() {
            let color = Palette99::pick(index).mix(0.9);
            chart
                .draw_series(
                    points
                        .iter()
                        .map(|&(x, y)| Circle::new((x, y), POINT_SIZE, color.filled())),
                )
                .map_err(|e| PlotError::Drawing(e.to_string()))?
                .label(label.clone())
                .legend(move |(x, y)| Circle::new((x + 10, y), POINT_SIZE, color.filled()));
        }

        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(|e| PlotError::Drawing(e.to_string()))?;

        drawing_area
            .present()
            .map_err(|e| PlotError::Drawing(e.to_string()))?;

        Ok(())
    })
}

/// Creates a multi-series cumulative distribution chart
///
/// Each series is a pre-computed cumulative curve (see [`cumulative_points`])
/// drawn as a line in its own palette color with a legend entry. The Y-axis
/// is always the cumulative percentage from 0 to 100.
///
/// # Arguments
/// * `series` - (label, cumulative points) pairs, one entry per series
/// * `title` - Chart title displayed at the top of the plot
/// * `x_label` - Label for the X-axis
/// * `output_path` - Path where the PNG file should be saved
pub fn cumulative_chart(
    series: &[(String, Vec<(f64, f64)>)],
    title: &str,
    x_label: &str,
    output_path: &Path,
) -> Result<()> {
    let (x_min, x_max) = axis_range(
        series
            .iter()
            .flat_map(|(_, points)| points.iter().map(|(x, _)| *x)),
    );

    write_atomically(output_path, |render_path| {
        let drawing_area = BitMapBackend::new(render_path, CHART_SIZE).into_drawing_area();
        drawing_area
            .fill(&WHITE)
            .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

        let mut chart = ChartBuilder::on(&drawing_area)
            .caption(title, ("sans-serif", 40))
            .margin(20)
            .x_label_area_size(60)
            .y_label_area_size(85)
            .build_cartesian_2d(x_min..x_max, 0.0..100.0)
            .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

        chart
            .configure_mesh()
            .x_desc(x_label)
            .y_desc("Cumulative Percentage (%)")
            .label_style(("sans-serif", 25))
            .draw()
            .map_err(|e| PlotError::Drawing(e.to_string()))?;

        for (index, (label, points)) in series.iter().enumerate() {
            let color = Palette99::pick(index).mix(0.9);
            chart
                .draw_series(LineSeries::new(points.iter().copied(), &color))
                .map_err(|e| PlotError::Drawing(e.to_string()))?
                .label(label.clone())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
        }

        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(|e| PlotError::Drawing(e.to_string()))?;

        drawing_area
            .present()
            .map_err(|e| PlotError::Drawing(e.to_string()))?;

        Ok(())
    })
}

/// Generates cumulative distribution points from sorted values
///
/// Takes a slice of values sorted in ascending order and returns
/// (value, cumulative_percentage) pairs suitable for [`cumulative_chart`],
/// where the percentage is the share of values at or below each entry.
pub fn cumulative_points(sorted_values: &[f64]) -> Vec<(f64, f64)> {
    if sorted_values.is_empty() {
        return Vec::new();
    }

    let total = sorted_values.len() as f64;
    sorted_values
        .iter()
        .enumerate()
        .map(|(index, &value)| (value, ((index + 1) as f64 / total) * 100.0))
        .collect()
}

/// Computes an axis range covering the given values
///
/// Empty input falls back to a unit range; single-valued input is widened so
/// the chart coordinate system stays non-degenerate.
fn axis_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for value in values {
        min = min.min(value);
        max = max.max(value);
    }

    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    if min >= max {
        return (min - 1.0, min + 1.0);
    }
    (min, max)
}

/// Renders through a temporary sibling file, then renames over the target
///
/// The temporary name keeps the `.png` extension so the bitmap backend still
/// recognizes the output format. On a render failure the temporary file is
/// removed and the previous artifact (if any) is left untouched.
fn write_atomically(output_path: &Path, render: impl FnOnce(&Path) -> Result<()>) -> Result<()> {
    let render_path = temp_render_path(output_path);

    if let Err(error) = render(&render_path) {
        let _ = std::fs::remove_file(&render_path);
        return Err(error);
    }

    std::fs::rename(&render_path, output_path)?;
    Ok(())
}

fn temp_render_path(output_path: &Path) -> PathBuf {
    let name = output_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    output_path.with_file_name(format!("{name}.tmp.png"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cumulative_points() {
        let data = vec![1.0, 2.0, 5.0, 10.0, 20.0];
        let cumulative = cumulative_points(&data);

        assert_eq!(cumulative.len(), 5);
        assert_eq!(cumulative[0], (1.0, 20.0)); // 1/5 = 20%
        assert_eq!(cumulative[1], (2.0, 40.0)); // 2/5 = 40%
        assert_eq!(cumulative[2], (5.0, 60.0)); // 3/5 = 60%
        assert_eq!(cumulative[3], (10.0, 80.0)); // 4/5 = 80%
        assert_eq!(cumulative[4], (20.0, 100.0)); // 5/5 = 100%
    }

    #[test]
    fn test_cumulative_points_empty() {
        assert!(cumulative_points(&[]).is_empty());
    }

    #[test]
    fn test_cumulative_points_single_value() {
        let cumulative = cumulative_points(&[42.0]);
        assert_eq!(cumulative, vec![(42.0, 100.0)]);
    }

    #[test]
    fn test_axis_range_spans_data() {
        let (min, max) = axis_range([3.0, -1.0, 7.5].into_iter());
        assert_eq!(min, -1.0);
        assert_eq!(max, 7.5);
    }

    #[test]
    fn test_axis_range_degenerate_input() {
        let (min, max) = axis_range([5.0].into_iter());
        assert!(min < max);

        let (min, max) = axis_range(std::iter::empty());
        assert!(min < max);
    }

    #[test]
    fn test_temp_render_path_keeps_png_extension() {
        let path = Path::new("plots/line-duration-states-a.png");
        let tmp = temp_render_path(path);

        assert_eq!(tmp.extension().unwrap(), "png");
        assert_eq!(tmp.parent(), path.parent());
        assert_ne!(tmp, path);
    }

    #[test]
    #[ignore = "Font rendering not available in test environment"]
    fn test_line_chart_writes_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let output_path = dir.path().join("test-line.png");
        let points = vec![(1.0, 10.0), (3.0, 15.0), (2.0, 20.0)];

        line_chart(&points, "Test", "x", "y", &output_path).unwrap();
        assert!(output_path.exists());

        // Re-rendering overwrites rather than duplicating.
        line_chart(&points, "Test", "x", "y", &output_path).unwrap();
        assert!(std::fs::metadata(&output_path).unwrap().len() > 0);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    #[ignore = "Font rendering not available in test environment"]
    fn test_grouped_scatter_chart_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let output_path = dir.path().join("test-grouped.png");
        let series = vec![
            ("eventual".to_string(), vec![(1.0, 10.0), (2.0, 20.0)]),
            ("strong".to_string(), vec![(1.5, 30.0)]),
        ];

        grouped_scatter_chart(&series, "Test", "x", "y", &output_path).unwrap();
        assert!(output_path.exists());
    }
}
