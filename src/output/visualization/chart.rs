//! Line-chart rendering shared by the plotting functions
//!
//! Every public plot in this module family reduces to "a few labelled curves
//! on one pair of axes". This file owns the plotters plumbing: backend choice
//! by file extension, axis ranges, mesh, legend.

use std::error::Error;
use std::ops::Range;
use std::path::Path;

use log::debug;
use plotters::prelude::*;

use super::config::PlotConfig;

/// One labelled curve, `x` and `y` of equal length
pub(crate) struct Curve<'a> {
    pub label: String,
    pub x: &'a [f64],
    pub y: &'a [f64],
}

/// Render `curves` into `output_path` (SVG for `.svg`, bitmap otherwise)
pub(crate) fn render(
    curves: &[Curve<'_>],
    output_path: &str,
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>> {
    config.validate()?;

    if curves.is_empty() {
        return Err("No curves to plot".into());
    }

    for curve in curves {
        if curve.x.len() != curve.y.len() {
            return Err(format!(
                "Data length mismatch for {}: {} abscissae versus {} values",
                curve.label,
                curve.x.len(),
                curve.y.len()
            )
            .into());
        }
    }

    let x_range = config
        .x_range
        .map(|(low, high)| low..high)
        .unwrap_or_else(|| fitted_range(curves.iter().flat_map(|c| c.x.iter()), 0.0));

    let y_range = config
        .y_range
        .map(|(low, high)| low..high)
        .unwrap_or_else(|| fitted_range(curves.iter().flat_map(|c| c.y.iter()), 0.05));

    // Determine backend and plot
    let ext = Path::new(output_path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    match ext {
        "svg" => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            draw_curves(backend, curves, config, x_range, y_range)?
        }
        _ => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            draw_curves(backend, curves, config, x_range, y_range)?
        }
    }

    debug!("{} curve(s) written to {}", curves.len(), output_path);

    Ok(())
}

/// `[min, max]` of the finite values, widened by `margin` of the span
///
/// Falls back to `[0, 1]` without finite values and to a unit-wide window
/// around a constant.
fn fitted_range<'a>(values: impl Iterator<Item = &'a f64>, margin: f64) -> Range<f64> {
    let (low, high) = values
        .filter(|value| value.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &value| {
            (lo.min(value), hi.max(value))
        });

    if low > high {
        return 0.0..1.0;
    }
    if low == high {
        return (low - 0.5)..(high + 0.5);
    }

    let pad = (high - low) * margin;
    (low - pad)..(high + pad)
}

/// Implementation with concrete backend
fn draw_curves<DB: DrawingBackend>(
    backend: DB,
    curves: &[Curve<'_>],
    config: &PlotConfig,
    x_range: Range<f64>,
    y_range: Range<f64>,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let mut builder = ChartBuilder::on(&root);
    builder.margin(15);

    if !config.title.is_empty() {
        builder.caption(&config.title, ("sans-serif", 40).into_font());
    }
    if config.show_grid {
        builder.x_label_area_size(45).y_label_area_size(60);
    }

    let mut chart = builder.build_cartesian_2d(x_range, y_range)?;

    if config.show_grid {
        chart
            .configure_mesh()
            .x_desc(&config.xlabel)
            .y_desc(&config.ylabel)
            .x_label_formatter(&|x| format!("{:.2}", x))
            .y_label_formatter(&|y| format!("{:.2}", y))
            .draw()?;
    }

    for (index, curve) in curves.iter().enumerate() {
        let color = config.series_color(index);

        let points = curve
            .x
            .iter()
            .zip(curve.y.iter())
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .map(|(x, y)| (*x, *y));

        let series = chart.draw_series(LineSeries::new(
            points,
            ShapeStyle::from(&color).stroke_width(config.line_width),
        ))?;

        if config.show_legend {
            series
                .label(curve.label.as_str())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &color));
        }
    }

    if config.show_legend {
        chart
            .configure_series_labels()
            .background_style(&config.background.mix(0.8))
            .border_style(&BLACK)
            .draw()?;
    }

    root.present()?;

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fitted_range_with_margin() {
        let values = [0.0, 2.0, 1.0];
        let range = fitted_range(values.iter(), 0.05);
        assert!((range.start + 0.1).abs() < 1e-12);
        assert!((range.end - 2.1).abs() < 1e-12);
    }

    #[test]
    fn test_fitted_range_skips_non_finite() {
        let values = [f64::NAN, 1.0, f64::INFINITY, 3.0];
        assert_eq!(fitted_range(values.iter(), 0.0), 1.0..3.0);
    }

    #[test]
    fn test_fitted_range_degenerate() {
        assert_eq!(fitted_range([2.0, 2.0].iter(), 0.1), 1.5..2.5);
        assert_eq!(fitted_range([f64::NAN].iter(), 0.1), 0.0..1.0);
    }

    #[test]
    fn test_render_rejects_mismatched_lengths() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("mismatch.png");

        let curves = [Curve { label: "bad".to_string(), x: &[0.0, 1.0], y: &[0.0] }];
        let result = render(&curves, path.to_str().unwrap(), &PlotConfig::bare());

        assert!(result.is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_render_rejects_empty() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("empty.png");
        assert!(render(&[], path.to_str().unwrap(), &PlotConfig::bare()).is_err());
    }

    #[test]
    fn test_render_bare_png() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("bare.png");

        let x = [0.0, 0.5, 1.0];
        let y = [1.0, f64::NAN, 0.0];
        let curves = [Curve { label: "line".to_string(), x: &x, y: &y }];

        render(&curves, path.to_str().unwrap(), &PlotConfig::bare().size(64, 48)).unwrap();
        assert!(path.exists());
    }
}
