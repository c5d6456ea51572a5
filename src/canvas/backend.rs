//! Rasterization of [`Figure`]s through plotters.

use crate::canvas::figure::{Figure, Panel};
use crate::error::PlotError;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

fn backend_err<E: std::error::Error + Send + Sync>(err: DrawingAreaErrorKind<E>) -> PlotError {
    PlotError::Backend(err.to_string())
}

/// Trim a polyline to the x range and saturate y to the y range, so nothing
/// is drawn outside the panel.
///
/// A segment crossing an x edge is cut there with a linearly interpolated
/// point, so the line still reaches the panel border.
pub fn clip_points(points: &[(f64, f64)], x_range: (f64, f64), y_range: (f64, f64)) -> Vec<(f64, f64)> {
    let (lo, hi) = x_range;
    let inside = |x: f64| x >= lo && x <= hi;
    let clamp = |(x, y): (f64, f64)| (x, y.clamp(y_range.0, y_range.1));
    let lerp = |(px, py): (f64, f64), (x, y): (f64, f64), t: f64| (px + t * (x - px), py + t * (y - py));

    let mut out = Vec::with_capacity(points.len() + 2);
    for (i, &point) in points.iter().enumerate() {
        if i > 0 {
            let prev = points[i - 1];
            let dx = point.0 - prev.0;
            if dx != 0.0 && !(inside(prev.0) && inside(point.0)) {
                let t_lo = (lo - prev.0) / dx;
                let t_hi = (hi - prev.0) / dx;
                let t_enter = t_lo.min(t_hi).max(0.0);
                let t_exit = t_lo.max(t_hi).min(1.0);
                if t_enter < t_exit {
                    if !inside(prev.0) {
                        out.push(clamp(lerp(prev, point, t_enter)));
                    }
                    if !inside(point.0) {
                        out.push(clamp(lerp(prev, point, t_exit)));
                    }
                }
            }
        }
        if inside(point.0) {
            out.push(clamp(point));
        }
    }
    out
}

fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    panel: &Panel,
) -> Result<(), PlotError> {
    let (x0, x1) = panel.x_range;
    let (y0, y1) = panel.y_range;
    let title_font = FontDesc::new(FontFamily::SansSerif, panel.title_size as f64, FontStyle::Normal);
    let label_font = FontDesc::new(FontFamily::SansSerif, panel.label_size as f64, FontStyle::Normal);

    let mut chart = ChartBuilder::on(area)
        .caption(&panel.title, title_font)
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(55)
        .build_cartesian_2d(x0..x1, y0..y1)
        .map_err(backend_err)?;

    let tick_label = |v: &f64| panel.y_tick_label(*v);
    let mut mesh = chart.configure_mesh();
    mesh.x_desc(panel.x_label.as_str())
        .y_desc(panel.y_label.as_str())
        .label_style(label_font.clone())
        .axis_desc_style(label_font);
    if !panel.grid {
        mesh.disable_mesh();
    }
    if let Some(ticks) = &panel.y_ticks {
        mesh.y_labels(ticks.len() + 1).y_label_formatter(&tick_label);
    }
    mesh.draw().map_err(backend_err)?;

    for series in &panel.series {
        let [r, g, b] = series.color;
        let style = RGBColor(r, g, b).stroke_width(series.line_width);
        let points = clip_points(&series.points, panel.x_range, panel.y_range);
        let anno = chart
            .draw_series(LineSeries::new(points, style))
            .map_err(backend_err)?;
        if let Some(label) = &series.label {
            anno.label(label.as_str())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
        }
    }

    if panel.legend && panel.series.iter().any(|s| s.label.is_some()) {
        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()
            .map_err(backend_err)?;
    }
    Ok(())
}

fn draw_figure<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    figure: &Figure,
) -> Result<(), PlotError> {
    root.fill(&WHITE).map_err(backend_err)?;
    let areas = root.split_evenly((figure.rows, figure.cols));
    for (area, panel) in areas.iter().zip(figure.panels()) {
        draw_panel(area, panel)?;
    }
    root.present().map_err(backend_err)?;
    Ok(())
}

/// Write `figure` as a PNG image.
pub fn save_png(figure: &Figure, path: impl AsRef<Path>) -> Result<(), PlotError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let root = BitMapBackend::new(path, (figure.width, figure.height)).into_drawing_area();
    draw_figure(&root, figure)?;
    log::debug!("wrote {}", path.display());
    Ok(())
}

/// Write `figure` as an SVG document.
pub fn save_svg(figure: &Figure, path: impl AsRef<Path>) -> Result<(), PlotError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let root = SVGBackend::new(path, (figure.width, figure.height)).into_drawing_area();
    draw_figure(&root, figure)?;
    log::debug!("wrote {}", path.display());
    Ok(())
}

/// Render `figure` to an in-memory SVG document.
pub fn to_svg_string(figure: &Figure) -> Result<String, PlotError> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (figure.width, figure.height))
            .into_drawing_area();
        draw_figure(&root, figure)?;
    }
    Ok(svg)
}
