use crate::canvas::colors::cycle_color;
use crate::canvas::figure::{Figure, Panel, Series};
use crate::error::PlotError;
use crate::settings::RenderSettings;
use quantscope_core::BitMatrix;

/// Vertical distance between consecutive bit lanes.
const LANE_SPACING: f64 = 2.0;

/// Draw one trace per bit index, lane `i` offset by `2 * i`, with y ticks
/// labelled `0`/`1` inside every lane.
pub fn bitmap_plotter(
    panel: &mut Panel,
    matrix: &BitMatrix,
    time: &[f64],
    settings: &RenderSettings,
) -> Result<(), PlotError> {
    if time.len() != matrix.columns() {
        return Err(PlotError::invalid(format!(
            "bit matrix has {} columns but the time axis has {} points",
            matrix.columns(),
            time.len()
        )));
    }
    if time.iter().any(|t| !t.is_finite()) {
        return Err(PlotError::invalid("time axis contains non-finite values"));
    }

    let qbits = matrix.qbits();
    for (bit, row) in matrix.rows().enumerate() {
        let offset = LANE_SPACING * bit as f64;
        panel.series.push(Series {
            points: time
                .iter()
                .zip(row)
                .map(|(&t, &b)| (t, b as f64 + offset))
                .collect(),
            color: cycle_color(bit),
            line_width: settings.line_width,
            label: Some(format!("Bit idx: {bit}")),
        });
    }

    let lanes = qbits * LANE_SPACING as usize;
    panel.y_ticks = Some(
        (0..lanes)
            .map(|k| (k as f64, if k % 2 == 0 { "0" } else { "1" }.to_string()))
            .collect(),
    );
    panel.y_range = (0.0, lanes as f64);

    let (t0, t1) = (time[0], time[time.len() - 1]);
    panel.x_range = if t1 > t0 { (t0, t1) } else { (t0 - 0.5, t0 + 0.5) };
    panel.x_label = "Time [s]".to_string();
    panel.label_size = settings.label_font_size;
    panel.legend = true;
    panel.title = "Binary encoding of the quantized signal".to_string();
    panel.title_size = settings.title_font_size;
    Ok(())
}

/// Single-panel bit-plane figure.
pub fn plot_bitplanes(
    matrix: &BitMatrix,
    time: &[f64],
    settings: &RenderSettings,
) -> Result<Figure, PlotError> {
    let mut figure = Figure::new(settings.bitplane_size);
    bitmap_plotter(&mut figure.panels_mut()[0], matrix, time, settings)?;
    log::debug!("bit-plane figure with {} lanes", matrix.qbits());
    Ok(figure)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_bits() -> BitMatrix {
        BitMatrix::new(vec![vec![0, 1, 0, 1], vec![0, 0, 1, 1], vec![1, 1, 1, 0]]).unwrap()
    }

    #[test]
    fn test_lanes_are_offset() {
        let time = [0.0, 0.1, 0.2, 0.3];
        let fig = plot_bitplanes(&three_bits(), &time, &RenderSettings::default()).unwrap();
        let panel = &fig.panels()[0];
        assert_eq!(panel.series.len(), 3);
        let lane2: Vec<f64> = panel.series[2].points.iter().map(|p| p.1).collect();
        assert_eq!(lane2, [5.0, 5.0, 5.0, 4.0]);
        assert_eq!(panel.series[1].label.as_deref(), Some("Bit idx: 1"));
        assert_eq!(panel.y_range, (0.0, 6.0));
        assert_eq!(panel.x_range, (0.0, 0.3));
    }

    #[test]
    fn test_alternating_tick_labels() {
        let time = [0.0, 0.1, 0.2, 0.3];
        let fig = plot_bitplanes(&three_bits(), &time, &RenderSettings::default()).unwrap();
        let ticks = fig.panels()[0].y_ticks.clone().unwrap();
        let labels: Vec<&str> = ticks.iter().map(|(_, l)| l.as_str()).collect();
        assert_eq!(labels, ["0", "1", "0", "1", "0", "1"]);
        assert_eq!(ticks[5].0, 5.0);
    }

    #[test]
    fn test_time_length_must_match() {
        let err = plot_bitplanes(&three_bits(), &[0.0, 1.0], &RenderSettings::default());
        assert!(matches!(err, Err(PlotError::InvalidInput { .. })));
    }
}
