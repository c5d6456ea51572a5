use crate::canvas::colors::parse_color;
use crate::canvas::figure::{Figure, Panel, Series};
use crate::error::PlotError;
use crate::settings::RenderSettings;
use quantscope_core::ComparisonSet;

/// One time-domain curve for the waveform overlay.
#[derive(Clone, Copy, Debug)]
pub struct Trace<'a> {
    pub time: &'a [f64],
    pub samples: &'a [f64],
    pub label: &'a str,
    pub color: &'a str,
}

fn check_limit(name: &str, value: f64) -> Result<(), PlotError> {
    if !(value.is_finite() && value > 0.0) {
        return Err(PlotError::invalid(format!(
            "{name} must be positive and finite, got {value}"
        )));
    }
    Ok(())
}

/// Draw one curve on `panel` with the axes fixed to `[0, xlim] x [-ylim, ylim]`.
pub fn plot_wave(
    panel: &mut Panel,
    trace: &Trace<'_>,
    xlim: f64,
    ylim: f64,
    settings: &RenderSettings,
) -> Result<(), PlotError> {
    check_limit("x limit", xlim)?;
    check_limit("y limit", ylim)?;
    if trace.time.len() != trace.samples.len() {
        return Err(PlotError::invalid(format!(
            "'{}' has {} time points for {} samples",
            trace.label,
            trace.time.len(),
            trace.samples.len()
        )));
    }
    let color = parse_color(trace.color)?;

    panel.x_range = (0.0, xlim);
    panel.y_range = (-ylim, ylim);
    panel.x_label = "time [s]".to_string();
    panel.y_label = "Amplitude".to_string();
    panel.label_size = settings.label_font_size;
    panel.grid = true;
    panel.series.push(Series {
        points: trace
            .time
            .iter()
            .copied()
            .zip(trace.samples.iter().copied())
            .collect(),
        color,
        line_width: settings.line_width,
        label: Some(trace.label.to_string()),
    });
    Ok(())
}

/// Overlay several curves on one panel with a legend.
pub fn plot_waveforms(
    traces: &[Trace<'_>],
    xlim: f64,
    ylim: f64,
    title: &str,
    settings: &RenderSettings,
) -> Result<Figure, PlotError> {
    if traces.is_empty() {
        return Err(PlotError::invalid("waveform overlay needs at least one trace"));
    }
    let mut figure = Figure::new(settings.waveform_size);
    let panel = &mut figure.panels_mut()[0];
    for trace in traces {
        plot_wave(panel, trace, xlim, ylim, settings)?;
    }
    panel.title = title.to_string();
    panel.title_size = settings.title_font_size;
    panel.legend = true;
    log::debug!("waveform figure with {} traces", traces.len());
    Ok(figure)
}

/// Original, quantized and quantized+sampled signals on one shared panel.
pub fn plot_quantized_all(
    set: &ComparisonSet,
    xlim: f64,
    ylim: f64,
    settings: &RenderSettings,
) -> Result<Figure, PlotError> {
    let times: Vec<Vec<f64>> = set.iter().map(|(_, series)| series.time_axis()).collect();
    let traces: Vec<Trace<'_>> = set
        .iter()
        .zip(times.iter())
        .map(|((stage, series), time)| Trace {
            time: time.as_slice(),
            samples: series.samples(),
            label: stage.legend_label(),
            color: stage.color(),
        })
        .collect();
    plot_waveforms(
        &traces,
        xlim,
        ylim,
        "Continuous time signal quantization",
        settings,
    )
}
