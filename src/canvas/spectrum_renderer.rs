use crate::canvas::colors::parse_color;
use crate::canvas::figure::{Panel, Series};
use crate::error::PlotError;
use crate::settings::{check_db_floor, RenderSettings};
use quantscope_core::Spectrum;

/// Top of the y axis on dB panels.
pub const DB_CEILING: f64 = 10.0;

/// Magnitude scale of a spectrum panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Scale {
    /// `|X|` on `[0, 1]`.
    Linear,
    /// `20 log10 |X|` on `[floor_db, 10]`; zero bins sit on the floor.
    Decibel { floor_db: f64 },
}

fn check_freq_lim(freq_lim: f64) -> Result<(), PlotError> {
    if !(freq_lim.is_finite() && freq_lim > 0.0) {
        return Err(PlotError::invalid(format!(
            "frequency limit must be positive and finite, got {freq_lim}"
        )));
    }
    Ok(())
}

/// Draw one spectrum on `panel`, x-limited to `[0, freq_lim]`.
///
/// The whole frequency axis is handed to the panel; the limit only narrows
/// the visible range. The spectrum itself is never modified.
pub fn render_spectrum(
    panel: &mut Panel,
    spectrum: &Spectrum,
    scale: Scale,
    freq_lim: f64,
    title: &str,
    settings: &RenderSettings,
) -> Result<(), PlotError> {
    check_freq_lim(freq_lim)?;
    if freq_lim > spectrum.sample_rate() {
        log::warn!(
            "frequency limit {freq_lim} Hz exceeds the sampling rate {} Hz of '{title}'",
            spectrum.sample_rate()
        );
    }

    let (values, y_range, y_label, color) = match scale {
        Scale::Linear => (
            spectrum.magnitude().to_vec(),
            (0.0, 1.0),
            "FFT Amplitude |X(freq)|",
            &settings.linear_color,
        ),
        Scale::Decibel { floor_db } => {
            check_db_floor(floor_db)?;
            (
                spectrum.magnitude_db(floor_db),
                (floor_db, DB_CEILING),
                "FFT Amplitude [dB]",
                &settings.db_color,
            )
        }
    };
    let color = parse_color(color)?;

    let points = spectrum
        .frequency_axis()
        .iter()
        .copied()
        .zip(values)
        .collect();

    panel.title = title.to_string();
    panel.title_size = settings.title_font_size;
    panel.label_size = settings.label_font_size;
    panel.x_label = "Freq [Hz]".to_string();
    panel.y_label = y_label.to_string();
    panel.x_range = (0.0, freq_lim);
    panel.y_range = y_range;
    panel.grid = true;
    panel.series.push(Series {
        points,
        color,
        line_width: settings.line_width,
        label: None,
    });
    Ok(())
}

/// Linear-scale spectrum panel.
pub fn fourier_plot(
    panel: &mut Panel,
    spectrum: &Spectrum,
    freq_lim: f64,
    title: &str,
    settings: &RenderSettings,
) -> Result<(), PlotError> {
    render_spectrum(panel, spectrum, Scale::Linear, freq_lim, title, settings)
}

/// dB-scale spectrum panel with the y axis on `[ylim_floor, 10]`.
pub fn fourier_plot_db(
    panel: &mut Panel,
    spectrum: &Spectrum,
    freq_lim: f64,
    ylim_floor: f64,
    title: &str,
    settings: &RenderSettings,
) -> Result<(), PlotError> {
    render_spectrum(
        panel,
        spectrum,
        Scale::Decibel {
            floor_db: ylim_floor,
        },
        freq_lim,
        title,
        settings,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use quantscope_core::fourier_analysis;

    fn alternating() -> Spectrum {
        fourier_analysis(&[1.0, 0.0, -1.0, 0.0], 4.0).unwrap()
    }

    #[test]
    fn test_linear_panel() {
        let mut panel = Panel::default();
        fourier_plot(&mut panel, &alternating(), 2.0, "Original", &RenderSettings::default())
            .unwrap();
        assert_eq!(panel.title, "Original");
        assert_eq!(panel.x_range, (0.0, 2.0));
        assert_eq!(panel.y_range, (0.0, 1.0));
        assert!(panel.grid);
        assert_eq!(panel.series.len(), 1);
        let pts = &panel.series[0].points;
        assert_eq!(pts.len(), 4);
        assert_eq!(pts[1].0, 1.0);
        assert!((pts[1].1 - 1.0).abs() < 1e-12);
        assert_eq!(panel.series[0].color, [0, 0, 255]);
    }

    #[test]
    fn test_db_panel_floors_zero_bins() {
        let spectrum = fourier_analysis(&[1.0, 1.0, 1.0, 1.0], 4.0).unwrap();
        let mut panel = Panel::default();
        fourier_plot_db(&mut panel, &spectrum, 2.0, -120.0, "dB", &RenderSettings::default())
            .unwrap();
        assert_eq!(panel.y_range, (-120.0, DB_CEILING));
        let ys: Vec<f64> = panel.series[0].points.iter().map(|p| p.1).collect();
        assert!(ys.iter().all(|y| y.is_finite()));
        assert!(ys[0].abs() < 1e-12);
        for (k, &m) in spectrum.magnitude().iter().enumerate() {
            if m > 0.0 {
                assert!((ys[k] - 20.0 * m.log10()).abs() < 1e-12);
            } else {
                assert_eq!(ys[k], -120.0);
            }
        }
    }

    #[test]
    fn test_freq_lim_narrows_view_only() {
        let x: Vec<f64> = (0..64).map(|i| (i as f64 * 0.9).sin()).collect();
        let spectrum = fourier_analysis(&x, 64.0).unwrap();
        let mut panel = Panel::default();
        fourier_plot(&mut panel, &spectrum, 10.0, "t", &RenderSettings::default()).unwrap();
        assert_eq!(panel.x_range, (0.0, 10.0));
        assert_eq!(panel.series[0].points.len(), 64);
        assert_eq!(spectrum.len(), 64);
    }

    #[test]
    fn test_rejects_bad_limits() {
        let s = RenderSettings::default();
        let mut panel = Panel::default();
        assert!(fourier_plot(&mut panel, &alternating(), 0.0, "t", &s).is_err());
        assert!(fourier_plot(&mut panel, &alternating(), f64::NAN, "t", &s).is_err());
        assert!(fourier_plot_db(&mut panel, &alternating(), 2.0, 15.0, "t", &s).is_err());
        assert!(panel.series.is_empty());
    }
}
