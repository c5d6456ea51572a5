use crate::canvas::figure::Figure;
use crate::canvas::spectrum_renderer::{render_spectrum, Scale};
use crate::error::PlotError;
use crate::settings::{check_db_floor, RenderSettings};
use quantscope_core::{ComparisonSet, Spectrum, Stage};

/// The linear and dB renderings of the same ordered set of spectra.
#[derive(Clone, Debug, PartialEq)]
pub struct ComparisonFigures {
    pub linear: Figure,
    pub db: Figure,
}

/// Lay out named spectra side by side, left to right in the given order,
/// once on a linear scale and once in dB.
///
/// Every panel shares `freq_lim`, and every dB panel shares `ylim_floor`.
/// Each spectrum keeps its own normalization.
pub fn plot_spectra(
    spectra: &[(&str, &Spectrum)],
    freq_lim: f64,
    ylim_floor: f64,
    settings: &RenderSettings,
) -> Result<ComparisonFigures, PlotError> {
    if spectra.is_empty() {
        return Err(PlotError::invalid("comparison needs at least one spectrum"));
    }
    check_db_floor(ylim_floor)?;

    let mut linear = Figure::subplots(1, spectra.len(), settings.spectrum_size);
    let mut db = Figure::subplots(1, spectra.len(), settings.spectrum_size);

    for (panel, (title, spectrum)) in linear.panels_mut().iter_mut().zip(spectra) {
        render_spectrum(panel, spectrum, Scale::Linear, freq_lim, title, settings)?;
    }
    let scale = Scale::Decibel {
        floor_db: ylim_floor,
    };
    for (panel, (title, spectrum)) in db.panels_mut().iter_mut().zip(spectra) {
        render_spectrum(panel, spectrum, scale, freq_lim, title, settings)?;
    }

    log::debug!(
        "comparison of {} spectra up to {freq_lim} Hz, dB floor {ylim_floor}",
        spectra.len()
    );
    Ok(ComparisonFigures { linear, db })
}

/// Original, quantized and quantized+sampled spectra, in that order, with the
/// dB floor taken from `settings`.
pub fn plot_fourier_three(
    original: &Spectrum,
    quantized: &Spectrum,
    sampled: &Spectrum,
    freq_lim: f64,
    settings: &RenderSettings,
) -> Result<ComparisonFigures, PlotError> {
    let spectra = [
        (Stage::Original.title(), original),
        (Stage::Quantized.title(), quantized),
        (Stage::QuantizedSampled.title(), sampled),
    ];
    plot_spectra(&spectra, freq_lim, settings.db_floor, settings)
}

/// Analyze every stage of `set` and lay the spectra out for comparison.
pub fn plot_comparison(
    set: &ComparisonSet,
    freq_lim: f64,
    settings: &RenderSettings,
) -> Result<ComparisonFigures, PlotError> {
    let [original, quantized, sampled] = set.analyze()?;
    plot_fourier_three(&original, &quantized, &sampled, freq_lim, settings)
}
