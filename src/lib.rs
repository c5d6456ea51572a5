//! Figures comparing a signal with its quantized and quantized+sampled
//! versions, in the time domain and as normalized spectra.
//!
//! Rendering goes through an explicit [`Figure`] value rather than a global
//! current figure; [`canvas::backend`] turns it into PNG or SVG.

pub mod canvas;
pub mod error;
pub mod settings;
pub mod views;

pub use canvas::figure::{Figure, Panel, Series};
pub use error::PlotError;
pub use quantscope_core::{fourier_analysis, BitMatrix, ComparisonSet, Spectrum, Stage, TimeSeries};
pub use settings::RenderSettings;
pub use views::comparison::{plot_comparison, plot_fourier_three, plot_spectra, ComparisonFigures};
