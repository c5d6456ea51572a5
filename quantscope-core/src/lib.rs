//! Analysis core for quantization and sampling comparisons: signal
//! containers, the normalized Fourier transform and dB conversion.

pub mod db;
pub mod error;
pub mod fft;
pub mod stage;
pub mod types;

pub use error::{Error, Result};
pub use fft::fourier_analysis;
pub use realfft::num_complex::Complex;
pub use stage::{ComparisonSet, Stage};
pub use types::{BitMatrix, Spectrum, TimeSeries};
