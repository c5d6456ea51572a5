use crate::error::{Error, Result};
use crate::types::{check_sample_rate, check_samples, Spectrum, TimeSeries};
use realfft::num_complex::Complex;
use realfft::RealFftPlanner;
use std::cell::RefCell;

thread_local! {
    static FFT_PLANNER: RefCell<RealFftPlanner<f64>> = RefCell::new(RealFftPlanner::new());
}

/// Full two-sided DFT of a real sequence.
///
/// The real FFT only yields bins `0..=N/2`; the rest follow from Hermitian
/// symmetry, `X[N - k] = conj(X[k])`.
fn full_dft(samples: &[f64]) -> Result<Vec<Complex<f64>>> {
    let n = samples.len();
    if n == 1 {
        return Ok(vec![Complex::new(samples[0], 0.0)]);
    }

    let fft = FFT_PLANNER.with(|p| p.borrow_mut().plan_fft_forward(n));
    let mut input = fft.make_input_vec();
    let mut half = fft.make_output_vec();
    input.copy_from_slice(samples);
    fft.process(&mut input, &mut half)
        .map_err(|e| Error::invalid(format!("FFT failed: {e}")))?;

    let mut bins = Vec::with_capacity(n);
    bins.extend_from_slice(&half);
    for k in half.len()..n {
        bins.push(half[n - k].conj());
    }
    Ok(bins)
}

/// Compute the normalized spectrum of `samples` taken at `sample_rate` Hz.
///
/// Every bin is divided by the single largest `|X|`, so the peak magnitude is
/// 1.0. An all-zero input has no peak to divide by and is returned as the zero
/// spectrum. `frequency_axis[k] = k * fs / N` over the whole `[0, fs)` range;
/// restricting the view to `[0, fs/2]` is the caller's concern.
pub fn fourier_analysis(samples: &[f64], sample_rate: f64) -> Result<Spectrum> {
    check_samples(samples)?;
    check_sample_rate(sample_rate)?;

    let n = samples.len();
    let mut bins = full_dft(samples)?;

    let max_mag = bins.iter().map(|c| c.norm()).fold(0.0f64, f64::max);
    let degenerate = max_mag == 0.0;
    if degenerate {
        log::debug!("all-zero input of {n} samples, spectrum left unnormalized");
    } else {
        for c in bins.iter_mut() {
            *c /= max_mag;
        }
    }

    let magnitude = bins.iter().map(|c| c.norm()).collect();
    let frequency_axis = (0..n)
        .map(|k| k as f64 * sample_rate / n as f64)
        .collect();

    Ok(Spectrum {
        frequency_axis,
        bins,
        magnitude,
        sample_rate,
        degenerate,
    })
}

impl TimeSeries {
    /// Normalized spectrum of this series at its own sampling rate.
    pub fn spectrum(&self) -> Result<Spectrum> {
        fourier_analysis(self.samples(), self.sample_rate())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn naive_dft(x: &[f64]) -> Vec<Complex<f64>> {
        let n = x.len();
        (0..n)
            .map(|k| {
                x.iter().enumerate().fold(Complex::new(0.0, 0.0), |acc, (i, &v)| {
                    let phase = -2.0 * PI * (k * i) as f64 / n as f64;
                    acc + Complex::new(phase.cos(), phase.sin()) * v
                })
            })
            .collect()
    }

    #[test]
    fn test_period_four_peak() {
        let spec = fourier_analysis(&[1.0, 0.0, -1.0, 0.0], 4.0).unwrap();
        assert_eq!(spec.len(), 4);
        assert_eq!(spec.frequency_axis(), &[0.0, 1.0, 2.0, 3.0]);
        assert!((spec.magnitude()[1] - 1.0).abs() < 1e-12);
        assert!(spec.magnitude()[0].abs() < 1e-12);
        assert!(spec.magnitude()[2].abs() < 1e-12);
        // Mirror image above Nyquist
        assert!((spec.magnitude()[3] - 1.0).abs() < 1e-12);
        assert_eq!(spec.peak_frequency(), Some(1.0));
        assert_eq!(spec.nyquist(), 2.0);
    }

    #[test]
    fn test_all_zero_input() {
        let spec = fourier_analysis(&[0.0; 8], 100.0).unwrap();
        assert!(spec.is_degenerate());
        assert_eq!(spec.len(), 8);
        assert!(spec.magnitude().iter().all(|&m| m == 0.0));
        assert!(spec.bins().iter().all(|c| c.re == 0.0 && c.im == 0.0));
        assert_eq!(spec.peak_frequency(), None);
    }

    #[test]
    fn test_invalid_input() {
        assert!(matches!(
            fourier_analysis(&[], 1.0),
            Err(Error::InvalidInput { .. })
        ));
        assert!(matches!(
            fourier_analysis(&[1.0, 2.0], 0.0),
            Err(Error::InvalidInput { .. })
        ));
        assert!(matches!(
            fourier_analysis(&[1.0, 2.0], -8.0),
            Err(Error::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_matches_naive_dft_odd_and_even() {
        for n in [1usize, 2, 5, 7, 12, 33] {
            let x: Vec<f64> = (0..n).map(|i| ((i * 7 + 3) % 11) as f64 - 5.0).collect();
            let reference = naive_dft(&x);
            let max = reference.iter().map(|c| c.norm()).fold(0.0, f64::max);
            let spec = fourier_analysis(&x, 10.0).unwrap();
            assert_eq!(spec.len(), n);
            for (got, want) in spec.bins().iter().zip(reference.iter()) {
                let want = *want / max;
                assert!((*got - want).norm() < 1e-9, "n={n}: {got} vs {want}");
            }
        }
    }

    #[test]
    fn test_normalized_peak_and_axis() {
        let fs = 1000.0;
        let n = 500;
        let x: Vec<f64> = (0..n)
            .map(|i| 3.0 * (2.0 * PI * 50.0 * i as f64 / fs).sin())
            .collect();
        let spec = fourier_analysis(&x, fs).unwrap();

        let max = spec.magnitude().iter().copied().fold(0.0, f64::max);
        assert!((max - 1.0).abs() < 1e-12);
        assert_eq!(spec.frequency_axis()[0], 0.0);
        for (k, &f) in spec.frequency_axis().iter().enumerate() {
            assert_eq!(f, k as f64 * fs / n as f64);
        }
        let peak = spec.peak_frequency().unwrap();
        assert!((peak - 50.0).abs() < fs / n as f64);
    }

    #[test]
    fn test_repeatable() {
        let x: Vec<f64> = (0..64).map(|i| (i as f64 * 0.37).cos()).collect();
        let a = fourier_analysis(&x, 48.0).unwrap();
        let b = fourier_analysis(&x, 48.0).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_series_uses_own_rate() {
        let ts = TimeSeries::with_time(vec![1.0, 0.0, -1.0, 0.0], vec![0.0, 0.5, 1.0, 1.5]).unwrap();
        let spec = ts.spectrum().unwrap();
        assert_eq!(spec.sample_rate(), 2.0);
        assert_eq!(spec.frequency_axis(), &[0.0, 0.5, 1.0, 1.5]);
    }
}
