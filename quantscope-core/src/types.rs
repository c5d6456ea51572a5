use crate::error::{Error, Result};
use realfft::num_complex::Complex;
use serde::{Deserialize, Serialize};

/// Real-valued samples with either an explicit time axis or a uniform
/// sampling rate.
///
/// Always holds at least one finite sample and a positive, finite sampling
/// rate. When only explicit times are given the rate is taken from the first
/// time step.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTimeSeries", into = "RawTimeSeries")]
pub struct TimeSeries {
    samples: Vec<f64>,
    time: Option<Vec<f64>>,
    sample_rate: f64,
}

/// Wire shape of a [`TimeSeries`]; validated on the way in.
#[derive(Serialize, Deserialize)]
struct RawTimeSeries {
    samples: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    time: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sample_rate: Option<f64>,
}

impl TryFrom<RawTimeSeries> for TimeSeries {
    type Error = Error;

    fn try_from(raw: RawTimeSeries) -> Result<Self> {
        match (raw.time, raw.sample_rate) {
            (Some(time), Some(rate)) => TimeSeries::with_time_and_rate(raw.samples, time, rate),
            (Some(time), None) => TimeSeries::with_time(raw.samples, time),
            (None, Some(rate)) => TimeSeries::uniform(raw.samples, rate),
            (None, None) => Err(Error::invalid(
                "time series needs a `time` axis or a `sample_rate`",
            )),
        }
    }
}

impl From<TimeSeries> for RawTimeSeries {
    fn from(series: TimeSeries) -> Self {
        RawTimeSeries {
            samples: series.samples,
            time: series.time,
            sample_rate: Some(series.sample_rate),
        }
    }
}

pub(crate) fn check_samples(samples: &[f64]) -> Result<()> {
    if samples.is_empty() {
        return Err(Error::invalid("sample sequence is empty"));
    }
    if let Some(i) = samples.iter().position(|s| !s.is_finite()) {
        return Err(Error::invalid(format!("sample {i} is not finite")));
    }
    Ok(())
}

pub(crate) fn check_sample_rate(sample_rate: f64) -> Result<()> {
    if !(sample_rate.is_finite() && sample_rate > 0.0) {
        return Err(Error::invalid(format!(
            "sampling rate must be positive and finite, got {sample_rate}"
        )));
    }
    Ok(())
}

fn check_time_axis(samples: &[f64], time: &[f64]) -> Result<()> {
    if time.len() != samples.len() {
        return Err(Error::invalid(format!(
            "time axis has {} points but there are {} samples",
            time.len(),
            samples.len()
        )));
    }
    if time.iter().any(|t| !t.is_finite()) {
        return Err(Error::invalid("time axis contains non-finite values"));
    }
    if time.windows(2).any(|w| w[1] <= w[0]) {
        return Err(Error::invalid("time axis must be strictly increasing"));
    }
    Ok(())
}

impl TimeSeries {
    /// Samples taken every `1 / sample_rate` seconds starting at t = 0.
    pub fn uniform(samples: Vec<f64>, sample_rate: f64) -> Result<Self> {
        check_samples(&samples)?;
        check_sample_rate(sample_rate)?;
        Ok(TimeSeries {
            samples,
            time: None,
            sample_rate,
        })
    }

    /// Samples paired with explicit instants. The sampling rate is the
    /// reciprocal of the first time step, so at least two points are needed.
    pub fn with_time(samples: Vec<f64>, time: Vec<f64>) -> Result<Self> {
        check_samples(&samples)?;
        check_time_axis(&samples, &time)?;
        if time.len() < 2 {
            return Err(Error::invalid(
                "cannot derive a sampling rate from a single time point",
            ));
        }
        let sample_rate = 1.0 / (time[1] - time[0]);
        check_sample_rate(sample_rate)?;
        Ok(TimeSeries {
            samples,
            time: Some(time),
            sample_rate,
        })
    }

    /// Explicit instants with a separately known sampling rate (the rate
    /// used to build the frequency axis).
    pub fn with_time_and_rate(samples: Vec<f64>, time: Vec<f64>, sample_rate: f64) -> Result<Self> {
        check_samples(&samples)?;
        check_time_axis(&samples, &time)?;
        check_sample_rate(sample_rate)?;
        Ok(TimeSeries {
            samples,
            time: Some(time),
            sample_rate,
        })
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always false for a validated series.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Explicit time axis if one was given, otherwise `k / sample_rate`.
    pub fn time_axis(&self) -> Vec<f64> {
        match &self.time {
            Some(time) => time.clone(),
            None => (0..self.samples.len())
                .map(|k| k as f64 / self.sample_rate)
                .collect(),
        }
    }

    /// Time of the last sample.
    pub fn duration(&self) -> f64 {
        match &self.time {
            Some(time) => time.last().copied().unwrap_or(0.0),
            None => (self.samples.len() - 1) as f64 / self.sample_rate,
        }
    }
}

/// Normalized frequency-domain view of one [`TimeSeries`].
///
/// `frequency_axis`, `bins` and `magnitude` all have the source length. The
/// axis spans the full two-sided range `[0, fs)`; bins above Nyquist mirror
/// the ones below. Unless the source was all zeros the peak magnitude is 1.0.
#[derive(Clone, Debug, PartialEq)]
pub struct Spectrum {
    pub(crate) frequency_axis: Vec<f64>,
    pub(crate) bins: Vec<Complex<f64>>,
    pub(crate) magnitude: Vec<f64>,
    pub(crate) sample_rate: f64,
    pub(crate) degenerate: bool,
}

impl Spectrum {
    pub fn frequency_axis(&self) -> &[f64] {
        &self.frequency_axis
    }

    /// Normalized complex transform values.
    pub fn bins(&self) -> &[Complex<f64>] {
        &self.bins
    }

    /// `|X|` per bin, in `[0, 1]`.
    pub fn magnitude(&self) -> &[f64] {
        &self.magnitude
    }

    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    pub fn nyquist(&self) -> f64 {
        self.sample_rate / 2.0
    }

    /// True when the source signal was all zeros and no normalization took place.
    pub fn is_degenerate(&self) -> bool {
        self.degenerate
    }

    /// Magnitudes in dB, with zero bins reported as `floor_db`.
    pub fn magnitude_db(&self, floor_db: f64) -> Vec<f64> {
        crate::db::magnitudes_to_db(&self.magnitude, floor_db)
    }

    /// Frequency of the strongest bin in the non-mirrored half `0..=N/2`.
    /// `None` for a degenerate spectrum.
    pub fn peak_frequency(&self) -> Option<f64> {
        if self.degenerate {
            return None;
        }
        let half = self.magnitude.len() / 2;
        self.magnitude[..=half]
            .iter()
            .enumerate()
            .fold(None, |best: Option<(usize, f64)>, (k, &m)| match best {
                Some((_, bm)) if bm >= m => best,
                _ => Some((k, m)),
            })
            .map(|(k, _)| self.frequency_axis[k])
    }
}

/// Bit-plane matrix: one row per bit index, one 0/1 column per sample.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<u8>>", into = "Vec<Vec<u8>>")]
pub struct BitMatrix {
    rows: Vec<Vec<u8>>,
}

impl TryFrom<Vec<Vec<u8>>> for BitMatrix {
    type Error = Error;

    fn try_from(rows: Vec<Vec<u8>>) -> Result<Self> {
        BitMatrix::new(rows)
    }
}

impl From<BitMatrix> for Vec<Vec<u8>> {
    fn from(matrix: BitMatrix) -> Self {
        matrix.rows
    }
}

impl BitMatrix {
    pub fn new(rows: Vec<Vec<u8>>) -> Result<Self> {
        let Some(first) = rows.first() else {
            return Err(Error::invalid("bit matrix has no rows"));
        };
        let width = first.len();
        if width == 0 {
            return Err(Error::invalid("bit matrix has no columns"));
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(Error::invalid(format!(
                    "bit row {i} has {} columns, expected {width}",
                    row.len()
                )));
            }
            if row.iter().any(|&b| b > 1) {
                return Err(Error::invalid(format!("bit row {i} holds values other than 0/1")));
            }
        }
        Ok(BitMatrix { rows })
    }

    /// Number of quantization bits (rows).
    pub fn qbits(&self) -> usize {
        self.rows.len()
    }

    /// Number of samples (columns).
    pub fn columns(&self) -> usize {
        self.rows[0].len()
    }

    pub fn row(&self, bit: usize) -> Option<&[u8]> {
        self.rows.get(bit).map(Vec::as_slice)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.rows.iter().map(Vec::as_slice)
    }
}
