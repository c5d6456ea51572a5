use anyhow::{Context, Result};
use quantscope_core::{BitMatrix, ComparisonSet, Spectrum};
use serde::Deserialize;
use std::path::Path;

/// Bit-plane decomposition of the quantized signal.
#[derive(Debug, Deserialize)]
pub struct BitplaneInput {
    pub bits: BitMatrix,
    pub time: Vec<f64>,
}

/// Precomputed signals plus optional view limits.
#[derive(Debug, Deserialize)]
pub struct SignalDocument {
    #[serde(flatten)]
    pub set: ComparisonSet,
    #[serde(default)]
    pub bitplanes: Option<BitplaneInput>,
    #[serde(default)]
    pub freq_lim: Option<f64>,
    #[serde(default)]
    pub x_lim: Option<f64>,
    #[serde(default)]
    pub y_lim: Option<f64>,
}

impl SignalDocument {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("failed to parse signal document")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_json_str(&json)
    }

    /// Nyquist frequency of the original spectrum unless given.
    pub fn freq_lim(&self, original: &Spectrum) -> f64 {
        self.freq_lim.unwrap_or_else(|| original.nyquist())
    }

    /// Duration of the original signal unless given.
    pub fn x_lim(&self) -> f64 {
        self.x_lim.unwrap_or_else(|| {
            let d = self.set.original.duration();
            if d > 0.0 { d } else { 1.0 }
        })
    }

    /// Largest absolute sample across all stages plus 10% headroom unless given.
    pub fn y_lim(&self) -> f64 {
        self.y_lim.unwrap_or_else(|| {
            let peak = self
                .set
                .iter()
                .flat_map(|(_, series)| series.samples().iter())
                .fold(0.0f64, |acc, s| acc.max(s.abs()));
            if peak > 0.0 { peak * 1.1 } else { 1.0 }
        })
    }
}
