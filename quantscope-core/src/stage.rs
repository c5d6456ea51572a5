use crate::error::Result;
use crate::types::{Spectrum, TimeSeries};
use serde::{Deserialize, Serialize};

/// Processing stage of a signal in the quantization workflow.
///
/// The declaration order is the left-to-right panel order of every
/// comparison figure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Original,
    Quantized,
    QuantizedSampled,
}

impl Stage {
    pub const ALL: [Stage; 3] = [Stage::Original, Stage::Quantized, Stage::QuantizedSampled];

    /// Panel title used in spectrum figures.
    pub fn title(self) -> &'static str {
        match self {
            Stage::Original => "Original",
            Stage::Quantized => "Quantized",
            Stage::QuantizedSampled => "Quantized + sampled",
        }
    }

    /// Legend label used in the waveform overlay.
    pub fn legend_label(self) -> &'static str {
        match self {
            Stage::Original => "Original signal",
            Stage::Quantized => "Quantized signal",
            Stage::QuantizedSampled => "Quantized + sampled signal",
        }
    }

    /// Symbolic line color used in the waveform overlay.
    pub fn color(self) -> &'static str {
        match self {
            Stage::Original => "b",
            Stage::Quantized => "g",
            Stage::QuantizedSampled => "r",
        }
    }
}

/// The same signal at the three processing stages.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComparisonSet {
    pub original: TimeSeries,
    pub quantized: TimeSeries,
    pub sampled: TimeSeries,
}

impl ComparisonSet {
    pub fn get(&self, stage: Stage) -> &TimeSeries {
        match stage {
            Stage::Original => &self.original,
            Stage::Quantized => &self.quantized,
            Stage::QuantizedSampled => &self.sampled,
        }
    }

    /// Stages paired with their series, in panel order.
    pub fn iter(&self) -> impl Iterator<Item = (Stage, &TimeSeries)> {
        Stage::ALL.into_iter().map(move |stage| (stage, self.get(stage)))
    }

    /// Spectra of all three stages in panel order, each normalized on its own
    /// and computed at its own sampling rate.
    pub fn analyze(&self) -> Result<[Spectrum; 3]> {
        Ok([
            self.original.spectrum()?,
            self.quantized.spectrum()?,
            self.sampled.spectrum()?,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set() -> ComparisonSet {
        let original = TimeSeries::uniform(vec![0.0, 1.0, 0.0, -1.0], 4.0).unwrap();
        let quantized = TimeSeries::uniform(vec![0.0, 0.5, 0.0, -0.5], 4.0).unwrap();
        let sampled = TimeSeries::with_time(vec![0.0, 0.0], vec![0.0, 0.5]).unwrap();
        ComparisonSet {
            original,
            quantized,
            sampled,
        }
    }

    #[test]
    fn test_stage_order_and_titles() {
        let titles: Vec<_> = Stage::ALL.iter().map(|s| s.title()).collect();
        assert_eq!(titles, ["Original", "Quantized", "Quantized + sampled"]);
        let stages: Vec<_> = set().iter().map(|(s, _)| s).collect();
        assert_eq!(stages, Stage::ALL);
    }

    #[test]
    fn test_analyze_each_stage_independently() {
        let [orig, quant, samp] = set().analyze().unwrap();
        // Scaling the signal does not change the normalized spectrum
        assert_eq!(orig.magnitude(), quant.magnitude());
        assert!(samp.is_degenerate());
        assert_eq!(samp.sample_rate(), 2.0);
    }
}
