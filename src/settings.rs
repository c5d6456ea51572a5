use crate::canvas::colors::parse_color;
use crate::error::PlotError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Cosmetic parameters shared by every figure. Missing JSON fields fall back
/// to the defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Waveform overlay figure size in pixels.
    pub waveform_size: (u32, u32),
    /// Three-panel spectrum figure size in pixels.
    pub spectrum_size: (u32, u32),
    /// Bit-plane figure size in pixels.
    pub bitplane_size: (u32, u32),
    pub title_font_size: u32,
    pub label_font_size: u32,
    pub line_width: u32,
    /// Lower y limit of dB panels; zero magnitudes are drawn here.
    pub db_floor: f64,
    /// Line color of linear spectrum panels.
    pub linear_color: String,
    /// Line color of dB spectrum panels.
    pub db_color: String,
}

impl Default for RenderSettings {
    fn default() -> Self {
        RenderSettings {
            waveform_size: (1000, 400),
            spectrum_size: (1200, 500),
            bitplane_size: (1000, 400),
            title_font_size: 14,
            label_font_size: 12,
            line_width: 1,
            db_floor: -120.0,
            linear_color: "b".to_string(),
            db_color: "C0".to_string(),
        }
    }
}

impl RenderSettings {
    pub fn from_json_str(json: &str) -> Result<Self, PlotError> {
        let settings: RenderSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, PlotError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), PlotError> {
        for (name, (w, h)) in [
            ("waveform_size", self.waveform_size),
            ("spectrum_size", self.spectrum_size),
            ("bitplane_size", self.bitplane_size),
        ] {
            if w == 0 || h == 0 {
                return Err(PlotError::invalid(format!("{name} must be non-zero, got {w}x{h}")));
            }
        }
        check_db_floor(self.db_floor)?;
        parse_color(&self.linear_color)?;
        parse_color(&self.db_color)?;
        Ok(())
    }
}

/// dB panels span `[floor, 10]`, so the floor must be finite and below 10.
pub(crate) fn check_db_floor(floor_db: f64) -> Result<(), PlotError> {
    if !(floor_db.is_finite() && floor_db < 10.0) {
        return Err(PlotError::invalid(format!(
            "dB floor must be finite and below 10 dB, got {floor_db}"
        )));
    }
    Ok(())
}
