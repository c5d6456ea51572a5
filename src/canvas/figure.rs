//! Explicit drawing context.
//!
//! A [`Figure`] is a grid of [`Panel`]s; renderers append line data and axis
//! state to a panel they are handed, and the backend rasterizes the result.
//! Nothing here is global, so figures can be built side by side and inspected
//! in tests.

use crate::error::PlotError;
use serde::Serialize;

/// One polyline on a panel.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Series {
    pub points: Vec<(f64, f64)>,
    pub color: [u8; 3],
    pub line_width: u32,
    /// Legend entry, if any.
    pub label: Option<String>,
}

/// Axes state plus the series drawn on them.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Panel {
    pub title: String,
    pub title_size: u32,
    pub label_size: u32,
    pub x_label: String,
    pub y_label: String,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
    pub grid: bool,
    pub legend: bool,
    /// Fixed y tick positions and their labels, replacing the automatic ones.
    pub y_ticks: Option<Vec<(f64, String)>>,
    pub series: Vec<Series>,
}

impl Default for Panel {
    fn default() -> Self {
        Panel {
            title: String::new(),
            title_size: 14,
            label_size: 12,
            x_label: String::new(),
            y_label: String::new(),
            x_range: (0.0, 1.0),
            y_range: (0.0, 1.0),
            grid: false,
            legend: false,
            y_ticks: None,
            series: Vec::new(),
        }
    }
}

impl Panel {
    /// Label of the y tick at `value`, empty when `value` is not one of the
    /// fixed ticks.
    pub fn y_tick_label(&self, value: f64) -> String {
        self.y_ticks
            .as_ref()
            .and_then(|ticks| ticks.iter().find(|(pos, _)| (pos - value).abs() < 1e-6))
            .map(|(_, label)| label.clone())
            .unwrap_or_default()
    }
}

/// A `rows x cols` grid of panels with a pixel size.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Figure {
    pub width: u32,
    pub height: u32,
    pub rows: usize,
    pub cols: usize,
    panels: Vec<Panel>,
}

impl Figure {
    /// Single-panel figure.
    pub fn new(size: (u32, u32)) -> Self {
        Figure::subplots(1, 1, size)
    }

    /// Empty grid; panels are indexed row-major.
    pub fn subplots(rows: usize, cols: usize, size: (u32, u32)) -> Self {
        let rows = rows.max(1);
        let cols = cols.max(1);
        Figure {
            width: size.0,
            height: size.1,
            rows,
            cols,
            panels: vec![Panel::default(); rows * cols],
        }
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn panels_mut(&mut self) -> &mut [Panel] {
        &mut self.panels
    }

    pub fn panel(&self, index: usize) -> Option<&Panel> {
        self.panels.get(index)
    }

    pub fn panel_mut(&mut self, index: usize) -> Option<&mut Panel> {
        self.panels.get_mut(index)
    }

    /// Pretty-printed JSON dump of the whole figure.
    pub fn to_json(&self) -> Result<String, PlotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subplots_grid() {
        let fig = Figure::subplots(1, 3, (1200, 500));
        assert_eq!(fig.panels().len(), 3);
        assert_eq!((fig.width, fig.height), (1200, 500));
        assert!(fig.panel(2).is_some());
        assert!(fig.panel(3).is_none());
    }

    #[test]
    fn test_figures_are_independent() {
        let mut a = Figure::new((100, 100));
        let b = Figure::new((100, 100));
        if let Some(p) = a.panel_mut(0) {
            p.title = "changed".into();
        }
        assert_eq!(b.panels()[0].title, "");
        assert_ne!(a, b);
    }

    #[test]
    fn test_y_tick_lookup() {
        let panel = Panel {
            y_ticks: Some(vec![(0.0, "0".into()), (1.0, "1".into())]),
            ..Panel::default()
        };
        assert_eq!(panel.y_tick_label(1.0), "1");
        assert_eq!(panel.y_tick_label(0.5), "");
    }

    #[test]
    fn test_json_export() {
        let json = Figure::new((10, 10)).to_json().unwrap();
        assert!(json.contains("\"panels\""));
    }
}
