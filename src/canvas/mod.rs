pub mod backend;
pub mod bitplane_renderer;
pub mod colors;
pub mod figure;
pub mod spectrum_renderer;
pub mod waveform_renderer;
