// Presentation adapter: applies a computed value to the preview element

pub mod document;
pub mod mode;
pub mod surface;
pub mod target;

pub use mode::VisualizationMode;
pub use surface::PreviewSurface;
pub use target::PreviewTarget;
