//! Presentation layer: the render-sink contract, the theme, and the widget
//! markup projection.

pub mod document;
pub mod render;
pub mod theme;

pub use document::render_document;
pub use render::RenderSink;
pub use theme::{Theme, UNIX_THEME};
