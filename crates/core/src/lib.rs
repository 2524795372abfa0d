pub mod bar;
pub mod types;

pub use bar::{filled_segments, render_bar, EMPTY_GLYPH, FILLED_GLYPH};
pub use types::*;
