pub mod background;
pub mod canvas;
pub mod font;

pub use canvas::{Canvas, HEIGHT, WIDTH};
pub use font::FontHandle;
