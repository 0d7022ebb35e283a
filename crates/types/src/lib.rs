pub mod color;
pub mod geometry;
pub mod metrics;

pub use color::Color;
pub use geometry::{Point, Rect, Size};
pub use metrics::{CharInfo, LineBreak};
