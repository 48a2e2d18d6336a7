pub mod math;
pub mod shapes;
pub mod common;
pub mod error;

// Re-export key types for easier use
pub use math::point::Point;
pub use shapes::{total_area, Circle, Measurable2D};
pub use common::Color;
pub use error::{GeometryError, Result};
