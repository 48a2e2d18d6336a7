pub mod circle;

// Re-export the specific shape types
pub use circle::Circle;

/// A planar shape that can be measured.
///
/// Implementors compute both quantities directly; code that only needs
/// measurements should take `&dyn Measurable2D` or `impl Measurable2D`.
pub trait Measurable2D {
    /// Length of the shape's boundary.
    fn perimeter(&self) -> f64;

    /// Surface enclosed by the shape.
    fn area(&self) -> f64;
}

/// Sums the areas of a collection of shapes.
pub fn total_area<'a, I>(shapes: I) -> f64
where
    I: IntoIterator<Item = &'a dyn Measurable2D>,
{
    shapes.into_iter().map(|s| s.area()).sum()
}
