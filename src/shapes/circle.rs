use std::f64::consts::PI;
use std::fmt;

use log::{debug, warn};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Measurable2D;
use crate::common::Color;
use crate::error::{GeometryError, Result};
use crate::math::point::Point;

/// A circle with a center, a radius and a display color.
///
/// The circle owns its center: points handed to a constructor are copied,
/// so later changes to the caller's point never move the circle.
/// The radius is always finite and strictly positive; the diameter is
/// derived from it and never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "CircleRepr"))]
pub struct Circle {
    center: Point,
    radius: f64,
    color: Color,
}

fn check_radius(radius: f64) -> Result<f64> {
    if radius.is_finite() && radius > 0.0 {
        Ok(radius)
    } else {
        warn!("rejected circle radius {}", radius);
        Err(GeometryError::InvalidRadius(radius))
    }
}

impl Circle {
    /// Creates a circle with the default color (blue).
    pub fn new(center: Point, radius: f64) -> Result<Self> {
        Self::with_color(center, radius, Color::DEFAULT)
    }

    /// Creates a circle with an explicit color.
    pub fn with_color(center: Point, radius: f64, color: Color) -> Result<Self> {
        let radius = check_radius(radius)?;
        debug!("new circle at {} with radius {} ({})", center, radius, color);
        Ok(Self { center, radius, color })
    }

    /// Creates a circle centered on the origin.
    pub fn at_origin(radius: f64) -> Result<Self> {
        Self::new(Point::ORIGIN, radius)
    }

    /// Creates a circle from its center and any point on its circumference.
    ///
    /// Fails with `InvalidRadius(0.0)` when both points coincide.
    pub fn from_points(center: Point, point_on_circumference: Point) -> Result<Self> {
        Self::new(center, center.distance(point_on_circumference))
    }

    /// Creates a circle from two diametrically opposite points.
    pub fn from_diameter_points(a: Point, b: Point) -> Result<Self> {
        Self::new(a.midpoint(b), a.distance(b) / 2.0)
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn diameter(&self) -> f64 {
        2.0 * self.radius
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Moves the circle by `(dx, dy)`.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.center.translate(dx, dy);
        debug!("circle translated by ({}, {}) to {}", dx, dy, self.center);
    }

    pub fn set_center(&mut self, center: Point) {
        self.center = center;
    }

    /// Replaces the radius. On error the circle is left unchanged.
    pub fn set_radius(&mut self, radius: f64) -> Result<()> {
        self.radius = check_radius(radius)?;
        debug!("circle radius set to {}", self.radius);
        Ok(())
    }

    /// Replaces the radius with half of `diameter`. On error the circle is left unchanged.
    pub fn set_diameter(&mut self, diameter: f64) -> Result<()> {
        let radius = diameter / 2.0;
        // Halving a subnormal diameter can round the radius to zero.
        if !(diameter.is_finite() && radius > 0.0) {
            warn!("rejected circle diameter {}", diameter);
            return Err(GeometryError::InvalidDiameter(diameter));
        }
        self.radius = radius;
        debug!("circle diameter set to {}", diameter);
        Ok(())
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Returns true if `point` lies inside the circle or on its boundary.
    pub fn contains(&self, point: Point) -> bool {
        self.center.distance(point) <= self.radius
    }
}

impl Measurable2D for Circle {
    fn perimeter(&self) -> f64 {
        2.0 * PI * self.radius
    }

    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cr@{} {}", self.center, self.radius)
    }
}

/// Unvalidated wire form; deserialized circles go through `check_radius`.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct CircleRepr {
    center: Point,
    radius: f64,
    #[serde(default)]
    color: Color,
}

#[cfg(feature = "serde")]
impl TryFrom<CircleRepr> for Circle {
    type Error = GeometryError;

    fn try_from(repr: CircleRepr) -> Result<Self> {
        Circle::with_color(repr.center, repr.radius, repr.color)
    }
}
