//! .
//!
//! The origin of coordinate system is in top-left corner, matching raster
//! images: x grows right, y grows down. All coordinates are in pixels of
//! the background plot.

use euclid::{Box2D, Point2D};

pub mod shapes;
pub use shapes::*;

#[cfg(test)] mod tests;

/// Pixel coordinate basis
#[derive(Debug, Copy, Clone)]
pub struct PixelSpace;

/// A query point (mouse position) in pixel coordinates.
pub type P2 = Point2D<f64, PixelSpace>;

pub trait BoundingBox<T, S> {
  fn bounding_box(&self) -> Box2D<T, S>;
}

/// Signed distance function, in pixel units.
pub trait Sdf<T> {
  fn sdf(&self, pixel: P2) -> T;
}
