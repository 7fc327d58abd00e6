use {
  super::{BoundingBox, PixelSpace, Sdf, P2},
  euclid::{Box2D, Point2D, Vector2D as V2}
};

/// One exclusion-disk sample: a circular (elliptical, when the bounding box
/// is not square) region centered on `center`.
///
/// `maximal` is assigned once, while loading: a disk is maximal when the
/// record following it in its source file has a different center, i.e. it
/// closes a run of same-centered samples.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Disk {
  pub center: Point2D<i32, PixelSpace>,
  pub radius: f64,
  pub width: i32,
  pub height: i32,
  pub group: usize,
  pub maximal: bool,
}

impl Disk {
  /// Disk inscribed in a `width` × `height` box around `center`;
  /// the radius is the mean of the two sides, on integers.
  pub fn from_bounding_box(
    center: Point2D<i32, PixelSpace>,
    width: i32, height: i32,
    group: usize
  ) -> Self {
    Self {
      center,
      radius: ((width + height) / 2) as f64,
      width, height,
      group,
      maximal: false
    }
  }

  /// Disk of a given radius; the bounding box sides are `2 × radius`
  /// truncated toward zero.
  pub fn from_radius(center: Point2D<i32, PixelSpace>, radius: f64, group: usize) -> Self {
    let side = (2.0 * radius) as i32;
    Self {
      center,
      radius,
      width: side,
      height: side,
      group,
      maximal: false
    }
  }

  /// Whether `pixel` lies strictly inside the ellipse inscribed in the
  /// bounding box. Degenerate boxes contain nothing.
  pub fn contains(&self, pixel: P2) -> bool {
    if self.width <= 0 || self.height <= 0 {
      return false;
    }
    let d = (pixel - self.center.to_f64())
      .component_div(V2::new(self.width as f64 / 2.0, self.height as f64 / 2.0));
    d.square_length() < 1.0
  }
}

impl BoundingBox<f64, PixelSpace> for Disk {
  fn bounding_box(&self) -> Box2D<f64, PixelSpace> {
    let half = V2::new(self.width as f64 / 2.0, self.height as f64 / 2.0);
    Box2D::new(
      self.center.to_f64() - half,
      self.center.to_f64() + half
    )}}

impl Sdf<f64> for Disk {
  fn sdf(&self, pixel: P2) -> f64 {
    let half = V2::new(self.width as f64 / 2.0, self.height as f64 / 2.0);
    if half.x <= 0.0 || half.y <= 0.0 {
      return f64::MAX;
    }
    // unit circle under anisotropic scale; exact for square boxes
    let d = (pixel - self.center.to_f64()).component_div(half);
    (d.length() - 1.0) * half.x.min(half.y)
  }
}
