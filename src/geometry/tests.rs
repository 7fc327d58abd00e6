use {
  super::*,
  euclid::Point2D
};

fn center(x: i32, y: i32) -> Point2D<i32, PixelSpace> {
  Point2D::new(x, y)
}

#[test] fn radius_from_bounding_box() {
  let disk = Disk::from_bounding_box(center(0, 0), 10, 20, 0);
  assert_eq!(disk.radius, 15.0);
  assert_eq!((disk.width, disk.height), (10, 20));
}

#[test] fn radius_from_bounding_box_truncates() {
  // the mean is taken on integers, as the original exporter rounds
  let disk = Disk::from_bounding_box(center(0, 0), 5, 6, 0);
  assert_eq!(disk.radius, 5.0);
}

#[test] fn bounding_box_from_radius() {
  let disk = Disk::from_radius(center(0, 0), 5.0, 0);
  assert_eq!((disk.width, disk.height), (10, 10));
  assert_eq!(disk.radius, 5.0);

  let disk = Disk::from_radius(center(0, 0), 5.7, 0);
  assert_eq!((disk.width, disk.height), (11, 11));
}

#[test] fn contains_circle() {
  let disk = Disk::from_bounding_box(center(10, 10), 10, 10, 0);
  assert!(disk.contains(P2::new(10.0, 10.0)));
  assert!(disk.contains(P2::new(13.0, 12.0)));
  assert!(!disk.contains(P2::new(16.0, 10.0)));
  // the boundary itself is outside (strict interior test)
  assert!(!disk.contains(P2::new(15.0, 10.0)));
}

#[test] fn contains_ellipse_is_centered() {
  let disk = Disk::from_bounding_box(center(10, 10), 10, 20, 0);
  assert!(disk.contains(P2::new(10.0, 18.0)));
  assert!(disk.contains(P2::new(10.0, 2.0)));
  assert!(!disk.contains(P2::new(16.0, 10.0)));
  assert!(!disk.contains(P2::new(10.0, 21.0)));
}

#[test] fn degenerate_box_contains_nothing() {
  let disk = Disk::from_bounding_box(center(10, 10), 0, 0, 0);
  assert!(!disk.contains(P2::new(10.0, 10.0)));
}

#[test] fn bounding_box_is_centered() {
  let b = Disk::from_bounding_box(center(10, 10), 10, 20, 0).bounding_box();
  assert_eq!(b.min, P2::new(5.0, 0.0));
  assert_eq!(b.max, P2::new(15.0, 20.0));
}

#[test] fn sdf_sign() {
  let disk = Disk::from_radius(center(10, 10), 5.0, 0);
  assert!(disk.sdf(P2::new(10.0, 10.0)) < 0.0);
  assert!(disk.sdf(P2::new(10.0, 30.0)) > 0.0);
  // on the boundary, up to rounding
  assert!(disk.sdf(P2::new(15.0, 10.0)).abs() < 1e-9);
}
