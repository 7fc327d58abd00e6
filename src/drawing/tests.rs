use {
  super::*,
  crate::geometry::Disk,
  euclid::Point2D,
  image::{Rgba, RgbaImage}
};

fn black(width: u32, height: u32) -> RgbaImage {
  RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 255]))
}

fn disk(x: i32, y: i32, r: f64, group: usize) -> Disk {
  Disk::from_radius(Point2D::new(x, y), r, group)
}

fn palette(fills: &[Rgba<u8>]) -> Palette {
  Palette {
    fills: fills.iter().copied().map(Some).collect(),
    border: Rgba([255, 0, 0, 255]),
  }
}

#[test] fn fill_hits_disk_interior() {
  let background = black(64, 64);
  let frame = render_frame(
    &background,
    &[disk(32, 32, 10.0, 0)],
    &palette(&[Rgba([255, 255, 255, 255])])
  );
  assert_eq!(*frame.get_pixel(32, 32), Rgba([255, 255, 255, 255]));
  // far outside the disk the background shows through
  assert_eq!(*frame.get_pixel(2, 2), Rgba([0, 0, 0, 255]));
  assert_eq!(frame.dimensions(), background.dimensions());
}

#[test] fn groups_use_their_own_fill() {
  let background = black(64, 64);
  let frame = render_frame(
    &background,
    &[disk(16, 16, 5.0, 0), disk(48, 48, 5.0, 1)],
    &palette(&[Rgba([255, 0, 0, 255]), Rgba([0, 0, 255, 255])])
  );
  assert_eq!(frame.get_pixel(16, 16).0[0], 255);
  assert_eq!(frame.get_pixel(48, 48).0[2], 255);
}

#[test] fn translucent_fill_blends_with_background() {
  let background = black(64, 64);
  let frame = render_frame(
    &background,
    &[disk(32, 32, 10.0, 0)],
    &palette(&[Rgba([255, 255, 255, 80])])
  );
  let px = frame.get_pixel(32, 32).0;
  assert!(px[0] > 0 && px[0] < 255);
}

#[test] fn border_is_stroked_on_the_rim() {
  let background = black(64, 64);
  let frame = render_frame(
    &background,
    &[disk(32, 32, 10.0, 0)],
    &palette(&[Rgba([255, 255, 255, 0])]) // invisible fill
  );
  // rim pixel picks up the opaque red border
  assert!(frame.get_pixel(42, 32).0[0] > 0);
  // center is left untouched
  assert_eq!(*frame.get_pixel(32, 32), Rgba([0, 0, 0, 255]));
}

#[test] fn unknown_group_is_skipped() {
  let background = black(32, 32);
  let frame = render_frame(
    &background,
    &[disk(16, 16, 8.0, 5)],
    &palette(&[Rgba([255, 255, 255, 255])])
  );
  assert_eq!(frame, background);
}

#[test] fn disk_clipped_at_frame_edge() {
  let background = black(32, 32);
  let frame = render_frame(
    &background,
    &[disk(0, 0, 10.0, 0), disk(200, 200, 10.0, 0)],
    &palette(&[Rgba([255, 255, 255, 255])])
  );
  assert_eq!(*frame.get_pixel(0, 0), Rgba([255, 255, 255, 255]));
}

#[test] fn empty_displayed_set_is_background() {
  let background = black(16, 16);
  let frame = render_frame(&background, &[], &palette(&[]));
  assert_eq!(frame, background);
}
