use {
  super::{Draw, StyledDisk},
  crate::geometry::{BoundingBox, PixelSpace, Sdf},
  euclid::{Box2D, Point2D, Size2D},
  image::{Pixel, Rgba, RgbaImage}
};

/// Outline stroke width, in pixels.
const STROKE_WIDTH: f64 = 1.0;

impl Draw<RgbaImage> for StyledDisk {
  fn draw(&self, image: &mut RgbaImage) {
    if self.disk.width <= 0 || self.disk.height <= 0 {
      return;
    }
    let resolution: Size2D<_, PixelSpace> = image.dimensions().into();
    let bounding_box = match clip_bounding_box(self.disk.bounding_box(), resolution) {
      Some(x) => x,
      None => return // no intersection with the frame at all
    };

    itertools::iproduct!(bounding_box.y_range(), bounding_box.x_range())
      .map(|(y, x)| Point2D::<_, PixelSpace>::from([x, y]))
      .for_each(|pixel| {
        let sdf = self.disk.sdf(pixel.to_f64());
        let px = image.get_pixel_mut(pixel.x, pixel.y);
        *px = sdf_overlay_aa(sdf, *px, self.fill);
        *px = sdf_stroke_aa(sdf, *px, self.border);
      });
  }
}

// grow by the stroke, then clip to the frame
fn clip_bounding_box(
  bounding_box: Box2D<f64, PixelSpace>,
  resolution: Size2D<u32, PixelSpace>
) -> Option<Box2D<u32, PixelSpace>> {
  bounding_box
    .inflate(STROKE_WIDTH, STROKE_WIDTH)
    .round_out()
    .intersection(&Box2D::from_size(resolution.to_f64()))
    .map(|x| x.to_u32())
}

fn sdf_overlay_aa(sdf: f64, mut col1: Rgba<u8>, mut col2: Rgba<u8>) -> Rgba<u8> {
  let alpha = (0.5 - sdf) // antialias over a one pixel band
    .clamp(0.0, 1.0);
  // overlay blending with premultiplied alpha
  col2.0[3] = ((col2.0[3] as f64) * alpha) as u8;
  col1.blend(&col2);
  col1
}

fn sdf_stroke_aa(sdf: f64, mut col1: Rgba<u8>, mut col2: Rgba<u8>) -> Rgba<u8> {
  let alpha = (0.5 + STROKE_WIDTH / 2.0 - sdf.abs())
    .clamp(0.0, 1.0);
  col2.0[3] = ((col2.0[3] as f64) * alpha) as u8;
  col1.blend(&col2);
  col1
}
