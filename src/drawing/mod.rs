//! Frame composition over an RGBA framebuffer.
//!
//! The presentation contract of the core: the background plot is drawn
//! once at the origin, then every displayed disk as an antialiased fill in
//! its group color followed by an outline stroke in the shared border
//! color.

use {
  crate::geometry::Disk,
  image::{Rgba, RgbaImage}
};

mod impl_draw_rgbaimage;
#[cfg(test)] mod tests;

pub trait Draw<Backend> {
  fn draw(&self, image: &mut Backend);
}

/// Frame colors: one fill per group index, one shared border.
#[derive(Debug, Clone)]
pub struct Palette {
  pub fills: Vec<Option<Rgba<u8>>>,
  pub border: Rgba<u8>,
}

impl Palette {
  pub fn fill(&self, group: usize) -> Option<Rgba<u8>> {
    self.fills.get(group).copied().flatten()
  }
}

/// A disk paired with the colors it is drawn in.
#[derive(Debug, Copy, Clone)]
pub struct StyledDisk {
  pub disk: Disk,
  pub fill: Rgba<u8>,
  pub border: Rgba<u8>,
}

/// Compose one frame. Disks whose group has no palette entry are skipped.
pub fn render_frame(background: &RgbaImage, disks: &[Disk], palette: &Palette) -> RgbaImage {
  let mut frame = background.clone();
  for disk in disks {
    let fill = match palette.fill(disk.group) {
      Some(fill) => fill,
      None => {
        log::warn!(
          "no fill color for group {}, skipping disk at ({}, {})",
          disk.group, disk.center.x, disk.center.y
        );
        continue;
      }
    };
    StyledDisk { disk: *disk, fill, border: palette.border }.draw(&mut frame);
  }
  frame
}
