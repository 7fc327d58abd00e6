//! The selection engine and its configuration.
//!
//! [`Selection`] owns the two disjoint pools of disks — hidden and
//! displayed — and implements every operation of the viewer: load, point
//! query, show-all, hide-all, active-group switch. Each disk is in exactly
//! one pool at any moment; operations only ever move disks between them.
//!
//! Mutating operations return the updated displayed slice; a caller that
//! sees it change re-renders the frame. There is no event plumbing here.

use {
  crate::{
    drawing::{self, Palette},
    error::Result,
    geometry::{Disk, P2},
    loader
  },
  image::{Rgba, RgbaImage},
  std::{
    mem,
    path::{Path, PathBuf}
  }
};

/// Default fill colors per group, as in the original viewer.
pub const DEFAULT_FILLS: [Rgba<u8>; 2] = [
  Rgba([255, 255, 255, 80]),
  Rgba([0, 255, 45, 80]),
];
/// Shared outline color (fully transparent by default).
pub const DEFAULT_BORDER: Rgba<u8> = Rgba([255, 0, 0, 0]);
/// Labels of the two competing algorithms.
pub const DEFAULT_LABELS: [&str; 2] = ["General IE Algorithm", "Our New Approach"];

/// One disk data file and how its disks are displayed.
#[derive(Debug, Clone)]
pub struct DiskSource {
  pub path: PathBuf,
  pub group: usize,
  pub label: String,
  pub fill: Rgba<u8>,
}

/// Everything the viewer is constructed from, replacing the original's
/// process-wide constants.
#[derive(Debug, Clone)]
pub struct ViewerConfig {
  pub background: PathBuf,
  pub sources: Vec<DiskSource>,
  pub border: Rgba<u8>,
  /// Hide every non-maximal disk from point queries (on by default).
  pub suppress_same_centered: bool,
}

impl ViewerConfig {
  pub fn new(background: impl Into<PathBuf>) -> Self {
    Self {
      background: background.into(),
      sources: vec![],
      border: DEFAULT_BORDER,
      suppress_same_centered: true,
    }
  }

  /// Append a data file as the next group, with the default fill color
  /// for that group index.
  pub fn source(mut self, path: impl Into<PathBuf>, label: &str) -> Self {
    let group = self.sources.len();
    self.sources.push(DiskSource {
      path: path.into(),
      group,
      label: label.to_string(),
      fill: DEFAULT_FILLS[group % DEFAULT_FILLS.len()],
    });
    self
  }
}

/// The two disjoint disk pools and the query state.
#[derive(Debug, Default)]
pub struct Selection {
  hidden: Vec<Disk>,
  displayed: Vec<Disk>,
  active_group: usize,
  suppress_same_centered: bool,
}

impl Selection {
  pub fn new(suppress_same_centered: bool) -> Self {
    Self {
      suppress_same_centered,
      ..Self::default()
    }
  }

  /// Parse a data file into the hidden pool. See [`insert`](Self::insert)
  /// for the effect on the displayed set.
  pub fn load_group(&mut self, path: &Path, group: usize) -> Result<()> {
    let disks = loader::load_disks(path, group)?;
    log::info!("{}: loaded {} disk(s) into group {}", path.display(), disks.len(), group);
    self.insert(disks);
    Ok(())
  }

  /// Append freshly loaded disks to the hidden pool. The displayed set is
  /// emptied back into the hidden pool first, so loading a second file
  /// resets whatever was revealed (as the original did between files)
  /// without losing any disk.
  pub fn insert(&mut self, disks: impl IntoIterator<Item = Disk>) {
    self.hide_all();
    self.hidden.extend(disks);
  }

  /// Reveal every hidden disk of the active group whose region contains
  /// `point`. Non-maximal disks are skipped while suppression is on.
  /// Zero matches is a no-op.
  pub fn query_point(&mut self, point: P2) -> &[Disk] {
    let before = self.displayed.len();
    let mut i = 0;
    while i < self.hidden.len() {
      let d = &self.hidden[i];
      if d.group == self.active_group
        && (d.maximal || !self.suppress_same_centered)
        && d.contains(point)
      {
        let d = self.hidden.swap_remove(i);
        self.displayed.push(d);
      } else {
        i += 1;
      }
    }
    log::debug!(
      "query ({:.1}, {:.1}) group {}: revealed {} disk(s)",
      point.x, point.y, self.active_group, self.displayed.len() - before
    );
    &self.displayed
  }

  /// Move every disk into the displayed set; the hidden pool empties.
  pub fn show_all(&mut self) -> &[Disk] {
    self.hide_all();
    self.displayed = mem::take(&mut self.hidden);
    &self.displayed
  }

  /// Move every displayed disk back to the hidden pool. Idempotent.
  pub fn hide_all(&mut self) -> &[Disk] {
    self.hidden.append(&mut self.displayed);
    &self.displayed
  }

  /// Pure state change; only affects future point queries.
  pub fn set_active_group(&mut self, group: usize) {
    self.active_group = group;
  }

  pub fn active_group(&self) -> usize {
    self.active_group
  }

  pub fn displayed(&self) -> &[Disk] {
    &self.displayed
  }

  pub fn hidden(&self) -> &[Disk] {
    &self.hidden
  }

  /// Total number of loaded disks, over both pools.
  pub fn len(&self) -> usize {
    self.hidden.len() + self.displayed.len()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

/// The viewer proper: a background plot, a frame palette, and the
/// selection engine. All I/O happens in [`open`](Self::open); afterwards
/// every operation is total.
pub struct DiskViewer {
  background: RgbaImage,
  palette: Palette,
  pub selection: Selection,
}

impl DiskViewer {
  pub fn open(config: &ViewerConfig) -> Result<Self> {
    let background = image::open(&config.background)?.to_rgba8();
    log::info!(
      "{}: background {}x{}",
      config.background.display(), background.width(), background.height()
    );

    let mut fills = vec![None; config.sources.iter().map(|s| s.group + 1).max().unwrap_or(0)];
    for source in &config.sources {
      fills[source.group] = Some(source.fill);
    }

    let mut selection = Selection::new(config.suppress_same_centered);
    for source in &config.sources {
      selection.load_group(&source.path, source.group)?;
    }

    Ok(Self {
      background,
      palette: Palette { fills, border: config.border },
      selection,
    })
  }

  /// Compose the current frame: background at the origin, then every
  /// displayed disk in its group color.
  pub fn render(&self) -> RgbaImage {
    drawing::render_frame(&self.background, self.selection.displayed(), &self.palette)
  }

  pub fn background(&self) -> &RgbaImage {
    &self.background
  }

  pub fn palette(&self) -> &Palette {
    &self.palette
  }
}
