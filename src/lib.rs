//! Core logic of an interactive viewer for exclusion disks — circular
//! regions produced by two competing numerical algorithms — overlaid on a
//! pseudospectrum plot.
//!
//! The crate is split into [`geometry`] (the [`Disk`](geometry::Disk)
//! record and its containment test), [`loader`] (the flat-file format),
//! [`viewer`] (the selection engine moving disks between the hidden and
//! displayed pools) and [`drawing`] (frame composition over an
//! [`RgbaImage`](image::RgbaImage)).
//!
//! Window construction, buttons and mouse dispatch belong to whatever UI
//! shell embeds this core; the shell forwards click coordinates to
//! [`Selection::query_point`](viewer::Selection::query_point) and redraws
//! with [`DiskViewer::render`](viewer::DiskViewer::render) whenever the
//! displayed set changes.
//!
//! # Basic usage
//! ```no_run
//! use disk_viewer::{
//!   error::Result,
//!   geometry::P2,
//!   viewer::{DiskViewer, ViewerConfig, DEFAULT_LABELS}
//! };
//!
//! fn main() -> Result<()> {
//!   let config = ViewerConfig::new("plot.png")
//!     .source("disk1.txt", DEFAULT_LABELS[0])
//!     .source("disk2.txt", DEFAULT_LABELS[1]);
//!   let mut viewer = DiskViewer::open(&config)?;
//!
//!   // a click at (420, 310) while algorithm 0 is selected
//!   viewer.selection.set_active_group(0);
//!   viewer.selection.query_point(P2::new(420.0, 310.0));
//!
//!   viewer.render().save("frame.png")?;
//!   Ok(())
//! }
//! ```

pub mod error;
pub mod geometry;
pub mod loader;
pub mod viewer;
pub mod drawing;
