use {
  anyhow::{Context, Result},
  disk_viewer::viewer::{DiskViewer, ViewerConfig, DEFAULT_LABELS},
  std::env
};

/// Headless driver: load the plot and both disk files, reveal everything,
/// write one frame. Paths default to the original viewer's working
/// directory layout.
fn main() -> Result<()> {
  env_logger::init();

  let mut args = env::args().skip(1);
  let background = args.next().unwrap_or_else(|| "plot.png".to_string());
  let first = args.next().unwrap_or_else(|| "disk1.txt".to_string());
  let second = args.next().unwrap_or_else(|| "disk2.txt".to_string());
  let output = args.next().unwrap_or_else(|| "out.png".to_string());

  let config = ViewerConfig::new(&background)
    .source(&first, DEFAULT_LABELS[0])
    .source(&second, DEFAULT_LABELS[1]);

  let mut viewer = DiskViewer::open(&config)
    .with_context(|| format!("loading {} + {{{}, {}}}", background, first, second))?;
  viewer.selection.show_all();

  viewer.render().save(&output)
    .with_context(|| format!("writing {}", output))?;
  log::info!("{}: {} disk(s) drawn", output, viewer.selection.displayed().len());
  Ok(())
}
