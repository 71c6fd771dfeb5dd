use {
  anyhow::Result,
  polygon_nest::{config::FigureConfig, figure, profile},
  std::path::Path
};

fn main() -> Result<()> {
  let config = FigureConfig::default();
  let output = Path::new(".");

  let image;
  profile!("compose", { image = figure::compose(&config); });
  profile!("save", { figure::save_artifacts(&image, &config, output)?; });

  println!(
    "{0}x{0} figure, {1} polygons per cell",
    config.resolution(),
    config.subpol
  );
  Ok(())
}
