//! The grid composer: iterates the 3×3 cells, feeds each cell's descriptor
//! sequence to the drawing backend, and assembles/saves the figure.

use {
  crate::{
    config::{FigureConfig, GRID, VIEW_LIMIT},
    drawing::{Draw, DrawSync, Stroke},
    error::Result,
    geometry::{PixelSpace, RegularPolygon, Shape},
    nest::{ColorMode, NestedPolygons, PolygonDescriptor},
    text
  },
  euclid::{Box2D, Point2D, Size2D, Vector2D as V2},
  image::{imageops, Rgba, RgbaImage},
  rayon::prelude::*,
  rusttype::Font,
  std::path::Path
};

/// caption baseline above the cell bottom, axes-relative
const LABEL_HEIGHT: f32 = 0.075;

/// margin factors for a cell's saved crop when captions are shown
const LABEL_MARGIN: (f32, f32) = (1.1, 1.2);

/// One subplot position; fixes the vertex count and the rotation step.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Cell {
  pub row: usize,
  pub col: usize
}

impl Cell {
  /// Row-major iteration over the grid.
  pub fn all() -> impl Iterator<Item = Cell> {
    itertools::iproduct!(0..GRID, 0..GRID)
      .map(|(row, col)| Cell { row, col })
  }

  pub fn vertices(&self, config: &FigureConfig) -> u32 {
    config.vertices[self.row]
  }

  /// Rotation step α in degrees between consecutive nested polygons.
  pub fn rotation_step(&self, config: &FigureConfig) -> f32 {
    config.rotation[self.row][self.col]
  }

  pub fn color_mode(&self, config: &FigureConfig) -> ColorMode {
    if config.monochrome {
      ColorMode::Monochrome
    } else {
      ColorMode::Color { row: self.row }
    }
  }

  fn label(&self, config: &FigureConfig) -> String {
    format!("n = {}, α = {}°", self.vertices(config), self.rotation_step(config))
  }

  fn artifact_name(&self, config: &FigureConfig) -> String {
    format!("polygon_{}_{}.png", self.vertices(config), self.col)
  }

  /// Lift one descriptor into a drawable shape. The ±[`VIEW_LIMIT`] view
  /// window spans the cell's unit world square, the center is shared.
  fn drawable(
    &self,
    polygon: PolygonDescriptor,
    stroke_width: f32,
    config: &FigureConfig
  ) -> Box<dyn DrawSync<RgbaImage>> {
    let view_scale = 0.5 / VIEW_LIMIT;
    Box::new(
      RegularPolygon::new(self.vertices(config))
        .rotate(polygon.rotation)
        .scale(V2::splat(polygon.radius * view_scale))
        .translate(V2::splat(0.5))
        .texture(Stroke {
          color: rgba_from_unit(polygon.color),
          width: stroke_width,
          style: config.line_style
        })
    )
  }
}

/// Dark figure behind the tinted palette, light behind monochrome.
pub fn background(config: &FigureConfig) -> Rgba<u8> {
  if config.monochrome {
    Rgba([255, 255, 255, 255])
  } else {
    Rgba([0, 0, 0, 255])
  }
}

fn label_color(config: &FigureConfig) -> Rgba<u8> {
  if config.monochrome {
    Rgba([0, 0, 0, 255])
  } else {
    Rgba([255, 255, 255, 255])
  }
}

fn rgba_from_unit(color: [f32; 4]) -> Rgba<u8> {
  Rgba(color.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8))
}

/// Render one cell into its own buffer, polygons in ascending index order
/// so that later, smaller polygons are layered visually on top.
pub fn render_cell(cell: Cell, config: &FigureConfig) -> RgbaImage {
  let cell_px = config.cell_px();
  let mut buffer = RgbaImage::from_pixel(cell_px, cell_px, background(config));
  let stroke_width = config.line_width / cell_px as f32;
  let polygons = NestedPolygons::new(
    cell.rotation_step(config),
    config.subpol,
    cell.color_mode(config)
  ) .map(|descriptor| cell.drawable(descriptor, stroke_width, config))
    .collect::<Vec<_>>();
  polygons.iter()
    .for_each(|polygon| polygon.draw(&mut buffer));
  buffer
}

/// Render the whole 3×3 figure. Cells are independent and render on the
/// rayon pool; their buffers merge into the figure at the grid offsets.
pub fn compose(config: &FigureConfig) -> RgbaImage {
  let resolution = config.resolution();
  let cell_px = config.cell_px();
  let mut figure =
    RgbaImage::from_pixel(resolution, resolution, background(config));

  let cells = Cell::all().collect::<Vec<_>>()
    .into_par_iter()
    .map(|cell| (cell, render_cell(cell, config)))
    .collect::<Vec<_>>();
  for (cell, buffer) in cells {
    imageops::overlay(
      &mut figure,
      &buffer,
      (cell.col as u32 * cell_px) as i64,
      (cell.row as u32 * cell_px) as i64
    );
  }

  if config.labels {
    match text::load_font(config.font_path.as_deref()) {
      Ok(font) => draw_labels(&mut figure, &font, config),
      // captions are decoration, the batch still produces its figure
      Err(err) => eprintln!("cell labels skipped: {}", err),
    }
  }
  figure
}

fn draw_labels(figure: &mut RgbaImage, font: &Font, config: &FigureConfig) {
  let cell_px = config.cell_px() as f32;
  for cell in Cell::all() {
    let center = (
      (cell.col as f32 + 0.5) * cell_px,
      (cell.row as f32 + 1.0 - LABEL_HEIGHT) * cell_px,
    );
    text::draw_text_centered(
      figure,
      font,
      &cell.label(config),
      center,
      config.font_size,
      label_color(config)
    );
  }
}

fn expand_about_center(
  extent: Box2D<f32, PixelSpace>,
  fx: f32,
  fy: f32
) -> Box2D<f32, PixelSpace> {
  let center = extent.center().to_vector();
  extent.translate(-center).scale(fx, fy).translate(center)
}

/// Pixel extent of a cell's saved crop, clamped to the figure.
fn cell_extent(cell: Cell, config: &FigureConfig) -> Box2D<u32, PixelSpace> {
  let cell_px = config.cell_px() as f32;
  let extent = Box2D::new(
    Point2D::new(cell.col as f32, cell.row as f32) * cell_px,
    Point2D::new((cell.col + 1) as f32, (cell.row + 1) as f32) * cell_px,
  );
  let extent = if config.labels {
    expand_about_center(extent, LABEL_MARGIN.0, LABEL_MARGIN.1)
  } else {
    extent
  };
  let resolution = config.resolution() as f32;
  extent
    .intersection(&Box2D::from_size(Size2D::splat(resolution)))
    .unwrap_or(extent)
    .round()
    .to_u32()
}

/// Write the configured artifacts: the combined figure and/or one cropped
/// PNG per cell. Filesystem and encoder failures surface directly.
pub fn save_artifacts(
  figure: &RgbaImage,
  config: &FigureConfig,
  dir: &Path
) -> Result<()> {
  if config.save_figure {
    figure.save(dir.join(config.figure_name))?;
  }
  if config.save_cells {
    for cell in Cell::all() {
      let extent = cell_extent(cell, config);
      imageops::crop_imm(
        figure,
        extent.min.x,
        extent.min.y,
        extent.width(),
        extent.height()
      ) .to_image()
        .save(dir.join(cell.artifact_name(config)))?;
    }
  }
  Ok(())
}
