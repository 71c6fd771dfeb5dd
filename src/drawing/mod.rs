use {
  crate::geometry::{PixelSpace, WorldSpace},
  euclid::{Box2D, Size2D, Vector2D as V2},
  image::Rgba
};

mod impl_draw_rgbaimage;
#[cfg(test)] mod tests;

pub trait Draw<Backend> {
  fn draw(&self, image: &mut Backend);
}

pub trait DrawSync<Backend>: Draw<Backend> + Send + Sync {}
impl <T, Backend> DrawSync<Backend> for T where T: Draw<Backend> + Send + Sync {}

#[derive(Debug, Copy, Clone)]
pub struct Texture<S, T> {
  pub shape: S,
  pub texture: T
}

/// Stroke line style; dash runs are phased on the shape's boundary
/// arc length.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LineStyle {
  Solid,
  Dashed,
  Dotted
}

impl LineStyle {
  /// on/off run lengths, in stroke-width multiples
  pub(crate) fn pattern(self) -> Option<(f32, f32)> {
    match self {
      LineStyle::Solid => None,
      LineStyle::Dashed => Some((3.7, 1.6)),
      LineStyle::Dotted => Some((1.0, 1.65)),
    }
  }
}

/// Outline paint: edge color, stroke width in world units, no fill.
#[derive(Debug, Copy, Clone)]
pub struct Stroke {
  pub color: Rgba<u8>,
  pub width: f32,
  pub style: LineStyle
}

// try to fit world in the center of image, preserving aspect ratio
fn rescale_bounding_box(
  bounding_box: Box2D<f32, WorldSpace>,
  resolution: Size2D<u32, PixelSpace>
) -> (
  Option<Box2D<u32, PixelSpace>>, // bounding_box,
  V2<f32, PixelSpace>, // offset
  f32 // min_side
) {
  let min_side = resolution.width.min(resolution.height) as f32;
  let offset = (resolution.to_vector().to_f32() - V2::splat(min_side)) / 2.0;
  let bounding_box = bounding_box
    .scale(min_side, min_side).cast_unit()
    .round_out()
    .translate(offset)
    .intersection(&Box2D::from_size(resolution.to_f32()))
    .map(|x| x.to_u32());
  (bounding_box, offset, min_side)
}
