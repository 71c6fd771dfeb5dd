#![allow(non_snake_case)]
use {
  euclid::{Point2D, Size2D},
  image::{Pixel, Rgba, RgbaImage},
  crate::{
    drawing::{Draw, Stroke, Texture, rescale_bounding_box},
    geometry::{PixelSpace, Shape},
    sdf::Perimeter
  }
};

impl <Cutie> Draw<RgbaImage> for Texture<Cutie, Stroke>
  where Cutie: Shape + Perimeter
{
  fn draw(&self, image: &mut RgbaImage) {
    let resolution: Size2D<_, PixelSpace> = image.dimensions().into();
    let half_width = self.texture.width / 2.0;
    let (bounding_box, offset, min_side) = rescale_bounding_box(
      self.shape.bounding_box().inflate(half_width, half_width),
      resolution
    );
    let bounding_box = match bounding_box {
      Some(x) => x,
      None => return // bounding box has no intersection with screen at all
    };
    let Δp = 1.0 / min_side;

    itertools::iproduct!(bounding_box.y_range(), bounding_box.x_range())
      .map(|(y, x)| Point2D::<_, PixelSpace>::from([x, y]))
      .for_each(|pixel| {
        let pixel_world = ((pixel.to_f32() - offset).to_vector() / min_side)
          .cast_unit().to_point();
        // outline band around the boundary
        let sdf = self.shape.sdf(pixel_world).abs() - half_width;
        if sdf >= 0.5 * Δp {
          return;
        }
        let on = match self.texture.style.pattern() {
          None => true,
          Some(pattern) => dash_on(
            pattern,
            self.shape.boundary_offset(pixel_world),
            self.texture.width
          )
        };
        if !on {
          return;
        }
        let pixel = image.get_pixel_mut(pixel.x, pixel.y);
        *pixel = sdf_overlay_aa(sdf, Δp, *pixel, self.texture.color);
      });
  }
}

fn dash_on((run_on, run_off): (f32, f32), offset: f32, width: f32) -> bool {
  let period = (run_on + run_off) * width;
  if period <= 0.0 {
    return true;
  }
  offset.rem_euclid(period) < run_on * width
}

fn sdf_overlay_aa(sdf: f32, Δp: f32, mut col1: Rgba<u8>, mut col2: Rgba<u8>) -> Rgba<u8> {
  let Δf = (0.5 * Δp - sdf) // antialias
    .clamp(0.0, Δp);
  let alpha = Δf / Δp;
  // overlay blending with premultiplied alpha
  col2.0[3] = ((col2.0[3] as f32) * alpha) as u8;
  col1.blend(&col2);
  col1
}
