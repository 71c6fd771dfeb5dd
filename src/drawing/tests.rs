use {
  super::*,
  crate::geometry::{RegularPolygon, Shape},
  euclid::Vector2D as V2,
  image::RgbaImage
};

fn white_stroke(style: LineStyle) -> Stroke {
  Stroke { color: Rgba([255, 255, 255, 255]), width: 0.02, style }
}

fn draw_diamond(style: LineStyle) -> RgbaImage {
  let mut image = RgbaImage::new(128, 128);
  RegularPolygon::new(4)
    .scale(V2::splat(0.25))
    .translate(V2::splat(0.5))
    .texture(white_stroke(style))
    .draw(&mut image);
  image
}

fn painted(image: &RgbaImage) -> usize {
  image.pixels().filter(|pixel| pixel.0[3] > 0).count()
}

#[test] fn stroke_marks_outline_not_interior() {
  let image = draw_diamond(LineStyle::Solid);
  // the top vertex lands on pixel (64, 32), exactly on the outline
  assert!(image.get_pixel(64, 32).0[3] > 0);
  // interior and far exterior stay untouched
  assert_eq!(image.get_pixel(64, 64).0, [0, 0, 0, 0]);
  assert_eq!(image.get_pixel(2, 2).0, [0, 0, 0, 0]);
}

#[test] fn dashes_are_a_subset_of_the_solid_outline() {
  let solid = draw_diamond(LineStyle::Solid);
  let dashed = draw_diamond(LineStyle::Dashed);
  for (s, d) in solid.pixels().zip(dashed.pixels()) {
    if d.0[3] > 0 {
      assert!(s.0[3] > 0);
    }
  }
  assert!(painted(&dashed) > 0);
  assert!(painted(&dashed) < painted(&solid));
}

#[test] fn dotted_is_sparser_than_dashed() {
  let dashed = draw_diamond(LineStyle::Dashed);
  let dotted = draw_diamond(LineStyle::Dotted);
  assert!(painted(&dotted) > 0);
  assert!(painted(&dotted) < painted(&dashed));
}

#[test] fn translucent_strokes_accumulate() {
  let mut image = RgbaImage::new(64, 64);
  let stroke = Stroke {
    color: Rgba([255, 255, 255, 128]),
    width: 0.05,
    style: LineStyle::Solid
  };
  let shape = RegularPolygon::new(4)
    .scale(V2::splat(0.5))
    .translate(V2::splat(0.5));
  shape.texture(stroke).draw(&mut image);
  let first = image.get_pixel(32, 0).0[3];
  shape.texture(stroke).draw(&mut image);
  let second = image.get_pixel(32, 0).0[3];
  assert!(first > 0);
  assert!(second > first);
}
