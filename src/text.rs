//! Cell captions, rasterized straight onto the figure buffer.

use {
  crate::error::{Error, Result},
  image::{Pixel, Rgba, RgbaImage},
  rusttype::{point, Font, Scale},
  std::{fs, path::Path}
};

/// Serif faces first, to match the figure typography.
const FONT_SEARCH_PATHS: &[&str] = &[
  "/usr/share/fonts/truetype/dejavu/DejaVuSerif.ttf",
  "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
  "/usr/share/fonts/dejavu/DejaVuSerif.ttf",
  "/usr/share/fonts/dejavu/DejaVuSans.ttf",
  "/usr/share/fonts/TTF/DejaVuSerif.ttf",
  "/usr/share/fonts/TTF/DejaVuSans.ttf",
  "/usr/share/fonts/liberation/LiberationSerif-Regular.ttf",
  "/usr/share/fonts/truetype/liberation/LiberationSerif-Regular.ttf",
  "/System/Library/Fonts/Supplemental/Times New Roman.ttf",
  "C:\\Windows\\Fonts\\times.ttf",
];

/// Load the label face: the explicit path when given, otherwise the first
/// parseable face from [`FONT_SEARCH_PATHS`].
pub fn load_font(explicit: Option<&Path>) -> Result<Font<'static>> {
  if let Some(path) = explicit {
    let data = fs::read(path)?;
    return Font::try_from_vec(data)
      .ok_or_else(|| Error::InvalidFont(path.to_path_buf()));
  }
  for path in FONT_SEARCH_PATHS {
    let path = Path::new(path);
    if !path.is_file() {
      continue;
    }
    if let Some(font) = fs::read(path).ok().and_then(Font::try_from_vec) {
      return Ok(font);
    }
  }
  Err(Error::FontNotFound)
}

/// Draw `text` centered at `center`, in pixels. `size` is the glyph height.
pub fn draw_text_centered(
  image: &mut RgbaImage,
  font: &Font,
  text: &str,
  center: (f32, f32),
  size: f32,
  color: Rgba<u8>
) {
  let scale = Scale::uniform(size);
  let metrics = font.v_metrics(scale);
  let glyphs = font
    .layout(text, scale, point(0.0, metrics.ascent))
    .collect::<Vec<_>>();
  let width = glyphs.last()
    .map(|glyph|
      glyph.position().x + glyph.unpositioned().h_metrics().advance_width)
    .unwrap_or(0.0);
  // layout ran with the origin at the top-left of the em box
  let origin_x = (center.0 - width / 2.0).round() as i32;
  let origin_y =
    (center.1 - (metrics.ascent - metrics.descent) / 2.0).round() as i32;

  let (image_w, image_h) = image.dimensions();
  for glyph in glyphs {
    let bounding_box = match glyph.pixel_bounding_box() {
      Some(x) => x,
      None => continue // whitespace
    };
    glyph.draw(|x, y, coverage| {
      let x = x as i32 + bounding_box.min.x + origin_x;
      let y = y as i32 + bounding_box.min.y + origin_y;
      if x < 0 || y < 0 || x as u32 >= image_w || y as u32 >= image_h {
        return;
      }
      let mut tinted = color;
      tinted.0[3] = (color.0[3] as f32 * coverage) as u8;
      image.get_pixel_mut(x as u32, y as u32).blend(&tinted);
    });
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test] fn explicit_missing_font_is_an_io_error() {
    let missing = Path::new("/definitely/not/a/font.ttf");
    assert!(matches!(load_font(Some(missing)), Err(Error::Io(_))));
  }

  #[test] fn probed_font_renders_a_centered_caption() {
    // systems without any of the probed faces skip the rendering check
    let font = match load_font(None) {
      Ok(font) => font,
      Err(Error::FontNotFound) => return,
      Err(err) => panic!("unexpected font error: {}", err),
    };
    let mut image = RgbaImage::new(200, 60);
    draw_text_centered(
      &mut image,
      &font,
      "n = 8, α = 22.5°",
      (100.0, 30.0),
      22.0,
      Rgba([255, 255, 255, 255])
    );
    let painted = image.pixels().filter(|pixel| pixel.0[3] > 0).count();
    assert!(painted > 0);
    // roughly symmetric about the vertical midline
    let left = image.enumerate_pixels()
      .filter(|(x, _, pixel)| *x < 100 && pixel.0[3] > 0)
      .count() as i64;
    let right = painted as i64 - left;
    assert!((left - right).abs() < painted as i64 / 2);
  }
}
