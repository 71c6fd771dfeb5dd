//! The nested polygon generator.
//!
//! For one grid cell, [`NestedPolygons`] yields `subpol` descriptors in
//! ascending index order; each one shrinks the radius, advances the rotation
//! by the cell's step α, and fades the edge color, so the drawn outlines
//! telescope inward while twisting. Descriptors are computed value objects:
//! generated lazily, consumed immediately, never mutated.

use {
  crate::util::linspace,
  euclid::Angle
};

/// Edge color scheme for one cell.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ColorMode {
  /// Per-row color ramp over a dark figure.
  Color { row: usize },
  /// Grayscale fade over a light figure, row-independent.
  Monochrome
}

impl ColorMode {
  /// RGBA in `[0, 1]`; `t` is the color-ramp sample for this index.
  fn edge_color(self, index: usize, t: f32) -> [f32; 4] {
    match self {
      ColorMode::Monochrome =>
        [0.0, 0.0, 0.0, ((index + 1) as f32).powf(-0.5)],
      ColorMode::Color { row } => {
        let alpha = ((index + 2) as f32).powf(-0.1);
        match row {
          0 => [0.8, t, 0.1, alpha],
          1 => [0.2, 1.0, t, alpha],
          _ => [t, 0.8, 0.9, alpha],
        }
      }
    }
  }
}

/// Drawing parameters for one polygon instance. The center is shared by the
/// whole cell and the fill is always empty, so neither is carried here.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PolygonDescriptor {
  pub index: usize,
  /// circumradius in view units, strictly decreasing in `index`
  pub radius: f32,
  /// rotation about the shared center, `index · α`
  pub rotation: Angle<f32>,
  /// RGBA edge color in `[0, 1]`; alpha strictly decreasing in `index`
  pub color: [f32; 4],
}

/// Lazy, finite, restartable descriptor sequence for one cell.
///
/// `Clone` restarts the sequence from the beginning; two sequences with
/// identical inputs are identical (pure, no hidden state).
#[derive(Debug, Clone)]
pub struct NestedPolygons {
  /// rotation step in degrees between consecutive polygons
  alpha: f32,
  mode: ColorMode,
  ramp: Vec<f32>,
  index: usize,
}

impl NestedPolygons {
  pub fn new(alpha: f32, subpol: usize, mode: ColorMode) -> Self {
    Self {
      alpha,
      mode,
      ramp: linspace(0.0, 0.9, subpol).collect(),
      index: 0,
    }
  }

  fn descriptor(&self, index: usize) -> PolygonDescriptor {
    PolygonDescriptor {
      index,
      radius: ((index + 2) as f32).powf(-0.4),
      rotation: Angle::degrees(index as f32 * self.alpha),
      color: self.mode.edge_color(index, self.ramp[index]),
    }
  }
}

impl Iterator for NestedPolygons {
  type Item = PolygonDescriptor;

  fn next(&mut self) -> Option<PolygonDescriptor> {
    if self.index == self.ramp.len() {
      return None;
    }
    let descriptor = self.descriptor(self.index);
    self.index += 1;
    Some(descriptor)
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    let remaining = self.ramp.len() - self.index;
    (remaining, Some(remaining))
  }
}

impl ExactSizeIterator for NestedPolygons {}

#[cfg(test)]
mod tests {
  use super::*;

  fn assert_close(a: f32, b: f32) {
    assert!((a - b).abs() < 1e-4, "{} vs {}", a, b);
  }

  #[test] fn radius_positive_and_strictly_decreasing() {
    let radii = NestedPolygons::new(2.0, 300, ColorMode::Color { row: 0 })
      .map(|p| p.radius)
      .collect::<Vec<_>>();
    assert!(radii.iter().all(|r| *r > 0.0));
    assert!(radii.windows(2).all(|w| w[1] < w[0]));
  }

  #[test] fn rotation_is_linear_in_index() {
    for polygon in NestedPolygons::new(22.5, 40, ColorMode::Color { row: 2 }) {
      assert_close(
        polygon.rotation.to_degrees(),
        polygon.index as f32 * 22.5
      );
    }
  }

  #[test] fn alpha_fades_within_unit_interval() {
    for mode in [ColorMode::Color { row: 1 }, ColorMode::Monochrome] {
      let alphas = NestedPolygons::new(0.0, 50, mode)
        .map(|p| p.color[3])
        .collect::<Vec<_>>();
      assert!(alphas.iter().all(|a| *a > 0.0 && *a <= 1.0));
      assert!(alphas.windows(2).all(|w| w[1] < w[0]));
    }
  }

  #[test] fn color_ramp_spans_zero_to_nine_tenths() {
    // row 0 carries t in the green channel
    let greens = NestedPolygons::new(0.0, 7, ColorMode::Color { row: 0 })
      .map(|p| p.color[1])
      .collect::<Vec<_>>();
    assert_eq!(greens[0], 0.0);
    assert_eq!(greens[6], 0.9);
    assert!(greens.windows(2).all(|w| w[0] <= w[1]));
  }

  #[test] fn three_static_triangles() {
    // n = 3, α = 0, subpol = 3: same orientation, telescoping radii
    let polygons = NestedPolygons::new(0.0, 3, ColorMode::Color { row: 0 })
      .collect::<Vec<_>>();
    assert_eq!(polygons.len(), 3);
    for (polygon, (radius, alpha)) in polygons.iter().zip([
      (2f32.powf(-0.4), 2f32.powf(-0.1)),
      (3f32.powf(-0.4), 3f32.powf(-0.1)),
      (4f32.powf(-0.4), 4f32.powf(-0.1)),
    ]) {
      assert_eq!(polygon.rotation.to_degrees(), 0.0);
      assert_close(polygon.radius, radius);
      assert_close(polygon.color[3], alpha);
    }
    assert_close(polygons[0].radius, 0.7579);
    assert_close(polygons[0].color[3], 0.9330);
  }

  #[test] fn sixth_square_of_a_two_degree_twist() {
    // n = 4, α = 2, j = 5: rotation 10°, radius 7^-0.4
    let polygon = NestedPolygons::new(2.0, 10, ColorMode::Color { row: 1 })
      .nth(5)
      .unwrap();
    assert_close(polygon.rotation.to_degrees(), 10.0);
    assert_close(polygon.radius, 7f32.powf(-0.4));
    assert_close(polygon.radius, 0.4592);
  }

  #[test] fn monochrome_is_black_with_inverse_sqrt_fade() {
    for (j, polygon) in
      NestedPolygons::new(15.0, 20, ColorMode::Monochrome).enumerate()
    {
      assert_eq!(&polygon.color[..3], &[0.0, 0.0, 0.0]);
      assert_close(polygon.color[3], ((j + 1) as f32).powf(-0.5));
    }
  }

  #[test] fn generation_is_idempotent() {
    let generator = NestedPolygons::new(40.0, 25, ColorMode::Color { row: 2 });
    let first = generator.clone().collect::<Vec<_>>();
    let second = generator.collect::<Vec<_>>();
    assert_eq!(first, second);
    let restarted =
      NestedPolygons::new(40.0, 25, ColorMode::Color { row: 2 }).collect::<Vec<_>>();
    assert_eq!(first, restarted);
  }

  #[test] fn sequence_is_exactly_sized() {
    let mut generator = NestedPolygons::new(2.0, 12, ColorMode::Monochrome);
    assert_eq!(generator.len(), 12);
    generator.next();
    assert_eq!(generator.len(), 11);
    assert_eq!(generator.count(), 11);
  }
}
