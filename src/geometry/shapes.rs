use {
  super::{BoundingBox, WorldSpace},
  crate::sdf::{Perimeter, SDF},
  euclid::{Box2D, Point2D},
  std::f32::consts::{FRAC_PI_2, PI, TAU}
};

/// Regular polygon with unit circumradius, centered at the origin, one
/// vertex pointing up. Rotation is applied as a separate transform rather
/// than an intrinsic orientation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RegularPolygon {
  pub vertices: u32
}

struct Boundary {
  distance: f32,
  /// arc-length position along the perimeter of the closest boundary point
  offset: f32,
  inside: bool
}

impl RegularPolygon {
  pub fn new(vertices: u32) -> Self {
    debug_assert!(vertices >= 3);
    Self { vertices }
  }

  pub fn edge_length(&self) -> f32 {
    2.0 * (PI / self.vertices as f32).sin()
  }

  fn vertex(&self, k: u32) -> Point2D<f32, WorldSpace> {
    // y points down in image space, so "up" is -π/2
    let theta = -FRAC_PI_2 + k as f32 * TAU / self.vertices as f32;
    Point2D::new(theta.cos(), theta.sin())
  }

  fn nearest_boundary(&self, pixel: Point2D<f32, WorldSpace>) -> Boundary {
    let n = self.vertices;
    let edge_length = self.edge_length();
    let mut prev = self.vertex(0);
    let mut best_d2 = f32::INFINITY;
    let mut offset = 0.0;
    let mut inside = true;
    for k in 0..n {
      let next = self.vertex((k + 1) % n);
      let edge = next - prev;
      let to_pixel = pixel - prev;
      let t = (to_pixel.dot(edge) / edge.square_length()).clamp(0.0, 1.0);
      let d2 = (to_pixel - edge * t).square_length();
      if d2 < best_d2 {
        best_d2 = d2;
        offset = (k as f32 + t) * edge_length;
      }
      // vertices are emitted with increasing angle, so the interior lies
      // on the positive side of every edge
      if edge.cross(to_pixel) < 0.0 {
        inside = false;
      }
      prev = next;
    }
    Boundary { distance: best_d2.sqrt(), offset, inside }
  }
}

impl<S> BoundingBox<f32, S> for RegularPolygon {
  fn bounding_box(&self) -> Box2D<f32, S> {
    Box2D::new(
      Point2D::splat(-1.0),
      Point2D::splat(1.0)
    )}}

impl SDF<f32> for RegularPolygon {
  fn sdf(&self, pixel: Point2D<f32, WorldSpace>) -> f32 {
    let boundary = self.nearest_boundary(pixel);
    if boundary.inside { -boundary.distance } else { boundary.distance }
  }
}

impl Perimeter for RegularPolygon {
  fn boundary_offset(&self, pixel: Point2D<f32, WorldSpace>) -> f32 {
    self.nearest_boundary(pixel).offset
  }
}
