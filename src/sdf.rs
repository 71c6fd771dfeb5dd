use {
  euclid::{Point2D, Rotation2D},
  crate::geometry::{WorldSpace, Shape, Rotation, Scale, Translation}
};

/// Signed distance function
pub trait SDF<T> {
  fn sdf(&self, pixel: Point2D<T, WorldSpace>) -> T;
}

/// Boundary arc-length parameterization.
///
/// `boundary_offset` is the position, measured along the shape's boundary,
/// of the boundary point closest to `pixel`. Dash patterns phase on it, so
/// it must move rigidly with the shape under the transform wrappers.
pub trait Perimeter {
  fn boundary_offset(&self, pixel: Point2D<f32, WorldSpace>) -> f32;
}

impl <S> SDF<f32> for Translation<S, f32>
  where S: Shape {
  fn sdf(&self, pixel: Point2D<f32, WorldSpace>) -> f32 {
    self.shape.sdf(pixel - self.offset)
  }
}

impl <S> SDF<f32> for Rotation<S, f32>
  where S: Shape {
  fn sdf(&self, pixel: Point2D<f32, WorldSpace>) -> f32 {
    let pivot = self.shape.bounding_box().center();
    let pixel = Rotation2D::new(self.angle)
      .transform_point( (pixel - pivot).to_point())
      + pivot.to_vector();

    self.shape.sdf(pixel)
  }
}

impl <S> SDF<f32> for Scale<S, f32>
  where S: Shape {
  fn sdf(&self, pixel: Point2D<f32, WorldSpace>) -> f32 {
    let c = self.shape.bounding_box().center();
    let pixel = ((pixel - c)
      .component_div(self.scale) + c.to_vector())
      .to_point();
    self.shape.sdf(pixel) * self.scale.x.min(self.scale.y)
  }
}

impl <S> Perimeter for Translation<S, f32>
  where S: Perimeter {
  fn boundary_offset(&self, pixel: Point2D<f32, WorldSpace>) -> f32 {
    self.shape.boundary_offset(pixel - self.offset)
  }
}

impl <S> Perimeter for Rotation<S, f32>
  where S: Shape + Perimeter {
  fn boundary_offset(&self, pixel: Point2D<f32, WorldSpace>) -> f32 {
    let pivot = self.shape.bounding_box().center();
    let pixel = Rotation2D::new(self.angle)
      .transform_point( (pixel - pivot).to_point())
      + pivot.to_vector();

    self.shape.boundary_offset(pixel)
  }
}

impl <S> Perimeter for Scale<S, f32>
  where S: Shape + Perimeter {
  fn boundary_offset(&self, pixel: Point2D<f32, WorldSpace>) -> f32 {
    let c = self.shape.bounding_box().center();
    let pixel = ((pixel - c)
      .component_div(self.scale) + c.to_vector())
      .to_point();
    self.shape.boundary_offset(pixel) * self.scale.x.min(self.scale.y)
  }
}
