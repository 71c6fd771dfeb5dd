use {
  std::path::PathBuf,
  thiserror::Error
};

#[derive(Debug, Error)]
pub enum Error {
  #[error(transparent)]
  Io(#[from] std::io::Error),
  #[error(transparent)]
  Image(#[from] image::ImageError),
  /// None of the probed font locations yielded a usable face.
  #[error("no usable label font was found")]
  FontNotFound,
  #[error("font data at {0:?} could not be parsed")]
  InvalidFont(PathBuf),
}

/// Convenient wrapper around `std::Result`.
pub type Result<T> = std::result::Result<T, Error>;
