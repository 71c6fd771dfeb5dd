//! Nested, twisted regular polygon charts.
//!
//! A 3×3 grid of plots; each cell draws `subpol` concentric regular polygons,
//! every polygon slightly smaller and slightly more rotated than the previous
//! one, so the outlines telescope inward while twisting and fade toward the
//! center. The vertex count is fixed per grid row, the rotation step per
//! row×column. The whole figure, and optionally every cell, is saved as PNG.
//!
//! The work is split between [`nest`], which turns the loop indices into
//! [`PolygonDescriptor`](nest::PolygonDescriptor) value objects, and
//! [`figure`], which lifts descriptors into shapes and rasterizes them
//! through the [`drawing`] backend.
//!
//! # Basic usage
//! ```no_run
//! # use polygon_nest::{config::FigureConfig, error::Result, figure};
//! # fn main() -> Result<()> {
//! let config = FigureConfig::default();
//! // Render all nine cells (in parallel) into one figure buffer.
//! let image = figure::compose(&config);
//! // Write `polygons.png`, and per-cell crops when `save_cells` is set.
//! figure::save_artifacts(&image, &config, std::path::Path::new("."))?;
//! #   Ok(())
//! # }
//! ```
//!
//! # On dynamic dispatch
//! There are two traits related to drawing:
//! - `trait `[`Draw`](`drawing::Draw`)
//! - `trait `[`DrawSync`](`drawing::DrawSync`)`: `[`Draw`](`drawing::Draw`)` + Send + Sync`
//!
//! A cell's draw list is a `Vec<Box<dyn DrawSync<RgbaImage>>>`, built in
//! ascending descriptor order; within a cell the order is load-bearing, since
//! later, smaller polygons are layered visually on top. Cells themselves are
//! independent and render on the rayon pool.

pub mod error;
pub mod util;
pub mod config;
pub mod sdf;
pub mod geometry;
pub mod drawing;
pub mod nest;
pub mod text;
pub mod figure;
