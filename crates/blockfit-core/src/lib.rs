//! Core library for placing rectangular blocks into a fixed container.
//!
//! - Algorithm: first-fit over an ordered free-region list with guillotine splits
//! - Pipeline: `pack` validates, orders blocks by area and returns a `Placement` with a fullness ratio
//! - Data model is serde-serializable; a JSON exporter is provided in helpers and the CLI crate draws SVG.
//!
//! Quick example:
//! ```
//! use blockfit_core::{Block, Container, pack};
//! # fn main() -> blockfit_core::Result<()> {
//! let blocks = vec![Block::new(50.0, 50.0), Block::new(50.0, 50.0)];
//! let out = pack(&blocks, Container::new(100.0, 50.0))?;
//! assert_eq!(out.placements.len(), 2);
//! assert_eq!(out.fullness, 1.0);
//! # Ok(()) }
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod packer;
pub mod pipeline;

pub use config::*;
pub use error::*;
pub use export::*;
pub use model::*;
pub use packer::*;
pub use pipeline::*;

/// Convenience prelude for common types and functions.
/// Importing `blockfit_core::prelude::*` brings the primary APIs into scope.
pub mod prelude {
    pub use crate::config::{PackerConfig, PackerConfigBuilder, RotationMode, SortOrder};
    pub use crate::error::{ErrorKind, PackError};
    pub use crate::model::{Block, Container, PackStats, PlacedBlock, Placement, Region, Rotation};
    pub use crate::packer::{Packer, first_fit::FirstFitPacker};
    pub use crate::{pack, pack_batch, pack_with_config, to_json};
}
