use tracing::trace;

use super::Packer;
use crate::config::RotationMode;
use crate::model::{Block, Container, PlacedBlock, Region, Rotation};

/// First-fit packer over an ordered list of free regions.
///
/// The free list starts as one region covering the container. Each placement
/// removes the region it lands in (keeping the order of the others) and appends
/// up to two guillotine remainders: the strip to the right of the block, then
/// the full-width strip below it. Regions are never merged or pruned, so the
/// list can hold overlapping regions.
pub struct FirstFitPacker {
    container: Container,
    rotation: RotationMode,
    free: Vec<Region>,
}

/// Outcome of the fit test against one free region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Fit {
    Normal,
    RotatedOnly,
}

impl FirstFitPacker {
    pub fn new(container: Container, rotation: RotationMode) -> Self {
        Self {
            container,
            rotation,
            free: vec![Region::covering(&container)],
        }
    }

    pub fn container(&self) -> Container {
        self.container
    }

    /// Current free list, in scan order.
    pub fn free_regions(&self) -> &[Region] {
        &self.free
    }

    pub fn into_free_regions(self) -> Vec<Region> {
        self.free
    }

    /// Summed area of the free list. Overlapping regions each count in full.
    pub fn void_area(&self) -> f64 {
        self.free.iter().map(Region::area).sum()
    }

    fn fit(&self, fr: &Region, w: f64, h: f64) -> Option<Fit> {
        if w <= fr.width() && h <= fr.height() {
            return Some(Fit::Normal);
        }
        if self.rotation != RotationMode::Disabled && h <= fr.width() && w <= fr.height() {
            return Some(Fit::RotatedOnly);
        }
        None
    }

    fn choose(&self, block: &Block) -> Option<(usize, Fit)> {
        self.free
            .iter()
            .enumerate()
            .find_map(|(i, fr)| self.fit(fr, block.width, block.height).map(|f| (i, f)))
    }

    /// Right remainder first, then the bottom remainder spanning the region's full width.
    fn split(fr: &Region, placed: &Region, w: f64, h: f64) -> (Option<Region>, Option<Region>) {
        let right = if w < fr.width() {
            Some(Region::new(placed.top, placed.right, fr.right, placed.bottom))
        } else {
            None
        };
        let bottom = if h < fr.height() {
            Some(Region::new(placed.bottom, fr.left, fr.right, fr.bottom))
        } else {
            None
        };
        (right, bottom)
    }

    fn place_at(&mut self, idx: usize, w: f64, h: f64) -> Region {
        let fr = self.free.remove(idx);
        let placed = Region::new(
            fr.top.max(0.0),
            fr.left.max(0.0),
            (fr.left + w).min(self.container.width),
            (fr.top + h).min(self.container.height),
        );
        let (a, b) = Self::split(&fr, &placed, w, h);
        if let Some(r) = a {
            self.free.push(r);
        }
        if let Some(r) = b {
            self.free.push(r);
        }
        placed
    }
}

impl Packer for FirstFitPacker {
    fn can_place(&self, block: &Block) -> bool {
        self.choose(block).is_some()
    }

    fn place(
        &mut self,
        order_index: usize,
        input_index: usize,
        block: &Block,
    ) -> Option<PlacedBlock> {
        let (idx, fit) = self.choose(block)?;
        let (w, h, rotation) = match (fit, self.rotation) {
            (Fit::RotatedOnly, RotationMode::Apply) => {
                (block.height, block.width, Rotation::Quarter)
            }
            // Faithful mode accepts the rotated fit but keeps the input geometry.
            _ => (block.width, block.height, Rotation::None),
        };
        let placed = self.place_at(idx, w, h);
        trace!(
            order_index,
            region = idx,
            ?fit,
            left = placed.left,
            top = placed.top,
            free = self.free.len(),
            "placed block"
        );
        Some(PlacedBlock {
            top: placed.top,
            left: placed.left,
            right: placed.right,
            bottom: placed.bottom,
            order_index,
            input_index,
            rotation,
        })
    }
}
