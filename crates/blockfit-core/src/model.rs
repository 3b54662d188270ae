use serde::{Deserialize, Serialize};

use crate::error::{PackError, Result};

/// A block to place. Only its size matters; identity is positional.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Block {
    pub width: f64,
    pub height: f64,
}

impl Block {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
    pub(crate) fn is_valid(&self) -> bool {
        positive_finite(self.width) && positive_finite(self.height) && self.area().is_finite()
    }
}

/// Fixed-size target area. Origin is top-left and `y` grows downward.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Container {
    pub width: f64,
    pub height: f64,
}

impl Container {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
    /// Checks that both sides and the area are positive and finite.
    pub fn validate(&self) -> Result<()> {
        if !(positive_finite(self.width)
            && positive_finite(self.height)
            && self.area().is_finite())
        {
            return Err(PackError::InvalidContainer {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

fn positive_finite(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

/// Axis-aligned rectangle of unallocated container space.
///
/// Free regions may overlap each other; the free list is not a partition.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Region {
    pub top: f64,
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Region {
    pub fn new(top: f64, left: f64, right: f64, bottom: f64) -> Self {
        Self {
            top,
            left,
            right,
            bottom,
        }
    }
    /// Region spanning the whole container.
    pub fn covering(container: &Container) -> Self {
        Self::new(0.0, 0.0, container.width, container.height)
    }
    pub fn width(&self) -> f64 {
        self.right - self.left
    }
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }
}

/// Orientation marker recorded on a placement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Rotation {
    /// Placed with its input width along the x axis.
    #[default]
    None,
    /// Placed turned by 90°, width and height swapped.
    Quarter,
}

impl Rotation {
    pub fn degrees(&self) -> u32 {
        match self {
            Rotation::None => 0,
            Rotation::Quarter => 90,
        }
    }
}

/// A block placed inside the container.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PlacedBlock {
    pub top: f64,
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    /// Position of the block in the packing order (after sorting).
    pub order_index: usize,
    /// Position of the block in the caller's input sequence.
    pub input_index: usize,
    pub rotation: Rotation,
}

impl PlacedBlock {
    pub fn width(&self) -> f64 {
        self.right - self.left
    }
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }
    /// `"{width}x{height}"` of the placed rectangle. Presenters group colours by it.
    pub fn size_key(&self) -> String {
        format!("{}x{}", self.width(), self.height())
    }
    /// One-based display label.
    pub fn label(&self) -> usize {
        self.order_index + 1
    }
    /// Returns true if the rectangle lies within `container` (inclusive edges).
    pub fn within(&self, container: &Container) -> bool {
        self.left >= 0.0
            && self.top >= 0.0
            && self.left <= self.right
            && self.top <= self.bottom
            && self.right <= container.width
            && self.bottom <= container.height
    }
}

/// Result of a successful packing run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Placement {
    /// `1 - free / (free + placed)`; see [`crate::pipeline::fullness`].
    pub fullness: f64,
    /// One entry per input block, in packing order.
    pub placements: Vec<PlacedBlock>,
    /// Free regions left over, in free-list order.
    pub free_regions: Vec<Region>,
    pub container: Container,
}

/// Statistics about a placement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PackStats {
    pub num_blocks: usize,
    pub num_free_regions: usize,
    /// Sum of placed rectangle areas.
    pub placed_area: f64,
    /// Sum of remaining free region areas. Overlapping regions are counted twice.
    pub free_area: f64,
    pub container_area: f64,
    /// Same value as [`Placement::fullness`].
    pub fullness: f64,
    /// `placed_area / container_area` (0.0 to 1.0).
    pub occupancy: f64,
    pub num_rotated: usize,
}

impl Placement {
    pub fn placed_area(&self) -> f64 {
        self.placements.iter().map(PlacedBlock::area).sum()
    }

    pub fn free_area(&self) -> f64 {
        self.free_regions.iter().map(Region::area).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Computes packing statistics for this placement.
    pub fn stats(&self) -> PackStats {
        let placed_area = self.placed_area();
        let container_area = self.container.area();
        let occupancy = if container_area > 0.0 {
            placed_area / container_area
        } else {
            0.0
        };
        PackStats {
            num_blocks: self.placements.len(),
            num_free_regions: self.free_regions.len(),
            placed_area,
            free_area: self.free_area(),
            container_area,
            fullness: self.fullness,
            occupancy,
            num_rotated: self
                .placements
                .iter()
                .filter(|p| p.rotation != Rotation::None)
                .count(),
        }
    }
}

impl PackStats {
    /// Returns a human-readable summary of the statistics.
    pub fn summary(&self) -> String {
        format!(
            "Blocks: {}, Fullness: {:.4}, Occupancy: {:.2}%, Placed Area: {}, Free Area: {}, Free Regions: {}, Rotated: {}",
            self.num_blocks,
            self.fullness,
            self.occupancy * 100.0,
            self.placed_area,
            self.free_area,
            self.num_free_regions,
            self.num_rotated,
        )
    }

    /// Container area not covered by placed blocks.
    pub fn wasted_area(&self) -> f64 {
        (self.container_area - self.placed_area).max(0.0)
    }

    /// Returns wasted space as a percentage (0.0 to 100.0).
    pub fn waste_percentage(&self) -> f64 {
        if self.container_area > 0.0 {
            self.wasted_area() / self.container_area * 100.0
        } else {
            0.0
        }
    }
}
