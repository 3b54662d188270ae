use crate::model::{Block, PlacedBlock};

pub mod first_fit;

/// A packer places blocks into a single container.
///
/// Implementations must keep every placement within the container bounds.
/// `place` returns `None` if no free space accepts the block; the packer state
/// is left untouched in that case.
pub trait Packer {
    fn can_place(&self, block: &Block) -> bool;
    fn place(&mut self, order_index: usize, input_index: usize, block: &Block)
    -> Option<PlacedBlock>;
}
