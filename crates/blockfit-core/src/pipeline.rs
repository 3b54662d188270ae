use crate::config::{PackerConfig, SortOrder};
use crate::error::{PackError, Result};
use crate::model::{Block, Container, Placement};
use crate::packer::{Packer, first_fit::FirstFitPacker};
use tracing::{debug, instrument, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Packs `blocks` into `container` with the default configuration.
///
/// See [`pack_with_config`].
pub fn pack(blocks: &[Block], container: Container) -> Result<Placement> {
    pack_with_config(blocks, container, &PackerConfig::default())
}

#[instrument(skip_all, fields(blocks = blocks.len(), width = container.width, height = container.height))]
/// Packs `blocks` into `container` using `cfg` and returns every placement plus the fullness.
///
/// Notes:
/// - Blocks are ordered per `cfg.sort_order` (stable), and each placement's
///   `order_index` is its position in that order.
/// - Free regions are scanned first-fit; the first region passing the fit test wins.
/// - Either every block is placed or [`PackError::PackingIncomplete`] is returned.
/// - An empty block list is not an error; it yields no placements and a fullness of `0.0`.
pub fn pack_with_config(
    blocks: &[Block],
    container: Container,
    cfg: &PackerConfig,
) -> Result<Placement> {
    container.validate()?;
    validate_blocks(blocks)?;

    let order = packing_order(blocks, cfg.sort_order);
    let mut packer = FirstFitPacker::new(container, cfg.rotation);
    let mut placements = Vec::with_capacity(blocks.len());

    for (order_index, &input_index) in order.iter().enumerate() {
        let block = &blocks[input_index];
        if !packer.can_place(block) {
            debug!(
                order_index,
                input_index,
                width = block.width,
                height = block.height,
                "no free region accepts block"
            );
            continue;
        }
        if let Some(p) = packer.place(order_index, input_index, block) {
            placements.push(p);
        }
    }

    if placements.len() != blocks.len() {
        warn!(
            placed = placements.len(),
            total = blocks.len(),
            "some blocks cannot fit into the container"
        );
        return Err(PackError::PackingIncomplete {
            placed: placements.len(),
            total: blocks.len(),
        });
    }

    let placed_area: f64 = placements.iter().map(|p| p.area()).sum();
    let void_area = packer.void_area();
    let fullness = fullness(placed_area, void_area);
    debug!(
        fullness,
        placed_area,
        void_area,
        free_regions = packer.free_regions().len(),
        "packing complete"
    );

    Ok(Placement {
        fullness,
        placements,
        free_regions: packer.into_free_regions(),
        container,
    })
}

/// `1 - void / (void + placed)`.
///
/// The denominator is the free-list area plus the placed area, not the
/// container area, so overlapping free regions pull the value down. Returns
/// `0.0` when both areas are zero.
pub fn fullness(placed_area: f64, void_area: f64) -> f64 {
    let total = void_area + placed_area;
    if total > 0.0 {
        1.0 - void_area / total
    } else {
        0.0
    }
}

/// Input indices of `blocks` in packing order. Sorting is stable.
pub fn packing_order(blocks: &[Block], order: SortOrder) -> Vec<usize> {
    let mut idx: Vec<usize> = (0..blocks.len()).collect();
    match order {
        SortOrder::None => {}
        SortOrder::AreaDesc => {
            idx.sort_by(|&a, &b| blocks[b].area().total_cmp(&blocks[a].area()));
        }
        SortOrder::MaxSideDesc => idx.sort_by(|&a, &b| {
            let sa = blocks[a].width.max(blocks[a].height);
            let sb = blocks[b].width.max(blocks[b].height);
            sb.total_cmp(&sa)
        }),
        SortOrder::HeightDesc => {
            idx.sort_by(|&a, &b| blocks[b].height.total_cmp(&blocks[a].height));
        }
        SortOrder::WidthDesc => {
            idx.sort_by(|&a, &b| blocks[b].width.total_cmp(&blocks[a].width));
        }
    }
    idx
}

fn validate_blocks(blocks: &[Block]) -> Result<()> {
    match blocks.iter().position(|b| !b.is_valid()) {
        Some(index) => Err(PackError::InvalidBlock {
            index,
            width: blocks[index].width,
            height: blocks[index].height,
        }),
        None => Ok(()),
    }
}

/// Packs independent jobs. Results are in job order.
///
/// With the `parallel` feature the jobs run on the rayon pool.
pub fn pack_batch(jobs: &[(Vec<Block>, Container)], cfg: &PackerConfig) -> Vec<Result<Placement>> {
    #[cfg(feature = "parallel")]
    {
        jobs.par_iter()
            .map(|(blocks, container)| pack_with_config(blocks, *container, cfg))
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        jobs.iter()
            .map(|(blocks, container)| pack_with_config(blocks, *container, cfg))
            .collect()
    }
}
