use blockfit_core::prelude::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-12
}

#[test]
fn single_block_in_large_container() {
    let out = pack(&[Block::new(100.0, 100.0)], Container::new(350.0, 350.0)).unwrap();

    assert_eq!(out.placements.len(), 1);
    let p = out.placements[0];
    assert_eq!((p.top, p.left, p.right, p.bottom), (0.0, 0.0, 100.0, 100.0));
    assert_eq!(p.order_index, 0);
    assert_eq!(p.rotation, Rotation::None);

    // Right strip beside the block, then the full-width strip below it.
    assert_eq!(
        out.free_regions,
        vec![
            Region::new(0.0, 100.0, 350.0, 100.0),
            Region::new(100.0, 0.0, 350.0, 350.0),
        ]
    );
    assert_eq!(out.free_area(), 112_500.0);
    assert!(approx(out.fullness, 10_000.0 / 122_500.0));
}

#[test]
fn block_larger_than_container_fails() {
    let err = pack(&[Block::new(20.0, 20.0)], Container::new(10.0, 10.0)).unwrap_err();
    assert_eq!(err, PackError::PackingIncomplete { placed: 0, total: 1 });
    assert_eq!(err.kind(), ErrorKind::PackingIncomplete);
}

#[test]
fn two_blocks_fill_container_exactly() {
    let blocks = [Block::new(50.0, 50.0), Block::new(50.0, 50.0)];
    let out = pack(&blocks, Container::new(100.0, 50.0)).unwrap();

    assert_eq!(out.placements.len(), 2);
    let a = out.placements[0];
    let b = out.placements[1];
    assert_eq!((a.left, a.top, a.right, a.bottom), (0.0, 0.0, 50.0, 50.0));
    assert_eq!((b.left, b.top, b.right, b.bottom), (50.0, 0.0, 100.0, 50.0));
    assert!(out.free_regions.is_empty());
    assert_eq!(out.fullness, 1.0);
}

#[test]
fn empty_block_list_is_not_an_error() {
    let container = Container::new(350.0, 350.0);
    let out = pack(&[], container).unwrap();

    assert!(out.is_empty());
    assert_eq!(out.free_regions, vec![Region::covering(&container)]);
    assert_eq!(out.fullness, 0.0);
    assert!(!out.fullness.is_nan());
}

#[test]
fn partial_fit_returns_no_layout() {
    // The second block fits on its own but not after the first one.
    let blocks = [Block::new(80.0, 80.0), Block::new(60.0, 60.0)];
    let err = pack(&blocks, Container::new(100.0, 100.0)).unwrap_err();
    assert_eq!(err, PackError::PackingIncomplete { placed: 1, total: 2 });
}

#[test]
fn later_blocks_reuse_earlier_strips_first() {
    let blocks = [
        Block::new(10.0, 10.0),
        Block::new(30.0, 30.0),
        Block::new(20.0, 20.0),
    ];
    let out = pack(&blocks, Container::new(100.0, 100.0)).unwrap();
    let boxes: Vec<_> = out
        .placements
        .iter()
        .map(|p| (p.left, p.top, p.right, p.bottom))
        .collect();
    assert_eq!(
        boxes,
        vec![
            (0.0, 0.0, 30.0, 30.0),
            // first free region is the strip right of the 30x30 block
            (30.0, 0.0, 50.0, 20.0),
            // that strip is gone; the strip below the 30x30 block is now first
            (0.0, 30.0, 10.0, 40.0),
        ]
    );
}
