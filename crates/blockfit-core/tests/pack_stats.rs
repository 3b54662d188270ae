use blockfit_core::prelude::*;

#[test]
fn test_pack_stats_basic() {
    // 4 blocks of 64x64 in a 256x64 strip
    let blocks = vec![Block::new(64.0, 64.0); 4];
    let result = pack(&blocks, Container::new(256.0, 64.0)).expect("packing should succeed");
    let stats = result.stats();

    assert_eq!(stats.num_blocks, 4);
    assert_eq!(stats.num_free_regions, 0);
    assert_eq!(stats.placed_area, 4.0 * 64.0 * 64.0);
    assert_eq!(stats.free_area, 0.0);
    assert_eq!(stats.container_area, 256.0 * 64.0);
    assert_eq!(stats.occupancy, 1.0);
    assert_eq!(stats.fullness, 1.0);
    assert_eq!(stats.num_rotated, 0);
}

#[test]
fn test_fullness_differs_from_occupancy() {
    let result = pack(&[Block::new(100.0, 100.0)], Container::new(350.0, 350.0)).unwrap();
    let stats = result.stats();

    assert_eq!(stats.fullness, result.fullness);
    assert!((stats.occupancy - 10_000.0 / 122_500.0).abs() < 1e-12);
    assert_eq!(stats.free_area, 112_500.0);
}

#[test]
fn test_overlapping_free_regions_lower_fullness() {
    // The second block only fits the 100x60 strip turned, so it hangs 10 below
    // that strip and into the free region under the first block.
    let blocks = [Block::new(100.0, 60.0), Block::new(30.0, 70.0)];
    let result = pack(&blocks, Container::new(200.0, 100.0)).unwrap();
    let stats = result.stats();

    let p = result.placements[1];
    assert_eq!((p.left, p.top, p.right, p.bottom), (100.0, 0.0, 130.0, 70.0));
    assert_eq!(
        result.free_regions,
        vec![
            Region::new(60.0, 0.0, 200.0, 100.0),
            Region::new(0.0, 130.0, 200.0, 70.0),
        ]
    );
    assert_eq!(stats.placed_area, 6000.0 + 2100.0);
    assert_eq!(stats.free_area, 8000.0 + 4900.0);
    assert!(stats.placed_area + stats.free_area > stats.container_area);
    assert!((stats.fullness - 8100.0 / 21_000.0).abs() < 1e-12);
    assert!((stats.occupancy - 8100.0 / 20_000.0).abs() < 1e-12);
}

#[test]
fn test_pack_stats_summary() {
    let result = pack(&[Block::new(32.0, 32.0)], Container::new(128.0, 128.0)).unwrap();
    let summary = result.stats().summary();

    assert!(summary.contains("Blocks: 1"));
    assert!(summary.contains("Fullness:"));
    assert!(summary.contains("Occupancy:"));
}

#[test]
fn test_pack_stats_wasted_area() {
    let result = pack(&[Block::new(32.0, 32.0)], Container::new(256.0, 256.0)).unwrap();
    let stats = result.stats();

    assert_eq!(stats.wasted_area() + stats.placed_area, stats.container_area);
    assert!(stats.waste_percentage() > 0.0);
    assert!(stats.waste_percentage() < 100.0);
}

#[test]
fn test_pack_stats_empty() {
    let result = pack(&[], Container::new(10.0, 10.0)).unwrap();
    let stats = result.stats();

    assert_eq!(stats.num_blocks, 0);
    assert_eq!(stats.fullness, 0.0);
    assert_eq!(stats.occupancy, 0.0);
    assert_eq!(stats.free_area, 100.0);
    assert_eq!(stats.waste_percentage(), 100.0);
    assert!(stats.summary().contains("Blocks: 0"));
}
