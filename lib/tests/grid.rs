use lifegame_lib::{region, BitGrid, Point, Rect, Size};

fn live_cells(grid: &BitGrid) -> Vec<Point> {
    grid.bounds().points().filter(|&p| grid.get(p)).collect()
}

#[test]
fn out_of_bounds() {
    let mut grid = BitGrid::new(Size::new(16, 4), true);
    let before = grid.clone();
    let region = grid.region();
    for &(x, y) in &[(-1, 0), (0, -1), (16, 0), (0, 4), (16, 4), (-1, -1), (i32::MAX, 0)] {
        let point = Point::new(x, y);
        assert!(!grid.get(point));
        grid.set(point, true);
        assert!(!grid.get(point));
    }
    assert_eq!(grid, before);
    assert_eq!(grid.region(), region);
    assert_eq!(grid.live_count(), 0);
}

#[test]
fn set_get_round_trip() {
    let mut grid = BitGrid::new(Size::new(24, 5), true);
    let points = [
        (0, 0),
        (7, 0),
        (8, 0),
        (23, 0),
        (0, 1),
        (23, 4),
        (15, 2),
        (16, 3),
    ];
    for &(x, y) in &points {
        let point = Point::new(x, y);
        grid.set(point, true);
        assert!(grid.get(point), "{:?}", point);
    }
    assert_eq!(grid.live_count(), points.len());
    for &(x, y) in &points {
        let point = Point::new(x, y);
        grid.set(point, false);
        assert!(!grid.get(point), "{:?}", point);
    }
    assert_eq!(grid.live_count(), 0);
}

#[test]
fn neighbors_do_not_leak_across_rows() {
    let mut grid = BitGrid::new(Size::new(16, 3), false);
    // Last cell of row 0 and first cell of row 1 share no edge.
    grid.set(Point::new(15, 0), true);
    assert_eq!(grid.neighbor_count(Point::new(0, 1)), 0);
    assert_eq!(grid.neighbor_count(Point::new(14, 1)), 1);
    assert_eq!(grid.neighbor_count(Point::new(15, 1)), 1);
}

#[test]
fn neighbor_count_at_corner() {
    let mut grid = BitGrid::new(Size::new(8, 8), false);
    for p in Rect::from_edges(0, 0, 2, 2).points() {
        grid.set(p, true);
    }
    assert_eq!(grid.neighbor_count(Point::new(0, 0)), 3);
    assert_eq!(grid.neighbor_count(Point::new(1, 1)), 3);
    assert_eq!(grid.neighbor_count(Point::new(2, 2)), 1);
    assert_eq!(grid.neighbor_count(Point::new(-1, -1)), 1);
}

#[test]
fn neighbor_count_at_extreme_coordinates() {
    let mut grid = BitGrid::new(Size::new(8, 8), false);
    for p in Rect::from_edges(0, 0, 8, 8).points() {
        grid.set(p, true);
    }
    for &(x, y) in &[
        (i32::MAX, i32::MAX),
        (i32::MIN, i32::MIN),
        (i32::MAX, 0),
        (0, i32::MIN),
    ] {
        assert_eq!(grid.neighbor_count(Point::new(x, y)), 0, "({}, {})", x, y);
    }
}

#[test]
fn setting_dead_never_shrinks() {
    let mut grid = BitGrid::new(Size::new(16, 16), true);
    grid.set(Point::new(1, 1), true);
    let grown = grid.region();
    grid.set(Point::new(1, 1), false);
    assert_eq!(grid.region(), grown);
}

#[test]
fn clear_is_idempotent() {
    let mut grid = BitGrid::new(Size::new(16, 16), true);
    for i in 0..16 {
        grid.set(Point::new(i, 15 - i), true);
    }
    grid.clear();
    let once = grid.clone();
    let once_region = grid.region();
    grid.clear();
    assert_eq!(grid, once);
    assert_eq!(grid.region(), once_region);
    assert_eq!(grid.live_count(), 0);
    assert_eq!(grid.region(), Some(region::default_region(grid.bounds())));
}

#[test]
fn region_covers_live_cells() {
    let mut grid = BitGrid::new(Size::new(32, 16), true);
    for &(x, y) in &[(0, 0), (31, 15), (12, 7), (20, 3)] {
        grid.set(Point::new(x, y), true);
    }
    let region = grid.region().unwrap();
    for point in live_cells(&grid) {
        assert!(region.contains(point));
    }
    assert!(grid.bounds().contains_rect(&region));
}

#[test]
fn refresh_region_is_tight() {
    let mut grid = BitGrid::new(Size::new(32, 16), true);
    grid.set(Point::new(0, 0), true);
    grid.set(Point::new(0, 0), false);
    grid.set(Point::new(20, 10), true);
    grid.refresh_region();
    let region = grid.region().unwrap();
    assert!(region.contains(Point::new(21, 11)));
    assert!(!region.contains(Point::new(0, 0)));
}

#[test]
fn copy_from_copies_bits_and_region() {
    let mut source = BitGrid::new(Size::new(16, 8), true);
    source.set(Point::new(3, 3), true);
    source.set(Point::new(12, 6), true);
    let mut target = BitGrid::new(Size::new(16, 8), true);
    target.copy_from(&source);
    assert_eq!(target, source);
    assert_eq!(target.region(), source.region());
}

#[test]
#[should_panic]
fn copy_between_sizes_panics() {
    let mut target = BitGrid::new(Size::new(16, 8), false);
    target.copy_from(&BitGrid::new(Size::new(8, 8), false));
}

#[test]
#[should_panic]
fn unaligned_width_panics() {
    let _ = BitGrid::new(Size::new(10, 8), false);
}

#[test]
#[should_panic]
fn zero_height_panics() {
    let _ = BitGrid::new(Size::new(8, 0), false);
}

#[test]
fn plaintext() {
    let mut grid = BitGrid::new(Size::new(8, 2), false);
    grid.set(Point::new(1, 0), true);
    grid.set(Point::new(7, 1), true);
    assert_eq!(grid.plaintext(), ".o......\n.......o\n");
}
