use lifegame_lib::{Config, Error as GameError, PatternDefinition, PatternSet, Point, Size};
use std::error::Error;

fn blinker() -> PatternDefinition {
    PatternDefinition::from_plaintext("blinker", "...\n***\n...\n")
}

fn vertical(x: i32, ys: &[i32]) -> Vec<Point> {
    ys.iter().map(|&y| Point::new(x, y)).collect()
}

#[test]
fn blinker_has_period_two() -> Result<(), Box<dyn Error>> {
    let config = Config::new(8, 3).set_workers(Some(2)).set_seed(Some(1));
    let mut game = config.game(PatternSet::from(vec![blinker()]))?;
    assert!(game.set_pattern(0));
    assert_eq!(game.generation(), 0);
    assert_eq!(game.pattern_index(), Some(0));
    let start = game.board().clone();
    for x in 2..5 {
        assert!(game.get(Point::new(x, 1)));
    }

    game.next();
    assert_eq!(game.population(), 3);
    for point in vertical(3, &[0, 1, 2]) {
        assert!(game.get(point), "{:?}", point);
    }

    game.next();
    assert_eq!(game.board(), &start);
    assert_eq!(game.generation(), 2);
    Ok(())
}

#[test]
fn dead_board_stays_dead() -> Result<(), Box<dyn Error>> {
    for &track_region in &[true, false] {
        let mut game = Config::new(8, 8)
            .set_track_region(track_region)
            .set_workers(Some(4))
            .game(PatternSet::new())?;
        game.clear();
        for _ in 0..5 {
            game.next();
            assert_eq!(game.population(), 0);
        }
        assert_eq!(game.generation(), 5);
    }
    Ok(())
}

#[test]
fn block_is_still() -> Result<(), Box<dyn Error>> {
    let mut game = Config::new(16, 16).set_seed(Some(3)).game(PatternSet::new())?;
    game.clear();
    for &(x, y) in &[(0, 0), (1, 0), (0, 1), (1, 1)] {
        game.set(Point::new(x, y), true);
    }
    let start = game.board().clone();
    game.advance(4);
    assert_eq!(game.board(), &start);
    Ok(())
}

#[test]
fn glider_crosses_the_board() -> Result<(), Box<dyn Error>> {
    let glider = PatternDefinition::from_rle("glider", "x = 3, y = 3, rule = B3/S23\nbo$2bo$3o!\n");
    let mut game = Config::new(16, 16)
        .set_workers(Some(3))
        .game(PatternSet::from(vec![glider]))?;
    assert!(game.set_pattern(0));
    // The glider moves one cell down and right every four generations.
    let start: Vec<Point> = game.board().bounds().points().filter(|&p| game.get(p)).collect();
    game.advance(8);
    assert_eq!(game.population(), 5);
    for p in start {
        let moved = Point::new(p.x + 2, p.y + 2);
        assert!(game.get(moved), "{:?}", moved);
    }
    Ok(())
}

#[test]
fn invalid_sizes() {
    assert!(matches!(
        Config::new(0, 8).game(PatternSet::new()),
        Err(GameError::NonPositiveError)
    ));
    assert!(matches!(
        Config::new(8, -1).game(PatternSet::new()),
        Err(GameError::NonPositiveError)
    ));
    assert!(matches!(
        Config::new(12, 8).game(PatternSet::new()),
        Err(GameError::UnalignedWidthError(12))
    ));
}

#[test]
fn negative_pattern_index() -> Result<(), Box<dyn Error>> {
    let mut game = Config::new(8, 3).set_seed(Some(7)).game(PatternSet::from(vec![blinker()]))?;
    game.advance(3);
    let before = game.board().clone();
    assert!(!game.set_pattern(-1));
    assert_eq!(game.pattern_index(), None);
    assert_eq!(game.board(), &before);
    assert_eq!(game.generation(), 3);
    Ok(())
}

#[test]
fn out_of_range_pattern_index() -> Result<(), Box<dyn Error>> {
    let mut game = Config::new(8, 3).game(PatternSet::from(vec![blinker()]))?;
    assert!(game.set_pattern(0));
    let stamped = game.board().clone();
    assert!(!game.set_pattern(1));
    assert_eq!(game.pattern_index(), None);
    assert_eq!(game.board(), &stamped);
    assert!(!game.set_pattern(usize::MAX));
    assert_eq!(game.pattern(), None);
    Ok(())
}

#[test]
fn set_pattern_keeps_generation() -> Result<(), Box<dyn Error>> {
    let mut game = Config::new(8, 3)
        .set_seed(Some(4))
        .game(PatternSet::from(vec![blinker()]))?;
    game.advance(5);
    assert!(game.set_pattern(0));
    assert_eq!(game.generation(), 5);
    game.next();
    assert_eq!(game.generation(), 6);
    game.reset(false);
    assert_eq!(game.generation(), 0);
    Ok(())
}

#[test]
fn empty_pattern_is_refused() -> Result<(), Box<dyn Error>> {
    let mut game = Config::new(8, 8)
        .set_seed(Some(6))
        .game(PatternSet::from(vec![PatternDefinition::empty("empty")]))?;
    let before = game.board().clone();
    assert!(!game.set_pattern(0));
    assert_eq!(game.pattern_index(), None);
    assert_eq!(game.board(), &before);
    Ok(())
}

#[test]
fn oversize_pattern_is_refused() -> Result<(), Box<dyn Error>> {
    let tall = PatternDefinition::new("tall", 1, vec![true; 4]);
    let mut game = Config::new(8, 3)
        .set_seed(Some(11))
        .game(PatternSet::from(vec![blinker(), tall]))?;
    let before = game.board().clone();
    assert!(!game.set_pattern(1));
    assert_eq!(game.pattern_index(), None);
    assert_eq!(game.board(), &before);
    Ok(())
}

#[test]
fn pattern_fills_both_boards() -> Result<(), Box<dyn Error>> {
    // A stale next board must not leak into the generation after a stamp.
    let mut game = Config::new(16, 8)
        .set_seed(Some(5))
        .game(PatternSet::from(vec![blinker()]))?;
    game.advance(3);
    assert!(game.set_pattern(0));
    game.next();
    assert_eq!(game.population(), 3);
    game.next();
    assert_eq!(game.population(), 3);
    Ok(())
}

#[test]
fn reset_keeps_or_replaces_cells() -> Result<(), Box<dyn Error>> {
    let mut game = Config::new(32, 32)
        .set_seed(Some(9))
        .game(PatternSet::from(vec![blinker()]))?;
    assert!(game.set_pattern(0));
    game.advance(5);

    let before = game.board().clone();
    game.reset(false);
    assert_eq!(game.board(), &before);
    assert_eq!(game.generation(), 0);
    assert_eq!(game.pattern_index(), None);

    game.advance(2);
    game.reset(true);
    assert_eq!(game.generation(), 0);
    assert_ne!(game.board(), &before);
    assert!(game.population() > 0);
    Ok(())
}

#[test]
fn seeds_are_reproducible() -> Result<(), Box<dyn Error>> {
    let config = Config::new(64, 16).set_seed(Some(1234));
    let a = config.game(PatternSet::new())?;
    let b = config.game(PatternSet::new())?;
    assert_eq!(a.board(), b.board());
    Ok(())
}

#[test]
fn clear_empties_both_boards() -> Result<(), Box<dyn Error>> {
    let mut game = Config::new(16, 16).set_seed(Some(2)).game(PatternSet::new())?;
    game.next();
    game.clear();
    assert_eq!(game.population(), 0);
    game.next();
    assert_eq!(game.population(), 0);
    assert_eq!(game.size(), Size::new(16, 16));
    Ok(())
}
