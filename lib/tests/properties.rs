use lifegame_lib::{BitGrid, Config, Game, PatternSet, Point};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Set(i32, i32, bool),
    Clear,
    Next,
}

fn op(width: i32, height: i32) -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (-1..=width, -1..=height, any::<bool>()).prop_map(|(x, y, alive)| Op::Set(x, y, alive)),
        1 => Just(Op::Clear),
        3 => Just(Op::Next),
    ]
}

fn apply(game: &mut Game, op: &Op) {
    match *op {
        Op::Set(x, y, alive) => game.set(Point::new(x, y), alive),
        Op::Clear => game.clear(),
        Op::Next => game.next(),
    }
}

/// Every living cell, and every cell next to one, lies inside the region.
fn region_is_sound(board: &BitGrid) -> bool {
    let region = match board.region() {
        Some(region) => region,
        None => return true,
    };
    let bounds = board.bounds();
    board.bounds().points().filter(|&p| board.get(p)).all(|p| {
        (-1..=1).all(|dy| {
            (-1..=1).all(|dx| {
                let q = Point::new(p.x + dx, p.y + dy);
                !bounds.contains(q) || region.contains(q)
            })
        })
    })
}

proptest! {
    #[test]
    fn live_region_is_sound(
        seed in any::<u64>(),
        workers in 1usize..=6,
        ops in prop::collection::vec(op(24, 10), 0..40),
    ) {
        let mut game = Config::new(24, 10)
            .set_seed(seed)
            .set_workers(workers)
            .game(PatternSet::new())
            .unwrap();
        prop_assert!(region_is_sound(game.board()));
        for op in &ops {
            apply(&mut game, op);
            prop_assert!(region_is_sound(game.board()), "after {:?}", op);
            let region = game.region().unwrap();
            prop_assert!(game.board().bounds().contains_rect(&region));
        }
    }

    #[test]
    fn tracking_never_changes_the_result(
        seed in any::<u64>(),
        workers in 1usize..=6,
        ops in prop::collection::vec(op(16, 12), 0..40),
    ) {
        let config = Config::new(16, 12).set_seed(seed);
        let mut fast = config.clone().set_workers(workers).game(PatternSet::new()).unwrap();
        let mut plain = config
            .set_workers(Some(1))
            .set_track_region(false)
            .game(PatternSet::new())
            .unwrap();
        prop_assert_eq!(fast.board(), plain.board());
        for op in &ops {
            apply(&mut fast, op);
            apply(&mut plain, op);
            prop_assert_eq!(fast.board(), plain.board(), "after {:?}", op);
        }
    }

    #[test]
    fn clear_is_idempotent(seed in any::<u64>(), generations in 0u64..5) {
        let mut game = Config::new(16, 16).set_seed(seed).game(PatternSet::new()).unwrap();
        game.advance(generations);
        game.clear();
        let once = game.board().clone();
        let region = game.region();
        game.clear();
        prop_assert_eq!(game.board(), &once);
        prop_assert_eq!(game.region(), region);
    }
}

#[test]
fn workers_do_not_change_the_result() {
    for &track_region in &[true, false] {
        let reference = {
            let mut game = Config::new(64, 48)
                .set_seed(Some(2024))
                .set_workers(Some(1))
                .set_track_region(track_region)
                .game(PatternSet::new())
                .unwrap();
            game.advance(12);
            game.board().clone()
        };
        for workers in 2..=16 {
            let mut game = Config::new(64, 48)
                .set_seed(Some(2024))
                .set_workers(workers)
                .set_track_region(track_region)
                .game(PatternSet::new())
                .unwrap();
            game.advance(12);
            assert_eq!(game.board(), &reference, "{} workers", workers);
        }
    }
}

#[test]
fn more_workers_than_rows() {
    let mut one = Config::new(8, 3).set_seed(Some(8)).set_workers(Some(1)).game(PatternSet::new()).unwrap();
    let mut many = Config::new(8, 3).set_seed(Some(8)).set_workers(Some(16)).game(PatternSet::new()).unwrap();
    one.advance(4);
    many.advance(4);
    assert_eq!(one.board(), many.board());
}
