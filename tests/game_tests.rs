//! Controller behaviour: tick ordering, intents, hard drop, topping out

use std::time::Duration;

use blockfall::core::{Board, Game, GameConfig, Piece, Shape};
use blockfall::types::{Color, GameStatus, Intent, ShapeKind, COLUMNS, ROWS};

fn game_with(board: Board, active: Piece) -> Game {
    let next = Piece::of_kind(ShapeKind::O, Color::Yellow, COLUMNS);
    Game::from_parts(GameConfig::default(), board, active, next).unwrap()
}

fn empty() -> Board {
    Board::new(COLUMNS, ROWS).unwrap()
}

#[test]
fn test_row_zero_block_ends_game_without_merging() {
    // Everything below the spawn rows is filled (one gap per row so nothing
    // counts as a full line).
    let mut board = empty();
    for y in 2..ROWS as i32 {
        for x in 1..COLUMNS as i32 {
            board.set(x, y, Some(Color::Blue));
        }
    }
    let o = Piece::of_kind(ShapeKind::O, Color::Yellow, COLUMNS);
    let mut game = game_with(board, o);
    assert_eq!(game.status(), GameStatus::Running);
    let locked_before = game.board().locked_count();

    let out = game.tick(game.fall_interval(), &[]);
    assert!(out.game_over());
    assert_eq!(out.pieces_locked, 0);
    assert_eq!(game.board().locked_count(), locked_before);

    let frozen = game.snapshot();
    let out = game.tick(
        Duration::from_secs(5),
        &[Intent::MoveLeft, Intent::Rotate, Intent::HardDrop],
    );
    assert_eq!(out.status, GameStatus::GameOver);
    assert!(!out.gravity_step);
    assert_eq!(game.snapshot(), frozen);
    assert_eq!(game.fall_timer(), Duration::ZERO);
}

#[test]
fn test_ghost_query_is_read_only() {
    let board = Board::from_locked(COLUMNS, ROWS, [((4, 12), Color::Red)]).unwrap();
    let t = Piece::of_kind(ShapeKind::T, Color::Purple, COLUMNS);
    let game = game_with(board.clone(), t);

    let first = game.ghost();
    let second = game.ghost();
    assert_eq!(first, second);
    assert_eq!(game.board(), &board);
    assert_eq!(game.active(), &t);
    assert_eq!(game.ghost_y(), 10);
}

#[test]
fn test_intents_apply_in_order() {
    let t = Piece::of_kind(ShapeKind::T, Color::Purple, COLUMNS);
    let mut game = game_with(empty(), t);

    game.tick(
        Duration::ZERO,
        &[Intent::MoveLeft, Intent::MoveLeft, Intent::MoveDown, Intent::Rotate],
    );
    let active = game.active();
    assert_eq!((active.x, active.y), (2, 1));
    assert_eq!(active.shape, Shape::template(ShapeKind::T).rotated_cw());
}

#[test]
fn test_illegal_intents_are_dropped() {
    let i = Piece::of_kind(ShapeKind::I, Color::Cyan, COLUMNS);
    let mut game = game_with(empty(), i);

    let lefts = [Intent::MoveLeft; 8];
    game.tick(Duration::ZERO, &lefts);
    assert_eq!(game.active().x, 0);

    let rights = [Intent::MoveRight; 12];
    game.tick(Duration::ZERO, &rights);
    assert_eq!(game.active().x, 6);
    assert_eq!(game.status(), GameStatus::Running);
}

#[test]
fn test_gravity_runs_before_intents() {
    let o = Piece::of_kind(ShapeKind::O, Color::Yellow, COLUMNS).at_row(18);
    let mut game = game_with(empty(), o);

    // Gravity finds the floor and locks; the intent moves the promoted piece.
    let out = game.tick(game.fall_interval(), &[Intent::MoveRight]);
    assert_eq!(out.pieces_locked, 1);
    assert_eq!(game.active().x, 5);
    assert_eq!(game.active().y, 0);
}

#[test]
fn test_hard_drop_waits_for_gravity_by_default() {
    let t = Piece::of_kind(ShapeKind::T, Color::Purple, COLUMNS);
    let mut game = game_with(empty(), t);

    let out = game.tick(Duration::ZERO, &[Intent::HardDrop]);
    assert_eq!(out.pieces_locked, 0);
    assert_eq!(game.active().y, 18);
    assert_eq!(game.board().locked_count(), 0);

    // Still movable until the next gravity step.
    game.tick(Duration::ZERO, &[Intent::MoveLeft]);
    assert_eq!(game.active().x, 3);

    let out = game.tick(game.fall_interval(), &[]);
    assert_eq!(out.pieces_locked, 1);
    assert_eq!(game.board().locked_count(), 4);
    assert_eq!(game.board().cell_at(3, 19), Ok(Some(Color::Purple)));
}

#[test]
fn test_hard_drop_can_lock_immediately() {
    let config = GameConfig {
        lock_on_hard_drop: true,
        ..GameConfig::default()
    };
    let t = Piece::of_kind(ShapeKind::T, Color::Purple, COLUMNS);
    let next = Piece::of_kind(ShapeKind::I, Color::Cyan, COLUMNS);
    let mut game = Game::from_parts(config, empty(), t, next).unwrap();

    let out = game.tick(Duration::ZERO, &[Intent::HardDrop, Intent::MoveLeft]);
    assert_eq!(out.pieces_locked, 1);
    assert_eq!(game.board().locked_count(), 4);
    // The follow-up intent applies to the promoted piece.
    assert_eq!(game.active().kind(), ShapeKind::I);
    assert_eq!(game.active().x, 2);
}

#[test]
fn test_timer_resets_on_gravity_step() {
    let mut game = Game::new(GameConfig::default().with_seed(99)).unwrap();
    let interval = game.fall_interval();

    game.tick(interval + Duration::from_millis(200), &[]);
    assert_eq!(game.fall_timer(), Duration::ZERO);
    assert_eq!(game.active().y, 1);

    game.tick(Duration::from_millis(16), &[]);
    assert_eq!(game.fall_timer(), Duration::from_millis(16));
}

#[test]
fn test_huge_elapsed_time_saturates_timer() {
    let mut game = Game::new(GameConfig::default().with_seed(3)).unwrap();
    let y0 = game.active().y;

    game.tick(Duration::from_millis(1), &[]);
    let out = game.tick(Duration::MAX, &[]);
    assert!(out.gravity_step);
    assert_eq!(game.active().y, y0 + 1);
    assert_eq!(game.fall_timer(), Duration::ZERO);

    // A single gravity step per tick, however long the frame was.
    game.tick(Duration::from_millis(1), &[]);
    game.tick(Duration::MAX, &[]);
    assert_eq!(game.active().y, y0 + 2);
}

#[test]
fn test_blocked_spawn_ends_game() {
    // Column 4 is filled up to row 1, right under the spawn position.
    let mut board = empty();
    for y in 1..ROWS as i32 {
        board.set(4, y, Some(Color::Red));
    }
    let i = Piece {
        shape: Shape::template(ShapeKind::I).rotated_cw(),
        color: Color::Cyan,
        x: 0,
        y: 16,
    };
    let mut game = game_with(board, i);

    // I locks at the floor; the queued O spawns over column 4 and is blocked.
    let out = game.tick(game.fall_interval(), &[Intent::MoveDown]);
    assert_eq!(out.pieces_locked, 1);
    assert!(out.game_over());
    assert!(game.last_event().unwrap().game_over);
    assert!(game.is_over());
}

#[test]
fn test_restart_resets_session() {
    let mut game = Game::new(GameConfig::default().with_seed(5)).unwrap();
    for _ in 0..40 {
        game.tick(Duration::from_secs(1), &[Intent::HardDrop]);
    }
    assert!(game.pieces_locked() > 0);

    game.restart(77);
    assert_eq!(game.seed(), 77);
    assert_eq!(game.board().locked_count(), 0);
    assert_eq!(game.score(), 0);
    assert_eq!(game.level(), 1);
    assert_eq!(game.pieces_locked(), 0);
    assert_eq!(game.status(), GameStatus::Running);
    assert_eq!(game.active().y, 0);
}

#[test]
fn test_same_seed_same_session() {
    let script = [Intent::MoveLeft, Intent::Rotate, Intent::HardDrop];
    let mut a = Game::new(GameConfig::default().with_seed(31337)).unwrap();
    let mut b = Game::new(GameConfig::default().with_seed(31337)).unwrap();
    for i in 0..200 {
        let intents = &script[..i % 4];
        let dt = Duration::from_millis(16 * (i as u64 % 50));
        assert_eq!(a.tick(dt, intents), b.tick(dt, intents));
    }
    assert_eq!(a.snapshot(), b.snapshot());
}
