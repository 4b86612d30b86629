//! Game module - the per-session controller
//!
//! Ties the board, the active/next pieces, the piece generator and the
//! progression together. Each frame the frontend calls [`Game::tick`] with the
//! elapsed time and the intents collected since the previous frame:
//!
//! 1. elapsed time accumulates into the fall timer;
//! 2. once the timer reaches the fall interval it resets and the piece tries
//!    to move down one row; if it cannot, it locks (or tops out on row 0);
//! 3. intents are applied in arrival order, each re-validated and dropped if
//!    illegal.
//!
//! Locking merges the piece, clears full rows, updates progression, promotes
//! the next piece and draws a new one. A promoted piece that does not fit
//! ends the session; after that `tick` is a no-op.

use std::time::Duration;

use crate::board::Board;
use crate::collision::{is_valid, landing};
use crate::config::GameConfig;
use crate::error::GameError;
use crate::lines::clear_lines;
use crate::piece::Piece;
use crate::progression::Progression;
use crate::rng::PieceGenerator;
use crate::snapshot::GameSnapshot;
use crate::types::{GameStatus, Intent, LockEvent};

/// What happened during one [`Game::tick`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    pub status: GameStatus,
    /// Gravity moved the active piece down a row
    pub gravity_step: bool,
    pub pieces_locked: u32,
    pub lines_cleared: u32,
    pub score_gained: u32,
    pub leveled_up: bool,
}

impl TickOutcome {
    pub fn game_over(&self) -> bool {
        self.status.is_over()
    }
}

/// Complete state of one session
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    board: Board,
    active: Piece,
    next: Piece,
    generator: PieceGenerator,
    progression: Progression,
    status: GameStatus,
    fall_timer: Duration,
    pieces_locked: u32,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
}

impl Game {
    /// Start a session on an empty board
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        let board = Board::new(config.columns, config.rows)?;
        let mut generator = PieceGenerator::new(config.seed, config.columns);
        let active = generator.next_piece();
        let next = generator.next_piece();
        log::info!(
            "new session: {}x{} board, seed {}",
            config.columns,
            config.rows,
            config.seed
        );
        Ok(Self::assemble(config, board, active, next, generator))
    }

    /// Start a session from explicit state
    ///
    /// The board must match the configured dimensions. An active piece that
    /// does not fit starts the session already over.
    pub fn from_parts(
        config: GameConfig,
        board: Board,
        active: Piece,
        next: Piece,
    ) -> Result<Self, GameError> {
        config.validate()?;
        if board.columns() != config.columns || board.rows() != config.rows {
            return Err(GameError::BoardMismatch {
                columns: config.columns,
                rows: config.rows,
                found_columns: board.columns(),
                found_rows: board.rows(),
            });
        }
        let generator = PieceGenerator::new(config.seed, config.columns);
        Ok(Self::assemble(config, board, active, next, generator))
    }

    fn assemble(
        config: GameConfig,
        board: Board,
        active: Piece,
        next: Piece,
        generator: PieceGenerator,
    ) -> Self {
        let status = if is_valid(&active, &board) {
            GameStatus::Running
        } else {
            GameStatus::GameOver
        };
        Self {
            progression: Progression::new(&config.progression),
            config,
            board,
            active,
            next,
            generator,
            status,
            fall_timer: Duration::ZERO,
            pieces_locked: 0,
            last_event: None,
        }
    }

    /// Throw away the current session and start over with `seed`
    pub fn restart(&mut self, seed: u32) {
        self.config.seed = seed;
        self.board.clear();
        self.generator = PieceGenerator::new(seed, self.config.columns);
        self.active = self.generator.next_piece();
        self.next = self.generator.next_piece();
        self.progression = Progression::new(&self.config.progression);
        self.status = GameStatus::Running;
        self.fall_timer = Duration::ZERO;
        self.pieces_locked = 0;
        self.last_event = None;
        log::info!("session restarted with seed {}", seed);
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    pub fn next(&self) -> &Piece {
        &self.next
    }

    pub fn progression(&self) -> &Progression {
        &self.progression
    }

    pub fn score(&self) -> u32 {
        self.progression.score()
    }

    pub fn level(&self) -> u32 {
        self.progression.level()
    }

    pub fn lines_cleared(&self) -> u32 {
        self.progression.lines_cleared()
    }

    pub fn fall_interval(&self) -> Duration {
        self.progression.fall_interval()
    }

    /// Time accumulated toward the next gravity step
    pub fn fall_timer(&self) -> Duration {
        self.fall_timer
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn seed(&self) -> u32 {
        self.generator.seed()
    }

    /// Where the active piece would land if dropped now (read-only)
    pub fn ghost(&self) -> Piece {
        landing(&self.active, &self.board)
    }

    pub fn ghost_y(&self) -> i32 {
        self.ghost().y
    }

    pub fn last_event(&self) -> Option<LockEvent> {
        self.last_event
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Advance the session by `elapsed` and apply `intents` in order
    pub fn tick(&mut self, elapsed: Duration, intents: &[Intent]) -> TickOutcome {
        let mut outcome = TickOutcome {
            status: self.status,
            ..TickOutcome::default()
        };
        if self.status.is_over() {
            return outcome;
        }

        self.fall_timer = self.fall_timer.saturating_add(elapsed);
        if self.fall_timer >= self.progression.fall_interval() {
            self.fall_timer = Duration::ZERO;
            self.gravity_step(&mut outcome);
        }

        for &intent in intents {
            if self.status.is_over() {
                break;
            }
            self.apply_intent(intent, &mut outcome);
        }

        outcome.status = self.status;
        outcome
    }

    fn gravity_step(&mut self, outcome: &mut TickOutcome) {
        let lowered = self.active.translated(0, 1);
        if is_valid(&lowered, &self.board) {
            self.active = lowered;
            outcome.gravity_step = true;
        } else {
            self.settle(outcome);
        }
    }

    /// Returns whether the intent was committed
    fn apply_intent(&mut self, intent: Intent, outcome: &mut TickOutcome) -> bool {
        let candidate = match intent {
            Intent::MoveLeft => self.active.translated(-1, 0),
            Intent::MoveRight => self.active.translated(1, 0),
            Intent::MoveDown => self.active.translated(0, 1),
            Intent::Rotate => self.active.rotated(),
            Intent::HardDrop => landing(&self.active, &self.board),
        };

        if !is_valid(&candidate, &self.board) {
            return false;
        }
        self.active = candidate;

        if intent == Intent::HardDrop && self.config.lock_on_hard_drop {
            self.settle(outcome);
        }
        true
    }

    /// The active piece cannot descend: lock it, or top out if it never left
    /// its spawn row.
    fn settle(&mut self, outcome: &mut TickOutcome) {
        if self.active.y > 0 {
            self.lock_active(outcome);
        } else {
            log::info!(
                "game over: {:?} blocked on row {} (score {}, level {})",
                self.active.kind(),
                self.active.y,
                self.score(),
                self.level()
            );
            self.status = GameStatus::GameOver;
        }
    }

    fn lock_active(&mut self, outcome: &mut TickOutcome) {
        self.board.merge(&self.active);
        self.pieces_locked = self.pieces_locked.wrapping_add(1);

        let cleared = clear_lines(&mut self.board);
        let score = self
            .progression
            .record_clear(cleared.count, &self.config.progression);

        log::debug!(
            "locked {:?} at ({}, {}), cleared rows {:?}",
            self.active.kind(),
            self.active.x,
            self.active.y,
            cleared.rows
        );
        if score.leveled_up {
            log::info!(
                "level {} reached, fall interval {:?}",
                self.progression.level(),
                self.progression.fall_interval()
            );
        }

        // Promote the queued piece and draw a fresh one.
        self.active = self.next;
        self.next = self.generator.next_piece();
        self.fall_timer = Duration::ZERO;

        let game_over = !is_valid(&self.active, &self.board);
        if game_over {
            log::info!(
                "game over: spawn blocked (score {}, lines {}, level {})",
                self.score(),
                self.lines_cleared(),
                self.level()
            );
            self.status = GameStatus::GameOver;
        }

        self.last_event = Some(LockEvent {
            lines_cleared: cleared.count,
            score_delta: score.score_delta,
            leveled_up: score.leveled_up,
            game_over,
        });

        outcome.pieces_locked += 1;
        outcome.lines_cleared += cleared.count;
        outcome.score_gained = outcome.score_gained.saturating_add(score.score_delta);
        outcome.leveled_up |= score.leveled_up;
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.columns = self.board.columns();
        out.rows = self.board.rows();
        out.board.clear();
        out.board.extend_from_slice(self.board.cells());
        out.active = Some(self.active);
        out.ghost = Some(self.ghost());
        out.next = Some(self.next);
        out.score = self.progression.score();
        out.level = self.progression.level();
        out.lines = self.progression.lines_cleared();
        out.fall_interval = self.progression.fall_interval();
        out.game_over = self.status.is_over();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
