use std::time::Duration;

use crate::piece::Piece;
use crate::types::{Cell, COLUMNS, ROWS};

/// Render-ready copy of a session, reusable across frames
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub columns: u16,
    pub rows: u16,
    /// Row-major cells, `columns * rows` long
    pub board: Vec<Cell>,
    pub active: Option<Piece>,
    pub ghost: Option<Piece>,
    pub next: Option<Piece>,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub fall_interval: Duration,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.board.clear();
        self.board
            .resize(self.columns as usize * self.rows as usize, None);
        self.active = None;
        self.ghost = None;
        self.next = None;
        self.score = 0;
        self.level = 1;
        self.lines = 0;
        self.fall_interval = Duration::ZERO;
        self.game_over = false;
    }

    /// Cell at (x, y), `None` outside the grid
    pub fn cell(&self, x: i32, y: i32) -> Option<Cell> {
        if x < 0 || y < 0 || x >= self.columns as i32 || y >= self.rows as i32 {
            return None;
        }
        self.board
            .get(y as usize * self.columns as usize + x as usize)
            .copied()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            columns: COLUMNS,
            rows: ROWS,
            board: Vec::new(),
            active: None,
            ghost: None,
            next: None,
            score: 0,
            level: 1,
            lines: 0,
            fall_interval: Duration::ZERO,
            game_over: false,
        };
        s.clear();
        s
    }
}
