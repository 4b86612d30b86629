//! Shared data types and constants
//!
//! Plain data used by the rules engine, the input mapping and the terminal
//! frontend. Nothing in here depends on I/O or on other workspace crates.
//!
//! # Playfield
//!
//! - **Columns**: 10 (indexed 0-9, left to right)
//! - **Rows**: 20 (indexed 0-19, top to bottom)
//! - **Spawn**: `x = COLUMNS / 2 - shape_width / 2`, `y = 0`
//!
//! # Timing and progression defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Frontend fixed timestep (~60 FPS) |
//! | `BASE_FALL_INTERVAL_MS` | 700 | Gravity step at level 1 |
//! | `LINES_PER_LEVEL` | 5 | Lines needed per level-up |
//! | `LEVEL_SPEEDUP` | 0.9 | Fall interval multiplier per level |
//! | `MIN_FALL_INTERVAL_MS` | 50 | Floor for the fall interval |
//! | `SCORE_PER_LINE` | 100 | Points per line, multiplied by level |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Color, GameStatus, ShapeKind, COLUMNS, ROWS};
//!
//! assert_eq!(ShapeKind::ALL.len(), 7);
//! assert_eq!(Color::Cyan.rgb(), (0, 255, 255));
//! assert!(!GameStatus::default().is_over());
//!
//! assert_eq!(COLUMNS, 10);
//! assert_eq!(ROWS, 20);
//! ```

/// Playfield width in cells
pub const COLUMNS: u16 = 10;

/// Playfield height in cells
pub const ROWS: u16 = 20;

/// Pixel size of one cell for pixel-based frontends
pub const CELL_SIZE: u16 = 30;

/// Largest side of any piece bounding box; boards must be at least this big
pub const MAX_SHAPE_DIM: u8 = 4;

/// Frontend fixed timestep in milliseconds
pub const TICK_MS: u32 = 16;

/// Gravity interval at level 1 in milliseconds
pub const BASE_FALL_INTERVAL_MS: u64 = 700;

/// Lines cleared per level-up
pub const LINES_PER_LEVEL: u32 = 5;

/// Fall interval multiplier applied on each level-up
pub const LEVEL_SPEEDUP: f64 = 0.9;

/// Lower bound for the fall interval in milliseconds
pub const MIN_FALL_INTERVAL_MS: u64 = 50;

/// Points per cleared line at level 1
pub const SCORE_PER_LINE: u32 = 100;

/// The seven tetromino templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::O,
        ShapeKind::T,
        ShapeKind::S,
        ShapeKind::Z,
        ShapeKind::J,
        ShapeKind::L,
    ];
}

/// Color token carried by a piece and by every block it leaves on the board
///
/// Colors are picked independently of the shape, so any shape can show up
/// in any color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Cyan,
    Yellow,
    Purple,
    Green,
    Red,
    Orange,
    Blue,
}

impl Color {
    pub const ALL: [Color; 7] = [
        Color::Cyan,
        Color::Yellow,
        Color::Purple,
        Color::Green,
        Color::Red,
        Color::Orange,
        Color::Blue,
    ];

    /// 24-bit RGB value for drawing
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Color::Cyan => (0, 255, 255),
            Color::Yellow => (255, 255, 0),
            Color::Purple => (160, 32, 240),
            Color::Green => (0, 255, 0),
            Color::Red => (255, 0, 0),
            Color::Orange => (255, 165, 0),
            Color::Blue => (0, 0, 255),
        }
    }
}

/// A board cell: `None` is empty, `Some(color)` is a locked block
pub type Cell = Option<Color>;

/// Discrete player intents applied to the active piece
///
/// Intents that would produce an illegal placement are dropped silently;
/// bumping into a wall is normal play, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Shift one column left
    MoveLeft,
    /// Shift one column right
    MoveRight,
    /// Shift one row down
    MoveDown,
    /// Rotate 90° clockwise
    Rotate,
    /// Descend to the lowest legal row
    HardDrop,
}

impl Intent {
}

/// Session state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    Running,
    /// Terminal: no further ticks mutate the session
    GameOver,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        matches!(self, GameStatus::GameOver)
    }
}

/// Core-side event emitted after a piece locks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LockEvent {
    pub lines_cleared: u32,
    pub score_delta: u32,
    pub leveled_up: bool,
    pub game_over: bool,
}
