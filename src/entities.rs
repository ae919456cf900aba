/// All game entity types: pure data, minimal logic.
use crate::config::Config;

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Axis-aligned rectangle in logical pixels (origin top-left, y grows down).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, width, height }
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    pub fn center_x(&self) -> f32 {
        self.left + self.width / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.top + self.height / 2.0
    }

    /// Strict overlap. Rectangles that only share an edge do not collide.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left < other.right()
            && other.left < self.right()
            && self.top < other.bottom()
            && other.top < self.bottom()
    }
}

// ── Motion ────────────────────────────────────────────────────────────────────

/// Rectangle plus velocity in pixels/second. Every moving entity owns one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Body {
    pub rect: Rect,
    pub vx: f32,
    pub vy: f32,
}

impl Body {
    pub fn at_rest(rect: Rect) -> Self {
        Self { rect, vx: 0.0, vy: 0.0 }
    }
}

// ── Paddle & ball ─────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub body: Body,
}

impl Player {
    /// Paddle centred on `center_x`, resting on the bottom edge.
    pub fn new(center_x: f32, config: &Config) -> Self {
        let rect = Rect::new(
            center_x - config.paddle_width / 2.0,
            config.screen_height - config.paddle_height,
            config.paddle_width,
            config.paddle_height,
        );
        Self { body: Body::at_rest(rect) }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Ball {
    pub body: Body,
}

impl Ball {
    pub fn new(left: f32, top: f32, config: &Config) -> Self {
        let rect = Rect::new(left, top, config.ball_size, config.ball_size);
        Self { body: Body::at_rest(rect) }
    }

    pub fn move_to(&mut self, left: f32, top: f32) {
        self.body.rect.left = left;
        self.body.rect.top = top;
    }
}

// ── Bricks ────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BrickKind {
    Normal,
    /// Drops a `Bonus` when destroyed.
    Bonus,
    /// Drops an `Enemy` when destroyed.
    Enemy,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Brick {
    pub rect: Rect,
    pub present: bool,
    pub kind: BrickKind,
}

impl Brick {
    /// Knock the brick out. Already-absent bricks stay absent.
    pub fn destroy(&mut self) {
        self.present = false;
    }
}

/// Bricks in level-map order. The collection never grows or shrinks.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Wall {
    pub bricks: Vec<Brick>,
}

impl Wall {
    pub fn live_count(&self) -> usize {
        self.bricks.iter().filter(|b| b.present).count()
    }
}

// ── Falling items ─────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Bonus {
    pub body: Body,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub body: Body,
}

/// Square body centred on (`cx`, `cy`) falling straight down.
pub fn falling_body(cx: f32, cy: f32, config: &Config) -> Body {
    let size = config.faller_size;
    Body {
        rect: Rect::new(cx - size / 2.0, cy - size / 2.0, size, size),
        vx: 0.0,
        vy: config.fall_speed,
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    /// Ball rests on the paddle waiting for launch.
    Ready,
    Playing,
}

/// The entire game state. Cloneable so transitions can return a new copy
/// without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    pub player: Player,
    pub ball: Ball,
    pub wall: Wall,
    pub bonuses: Vec<Bonus>,
    pub enemies: Vec<Enemy>,
    pub status: GameStatus,
    pub frame: u64,
    pub config: Config,
}
