/// Tuning values, threaded through construction instead of module globals.
use std::fmt;
use std::ops::Range;

/// Compile-time defaults.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Surface (logical pixels)
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;
    pub const FPS: u32 = 30;

    // Face-detection window for ball collisions
    pub const TOLERANCE: f32 = 10.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 150.0;
    pub const PADDLE_HEIGHT: f32 = 30.0;
    pub const PADDLE_SPEED: f32 = 300.0;
    pub const PADDLE_FRICTION: f32 = 10.0;

    // Bricks
    pub const BRICK_HEIGHT: f32 = 30.0;

    // Bonuses and enemies
    pub const FALLER_SIZE: f32 = 30.0;
    pub const FALL_SPEED: f32 = 100.0;

    // Ball
    pub const BALL_SIZE: f32 = 20.0;
    pub const LAUNCH_VX: Range<i32> = 100..200;
    pub const LAUNCH_VY: Range<i32> = -150..-100;
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    NonPositive(&'static str),
    EmptyRange(&'static str),
    /// An object that cannot fit inside the screen horizontally.
    WiderThanScreen(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonPositive(field) => write!(f, "{field} must be positive"),
            ConfigError::EmptyRange(field) => write!(f, "{field} range is empty"),
            ConfigError::WiderThanScreen(field) => write!(f, "{field} exceeds screen_width"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Game configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub screen_width: f32,
    pub screen_height: f32,
    pub fps: u32,
    pub tolerance: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub paddle_friction: f32,
    pub brick_height: f32,
    pub faller_size: f32,
    pub fall_speed: f32,
    pub ball_size: f32,
    /// Magnitude of the horizontal launch speed; the sign is chosen at random.
    pub launch_vx: Range<i32>,
    /// Vertical launch speed, negative is upward.
    pub launch_vy: Range<i32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: Params::SCREEN_WIDTH,
            screen_height: Params::SCREEN_HEIGHT,
            fps: Params::FPS,
            tolerance: Params::TOLERANCE,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_friction: Params::PADDLE_FRICTION,
            brick_height: Params::BRICK_HEIGHT,
            faller_size: Params::FALLER_SIZE,
            fall_speed: Params::FALL_SPEED,
            ball_size: Params::BALL_SIZE,
            launch_vx: Params::LAUNCH_VX,
            launch_vy: Params::LAUNCH_VY,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds per tick.
    pub fn dt(&self) -> f32 {
        1.0 / self.fps as f32
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("tolerance", self.tolerance),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("brick_height", self.brick_height),
            ("faller_size", self.faller_size),
            ("ball_size", self.ball_size),
        ];
        if let Some((field, _)) = positive.iter().find(|(_, v)| *v <= 0.0) {
            return Err(ConfigError::NonPositive(*field));
        }
        if self.paddle_width > self.screen_width {
            return Err(ConfigError::WiderThanScreen("paddle_width"));
        }
        if self.ball_size > self.screen_width {
            return Err(ConfigError::WiderThanScreen("ball_size"));
        }
        if self.fps == 0 {
            return Err(ConfigError::NonPositive("fps"));
        }
        if self.launch_vx.is_empty() {
            return Err(ConfigError::EmptyRange("launch_vx"));
        }
        if self.launch_vy.is_empty() {
            return Err(ConfigError::EmptyRange("launch_vy"));
        }
        Ok(())
    }
}
