//! Breakout: paddle, ball and a wall of bricks loaded from a level map.
//!
//! * `config`: screen size, tick rate and tuning values
//! * `entities`: pure data (bodies, bricks, wall, game state)
//! * `level`: level-map parsing
//! * `compute`: per-frame game logic
//! * `display`: terminal rendering
//! * `session`: terminal setup and restore
pub mod compute;
pub mod config;
pub mod display;
pub mod entities;
pub mod level;
pub mod session;
