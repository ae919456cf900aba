/// Level-map loading.
///
/// A map is plain text, one row of bricks per line:
///
/// ```text
/// ' '  no brick
/// '.'  normal brick
/// '+'  bonus brick
/// '-'  enemy brick
/// ```
///
/// Each row spans the full screen width, so bricks in shorter rows are wider.
use std::fmt;
use std::path::Path;

use anyhow::Context;

use crate::config::Config;
use crate::entities::{Brick, BrickKind, Rect, Wall};

#[derive(Debug, Clone, PartialEq)]
pub enum LevelError {
    UnknownTile { line: usize, column: usize, tile: char },
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelError::UnknownTile { line, column, tile } => {
                write!(f, "unknown tile {tile:?} at line {line}, column {column}")
            }
        }
    }
}

impl std::error::Error for LevelError {}

/// `(present, kind)` for one map character.
fn tile(c: char) -> Option<(bool, BrickKind)> {
    match c {
        ' ' => Some((false, BrickKind::Normal)),
        '.' => Some((true, BrickKind::Normal)),
        '+' => Some((true, BrickKind::Bonus)),
        '-' => Some((true, BrickKind::Enemy)),
        _ => None,
    }
}

/// Build a wall from map text. Line and column numbers in errors are 1-based.
pub fn parse_level(text: &str, config: &Config) -> Result<Wall, LevelError> {
    let mut bricks = Vec::new();

    for (row, line) in text.lines().enumerate() {
        let pattern = line.strip_suffix('\r').unwrap_or(line);
        let tiles: Vec<char> = pattern.chars().collect();
        if tiles.is_empty() {
            continue;
        }
        let width = config.screen_width / tiles.len() as f32;
        let top = row as f32 * config.brick_height;

        for (col, &c) in tiles.iter().enumerate() {
            let (present, kind) = tile(c).ok_or(LevelError::UnknownTile {
                line: row + 1,
                column: col + 1,
                tile: c,
            })?;
            bricks.push(Brick {
                rect: Rect::new(col as f32 * width, top, width, config.brick_height),
                present,
                kind,
            });
        }
    }

    Ok(Wall { bricks })
}

/// Read and parse a map file. Any failure here is fatal to startup.
pub fn load_level(path: &Path, config: &Config) -> anyhow::Result<Wall> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read level map {}", path.display()))?;
    let wall = parse_level(&text, config)
        .with_context(|| format!("invalid level map {}", path.display()))?;
    log::info!(
        "Loaded {}: {} rows, {} bricks",
        path.display(),
        text.lines().count(),
        wall.live_count()
    );
    Ok(wall)
}
