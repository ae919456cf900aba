/// Rendering layer: all terminal I/O lives here.
///
/// The game runs on a fixed logical surface (800×600 by default); each frame
/// is scaled onto whatever terminal size is current. No game logic is
/// performed here.
use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

use crate::compute::is_cleared;
use crate::entities::{Brick, BrickKind, GameState, GameStatus, Rect};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BACKGROUND: Color = Color::Rgb { r: 30, g: 70, b: 30 };
const C_PADDLE: Color = Color::Rgb { r: 200, g: 100, b: 0 };
const C_PADDLE_ACCENT: Color = Color::Black;
const C_BRICK: Color = Color::Rgb { r: 150, g: 150, b: 0 };
const C_BRICK_BONUS: Color = Color::Rgb { r: 255, g: 255, b: 255 };
const C_BRICK_ENEMY: Color = Color::Rgb { r: 30, g: 30, b: 30 };
const C_BRICK_BORDER: Color = Color::Black;
const C_BONUS: Color = Color::Rgb { r: 255, g: 255, b: 255 };
const C_ENEMY: Color = Color::Rgb { r: 30, g: 30, b: 30 };
const C_BALL: Color = Color::White;
const C_HINT: Color = Color::DarkGrey;
const C_HUD: Color = Color::Yellow;

// ── Scaling ───────────────────────────────────────────────────────────────────

/// Maps logical pixels onto terminal cells. The last row is kept for the HUD.
struct Viewport {
    cols: u16,
    rows: u16,
    sx: f32,
    sy: f32,
}

impl Viewport {
    fn new(state: &GameState, cols: u16, rows: u16) -> Self {
        let rows = rows.saturating_sub(1).max(1);
        let cols = cols.max(1);
        Self {
            cols,
            rows,
            sx: cols as f32 / state.config.screen_width,
            sy: rows as f32 / state.config.screen_height,
        }
    }

    fn col(&self, x: f32) -> i32 {
        (x * self.sx).floor() as i32
    }

    fn row(&self, y: f32) -> i32 {
        (y * self.sy).floor() as i32
    }

    /// Cell span covered by `rect`, clipped to the screen. At least one cell
    /// wide and tall so small objects never vanish. `None` when fully off-screen.
    fn cells(&self, rect: &Rect) -> Option<(u16, u16, u16, u16)> {
        let c0 = self.col(rect.left);
        let r0 = self.row(rect.top);
        let c1 = self.col(rect.right()).max(c0 + 1);
        let r1 = self.row(rect.bottom()).max(r0 + 1);

        let c0 = c0.clamp(0, self.cols as i32);
        let c1 = c1.clamp(0, self.cols as i32);
        let r0 = r0.clamp(0, self.rows as i32);
        let r1 = r1.clamp(0, self.rows as i32);
        if c0 >= c1 || r0 >= r1 {
            return None;
        }
        Some((c0 as u16, r0 as u16, (c1 - c0) as u16, (r1 - r0) as u16))
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame at the current terminal size.
pub fn render<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let (cols, rows) = terminal::size()?;
    render_sized(out, state, cols, rows)
}

/// Render one complete frame onto a `cols`×`rows` cell grid.
pub fn render_sized<W: Write>(
    out: &mut W,
    state: &GameState,
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    let view = Viewport::new(state, cols, rows);

    out.queue(style::SetBackgroundColor(C_BACKGROUND))?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    for brick in &state.wall.bricks {
        draw_brick(out, &view, brick)?;
    }
    draw_paddle(out, &view, state)?;
    for bonus in &state.bonuses {
        fill(out, &view, &bonus.body.rect, C_BONUS)?;
    }
    for enemy in &state.enemies {
        fill(out, &view, &enemy.body.rect, C_ENEMY)?;
    }
    draw_ball(out, &view, state)?;
    draw_hud(out, &view, state)?;

    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Primitives ────────────────────────────────────────────────────────────────

fn fill<W: Write>(out: &mut W, view: &Viewport, rect: &Rect, color: Color) -> std::io::Result<()> {
    let Some((col, row, w, h)) = view.cells(rect) else {
        return Ok(());
    };
    out.queue(style::SetBackgroundColor(color))?;
    let blank = " ".repeat(w as usize);
    for r in row..row + h {
        out.queue(cursor::MoveTo(col, r))?;
        out.queue(Print(&blank))?;
    }
    out.queue(style::SetBackgroundColor(C_BACKGROUND))?;
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_brick<W: Write>(out: &mut W, view: &Viewport, brick: &Brick) -> std::io::Result<()> {
    if !brick.present {
        return Ok(());
    }
    let color = match brick.kind {
        BrickKind::Normal => C_BRICK,
        BrickKind::Bonus => C_BRICK_BONUS,
        BrickKind::Enemy => C_BRICK_ENEMY,
    };
    fill(out, view, &brick.rect, color)?;

    // Border: left edge on every row, bottom edge along the last row
    let Some((col, row, w, h)) = view.cells(&brick.rect) else {
        return Ok(());
    };
    out.queue(style::SetBackgroundColor(color))?;
    out.queue(style::SetForegroundColor(C_BRICK_BORDER))?;
    let last = row + h - 1;
    for r in row..last {
        out.queue(cursor::MoveTo(col, r))?;
        out.queue(Print("▏"))?;
    }
    out.queue(cursor::MoveTo(col, last))?;
    out.queue(Print(format!("▏{}", "▁".repeat(w as usize - 1))))?;
    out.queue(style::SetBackgroundColor(C_BACKGROUND))?;
    Ok(())
}

fn draw_paddle<W: Write>(out: &mut W, view: &Viewport, state: &GameState) -> std::io::Result<()> {
    let rect = &state.player.body.rect;
    fill(out, view, rect, C_PADDLE)?;

    let (Ok(col), Ok(row)) = (
        u16::try_from(view.col(rect.center_x())),
        u16::try_from(view.row(rect.center_y())),
    ) else {
        return Ok(());
    };
    if col < view.cols && row < view.rows {
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetBackgroundColor(C_PADDLE))?;
        out.queue(style::SetForegroundColor(C_PADDLE_ACCENT))?;
        out.queue(Print("●"))?;
        out.queue(style::SetBackgroundColor(C_BACKGROUND))?;
    }
    Ok(())
}

fn draw_ball<W: Write>(out: &mut W, view: &Viewport, state: &GameState) -> std::io::Result<()> {
    let Some((col, row, _, _)) = view.cells(&state.ball.body.rect) else {
        return Ok(());
    };
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(C_BALL))?;
    out.queue(Print("●"))?;
    Ok(())
}

// ── HUD (last row) ────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, view: &Viewport, state: &GameState) -> std::io::Result<()> {
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, view.rows))?;
    out.queue(terminal::Clear(terminal::ClearType::CurrentLine))?;

    out.queue(cursor::MoveTo(1, view.rows))?;
    out.queue(style::SetForegroundColor(C_HUD))?;
    let status = if is_cleared(state) {
        "Wall cleared!".to_string()
    } else {
        format!("Bricks:{:>4}", state.wall.live_count())
    };
    out.queue(Print(&status))?;

    let hint = match state.status {
        GameStatus::Ready => "   ← → : Move   SPACE : Launch   Q : Quit",
        GameStatus::Playing => "   ← → : Move   Q : Quit",
    };
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(hint))?;
    Ok(())
}
