/// Pure game-logic functions.
///
/// Every public transition takes an immutable reference to the current
/// `GameState` (and, where needed, an RNG handle) and returns a brand-new
/// `GameState`. The per-entity steps underneath mutate in place and are
/// public so they can be exercised on their own.
use rand::Rng;

use crate::config::Config;
use crate::entities::{
    falling_body, Ball, Body, Bonus, BrickKind, Enemy, GameState, GameStatus, Player, Rect,
    Wall,
};

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the initial game state: paddle centred, ball resting on it.
pub fn init_state(config: Config, wall: Wall) -> GameState {
    let player = Player::new(config.screen_width / 2.0, &config);
    let ball = Ball::new(
        config.screen_width / 2.0 - config.ball_size / 2.0,
        config.screen_height - config.paddle_height - config.ball_size,
        &config,
    );
    let mut state = GameState {
        player,
        ball,
        wall,
        bonuses: Vec::new(),
        enemies: Vec::new(),
        status: GameStatus::Ready,
        frame: 0,
        config,
    };
    pin_ball(&mut state);
    state
}

/// Put the ball on top of the paddle, horizontally centred.
fn pin_ball(state: &mut GameState) {
    let paddle = state.player.body.rect;
    let size = state.ball.body.rect;
    state
        .ball
        .move_to(paddle.center_x() - size.width / 2.0, paddle.top - size.height);
}

// ── Motion ───────────────────────────────────────────────────────────────────

/// Fixed-step Euler: advance by one tick's worth of velocity.
pub fn integrate(body: &mut Body, config: &Config) {
    let fps = config.fps as f32;
    body.rect.left += body.vx / fps;
    body.rect.top += body.vy / fps;
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

pub fn move_player_left(state: &GameState) -> GameState {
    let mut next = state.clone();
    if next.player.body.rect.left > 0.0 {
        next.player.body.vx = -next.config.paddle_speed;
    }
    next
}

pub fn move_player_right(state: &GameState) -> GameState {
    let mut next = state.clone();
    if next.player.body.rect.right() < next.config.screen_width {
        next.player.body.vx = next.config.paddle_speed;
    }
    next
}

/// Release the ball with a random upward velocity. Only the first call in a
/// game has any effect.
pub fn launch(state: &GameState, rng: &mut impl Rng) -> GameState {
    if state.status == GameStatus::Playing {
        return state.clone();
    }
    let mut next = state.clone();
    let config = &next.config;
    let sign = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
    let vx = rng.gen_range(config.launch_vx.clone()) as f32 * sign;
    let vy = rng.gen_range(config.launch_vy.clone()) as f32;

    next.ball.body.vx = vx;
    next.ball.body.vy = vy;
    next.status = GameStatus::Playing;
    log::info!("Ball launched at ({vx}, {vy})");
    next
}

// ── Paddle ───────────────────────────────────────────────────────────────────

/// Move, slow down by a fixed step per tick, then keep inside the screen.
pub fn step_player(player: &mut Player, config: &Config) {
    let body = &mut player.body;
    integrate(body, config);

    let friction = config.paddle_friction;
    if body.vx > 0.0 {
        body.vx = (body.vx - friction).max(0.0);
    } else if body.vx < 0.0 {
        body.vx = (body.vx + friction).min(0.0);
    }

    if body.rect.left < 0.0 {
        body.rect.left = 0.0;
    }
    if body.rect.right() > config.screen_width {
        body.rect.left = config.screen_width - body.rect.width;
    }
}

// ── Ball ─────────────────────────────────────────────────────────────────────

/// What the ball knocked out this tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BrickHit {
    /// Index into `Wall::bricks`.
    pub index: usize,
    pub kind: BrickKind,
    /// False when the ball overlapped the brick outside every face window.
    pub reflected: bool,
}

fn near(a: f32, b: f32, tolerance: f32) -> bool {
    (a - b).abs() < tolerance
}

/// Bounce off the left, right and top screen edges. The bottom is open.
pub fn reflect_off_screen(body: &mut Body, config: &Config) {
    if body.rect.right() >= config.screen_width && body.vx > 0.0 {
        body.vx = -body.vx;
    } else if body.rect.left <= 0.0 && body.vx < 0.0 {
        body.vx = -body.vx;
    }
    if body.rect.top <= 0.0 && body.vy < 0.0 {
        body.vy = -body.vy;
    }
}

/// Paddle faces in priority order: top, left side, right side.
/// Returns whether a velocity component was flipped.
pub fn bounce_off_paddle(body: &mut Body, paddle: &Rect, tolerance: f32) -> bool {
    let ball = body.rect;
    if !ball.overlaps(paddle) {
        return false;
    }
    if near(ball.bottom(), paddle.top, tolerance) && body.vy > 0.0 {
        body.vy = -body.vy;
    } else if near(ball.right(), paddle.left, tolerance) && body.vx > 0.0 {
        body.vx = -body.vx;
    } else if near(ball.left, paddle.right(), tolerance) && body.vx < 0.0 {
        body.vx = -body.vx;
    } else {
        return false;
    }
    true
}

/// Brick faces in priority order: top, bottom, left side, right side.
/// Assumes the caller already established overlap.
fn bounce_off_brick(body: &mut Body, brick: &Rect, tolerance: f32) -> bool {
    let ball = body.rect;
    if near(ball.bottom(), brick.top, tolerance) && body.vy > 0.0 {
        body.vy = -body.vy;
    } else if near(ball.top, brick.bottom(), tolerance) && body.vy < 0.0 {
        body.vy = -body.vy;
    } else if near(ball.right(), brick.left, tolerance) && body.vx > 0.0 {
        body.vx = -body.vx;
    } else if near(ball.left, brick.right(), tolerance) && body.vx < 0.0 {
        body.vx = -body.vx;
    } else {
        return false;
    }
    true
}

/// One tick of ball physics: move, screen edges, paddle, then at most one
/// brick. The first live brick (in map order) that overlaps the ball is
/// destroyed even if no face was close enough to reflect.
pub fn step_ball(
    ball: &mut Ball,
    player: &Player,
    wall: &mut Wall,
    bonuses: &mut Vec<Bonus>,
    enemies: &mut Vec<Enemy>,
    config: &Config,
) -> Option<BrickHit> {
    let body = &mut ball.body;
    integrate(body, config);
    reflect_off_screen(body, config);
    bounce_off_paddle(body, &player.body.rect, config.tolerance);

    let (index, brick) = wall
        .bricks
        .iter_mut()
        .enumerate()
        .find(|(_, b)| b.present && body.rect.overlaps(&b.rect))?;

    let reflected = bounce_off_brick(body, &brick.rect, config.tolerance);
    brick.destroy();

    let (cx, cy) = (brick.rect.center_x(), brick.rect.center_y());
    match brick.kind {
        BrickKind::Normal => {}
        BrickKind::Bonus => bonuses.push(Bonus { body: falling_body(cx, cy, config) }),
        BrickKind::Enemy => enemies.push(Enemy { body: falling_body(cx, cy, config) }),
    }

    let hit = BrickHit { index, kind: brick.kind, reflected };
    log::debug!("Brick hit: {hit:?}");
    Some(hit)
}

// ── Bonuses & enemies ────────────────────────────────────────────────────────

/// Let every falling item drop, then forget the ones below the screen.
pub fn step_fallers(bonuses: &mut Vec<Bonus>, enemies: &mut Vec<Enemy>, config: &Config) {
    for bonus in bonuses.iter_mut() {
        integrate(&mut bonus.body, config);
    }
    for enemy in enemies.iter_mut() {
        integrate(&mut enemy.body, config);
    }

    let before = bonuses.len() + enemies.len();
    bonuses.retain(|b| b.body.rect.top < config.screen_height);
    enemies.retain(|e| e.body.rect.top < config.screen_height);
    let pruned = before - bonuses.len() - enemies.len();
    if pruned > 0 {
        log::debug!("Pruned {pruned} fallers below the screen");
    }
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// Advance the simulation by one frame.
pub fn tick(state: &GameState) -> GameState {
    let mut next = state.clone();
    next.frame += 1;

    step_player(&mut next.player, &next.config);
    if next.status == GameStatus::Ready {
        pin_ball(&mut next);
    }

    let GameState { player, ball, wall, bonuses, enemies, config, .. } = &mut next;
    step_ball(ball, player, wall, bonuses, enemies, config);
    step_fallers(bonuses, enemies, config);

    next
}

/// No live bricks remain.
pub fn is_cleared(state: &GameState) -> bool {
    state.wall.live_count() == 0
}
