use breakout::compute::init_state;
use breakout::config::Config;
use breakout::display::render_sized;
use breakout::entities::GameState;
use breakout::level::parse_level;

fn state_with_map(map: &str) -> GameState {
    let config = Config::default();
    let wall = parse_level(map, &config).unwrap();
    init_state(config, wall)
}

fn frame(state: &GameState, cols: u16, rows: u16) -> String {
    let mut out = Vec::new();
    render_sized(&mut out, state, cols, rows).unwrap();
    String::from_utf8(out).unwrap()
}

// ── Brick borders ─────────────────────────────────────────────────────────────

#[test]
fn single_row_brick_gets_left_and_bottom_edge() {
    // 80×25 → 24 play rows, a 30 px brick is one cell tall and 40 cells wide
    let out = frame(&state_with_map("..\n"), 80, 25);
    assert!(out.contains(&format!("▏{}", "▁".repeat(39))));
}

#[test]
fn tall_brick_gets_bottom_edge_on_last_row_only() {
    // 80×61 → 60 play rows, each brick spans three cell rows
    let out = frame(&state_with_map(".\n"), 80, 61);
    assert_eq!(out.matches("▁").count(), 79);
    assert_eq!(out.matches("▏").count(), 3);
}

#[test]
fn absent_bricks_draw_nothing() {
    let out = frame(&state_with_map("  \n"), 80, 25);
    assert!(!out.contains('▁'));
    assert!(!out.contains('▏'));
}

// ── HUD ───────────────────────────────────────────────────────────────────────

#[test]
fn hud_counts_live_bricks() {
    let out = frame(&state_with_map(". .\n"), 80, 25);
    assert!(out.contains("Bricks:   2"));
    assert!(out.contains("SPACE : Launch"));
}

#[test]
fn hud_reports_cleared_wall() {
    let mut state = state_with_map(".\n");
    state.wall.bricks[0].destroy();
    let out = frame(&state, 80, 25);
    assert!(out.contains("Wall cleared!"));
}
