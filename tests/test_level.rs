use std::path::Path;

use breakout::config::Config;
use breakout::entities::BrickKind;
use breakout::level::*;

#[test]
fn rows_tile_the_screen_width() {
    let config = Config::default();
    let wall = parse_level(".. \n ..\n", &config).unwrap();
    assert_eq!(wall.bricks.len(), 6);

    let w = 800.0 / 3.0;
    for brick in &wall.bricks {
        assert_eq!(brick.rect.width, w);
        assert_eq!(brick.rect.height, 30.0);
    }

    let present: Vec<bool> = wall.bricks.iter().map(|b| b.present).collect();
    assert_eq!(present, [true, true, false, false, true, true]);

    assert_eq!(wall.bricks[1].rect.left, w);
    assert_eq!(wall.bricks[1].rect.top, 0.0);
    assert_eq!(wall.bricks[3].rect.top, 30.0);
}

#[test]
fn shorter_rows_have_wider_bricks() {
    let config = Config::default();
    let wall = parse_level("....\n..\n", &config).unwrap();
    assert_eq!(wall.bricks[0].rect.width, 200.0);
    assert_eq!(wall.bricks[4].rect.width, 400.0);
    assert_eq!(wall.bricks[5].rect.left, 400.0);
}

#[test]
fn tiles_map_to_kinds() {
    let config = Config::default();
    let wall = parse_level(" .+-", &config).unwrap();
    let kinds: Vec<(bool, BrickKind)> = wall.bricks.iter().map(|b| (b.present, b.kind)).collect();
    assert_eq!(
        kinds,
        [
            (false, BrickKind::Normal),
            (true, BrickKind::Normal),
            (true, BrickKind::Bonus),
            (true, BrickKind::Enemy),
        ]
    );
}

#[test]
fn empty_line_still_takes_a_row() {
    let config = Config::default();
    let wall = parse_level("..\n\n..\n", &config).unwrap();
    assert_eq!(wall.bricks.len(), 4);
    assert_eq!(wall.bricks[2].rect.top, 60.0);
}

#[test]
fn crlf_line_endings_are_accepted() {
    let config = Config::default();
    let wall = parse_level("..\r\n+.\r\n", &config).unwrap();
    assert_eq!(wall.bricks.len(), 4);
    assert_eq!(wall.bricks[0].rect.width, 400.0);
    assert_eq!(wall.bricks[2].kind, BrickKind::Bonus);
}

#[test]
fn unknown_tile_is_rejected() {
    let config = Config::default();
    let err = parse_level("..\n.#.\n", &config).unwrap_err();
    assert_eq!(err, LevelError::UnknownTile { line: 2, column: 2, tile: '#' });
    assert_eq!(err.to_string(), "unknown tile '#' at line 2, column 2");
}

#[test]
fn brick_height_follows_config() {
    let config = Config { brick_height: 20.0, ..Config::default() };
    let wall = parse_level(".\n.\n", &config).unwrap();
    assert_eq!(wall.bricks[1].rect.top, 20.0);
    assert_eq!(wall.bricks[1].rect.height, 20.0);
}

#[test]
fn load_missing_file_fails() {
    let err = load_level(Path::new("no/such/map.lvl"), &Config::default()).unwrap_err();
    assert!(err.to_string().contains("no/such/map.lvl"));
}

#[test]
fn load_reads_file_from_disk() {
    let path = std::env::temp_dir().join(format!("breakout-test-{}.lvl", std::process::id()));
    std::fs::write(&path, ".+\n-.\n").unwrap();
    let wall = load_level(&path, &Config::default()).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(wall.live_count(), 4);
}

#[test]
fn bundled_map_loads() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("maps/01.lvl");
    let wall = load_level(&path, &Config::default()).unwrap();
    assert!(wall.live_count() > 0);
}
