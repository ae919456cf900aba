use std::collections::HashMap;
use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rand::rngs::StdRng;
use rand::SeedableRng;

use breakout::compute::{init_state, launch, move_player_left, move_player_right, tick};
use breakout::config::Config;
use breakout::display;
use breakout::entities::GameState;
use breakout::level::load_level;
use breakout::session::TerminalSession;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Level map to play
    #[arg(short, long, default_value = "maps/01.lvl")]
    map: PathBuf,

    /// Seed for the launch angle RNG
    #[arg(short, long)]
    seed: Option<u64>,

    /// Write logs here (filter with RUST_LOG, default info)
    #[arg(short, long)]
    log_file: Option<PathBuf>,
}

// ── Held-key detection ────────────────────────────────────────────────────────

/// Frames a paddle key keeps steering after its last press or auto-repeat.
/// Terminals without release events only tell us the key is still down
/// through repeats, which arrive well inside 4 frames at 30 FPS.
const HOLD_WINDOW: u64 = 4;

/// Returns true if `key` was seen within the last `HOLD_WINDOW` frames.
fn is_held(key_frame: &HashMap<KeyCode, u64>, key: &KeyCode, frame: u64) -> bool {
    key_frame
        .get(key)
        .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
        .unwrap_or(false)
}

// ── Logging ───────────────────────────────────────────────────────────────────

/// Logging goes to a file when asked for; stderr would tear up the alternate
/// screen, so without a file everything is off unless RUST_LOG says otherwise.
fn init_logging(log_file: Option<&Path>) -> anyhow::Result<()> {
    let default_filter = if log_file.is_some() { "info" } else { "off" };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter));
    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("cannot create log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.try_init().context("logger already initialised")?;
    Ok(())
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits.
///
/// Input model: a `key_frame` map records the frame number of the last
/// press/repeat event for every key. Each frame the paddle follows whichever
/// direction key is still "fresh", left first. Space is a one-shot launch.
fn game_loop<W: Write>(
    out: &mut W,
    state: &mut GameState,
    rx: &mpsc::Receiver<Event>,
    rng: &mut StdRng,
) -> std::io::Result<()> {
    let frame_budget = Duration::from_secs_f32(state.config.dt());

    // Maps each held key → the frame it was last seen (press or repeat).
    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        loop {
            let ev = match rx.try_recv() {
                Ok(ev) => ev,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => {
                    log::warn!("Input thread stopped, quitting");
                    return Ok(());
                }
            };
            let Event::Key(KeyEvent { code, kind, modifiers, .. }) = ev else {
                continue;
            };
            match kind {
                KeyEventKind::Press => {
                    key_frame.insert(code, frame);
                    match code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                            log::info!("Quit requested");
                            return Ok(());
                        }
                        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                            log::info!("Interrupted");
                            return Ok(());
                        }
                        KeyCode::Char(' ') => {
                            *state = launch(state, rng);
                        }
                        _ => {}
                    }
                }
                KeyEventKind::Repeat => {
                    key_frame.insert(code, frame);
                }
                KeyEventKind::Release => {
                    key_frame.remove(&code);
                }
            }
        }

        // ── Apply held-key movement ───────────────────────────────────────────
        let left = is_held(&key_frame, &KeyCode::Left, frame)
            || is_held(&key_frame, &KeyCode::Char('a'), frame)
            || is_held(&key_frame, &KeyCode::Char('A'), frame);
        let right = is_held(&key_frame, &KeyCode::Right, frame)
            || is_held(&key_frame, &KeyCode::Char('d'), frame)
            || is_held(&key_frame, &KeyCode::Char('D'), frame);

        if left {
            *state = move_player_left(state);
        } else if right {
            *state = move_player_right(state);
        }

        *state = tick(state);

        display::render(out, state)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_budget {
            thread::sleep(frame_budget - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let arguments = Arguments::parse();
    init_logging(arguments.log_file.as_deref())?;

    let config = Config::default();
    config.validate().context("invalid configuration")?;
    let wall = load_level(&arguments.map, &config)?;
    let mut state = init_state(config, wall);

    let mut rng = match arguments.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let out = BufWriter::new(stdout());
    let mut session = TerminalSession::start(out).context("cannot set up the terminal")?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    log::info!("Game started");
    let result = game_loop(session.out(), &mut state, &rx, &mut rng);
    drop(session);

    log::info!("Game over after {} frames", state.frame);
    result.context("terminal I/O failed")
}
