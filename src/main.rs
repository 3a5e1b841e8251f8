//! Headless driver: runs the simulation at a fixed 60 Hz with a simple
//! autopilot, then records the finished run on the leaderboard.
//!
//! Usage: turkey-shoot [difficulty] [seed]

use std::time::{Duration, Instant};

use log::{info, warn};

use turkey_shoot::consts::{PLAYER_WIDTH, TICK_RATE};
use turkey_shoot::persistence::FileScoreStore;
use turkey_shoot::sim::GamePhase;
use turkey_shoot::{Difficulty, GameState, TickInput, tick};

const SCORE_FILE: &str = "data/highscores.json";
/// Safety cap so an unattended run always terminates (10 minutes)
const MAX_TICKS: u64 = TICK_RATE * 600;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let difficulty = match args.next() {
        Some(arg) => match Difficulty::from_str(&arg) {
            Some(d) => d,
            None => {
                warn!("unknown difficulty {arg:?}, using medium");
                Difficulty::default()
            }
        },
        None => Difficulty::default(),
    };
    let seed = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| chrono::Local::now().timestamp() as u64);

    info!("starting {} run with seed {seed}", difficulty.as_str());
    let mut state = GameState::new(difficulty, seed);

    let tick_duration = Duration::from_secs(1) / TICK_RATE as u32;
    let mut next_tick = Instant::now();

    while state.phase != GamePhase::GameOver && state.time_ticks < MAX_TICKS {
        let input = autopilot(&state);
        tick(&mut state, &input);

        if state.time_ticks % (TICK_RATE * 10) == 0 {
            info!(
                "tick {} level {} score {} lives {}",
                state.time_ticks,
                state.director.level(),
                state.score,
                state.lives
            );
        }

        next_tick += tick_duration;
        if let Some(wait) = next_tick.checked_duration_since(Instant::now()) {
            std::thread::sleep(wait);
        }
    }

    info!(
        "run over: level {} score {} after {} ticks",
        state.director.level(),
        state.score,
        state.time_ticks
    );

    let store = FileScoreStore::new(SCORE_FILE);
    let mut scores = store.load();
    if scores.qualifies(difficulty, state.score) {
        let date = chrono::Local::now().format("%Y-%m-%d %H:%M").to_string();
        scores.commit(
            difficulty,
            "autopilot",
            state.score,
            state.director.level(),
            date,
        );
        store.save(&scores);
        info!("score {} recorded in {SCORE_FILE}", state.score);
    }
}

/// Chase the deepest active enemy horizontally and hold the trigger
fn autopilot(state: &GameState) -> TickInput {
    let target = state
        .enemies
        .iter()
        .filter(|e| e.active)
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
        .map(|e| e.center().x);

    let mut input = TickInput {
        shoot: true,
        ..TickInput::default()
    };
    if let Some(x) = target {
        let own = state.player.pos.x + PLAYER_WIDTH / 2.0;
        if x < own - 4.0 {
            input.left = true;
        } else if x > own + 4.0 {
            input.right = true;
        }
    }
    input
}
