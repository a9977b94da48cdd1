//! Headless simulation runner (default binary).
//!
//! Plays the role of the host collaborator without a screen or keyboard: a
//! seeded script presses keys at random, the game advances by a fixed frame
//! time, and the final board is printed as text or as a JSON snapshot.

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info, LevelFilter};
use log4rs::{
    append::console::{ConsoleAppender, Target},
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
};

use tile_tetris::core::{Game, GameConfig, SimpleRng};
use tile_tetris::types::{Intent, STEP_INTERVAL_MS};

#[derive(Debug, Parser)]
#[command(name = "tile-tetris-sim")]
#[command(about = "Drive the rules engine with a seeded random key script")]
struct Args {
    /// Seed for piece selection and the key script
    #[arg(long, default_value_t = 1)]
    seed: u32,

    /// Maximum number of frames to simulate
    #[arg(long, default_value_t = 20_000)]
    frames: u32,

    /// Elapsed time per frame in milliseconds
    #[arg(long, default_value_t = 16)]
    frame_ms: u32,

    /// Gravity step interval in milliseconds
    #[arg(long, default_value_t = STEP_INTERVAL_MS)]
    step_ms: u32,

    /// Chance (percent) of a key press on any given frame
    #[arg(long, default_value_t = 20)]
    press_chance: u32,

    /// Print the final snapshot as JSON instead of a text board
    #[arg(long, default_value_t = false)]
    json: bool,

    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

const SCRIPT_INTENTS: [Intent; 5] = [
    Intent::MoveLeft,
    Intent::MoveRight,
    Intent::SoftDrop,
    Intent::RotateCw,
    Intent::RotateCcw,
];

fn main() -> Result<()> {
    let args = Args::parse();
    init_log(args.log_level)?;

    let config = GameConfig {
        step_interval_ms: args.step_ms,
        ..GameConfig::default().with_seed(args.seed)
    };
    let mut game = Game::new(config).context("invalid game configuration")?;
    game.start();

    let frames = run(&mut game, &args);
    info!(
        "stopped after {} frame(s): {} piece(s) locked, {} line(s) cleared, game over: {}",
        frames,
        game.pieces_locked(),
        game.lines_cleared(),
        game.is_game_over()
    );

    let snapshot = game.snapshot();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        for row in snapshot.text_rows() {
            println!("|{}|", row);
        }
        println!(
            "pieces: {}  lines: {}  game over: {}",
            snapshot.pieces_locked, snapshot.lines_cleared, snapshot.game_over
        );
    }

    Ok(())
}

/// Run the key script until game over or the frame budget is spent.
/// Returns the number of frames simulated.
fn run(game: &mut Game, args: &Args) -> u32 {
    let mut script = SimpleRng::new(args.seed.wrapping_add(1));

    for frame in 0..args.frames {
        if script.next_range(100) < args.press_chance {
            let intent = SCRIPT_INTENTS[script.next_range(SCRIPT_INTENTS.len() as u32) as usize];
            game.submit_intent(intent);
        }

        let report = game.advance_time(args.frame_ms);
        if let Some(lock) = report.lock {
            debug!(
                "frame {}: locked {} at {:?}, cleared {}",
                frame,
                lock.kind.as_str(),
                lock.cells,
                lock.lines_cleared
            );
        }
        if report.game_over {
            return frame + 1;
        }
    }

    args.frames
}

fn init_log(level: LevelFilter) -> Result<()> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(
            "{d(%H:%M:%S%.3f)} {l} {t} {m}{n}",
        )))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    log4rs::init_config(config)?;
    Ok(())
}
