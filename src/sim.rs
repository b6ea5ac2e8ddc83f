use std::io::Write;
use std::thread;

use crossterm::queue;
use crossterm::style;
use rand::Rng;
use tracing::info;
use tracing::warn;

use crate::config::Config;
use crate::console::ClearScreen;
use crate::engine::Engine;
use crate::engine::Termination;
use crate::error::Result;
use crate::render;

/// How a finished run went
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub termination: Termination,

    /// Frames that were drawn, the initial generation included
    pub frames: u64,
}

/// Run the game to completion.
///
/// Each generation, the screen is cleared, the current grid is printed followed by a blank
/// line, and the next generation is computed. The loop sleeps for `config.pause` between
/// generations and ends by printing `config.game_over`.
pub fn run<W, C, R>(config: &Config, out: &mut W, console: &mut C, rng: &mut R) -> Result<Outcome>
where
    W: Write,
    C: ClearScreen + ?Sized,
    R: Rng + ?Sized,
{
    config.validate()?;

    info!(
        width = config.width,
        height = config.height,
        rules = ?config.rules,
        "starting"
    );

    let engine = Engine::new(config.rules, config.height, config.width, rng);

    drive(config, engine, out, console)
}

/// The game loop proper, over an already seeded engine
pub fn drive<W, C>(
    config: &Config,
    mut engine: Engine,
    out: &mut W,
    console: &mut C,
) -> Result<Outcome>
where
    W: Write,
    C: ClearScreen + ?Sized,
{
    let mut fb = String::new();
    let mut frames = 0;

    let termination = loop {
        if let Err(e) = console.clear() {
            warn!("failed to clear console: {e}");
            return Err(e.into());
        }

        render::render_into(engine.current(), config.glyphs, &mut fb);
        queue!(out, style::Print(&fb), style::Print("\n"))?;
        out.flush()?;
        frames += 1;

        if let Some(t) = engine.step() {
            break t;
        }

        thread::sleep(config.pause);
    };

    queue!(out, style::Print(config.game_over), style::Print("\n"))?;
    out.flush()?;

    info!(
        generations = engine.generation(),
        ?termination,
        "game over"
    );

    Ok(Outcome {
        termination,
        frames,
    })
}
