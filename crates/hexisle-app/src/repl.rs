//! Line-based command loop over any reader and writer.

use std::io::{BufRead, Write};
use std::path::Path;

use hexisle_scene::{Command, CommandOutcome, Session};
use tracing::{debug, warn};

use crate::AppError;
use crate::game_loop::GameLoop;

/// Run `frames` fixed animation frames on the session.
pub fn simulate(session: &mut Session, game_loop: &mut GameLoop, frames: u32) -> usize {
    let mut wraps = 0;
    game_loop.run_frames(frames, |dt, _| {
        wraps += session.advance(dt).len();
    });
    debug!(frames, wraps, "Simulated animation frames");
    wraps
}

/// Read commands until `quit` or end of input. Bad commands and failed
/// regenerations are reported and the loop continues.
pub fn run_interactive(
    session: &mut Session,
    game_loop: &mut GameLoop,
    input: impl BufRead,
    mut output: impl Write,
    out_dir: &Path,
) -> Result<(), AppError> {
    writeln!(output, "{}", hexisle_scene::HELP)?;
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                writeln!(output, "error: {e}")?;
                continue;
            }
        };
        match session.execute(command) {
            Ok(CommandOutcome::Message(message)) => writeln!(output, "{message}")?,
            Ok(CommandOutcome::Step(frames)) => {
                let wraps = simulate(session, game_loop, frames);
                writeln!(
                    output,
                    "advanced {frames} frames ({:.2}s simulated, {wraps} clouds wrapped)",
                    session.elapsed()
                )?;
            }
            Ok(CommandOutcome::Export) => match session.export(out_dir) {
                Ok(files) => writeln!(output, "exported {}", files.summary.display())?,
                Err(e) => {
                    warn!("Export failed: {e}");
                    writeln!(output, "error: {e}")?;
                }
            },
            Ok(CommandOutcome::Quit) => break,
            Err(e) => writeln!(output, "error: {e}")?,
        }
        output.flush()?;
    }
    Ok(())
}
