use std::collections::BTreeMap;
use std::path::PathBuf;

use cubie_engine::{CubeEngine, PatternPreset, Pose};
use cubie_notation::{Move, format_moves, invert_moves, parse_moves};
use cubie_prefs::{DEFAULT_PREFS, Preferences};
use eyre::{Context, Result, bail};
use itertools::Itertools;
use serde::Serialize;
use strum::VariantArray;

/// Cube move engine command-line interface
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) struct Args {
    #[command(subcommand)]
    pub subcommand: Subcommand,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Subcommand {
    /// Parse an algorithm and print its moves as JSON.
    Parse {
        /// Algorithm, such as `R U R' U'`.
        algorithm: Vec<String>,
        /// Print the inverse algorithm instead.
        #[arg(long)]
        invert: bool,
    },
    /// Run an algorithm on a solved cube and print every cubie as JSON.
    Run {
        /// Algorithm, such as `R U R' U'`.
        algorithm: Vec<String>,
        /// Preferences file (YAML) layered over the defaults.
        #[arg(long)]
        prefs: Option<PathBuf>,
        /// Sticker pattern to apply before running the algorithm.
        #[arg(long)]
        pattern: Option<PatternPreset>,
        /// Run the inverse algorithm afterwards.
        #[arg(long)]
        invert: bool,
        /// Skip the animation and apply every move at once.
        #[arg(long)]
        instant: bool,
        /// Give up if the animation takes more than this many ticks.
        #[arg(long, default_value_t = 100_000)]
        max_ticks: usize,
    },
    /// Print the names of the built-in sticker patterns.
    Patterns,
    /// Print a built-in sticker pattern as JSON.
    Pattern {
        /// Pattern name, such as `first-two-layers`.
        preset: PatternPreset,
    },
    /// Print the default preferences as JSON.
    Prefs,
}

#[derive(Serialize, Debug)]
struct ParseOutput {
    moves: Vec<String>,
    algorithm: String,
}

#[derive(Serialize, Debug)]
struct RunOutput {
    moves: usize,
    ticks: usize,
    cubies: Vec<CubieOutput>,
}

#[derive(Serialize, Debug)]
struct CubieOutput {
    id: u8,
    identity: String,
    position: [f32; 3],
    /// Quaternion as `[w, x, y, z]`.
    orientation: [f32; 4],
    solved: bool,
    stickers: BTreeMap<String, bool>,
}

pub(crate) fn exec(subcommand: Subcommand) -> Result<()> {
    match subcommand {
        Subcommand::Parse { algorithm, invert } => {
            let mut moves = parse_moves(&algorithm.join(" "))?;
            if invert {
                moves = invert_moves(&moves);
            }
            write_json_output(&ParseOutput {
                moves: moves.iter().map(Move::to_string).collect(),
                algorithm: format_moves(&moves),
            })
        }

        Subcommand::Run {
            algorithm,
            prefs,
            pattern,
            invert,
            instant,
            max_ticks,
        } => {
            let prefs = Preferences::try_load(prefs.as_deref())?;
            let mut engine = CubeEngine::new(&prefs)?;
            if let Some(preset) = pattern {
                log::info!("applying {preset} pattern");
                engine.apply_pattern(&preset.pattern());
            }

            let moves = parse_moves(&algorithm.join(" "))?;
            let move_count = moves.len();
            if invert {
                engine.enqueue(moves.iter().copied().chain(invert_moves(&moves)));
            } else {
                engine.enqueue(moves);
            }

            let mut ticks = 0;
            if instant {
                engine.catch_up();
            } else {
                ticks = run_animation(&mut engine, max_ticks)?;
            }
            log::info!("finished {move_count} moves in {ticks} ticks");

            let cubies = engine
                .cubies()
                .iter()
                .map(|cubie| {
                    let Pose {
                        position,
                        orientation,
                    } = cubie.pose();
                    CubieOutput {
                        id: cubie.id().0,
                        identity: cubie.identity().to_string(),
                        position: position.into(),
                        orientation: [
                            orientation.s,
                            orientation.v.x,
                            orientation.v.y,
                            orientation.v.z,
                        ],
                        solved: cubie.pose().approx_eq(&cubie.initial_pose(), 1e-3),
                        stickers: cubie
                            .identity()
                            .faces()
                            .iter()
                            .map(|&face| {
                                let on = cubie.is_sticker_on(face).unwrap_or(false);
                                (face.to_string(), on)
                            })
                            .collect(),
                    }
                })
                .collect_vec();

            write_json_output(&RunOutput {
                moves: move_count,
                ticks,
                cubies,
            })
        }

        Subcommand::Patterns => {
            for preset in PatternPreset::VARIANTS {
                println!("{preset}");
            }
            Ok(())
        }

        Subcommand::Pattern { preset } => {
            let pattern = preset.pattern();
            let masks: BTreeMap<&str, u32> = pattern.iter().collect();
            write_json_output(&masks)
        }

        Subcommand::Prefs => write_json_output(&*DEFAULT_PREFS),
    }
}

/// Ticks the engine until it is idle and returns the number of ticks that did
/// something. Fails if it is still rotating after `max_ticks` ticks.
fn run_animation(engine: &mut CubeEngine, max_ticks: usize) -> Result<usize> {
    let mut ticks = 0;
    while engine.tick(None) {
        ticks += 1;
        if ticks >= max_ticks && engine.is_rotating() {
            bail!("animation did not finish within {max_ticks} ticks");
        }
    }
    Ok(ticks)
}

fn write_json_output<T: Serialize>(value: &T) -> Result<()> {
    serde_json::to_writer_pretty(std::io::stdout(), value)
        .context("error serializing data and writing to stdout")?;
    println!();
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn engine_running(algorithm: &str) -> CubeEngine {
        let mut engine = CubeEngine::new(&Preferences::default()).unwrap();
        engine.perform_algorithm(algorithm).unwrap();
        engine
    }

    #[test]
    fn test_tick_limit_boundary() {
        let needed = run_animation(&mut engine_running("R"), usize::MAX).unwrap();
        // 4 degrees per tick, snapping within 0.1 radians
        assert_eq!(23, needed);

        // a limit equal to the number of ticks needed is enough
        assert_eq!(needed, run_animation(&mut engine_running("R"), needed).unwrap());

        let mut engine = engine_running("R");
        assert!(run_animation(&mut engine, needed - 1).is_err());
        assert!(engine.is_rotating());
    }

    #[test]
    fn test_tick_limit_spans_queued_moves() {
        let needed = run_animation(&mut engine_running("R U"), usize::MAX).unwrap();
        assert_eq!(46, needed);
        assert_eq!(needed, run_animation(&mut engine_running("R U"), needed).unwrap());
        assert!(run_animation(&mut engine_running("R U"), needed - 1).is_err());

        let mut idle = CubeEngine::new(&Preferences::default()).unwrap();
        assert_eq!(0, run_animation(&mut idle, 0).unwrap());
    }
}
