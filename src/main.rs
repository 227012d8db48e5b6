//! Artifact Catcher entry point
//!
//! Parses arguments, builds the cast and runs the director against either the
//! terminal or the headless backend.

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result, bail};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use artifact_catcher::Settings;
use artifact_catcher::consts::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use artifact_catcher::platform::{
    self, HeadlessVideo, KeyboardService, ScriptedKeyboard, VideoService,
};
use artifact_catcher::sim::{Director, populate};

const USAGE: &str = "artifact-catcher [--config <settings.json>] [--seed <n>] [--headless <frames>]";

#[derive(Debug, Default)]
struct Args {
    config: Option<PathBuf>,
    seed: Option<u64>,
    headless_frames: Option<u64>,
    help: bool,
}

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn parse_args(mut iter: impl Iterator<Item = String>) -> Result<Args> {
    let mut args = Args::default();
    while let Some(flag) = iter.next() {
        match flag.as_str() {
            "--config" => {
                args.config = Some(iter.next().context(USAGE)?.into());
            }
            "--seed" => {
                let value = iter.next().context(USAGE)?;
                args.seed = Some(value.parse().with_context(|| format!("Bad seed {value}"))?);
            }
            "--headless" => {
                let value = iter.next().context(USAGE)?;
                args.headless_frames = Some(
                    value
                        .parse()
                        .with_context(|| format!("Bad frame count {value}"))?,
                );
            }
            "-h" | "--help" => args.help = true,
            other => bail!("Unknown argument `{other}`\n\nUsage:\n  {USAGE}"),
        }
    }
    Ok(args)
}

fn run() -> Result<()> {
    let args = parse_args(std::env::args().skip(1))?;
    if args.help {
        println!("Usage:\n  {USAGE}");
        return Ok(());
    }
    let mut settings = Settings::load(args.config.as_deref());
    if args.seed.is_some() {
        settings.seed = args.seed;
    }
    let seed = settings.seed.unwrap_or_else(|| rand::rng().random());
    log::info!("Artifact Catcher starting with seed {}", seed);

    match args.headless_frames {
        Some(frames) => {
            let video = HeadlessVideo::new(DEFAULT_WIDTH, DEFAULT_HEIGHT).with_frame_limit(frames);
            let score = play(&settings, seed, ScriptedKeyboard::default(), video)?;
            println!("Final score after {frames} frames: {score}");
        }
        None => {
            let (keyboard, video) = platform::terminal::session(settings.frame_rate)
                .context("Failed to query terminal size")?;
            let score = play(&settings, seed, keyboard, video)?;
            println!("Final score: {score}");
        }
    }
    Ok(())
}

/// Populate a level sized to the window and run one game session
fn play<K, V>(settings: &Settings, seed: u64, keyboard: K, video: V) -> Result<i32>
where
    K: KeyboardService,
    V: VideoService,
{
    let (width, height) = (video.width(), video.height());
    let mut rng = Pcg32::seed_from_u64(seed);
    let mut cast = populate(settings, width, height, &mut rng);

    let mut director = Director::with_seed(keyboard, video, rng.random())
        .with_respawn_span(settings.respawn_span);
    director.start_game(&mut cast).context("Game aborted")?;
    Ok(director.score())
}
