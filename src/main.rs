//! Shiba Run entry point
//!
//! Headless exhibition mode: three autopilots of increasing skill play the
//! runner on a call-recording surface. Real hosts embed [`shiba_run::Game`]
//! with their own surface, asset loader, and input source.
//!
//! Usage: `shiba-run [seed] [tuning.json]`

use anyhow::{Context, Result};

use shiba_run::assets::AssetLoader;
use shiba_run::render::headless::HeadlessSurface;
use shiba_run::sim::{Autopilot, GameEvent};
use shiba_run::{Game, Tuning};

/// The exhibition needs no real bitmaps; every sprite "decodes" to a unit
/// handle so the sprite path is exercised end to end.
struct UnitAssets;

impl AssetLoader for UnitAssets {
    type Bitmap = ();
    type Error = std::convert::Infallible;

    fn load(&mut self, _path: &str) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Frames per exhibition session before a surviving pilot is cut off
const SESSION_FRAME_CAP: u32 = 20_000;

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = match args.next() {
        Some(raw) => raw
            .parse::<u64>()
            .with_context(|| format!("invalid seed '{raw}'"))?,
        None => 0xC0FF_EE11,
    };
    let tuning = match args.next() {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("reading tuning file {path}"))?;
            Tuning::from_json(&text).context("loading tuning overrides")?
        }
        None => Tuning::default(),
    };
    tuning.validate().context("validating tuning")?;

    let mut game = Game::new(seed, tuning);
    game.assets.load_all(&mut UnitAssets);
    let mut surface = HeadlessSurface::default();

    // Leads are in steps of travel before the obstacle arrives; short leads
    // jump too late to clear the taller kinds.
    for lead in [2.0, 5.0, 8.0] {
        let pilot = Autopilot::with_lead(lead);
        let mut crashed = false;

        for _ in 0..SESSION_FRAME_CAP {
            if pilot.decide(&game.state).activate {
                game.push_activate();
            }
            for event in game.frame(&mut surface) {
                match event {
                    GameEvent::ScoreUpdate(score) => log::debug!("score {score}"),
                    GameEvent::GameOver { final_score, .. } => {
                        println!("pilot (lead {lead}) crashed at score {final_score}");
                        crashed = true;
                    }
                }
            }
            if crashed {
                break;
            }
        }

        if !crashed {
            println!(
                "pilot (lead {lead}) survived {SESSION_FRAME_CAP} frames at score {}",
                game.state.score
            );
        }
    }

    println!("\nleaderboard:");
    for (rank, entry) in game.scores.entries.iter().enumerate() {
        println!(
            "  {}. {} steps (speed {:.1})",
            rank + 1,
            entry.score,
            entry.top_speed
        );
    }
    println!("high score: {}", game.state.high_score);

    Ok(())
}
