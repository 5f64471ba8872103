use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use glam::{Vec2, Vec3};

use strider::{Arena, ButtonTracker, Buttons, PhysicsWorld, PlayerConfig, Session};

#[derive(Parser)]
#[command(name = "strider-demo")]
#[command(about = "Headless first-person locomotion demo")]
struct Args {
    #[arg(long, default_value_t = 600, help = "Number of simulation ticks to run")]
    ticks: u32,

    #[arg(long, default_value_t = 60, help = "Fixed tick rate in Hz")]
    tick_rate: u32,

    #[arg(long, help = "TOML file overriding the default player config")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = load_config(&args)?;

    let mut world = PhysicsWorld::new();
    Arena::testing_ground().apply(&mut world);

    let mut session = Session::new(config, world, Vec3::new(0.0, 1.1, 0.0), args.tick_rate)?;
    let mut tracker = ButtonTracker::new();
    let dt = 1.0 / args.tick_rate as f32;

    for tick in 0..args.ticks {
        let t = tick as f32 * dt;
        let (look, movement, buttons) = scripted_input(t);
        let input = tracker.frame(look, movement, buttons);
        session.tick(&input);

        if tick % args.tick_rate == 0 {
            report(t, &session);
        }
    }

    let pos = session.position();
    log::info!(
        "finished at ({:+.2}, {:+.2}, {:+.2}) after {} ticks",
        pos.x,
        pos.y,
        pos.z,
        args.ticks
    );
    Ok(())
}

fn load_config(args: &Args) -> anyhow::Result<PlayerConfig> {
    let Some(path) = &args.config else {
        return Ok(PlayerConfig::default());
    };
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let config = toml::from_str(&text).context("parsing player config")?;
    Ok(config)
}

fn report(t: f32, session: &Session) {
    let pos = session.position();
    log::info!(
        "t={:>5.1}s pos=({:+.2}, {:+.2}, {:+.2}) stance={:?} speed={:.2}",
        t,
        pos.x,
        pos.y,
        pos.z,
        session.state().stance,
        session.state().movement_speed,
    );
}

/// Walk, run, jump, crouch-walk, then stand back up and look around.
fn scripted_input(t: f32) -> (Vec2, Vec2, Buttons) {
    let forward = Vec2::new(0.0, 1.0);
    match t {
        t if t < 2.0 => (Vec2::ZERO, forward, Buttons::empty()),
        t if t < 4.0 => (Vec2::ZERO, forward, Buttons::RUN),
        t if t < 4.1 => (Vec2::ZERO, Vec2::ZERO, Buttons::JUMP),
        t if t < 6.0 => (Vec2::ZERO, Vec2::ZERO, Buttons::empty()),
        t if t < 8.0 => (Vec2::ZERO, forward, Buttons::CROUCH),
        _ => (Vec2::new(0.4, 0.1), forward, Buttons::empty()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_releases_crouch_at_the_end() {
        let (_, _, early) = scripted_input(7.0);
        let (_, _, late) = scripted_input(9.0);
        assert!(early.contains(Buttons::CROUCH));
        assert!(!late.contains(Buttons::CROUCH));
    }
}
