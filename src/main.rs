#![warn(clippy::all)]

use anyhow::{bail, Context, Result};
use log::info;
use torus_automata::{Automaton, Config, LangtonsAnt, Life2D, Life3D, NiceInt, Rule110, WireWorld};

const USAGE: &str = concat!(
    "usage: torus_automata <life|life3d|wireworld|rule110|ant> ",
    "[frames] [seed] [--ascii]"
);

struct Args {
    variant: String,
    frames: Option<u64>,
    ascii: bool,
}

fn parse_args() -> Result<Args> {
    let mut ascii = false;
    let mut positional = vec![];
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--ascii" => ascii = true,
            "-h" | "--help" => bail!(USAGE),
            _ => positional.push(arg),
        }
    }
    let mut positional = positional.into_iter();
    let variant = positional.next().context(USAGE)?;
    let frames = positional
        .next()
        .map(|s| s.parse::<u64>())
        .transpose()
        .context("frames must be a non-negative integer")?;
    let seed = positional
        .next()
        .map(|s| s.parse::<u64>())
        .transpose()
        .context("seed must be a non-negative integer")?;
    Config::set_default_seed(seed);
    Ok(Args {
        variant,
        frames,
        ascii,
    })
}

/// Advances `sim` once per frame and logs what a renderer would receive.
fn drive<A: Automaton>(name: &str, sim: &mut A, frames: u64) {
    info!("{}: {} frames", name, frames);
    for _ in 0..frames {
        sim.advance();
        info!(
            "{}: generation {}, population {}",
            name,
            NiceInt::from(sim.generation()),
            NiceInt::from_usize(sim.population())
        );
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = parse_args()?;
    let ascii = args.ascii;

    match args.variant.as_str() {
        "life" => {
            let [h, w] = Config::LIFE_2D_SIZE;
            let mut life = Life2D::random(h, w, None, None)?;
            drive("life", &mut life, args.frames.unwrap_or(Config::LIFE_2D_FRAMES));
            if ascii {
                print!("{}", life.grid());
            }
        }
        "life3d" => {
            let mut life = Life3D::random(Config::LIFE_3D_SIZE, None, None)?;
            drive("life3d", &mut life, args.frames.unwrap_or(Config::LIFE_3D_FRAMES));
            info!("life3d: oldest cell {}", life.max_age());
        }
        "wireworld" => {
            let [h, w] = Config::WIREWORLD_SIZE;
            let mut wire = WireWorld::segment(h, w)?;
            drive("wireworld", &mut wire, args.frames.unwrap_or(Config::WIREWORLD_FRAMES));
            if ascii {
                print!("{}", wire.grid());
            }
        }
        "rule110" => {
            let [h, w] = Config::RULE110_SIZE;
            let mut ca = Rule110::rule110(h, w)?;
            drive("rule110", &mut ca, args.frames.unwrap_or(h as u64 - 1));
            if ascii {
                print!("{}", ca.history());
            }
        }
        "ant" => {
            let [h, w] = Config::ANT_SIZE;
            let frames = args.frames.unwrap_or(Config::ANT_FRAMES);
            let mut colony = LangtonsAnt::random(h, w, Config::ANT_COUNT, None)?;
            info!("ant: {} frames", frames);
            for _ in 0..frames {
                let lit = colony
                    .step(Config::ANT_TICKS_PER_FRAME)
                    .combined()
                    .iter()
                    .filter(|c| c.iter().any(|&x| x > 0.))
                    .count();
                info!(
                    "ant: tick {}, lit cells {}",
                    NiceInt::from(colony.generation()),
                    NiceInt::from_usize(lit)
                );
            }
            if ascii {
                print!("{}", colony.tape());
            }
        }
        other => bail!("unknown variant {:?}\n{}", other, USAGE),
    }
    Ok(())
}
