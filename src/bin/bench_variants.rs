use std::time::Instant;
use torus_automata::{Automaton, Config, LangtonsAnt, Life2D, Life3D, Rule110, WireWorld};

const SEED: u64 = 42;

fn time<A: Automaton>(name: &str, mut sim: A, generations: u64) {
    let timer = Instant::now();
    sim.run(generations);
    println!(
        "{:>10}: {} generations in {:?}, population {}",
        name,
        generations,
        timer.elapsed(),
        sim.population()
    );
}

fn main() {
    let timer = Instant::now();
    let life = Life2D::random(512, 512, None, Some(SEED)).unwrap();
    let life3d = Life3D::random(32, None, Some(SEED)).unwrap();
    let wire = WireWorld::segment(256, 256).unwrap();
    let [h, w] = Config::RULE110_SIZE;
    let rule110 = Rule110::rule110(h, w).unwrap();
    let [h, w] = Config::ANT_SIZE;
    let ants = LangtonsAnt::random(h, w, Config::ANT_COUNT, Some(SEED)).unwrap();
    println!("Time on building fields: {:?}", timer.elapsed());

    time("life", life, 100);
    time("life3d", life3d, 20);
    time("wireworld", wire, 100);
    time("rule110", rule110, Config::RULE110_SIZE[0] as u64);
    time("ants", ants, 100_000);
}
