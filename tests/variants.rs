use torus_automata::{
    Automaton, Cell, ElementaryAutomaton, ElementaryRule, Grid, Heading, LangtonsAnt, Life2D,
    Life3D, Rule110, WireWorld,
};

const SEED: u64 = 42;
const FILL_RATE: f64 = 0.3;

fn grid_with(dims: [usize; 2], alive: &[[usize; 2]]) -> Grid<2> {
    let mut grid = Grid::blank(dims).unwrap();
    for &pos in alive {
        grid.set(pos, 1);
    }
    grid
}

/// Straightforward torus life, used as a reference.
fn naive_life_step(grid: &Grid<2>) -> Grid<2> {
    let [h, w] = grid.dims();
    let mut next = grid.clone();
    for y in 0..h {
        for x in 0..w {
            let mut neibs = 0;
            for dy in [h - 1, 0, 1] {
                for dx in [w - 1, 0, 1] {
                    if (dy, dx) != (0, 0) {
                        neibs += grid.get([(y + dy) % h, (x + dx) % w]);
                    }
                }
            }
            let alive = if grid.get([y, x]) == 1 {
                neibs == 2 || neibs == 3
            } else {
                neibs == 3
            };
            next.set([y, x], alive as u8);
        }
    }
    next
}

#[test]
fn test_consistency_with_naive() {
    let mut life = Life2D::random(37, 53, Some(FILL_RATE), Some(SEED)).unwrap();
    let mut reference = life.grid().clone();
    for _ in 0..64 {
        life.step();
        reference = naive_life_step(&reference);
        assert_eq!(life.grid(), &reference, "generation {}", life.generation());
    }
}

#[test]
fn test_blinker() {
    let horizontal = grid_with([5, 5], &[[2, 1], [2, 2], [2, 3]]);
    let vertical = grid_with([5, 5], &[[1, 2], [2, 2], [3, 2]]);
    let mut life = Life2D::from_grid(horizontal.clone()).unwrap();
    assert_eq!(life.step(), &vertical);
    assert_eq!(life.step(), &horizontal);
    assert_eq!(life.run(10), &horizontal);
}

#[test]
fn test_blinker_across_corner() {
    let horizontal = grid_with([6, 7], &[[0, 6], [0, 0], [0, 1]]);
    let vertical = grid_with([6, 7], &[[5, 0], [0, 0], [1, 0]]);
    let mut life = Life2D::from_grid(horizontal.clone()).unwrap();
    assert_eq!(life.step(), &vertical);
    assert_eq!(life.step(), &horizontal);
}

#[test]
fn test_block_is_still() {
    for origin in [[2, 2], [5, 7]] {
        let [r, c] = origin;
        let (r1, c1) = ((r + 1) % 6, (c + 1) % 8);
        let block = grid_with([6, 8], &[[r, c], [r, c1], [r1, c], [r1, c1]]);
        let mut life = Life2D::from_grid(block.clone()).unwrap();
        for _ in 0..20 {
            assert_eq!(life.step(), &block, "origin {:?}", origin);
        }
    }
}

#[test]
fn test_glider_circles_the_torus() {
    let mut life = Life2D::from_rle(8, 8, b"#N Glider\nx = 3, y = 3\nbob$2bo$3o!").unwrap();
    let start = life.grid().clone();
    assert_eq!(start.population(), 5);
    for generation in 1..32 {
        assert_ne!(life.step(), &start, "generation {}", generation);
        assert_eq!(life.population(), 5);
    }
    assert_eq!(life.step(), &start);
}

/// Conductor loop around a 6x8 rectangle with the corners cut, listed in the
/// direction the electron travels.
fn conductor_loop() -> (Grid<2>, Vec<[usize; 2]>) {
    let mut path = vec![];
    path.extend((2..=7).map(|c| [1, c]));
    path.extend((2..=5).map(|r| [r, 8]));
    path.extend((2..=7).rev().map(|c| [6, c]));
    path.extend((2..=5).rev().map(|r| [r, 1]));
    let mut grid = Grid::blank([8, 10]).unwrap();
    for &pos in &path {
        grid.set(pos, Cell::Conductor as u8);
    }
    grid.set(path[0], Cell::Tail as u8);
    grid.set(path[1], Cell::Head as u8);
    (grid, path)
}

#[test]
fn test_wireworld_signal_cycle() {
    let (start, path) = conductor_loop();
    let len = path.len();
    assert_eq!(len, 20);
    let mut wire = WireWorld::from_grid(start.clone()).unwrap();
    for generation in 0..3 * len {
        let head = (1 + generation) % len;
        let tail = generation % len;
        for (k, &pos) in path.iter().enumerate() {
            let expected = match k {
                k if k == head => Cell::Head,
                k if k == tail => Cell::Tail,
                _ => Cell::Conductor,
            };
            assert_eq!(wire.cell(pos), expected, "generation {}, cell {}", generation, k);
        }
        assert_eq!(wire.grid().count(0), start.count(0));
        if generation > 0 && generation % len == 0 {
            assert_eq!(wire.grid(), &start);
        } else if generation > 0 {
            assert_ne!(wire.grid(), &start);
        }
        wire.step();
    }
}

#[test]
fn test_rule110_first_generation() {
    let mut ca = Rule110::rule110(8, 16).unwrap();
    assert_eq!(ca.current_row(), &[0, 0, 0, 0, 0, 0, 1, 1, 0, 1, 0, 1, 1, 0, 0, 1]);
    ca.step();
    assert_eq!(ca.current_row(), &[0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 0, 1, 1]);
    assert_eq!(ca.history().row(0), &[0, 0, 0, 0, 0, 0, 1, 1, 0, 1, 0, 1, 1, 0, 0, 1]);
}

#[test]
fn test_rule110_reproducible() {
    let mut a = Rule110::rule110(120, 64).unwrap();
    let mut b = Rule110::rule110(120, 64).unwrap();
    assert_eq!(a.generate().cells(), b.generate().cells());

    let generic =
        ElementaryAutomaton::new(ElementaryRule::new(110), 120, 64, &[1, 1, 0, 1, 0, 1, 1, 0, 0, 1])
            .unwrap()
            .generate()
            .clone();
    assert_eq!(a.history(), &generic);
}

fn torus_delta(a: usize, b: usize, extent: usize) -> isize {
    let d = (b + extent - a) % extent;
    if d > extent / 2 {
        d as isize - extent as isize
    } else {
        d as isize
    }
}

#[test]
fn test_langton_highway() {
    const N: usize = 256;
    const PERIOD: u64 = 104;
    let tape = Grid::blank([N, N]).unwrap();
    let mut colony = LangtonsAnt::with_ants(tape, &[([N / 2, N / 2], Heading::North)]).unwrap();
    colony.run(12_000);

    let mut deltas = vec![];
    for _ in 0..4 {
        let before = colony.ants()[0].clone();
        colony.step(PERIOD as usize);
        let after = &colony.ants()[0];
        assert_eq!(before.heading(), after.heading());
        let [r0, c0] = before.position();
        let [r1, c1] = after.position();
        deltas.push([torus_delta(r0, r1, N), torus_delta(c0, c1, N)]);
    }
    assert!(deltas.iter().all(|d| d == &deltas[0]), "deltas={:?}", deltas);
    assert_eq!(deltas[0][0].abs(), 2);
    assert_eq!(deltas[0][1].abs(), 2);
    assert_eq!(colony.generation(), 12_000 + 4 * PERIOD);
}

#[test]
fn test_ant_order_matters() {
    let placements = [([5, 5], Heading::North), ([5, 5], Heading::East)];
    let reversed = [placements[1], placements[0]];
    let tape = Grid::blank([11, 11]).unwrap();
    let mut forward = LangtonsAnt::with_ants(tape.clone(), &placements).unwrap();
    let mut backward = LangtonsAnt::with_ants(tape, &reversed).unwrap();
    forward.tick();
    backward.tick();

    // the first ant flips the shared cell white -> black, the second sees black
    assert_eq!(forward.ants()[0].position(), [5, 6]);
    assert_eq!(forward.ants()[1].position(), [4, 5]);
    assert_eq!(backward.ants()[0].position(), [6, 5]);
    assert_eq!(backward.ants()[1].position(), [5, 4]);
    assert_eq!(forward.tape().get([5, 5]), 0);
    assert_eq!(backward.tape().get([5, 5]), 0);
}

#[test]
fn test_trails_are_private_and_permanent() {
    let tape = Grid::blank([32, 32]).unwrap();
    let placements = [([8, 8], Heading::North), ([24, 24], Heading::South)];
    let mut colony = LangtonsAnt::with_ants(tape, &placements).unwrap();
    let mut visited = vec![0; 2];
    for _ in 0..20 {
        let snapshot = colony.step(25);
        for (count, (trail, _)) in visited.iter_mut().zip(snapshot.trails()) {
            assert!(trail.population() >= *count);
            *count = trail.population();
        }
    }
    let ants = colony.ants();
    assert_ne!(ants[0].trail(), ants[1].trail());
    assert!(ants[0].trail().population() > 0);
}

#[test]
fn test_idempotent_construction() {
    assert_eq!(
        Life2D::random(40, 30, None, Some(SEED)).unwrap().grid(),
        Life2D::random(40, 30, None, Some(SEED)).unwrap().grid()
    );
    assert_ne!(
        Life2D::random(40, 30, None, Some(SEED)).unwrap().grid(),
        Life2D::random(40, 30, None, Some(SEED + 1)).unwrap().grid()
    );
    assert_eq!(
        Life3D::random(10, None, Some(SEED)).unwrap().grid(),
        Life3D::random(10, None, Some(SEED)).unwrap().grid()
    );
    assert_eq!(
        WireWorld::segment(50, 50).unwrap().grid(),
        WireWorld::segment(50, 50).unwrap().grid()
    );
    assert_eq!(
        Rule110::rule110(10, 20).unwrap().history(),
        Rule110::rule110(10, 20).unwrap().history()
    );
}

#[test]
fn test_random_runs_stay_in_alphabet() {
    let mut life = Life3D::random(10, Some(0.2), Some(SEED)).unwrap();
    for _ in 0..5 {
        life.step();
        assert!(life.validate().is_ok());
    }
    let mut wire = WireWorld::from_rle(
        16,
        16,
        b"x = 6, y = 3, rule = WireWorld\n.AAAA.$BC..AA$.AAAA.!",
    )
    .unwrap();
    for _ in 0..30 {
        wire.step();
        assert!(wire.validate().is_ok());
        assert!(wire.grid().cells().iter().all(|&c| c < 4));
    }
}
