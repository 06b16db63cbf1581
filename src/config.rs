use std::sync::{Mutex, OnceLock, PoisonError};

#[derive(Default)]
pub struct Config {
    default_seed: Option<u64>,
}

impl Config {
    pub const LIFE_2D_DENSITY: f64 = 0.15;
    pub const LIFE_2D_SIZE: [usize; 2] = [100, 100];
    pub const LIFE_2D_FRAMES: u64 = 200;

    pub const LIFE_3D_DENSITY: f64 = 0.10;
    pub const LIFE_3D_SIZE: usize = 20;
    pub const LIFE_3D_FRAMES: u64 = 50;

    pub const WIREWORLD_SIZE: [usize; 2] = [50, 50];
    /// Length of the conductor laid across the middle row.
    pub const WIREWORLD_SEGMENT: usize = 10;
    pub const WIREWORLD_FRAMES: u64 = 100;

    pub const RULE110_SIZE: [usize; 2] = [400, 400];
    /// Right-aligned on row 0.
    pub const RULE110_SEED: [u8; 10] = [1, 1, 0, 1, 0, 1, 1, 0, 0, 1];

    pub const ANT_SIZE: [usize; 2] = [200, 200];
    pub const ANT_COUNT: usize = 3;
    pub const ANT_TICKS_PER_FRAME: usize = 50;
    pub const ANT_FRAMES: u64 = 500;
    pub const ANT_SATURATION: f64 = 0.8;
    pub const ANT_VALUE: f64 = 0.8;

    fn get() -> &'static Mutex<Config> {
        static CONFIG: OnceLock<Mutex<Config>> = OnceLock::new();
        CONFIG.get_or_init(|| Mutex::new(Config::default()))
    }

    /// Seed used by random constructors that were given `None`.
    ///
    /// `None` here means the generator is seeded from entropy.
    pub fn default_seed() -> Option<u64> {
        Self::get()
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .default_seed
    }

    pub fn set_default_seed(seed: Option<u64>) {
        Self::get()
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .default_seed = seed;
    }
}
