/// Local transition function of a cell-driven automaton.
pub trait RuleEngine {
    /// Size of the legal alphabet; states are `0..states()`.
    fn states(&self) -> u8;

    /// Next state of a cell given its current state and neighborhood summary.
    ///
    /// Total over the legal alphabet.
    fn next_state(&self, current: u8, summary: u8) -> u8;
}

/// Rule whose neighborhood summary is the number of Moore neighbors in
/// [`MooreRule::counted_state`].
pub trait MooreRule: RuleEngine {
    fn counted_state(&self) -> u8;
}

/// Outer-totalistic two-state rule given by birth and survival counts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LifeRule {
    birth: u32,
    survival: u32,
}

impl LifeRule {
    pub const DEAD: u8 = 0;
    pub const ALIVE: u8 = 1;

    /// B3/S23
    pub const CONWAY: LifeRule = LifeRule::new(&[3], &[2, 3]);
    /// B5/S45 over the 26-cell neighborhood.
    pub const LIFE_3D: LifeRule = LifeRule::new(&[5], &[4, 5]);

    /// Counts above 31 are ignored.
    pub const fn new(birth: &[u8], survival: &[u8]) -> Self {
        Self {
            birth: Self::mask(birth),
            survival: Self::mask(survival),
        }
    }

    const fn mask(counts: &[u8]) -> u32 {
        let mut mask = 0;
        let mut i = 0;
        while i < counts.len() {
            if counts[i] < 32 {
                mask |= 1 << counts[i];
            }
            i += 1;
        }
        mask
    }

    pub fn is_birth(&self, alive_neighbors: u8) -> bool {
        alive_neighbors < 32 && (self.birth >> alive_neighbors) & 1 == 1
    }

    pub fn is_survival(&self, alive_neighbors: u8) -> bool {
        alive_neighbors < 32 && (self.survival >> alive_neighbors) & 1 == 1
    }
}

impl RuleEngine for LifeRule {
    fn states(&self) -> u8 {
        2
    }

    fn next_state(&self, current: u8, alive_neighbors: u8) -> u8 {
        let alive = if current == Self::ALIVE {
            self.is_survival(alive_neighbors)
        } else {
            self.is_birth(alive_neighbors)
        };
        alive as u8
    }
}

impl MooreRule for LifeRule {
    fn counted_state(&self) -> u8 {
        Self::ALIVE
    }
}

/// Four-state signal rule: empty, conductor, electron head, electron tail.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WireWorldRule;

impl WireWorldRule {
    pub const EMPTY: u8 = 0;
    pub const CONDUCTOR: u8 = 1;
    pub const HEAD: u8 = 2;
    pub const TAIL: u8 = 3;
}

impl RuleEngine for WireWorldRule {
    fn states(&self) -> u8 {
        4
    }

    fn next_state(&self, current: u8, heads: u8) -> u8 {
        match current {
            Self::CONDUCTOR if heads == 1 || heads == 2 => Self::HEAD,
            Self::CONDUCTOR => Self::CONDUCTOR,
            Self::HEAD => Self::TAIL,
            Self::TAIL => Self::CONDUCTOR,
            _ => Self::EMPTY,
        }
    }
}

impl MooreRule for WireWorldRule {
    fn counted_state(&self) -> u8 {
        Self::HEAD
    }
}

/// Wolfram elementary rule; the summary is the 3-bit `(left, center, right)`
/// pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ElementaryRule {
    number: u8,
    table: [u8; 8],
}

impl ElementaryRule {
    pub const RULE_110: ElementaryRule = ElementaryRule::new(110);

    pub const fn new(number: u8) -> Self {
        let mut table = [0; 8];
        let mut p = 0;
        while p < 8 {
            table[p] = (number >> p) & 1;
            p += 1;
        }
        Self { number, table }
    }

    pub fn number(&self) -> u8 {
        self.number
    }
}

impl RuleEngine for ElementaryRule {
    fn states(&self) -> u8 {
        2
    }

    fn next_state(&self, _center: u8, pattern: u8) -> u8 {
        self.table[(pattern & 7) as usize]
    }
}
