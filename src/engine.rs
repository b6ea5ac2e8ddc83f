use rand::Rng;
use tracing::debug;

use crate::grid::Grid;
use crate::rules::RuleSet;

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// No live cells are left
    Extinction,

    /// The new generation is identical to the previous one. Oscillators with a period of two or
    /// more are not caught here and run until interrupted.
    Stasis,
}

/// Seed the interior of `grid` randomly. The border is left dead.
pub fn initialize<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) {
    grid.randomize(rng);
}

/// Apply `rules` to every interior cell of `current`, writing into `next`.
///
/// Cells the rules leave untouched are not written at all, so `next` must hold an exact copy
/// of `current` when this is called. Otherwise those cells keep whatever stale value they had.
pub fn compute_next_generation(rules: &RuleSet, current: &Grid, next: &mut Grid) {
    for (row, col) in current.interior() {
        let n = current.live_neighbors(row, col);

        if let Some(alive) = rules.next(current.get(row, col), n) {
            next.set(row, col, alive);
        }
    }
}

/// Check whether going from `current` to `next` ends the game. Extinction wins over stasis.
pub fn termination(current: &Grid, next: &Grid) -> Option<Termination> {
    if next.is_extinct() {
        Some(Termination::Extinction)
    } else if next.same_interior(current) {
        Some(Termination::Stasis)
    } else {
        None
    }
}

pub fn is_terminal(current: &Grid, next: &Grid) -> bool {
    termination(current, next).is_some()
}

/// Owns both generation buffers and flips between them.
///
/// `bufs[cur]` is the current generation, the other slot is scratch space for the next one.
/// Advancing never allocates.
pub struct Engine {
    rules: RuleSet,
    bufs: [Grid; 2],
    cur: usize,

    /// Number of generations advanced past the initial one
    generation: u64,
}

impl Engine {
    /// A new engine with a randomly seeded `h` by `w` grid
    pub fn new<R: Rng + ?Sized>(rules: RuleSet, h: usize, w: usize, rng: &mut R) -> Self {
        let mut grid = Grid::new(h, w);
        initialize(&mut grid, rng);

        Self::from_grid(rules, grid)
    }

    /// A new engine starting from an existing grid
    pub fn from_grid(rules: RuleSet, grid: Grid) -> Self {
        let scratch = Grid::new(grid.height(), grid.width());

        Self {
            rules,
            bufs: [grid, scratch],
            cur: 0,
            generation: 0,
        }
    }

    pub fn current(&self) -> &Grid {
        &self.bufs[self.cur]
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Compute the next generation.
    ///
    /// If it ends the game, the reason is returned and the current generation is left as it
    /// was. Otherwise the buffers swap and the new generation becomes current.
    pub fn step(&mut self) -> Option<Termination> {
        let [a, b] = &mut self.bufs;
        let (current, next) = if self.cur == 0 { (a, b) } else { (b, a) };

        next.copy_from(current);
        compute_next_generation(&self.rules, current, next);

        if let Some(t) = termination(current, next) {
            debug!(generation = self.generation, ?t, "run over");
            return Some(t);
        }

        self.cur ^= 1;
        self.generation += 1;

        debug!(
            generation = self.generation,
            population = self.current().population(),
            "advanced"
        );

        None
    }

    /// The scratch buffer, holding whatever the last step computed into it
    #[cfg(test)]
    fn last_computed(&self) -> &Grid {
        &self.bufs[self.cur ^ 1]
    }
}
