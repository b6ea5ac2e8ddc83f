use rand::Rng;

/// Offsets of the Moore neighborhood, as `(row, col)` deltas
const NBHD: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A fixed size field of cells surrounded by a one cell border that is always dead.
///
/// Only the interior (`1..h - 1` by `1..w - 1`) is ever seeded, evaluated or drawn. Every
/// mutating method refuses to touch the border, so it stays `false` for the lifetime of the
/// grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// The cell buffer, row major
    cb: Vec<bool>,

    /// Width, border included
    w: usize,

    /// Height, border included
    h: usize,
}

impl Grid {
    /// An all dead grid. Both sides include the border and must be at least 3.
    pub fn new(h: usize, w: usize) -> Self {
        assert!(h >= 3 && w >= 3, "grid has no interior");

        Self {
            cb: vec![false; w * h],
            w,
            h,
        }
    }

    /// Build a grid from rows of text, one character per interior cell. Any character other
    /// than `'.'` or `' '` is a live cell. The border is added around the pattern.
    ///
    /// # Panics
    ///
    /// If `rows` is empty or every row is empty, since the grid would have no interior.
    pub fn from_pattern(rows: &[&str]) -> Self {
        let ih = rows.len();
        let iw = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);

        let mut grid = Self::new(ih + 2, iw + 2);

        for (i, row) in rows.iter().enumerate() {
            for (j, c) in row.chars().enumerate() {
                grid.set(i + 1, j + 1, !matches!(c, '.' | ' '));
            }
        }

        grid
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn height(&self) -> usize {
        self.h
    }

    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cb[self.xy_from(row, col)]
    }

    /// Set an interior cell
    pub fn set(&mut self, row: usize, col: usize, alive: bool) {
        assert!(self.is_interior(row, col), "({row}, {col}) is on the border");

        let i = self.xy_from(row, col);
        self.cb[i] = alive;
    }

    pub fn is_interior(&self, row: usize, col: usize) -> bool {
        (1..self.h - 1).contains(&row) && (1..self.w - 1).contains(&col)
    }

    /// Every interior coordinate, row major
    pub fn interior(&self) -> impl Iterator<Item = (usize, usize)> + use<> {
        let (h, w) = (self.h, self.w);

        (1..h - 1).flat_map(move |row| (1..w - 1).map(move |col| (row, col)))
    }

    /// Interior cells of one row, left to right
    pub fn interior_row(&self, row: usize) -> &[bool] {
        let start = self.xy_from(row, 1);
        &self.cb[start..start + self.w - 2]
    }

    /// Fill the interior with uniformly random cells
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for (row, col) in self.interior() {
            let i = self.xy_from(row, col);
            self.cb[i] = rng.gen_bool(0.5);
        }
    }

    /// Overwrite this grid with the contents of `other`, which must be the same size.
    pub fn copy_from(&mut self, other: &Grid) {
        assert_eq!((self.h, self.w), (other.h, other.w), "grid size mismatch");

        self.cb.copy_from_slice(&other.cb);
    }

    /// Number of live cells in the Moore neighborhood of an interior cell
    pub fn live_neighbors(&self, row: usize, col: usize) -> u8 {
        debug_assert!(self.is_interior(row, col));

        let mut n = 0;

        for (dr, dc) in NBHD {
            let r = row.wrapping_add_signed(dr);
            let c = col.wrapping_add_signed(dc);

            if self.get(r, c) {
                n += 1;
            }
        }

        n
    }

    pub fn population(&self) -> usize {
        self.cb.iter().filter(|&&c| c).count()
    }

    pub fn is_extinct(&self) -> bool {
        !self.cb.contains(&true)
    }

    /// Compare interiors. The borders are always dead, so this is plain buffer equality.
    pub fn same_interior(&self, other: &Grid) -> bool {
        self.h == other.h && self.w == other.w && self.cb == other.cb
    }

    /// Whether every cell of the outer ring is dead
    pub fn border_is_dead(&self) -> bool {
        (0..self.h)
            .flat_map(|row| (0..self.w).map(move |col| (row, col)))
            .filter(|&(row, col)| !self.is_interior(row, col))
            .all(|(row, col)| !self.get(row, col))
    }

    fn xy_from(&self, row: usize, col: usize) -> usize {
        row * self.w + col
    }
}
