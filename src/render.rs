use crate::grid::Grid;

/// The two characters a frame is drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub alive: char,
    pub dead: char,
}

impl Glyphs {
    pub const fn new(alive: char, dead: char) -> Self {
        Self { alive, dead }
    }

    fn of(&self, alive: bool) -> char {
        if alive { self.alive } else { self.dead }
    }
}

/// Draw the interior of `grid`, one newline terminated line per row. The border is not drawn.
pub fn render(grid: &Grid, glyphs: Glyphs) -> String {
    let mut fb = String::new();
    render_into(grid, glyphs, &mut fb);

    fb
}

/// Like [`render`], but reuses the frame buffer `fb`, which is cleared first.
pub fn render_into(grid: &Grid, glyphs: Glyphs, fb: &mut String) {
    let (ih, iw) = (grid.height() - 2, grid.width() - 2);

    // Glyphs may be multibyte, so reserve for the worst case
    fb.clear();
    fb.reserve(ih * (iw * 4 + 1));

    for row in 1..=ih {
        fb.extend(grid.interior_row(row).iter().map(|&c| glyphs.of(c)));
        fb.push('\n');
    }
}
