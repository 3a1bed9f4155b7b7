use crate::core::constants::LEVEL1_ORIGIN;
use crate::core::zone::Zone;
use geo_types::{Coord, Point, Rect};

/// Map sheet scale level.
///
/// Each level fixes its grid shape, cell size and code suffix scheme:
/// 1:50000 sheets use letter pairs (`A..T` by row, `A..H` by column),
/// 1:5000 sheets use digit pairs, and 1:2500 sheets a single quadrant
/// number 1-4 (NW, NE, SW, SE).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    L50000,
    L5000,
    L2500,
}

impl Level {
    /// Cell size `(width, height)` in projected meters.
    pub fn cell_size(&self) -> (f64, f64) {
        match self {
            Level::L50000 => (40_000.0, 30_000.0),
            Level::L5000 => (4_000.0, 3_000.0),
            Level::L2500 => (2_000.0, 1_500.0),
        }
    }

    /// Grid shape `(rows, columns)`, rows counted north to south.
    pub fn shape(&self) -> (usize, usize) {
        match self {
            Level::L50000 => (20, 8),
            Level::L5000 => (10, 10),
            Level::L2500 => (2, 2),
        }
    }

    /// Scale denominator (50000, 5000 or 2500).
    pub fn denominator(&self) -> u32 {
        match self {
            Level::L50000 => 50000,
            Level::L5000 => 5000,
            Level::L2500 => 2500,
        }
    }

    /// The next finer level, if any.
    pub fn finer(&self) -> Option<Level> {
        match self {
            Level::L50000 => Some(Level::L5000),
            Level::L5000 => Some(Level::L2500),
            Level::L2500 => None,
        }
    }

    /// Code suffix for the cell at `(row, col)` within this level's grid.
    fn suffix(&self, row: usize, col: usize) -> String {
        match self {
            Level::L50000 => {
                let row_letter = (b'A' + row as u8) as char;
                let col_letter = (b'A' + col as u8) as char;
                format!("{}{}", row_letter, col_letter)
            }
            Level::L5000 => format!("{}{}", row, col),
            // Quadrant numbering is NW=1, NE=2, SW=3, SE=4.
            Level::L2500 => (row * 2 + col + 1).to_string(),
        }
    }
}

/// Projected-plane frame of one sheet: its code, level and northwest corner.
///
/// Frames carry no geographic coordinates; they are the closed-form output
/// of the grid arithmetic, turned into full sheets once a transformer is
/// applied.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetFrame {
    pub code: String,
    pub level: Level,
    pub nw_corner: Point<f64>,
}

impl SheetFrame {
    /// Center point: half a cell east and half a cell south of the NW corner.
    pub fn center(&self) -> Point<f64> {
        let (width, height) = self.level.cell_size();
        Point::new(
            self.nw_corner.x() + width / 2.0,
            self.nw_corner.y() - height / 2.0,
        )
    }

    /// The four projected corners in `nw, ne, se, sw` order.
    pub fn corners(&self) -> [Point<f64>; 4] {
        let (width, height) = self.level.cell_size();
        let (x, y) = (self.nw_corner.x(), self.nw_corner.y());
        [
            Point::new(x, y),
            Point::new(x + width, y),
            Point::new(x + width, y - height),
            Point::new(x, y - height),
        ]
    }

    /// Projected bounding rectangle of the sheet.
    pub fn rect(&self) -> Rect<f64> {
        let (width, height) = self.level.cell_size();
        Rect::new(
            Coord {
                x: self.nw_corner.x(),
                y: self.nw_corner.y() - height,
            },
            Coord {
                x: self.nw_corner.x() + width,
                y: self.nw_corner.y(),
            },
        )
    }
}

/// All 160 1:50000 frames of one zone, row-major from the northwest.
pub fn level1_frames(zone: &Zone) -> Vec<SheetFrame> {
    let origin = Point::new(LEVEL1_ORIGIN.0, LEVEL1_ORIGIN.1);
    frames(&format!("{:02}", zone.number), origin, Level::L50000)
}

/// The 100 1:5000 frames subdividing one 1:50000 sheet.
pub fn level2_frames(parent: &SheetFrame) -> Vec<SheetFrame> {
    debug_assert_eq!(parent.level, Level::L50000);
    frames(&parent.code, parent.nw_corner, Level::L5000)
}

/// The 4 1:2500 quadrant frames subdividing one 1:5000 sheet.
pub fn level3_frames(parent: &SheetFrame) -> Vec<SheetFrame> {
    debug_assert_eq!(parent.level, Level::L5000);
    frames(&parent.code, parent.nw_corner, Level::L2500)
}

/// Fixed-size grid of frames below a NW origin, prefix + per-level suffix.
fn frames(prefix: &str, origin: Point<f64>, level: Level) -> Vec<SheetFrame> {
    let (rows, cols) = level.shape();
    let (width, height) = level.cell_size();

    let mut frames = Vec::with_capacity(rows * cols);
    for row in 0..rows {
        for col in 0..cols {
            frames.push(SheetFrame {
                code: format!("{}{}", prefix, level.suffix(row, col)),
                level,
                nw_corner: Point::new(
                    origin.x() + width * col as f64,
                    origin.y() - height * row as f64,
                ),
            });
        }
    }
    frames
}
