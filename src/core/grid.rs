//! Grid Lattice Types
//!
//! Positions, headings, and board bounds. All authoritative coordinates are
//! integer multiples of the cell size, centred on the origin; no fractional
//! position is ever valid state. The protocol exposes these units directly,
//! so any transform for display belongs to the renderer, not here.

use serde::{Deserialize, Serialize};

/// One lattice cell, in authoritative grid units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Cell {
    /// Horizontal coordinate (multiple of the cell size).
    pub x: i32,
    /// Vertical coordinate (multiple of the cell size).
    pub y: i32,
}

impl Cell {
    /// Create a cell from raw coordinates.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Wire representation, `[x, y]`.
    pub const fn to_pair(self) -> [i32; 2] {
        [self.x, self.y]
    }

    /// The neighbouring cell one step away in `heading`.
    pub const fn step(self, heading: Heading, cell_size: i32) -> Cell {
        let (dx, dy) = heading.delta();
        Cell::new(self.x + dx * cell_size, self.y + dy * cell_size)
    }
}

/// Cardinal heading of the snake's head.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Heading {
    /// Positive `y`.
    Up,
    /// Negative `y`.
    Down,
    /// Negative `x`.
    Left,
    /// Positive `x`.
    Right,
}

impl Heading {
    /// Unit delta along the grid axes. `Up` increases `y`, matching the
    /// coordinate convention the protocol exposes.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Heading::Up => (0, 1),
            Heading::Down => (0, -1),
            Heading::Left => (-1, 0),
            Heading::Right => (1, 0),
        }
    }

    /// The exact opposite heading.
    pub const fn reverse(self) -> Heading {
        match self {
            Heading::Up => Heading::Down,
            Heading::Down => Heading::Up,
            Heading::Left => Heading::Right,
            Heading::Right => Heading::Left,
        }
    }

    /// Whether `self` is the direct reverse of `other`.
    pub fn is_reverse_of(self, other: Heading) -> bool {
        self == other.reverse()
    }

    /// Parse a direction token. Unknown tokens yield `None` and are
    /// absorbed upstream; they are never an error.
    pub fn parse(token: &str) -> Option<Heading> {
        match token {
            "up" => Some(Heading::Up),
            "down" => Some(Heading::Down),
            "left" => Some(Heading::Left),
            "right" => Some(Heading::Right),
            _ => None,
        }
    }

    /// Wire token for this heading.
    pub const fn as_str(self) -> &'static str {
        match self {
            Heading::Up => "up",
            Heading::Down => "down",
            Heading::Left => "left",
            Heading::Right => "right",
        }
    }
}

/// Board geometry.
///
/// The playable square spans `-boundary()..=boundary()` on both axes in
/// `cell_size` steps. Defaults follow the canonical 600-unit board with
/// 20-unit cells; tests use smaller boards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Full side length of the board, in grid units.
    pub grid_size: i32,
    /// Edge length of one cell; every coordinate is a multiple of this.
    pub cell_size: i32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            grid_size: 600,
            cell_size: 20,
        }
    }
}

impl GridConfig {
    /// Largest legal coordinate magnitude on either axis.
    pub const fn boundary(&self) -> i32 {
        self.grid_size / 2 - self.cell_size
    }

    /// Whether `cell` lies on the playable board.
    pub const fn contains(&self, cell: Cell) -> bool {
        let b = self.boundary();
        cell.x >= -b && cell.x <= b && cell.y >= -b && cell.y <= b
    }

    /// Whether `cell` sits on the lattice this board defines.
    pub const fn is_aligned(&self, cell: Cell) -> bool {
        cell.x % self.cell_size == 0 && cell.y % self.cell_size == 0
    }

    /// Number of lattice cells per axis.
    pub const fn cells_per_axis(&self) -> i32 {
        2 * (self.boundary() / self.cell_size) + 1
    }

    /// Total number of lattice cells on the board.
    pub const fn cell_count(&self) -> usize {
        (self.cells_per_axis() * self.cells_per_axis()) as usize
    }

    /// Walk every lattice cell, row-major from the bottom-left corner.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let b = self.boundary();
        let step = self.cell_size as usize;
        (-b..=b).step_by(step).flat_map(move |y| {
            (-b..=b)
                .step_by(step)
                .map(move |x| Cell::new(x, y))
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_reverse() {
        assert_eq!(Heading::Up.reverse(), Heading::Down);
        assert_eq!(Heading::Down.reverse(), Heading::Up);
        assert_eq!(Heading::Left.reverse(), Heading::Right);
        assert_eq!(Heading::Right.reverse(), Heading::Left);

        assert!(Heading::Up.is_reverse_of(Heading::Down));
        assert!(!Heading::Up.is_reverse_of(Heading::Left));
        assert!(!Heading::Up.is_reverse_of(Heading::Up));
    }

    #[test]
    fn test_heading_parse_roundtrip() {
        for heading in [Heading::Up, Heading::Down, Heading::Left, Heading::Right] {
            assert_eq!(Heading::parse(heading.as_str()), Some(heading));
        }
        assert_eq!(Heading::parse("north"), None);
        assert_eq!(Heading::parse(""), None);
        assert_eq!(Heading::parse("UP"), None);
    }

    #[test]
    fn test_cell_step() {
        let origin = Cell::new(0, 0);
        assert_eq!(origin.step(Heading::Right, 20), Cell::new(20, 0));
        assert_eq!(origin.step(Heading::Left, 20), Cell::new(-20, 0));
        assert_eq!(origin.step(Heading::Up, 20), Cell::new(0, 20));
        assert_eq!(origin.step(Heading::Down, 20), Cell::new(0, -20));
    }

    #[test]
    fn test_default_board_bounds() {
        let config = GridConfig::default();
        assert_eq!(config.boundary(), 280);
        assert!(config.contains(Cell::new(280, -280)));
        assert!(!config.contains(Cell::new(300, 0)));
        assert!(!config.contains(Cell::new(0, -300)));
    }

    #[test]
    fn test_cell_enumeration() {
        let config = GridConfig {
            grid_size: 120,
            cell_size: 20,
        };
        assert_eq!(config.boundary(), 40);
        assert_eq!(config.cells_per_axis(), 5);
        assert_eq!(config.cell_count(), 25);

        let cells: Vec<Cell> = config.cells().collect();
        assert_eq!(cells.len(), 25);
        assert_eq!(cells[0], Cell::new(-40, -40));
        assert_eq!(cells[24], Cell::new(40, 40));
        assert!(cells.iter().all(|&c| config.contains(c)));
        assert!(cells.iter().all(|&c| config.is_aligned(c)));
    }
}
