/// Decoded meaning of a raw cell code.
///
/// `0` is air, a positive code `v` is a solid block of palette type `v - 1`
/// and a negative code `v` is a billboard decoration of type `-v - 1`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Cell {
    #[default]
    Empty,
    Solid(u32),
    Decoration(u32),
}

impl Cell {
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Cell::Empty,
            c if c > 0 => Cell::Solid((c - 1) as u32),
            c => Cell::Decoration((-(c + 1)) as u32),
        }
    }

    pub fn code(&self) -> i32 {
        match *self {
            Cell::Empty => 0,
            Cell::Solid(ty) => ty as i32 + 1,
            Cell::Decoration(ty) => -(ty as i32) - 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Cell::Empty
    }

    /// Solid cells are meshed and collide; decorations do neither.
    pub fn is_solid(&self) -> bool {
        matches!(self, Cell::Solid(_))
    }

    pub fn is_decoration(&self) -> bool {
        matches!(self, Cell::Decoration(_))
    }
}

impl From<i32> for Cell {
    fn from(code: i32) -> Self {
        Cell::from_code(code)
    }
}

impl From<Cell> for i32 {
    fn from(cell: Cell) -> Self {
        cell.code()
    }
}
