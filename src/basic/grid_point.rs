use super::dir::Dir;
use std::fmt::{Debug, Formatter};
use std::{fmt, ops::Add};

/// A cell on the square board, `x` grows to the right and `z` grows downward
/// (towards the viewer when the board is seen from above)
#[derive(Eq, PartialEq, Copy, Clone, Hash, Add, Sub, Neg)]
pub struct GridPoint {
    pub x: isize,
    pub z: isize,
}

impl Debug for GridPoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}>", self.x, self.z)
    }
}

impl Add<Dir> for GridPoint {
    type Output = Self;

    fn add(self, rhs: Dir) -> Self::Output {
        self + rhs.unit()
    }
}

impl GridPoint {
    pub const ZERO: Self = Self { x: 0, z: 0 };

    /// Whether the point lies in `[0, size) x [0, size)`
    pub fn is_inside(self, size: isize) -> bool {
        (0..size).contains(&self.x) && (0..size).contains(&self.z)
    }

    pub fn translate(self, dir: Dir, dist: isize) -> Self {
        let GridPoint { x, z } = dir.unit();
        Self {
            x: self.x + x * dist,
            z: self.z + z * dist,
        }
    }
}
