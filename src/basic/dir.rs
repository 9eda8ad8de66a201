use std::ops::Neg;

use super::grid_point::GridPoint;
use Dir::*;

// defined in clockwise order starting at U
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Dir {
    U = 0,
    R = 1,
    D = 2,
    L = 3,
}

impl From<u8> for Dir {
    fn from(num: u8) -> Self {
        match num % 4 {
            0 => U,
            1 => R,
            2 => D,
            _ => L,
        }
    }
}

impl Neg for Dir {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::from(self as u8 + 2)
    }
}

impl Dir {
    // clockwise order starting from U
    pub fn iter() -> impl Iterator<Item = Self> {
        [U, R, D, L].iter().copied()
    }

    /// The one-cell step taken when moving in this direction,
    /// up is towards negative z
    pub const fn unit(self) -> GridPoint {
        match self {
            U => GridPoint { x: 0, z: -1 },
            D => GridPoint { x: 0, z: 1 },
            L => GridPoint { x: -1, z: 0 },
            R => GridPoint { x: 1, z: 0 },
        }
    }
}

#[test]
fn test_neg() {
    for (dir, opposite) in [(U, D), (D, U), (L, R), (R, L)] {
        assert_eq!(-dir, opposite);
    }
}

#[test]
fn test_units_cancel_out() {
    for dir in Dir::iter() {
        assert_eq!(dir.unit() + (-dir).unit(), GridPoint::ZERO, "{:?}", dir);
    }
}
