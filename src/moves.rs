use std::fmt;

/// A move of the empty cell: it swaps with the tile `as_offset()` cells away.
///
/// Jumps hop a tile over one or two intervening cells into the gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    LeapLeft,
    JumpLeft,
    SlideLeft,
    SlideRight,
    JumpRight,
    LeapRight,
}

impl Move {
    /// Every move, in successor-generation order (offsets -3, -2, -1, 1, 2, 3).
    pub const ALL: [Move; 6] = [
        Move::LeapLeft,
        Move::JumpLeft,
        Move::SlideLeft,
        Move::SlideRight,
        Move::JumpRight,
        Move::LeapRight,
    ];

    pub fn as_offset(&self) -> isize {
        match self {
            Move::LeapLeft => -3,
            Move::JumpLeft => -2,
            Move::SlideLeft => -1,
            Move::SlideRight => 1,
            Move::JumpRight => 2,
            Move::LeapRight => 3,
        }
    }

    /// Path cost of the move. A leap over two tiles costs 2, not 3.
    pub fn cost(&self) -> u32 {
        match self.as_offset().unsigned_abs() {
            1 | 2 => 1,
            _ => 2,
        }
    }

    /// Index the empty cell lands on, or `None` if it would leave the board.
    pub fn target(&self, empty: usize, len: usize) -> Option<usize> {
        let target = empty as isize + self.as_offset();
        if target >= 0 && target < len as isize {
            Some(target as usize)
        } else {
            None
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Move::LeapLeft => "Leap Left",
            Move::JumpLeft => "Jump Left",
            Move::SlideLeft => "Slide Left",
            Move::SlideRight => "Slide Right",
            Move::JumpRight => "Jump Right",
            Move::LeapRight => "Leap Right",
        };
        write!(f, "{}", s)
    }
}
