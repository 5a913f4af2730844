use crate::error::EngineError;
use crate::grid::TileCoord;

/// View rotation in quarter turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    /// Identity
    #[default]
    Deg0,
    /// One quarter turn
    Deg90,
    /// Half turn
    Deg180,
    /// Three quarter turns
    Deg270,
}

impl Rotation {
    /// All four rotations in ascending order.
    pub const ALL: [Rotation; 4] = [
        Rotation::Deg0,
        Rotation::Deg90,
        Rotation::Deg180,
        Rotation::Deg270,
    ];

    #[inline]
    fn quarter_turns(self) -> i32 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 1,
            Rotation::Deg180 => 2,
            Rotation::Deg270 => 3,
        }
    }

    #[inline]
    fn from_turns_wrapping(turns: i32) -> Self {
        Rotation::ALL[turns.rem_euclid(4) as usize]
    }

    /// Rotate by `steps` quarter turns; negative steps turn the other way.
    pub fn add(self, steps: i32) -> Self {
        Self::from_turns_wrapping(self.quarter_turns() + steps.rem_euclid(4))
    }

    /// The rotation that undoes this one.
    pub fn inverse(self) -> Self {
        match self {
            Rotation::Deg0 => Rotation::Deg0,
            Rotation::Deg90 => Rotation::Deg270,
            Rotation::Deg180 => Rotation::Deg180,
            Rotation::Deg270 => Rotation::Deg90,
        }
    }

    /// Angle in degrees: 0, 90, 180 or 270.
    pub fn degrees(self) -> i32 {
        self.quarter_turns() * 90
    }

    /// Accepts exactly 0, 90, 180 or 270.
    pub fn from_degrees(degrees: i32) -> Result<Self, EngineError> {
        match degrees {
            0 => Ok(Rotation::Deg0),
            90 => Ok(Rotation::Deg90),
            180 => Ok(Rotation::Deg180),
            270 => Ok(Rotation::Deg270),
            other => Err(EngineError::InvalidRotation(other)),
        }
    }
}

impl TryFrom<i32> for Rotation {
    type Error = EngineError;

    /// Quarter-turn count in `0..4`.
    fn try_from(turns: i32) -> Result<Self, Self::Error> {
        if (0..4).contains(&turns) {
            Ok(Self::from_turns_wrapping(turns))
        } else {
            Err(EngineError::InvalidRotation(turns))
        }
    }
}

/// Rotate `c` inside the square `[0, max_size]²`.
pub fn rotate(c: TileCoord, rotation: Rotation, max_size: i32) -> TileCoord {
    match rotation {
        Rotation::Deg0 => c,
        Rotation::Deg90 => TileCoord::new(c.y, max_size - c.x),
        Rotation::Deg180 => TileCoord::new(max_size - c.x, max_size - c.y),
        Rotation::Deg270 => TileCoord::new(max_size - c.y, c.x),
    }
}

/// Rotate a movement vector. No translation, so the result is a direction
/// in the rotated frame.
pub fn rotate_direction(delta: TileCoord, rotation: Rotation) -> TileCoord {
    rotate(delta, rotation, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(max: i32) -> impl Iterator<Item = TileCoord> {
        (0..=max).flat_map(move |y| (0..=max).map(move |x| TileCoord::new(x, y)))
    }

    #[test]
    fn inverse_table() {
        assert_eq!(Rotation::Deg0.inverse(), Rotation::Deg0);
        assert_eq!(Rotation::Deg90.inverse(), Rotation::Deg270);
        assert_eq!(Rotation::Deg180.inverse(), Rotation::Deg180);
        assert_eq!(Rotation::Deg270.inverse(), Rotation::Deg90);
    }

    #[test]
    fn add_is_cyclic() {
        assert_eq!(Rotation::Deg270.add(1), Rotation::Deg0);
        assert_eq!(Rotation::Deg0.add(-1), Rotation::Deg270);
        assert_eq!(Rotation::Deg90.add(7), Rotation::Deg0);
        for r in Rotation::ALL {
            assert_eq!(r.add(r.inverse().degrees() / 90), Rotation::Deg0);
        }
    }

    #[test]
    fn add_accepts_extreme_step_counts() {
        assert_eq!(Rotation::Deg90.add(i32::MAX), Rotation::Deg0);
        assert_eq!(Rotation::Deg270.add(i32::MAX), Rotation::Deg180);
        assert_eq!(Rotation::Deg0.add(i32::MIN), Rotation::Deg0);
        assert_eq!(Rotation::Deg180.add(i32::MIN + 1), Rotation::Deg270);
    }

    #[test]
    fn rejects_non_canonical_values() {
        assert!(matches!(Rotation::from_degrees(45), Err(EngineError::InvalidRotation(45))));
        assert!(matches!(Rotation::try_from(4), Err(EngineError::InvalidRotation(4))));
        assert!(matches!(Rotation::try_from(-1), Err(EngineError::InvalidRotation(-1))));
        assert_eq!(Rotation::from_degrees(270).unwrap(), Rotation::Deg270);
        assert_eq!(Rotation::try_from(2).unwrap(), Rotation::Deg180);
    }

    #[test]
    fn rotate_then_inverse_is_identity() {
        let max = 4;
        for r in Rotation::ALL {
            for p in square(max) {
                assert_eq!(rotate(rotate(p, r, max), r.inverse(), max), p, "{:?} {:?}", r, p);
            }
        }
    }

    #[test]
    fn four_quarter_turns_return_home() {
        let max = 3;
        for p in square(max) {
            let mut q = p;
            for _ in 0..4 {
                q = rotate(q, Rotation::Deg90, max);
            }
            assert_eq!(q, p);
        }
    }

    #[test]
    fn rotation_is_a_bijection_on_the_square() {
        let max = 3;
        for r in Rotation::ALL {
            let mut seen: Vec<_> = square(max).map(|p| rotate(p, r, max)).collect();
            seen.sort_by_key(|c| (c.y, c.x));
            seen.dedup();
            assert_eq!(seen.len(), 16);
            assert!(seen.iter().all(|c| (0..=max).contains(&c.x) && (0..=max).contains(&c.y)));
        }
    }

    #[test]
    fn quarter_turn_formula() {
        assert_eq!(rotate(TileCoord::new(1, 0), Rotation::Deg90, 2), TileCoord::new(0, 1));
        assert_eq!(rotate(TileCoord::new(1, 0), Rotation::Deg270, 2), TileCoord::new(2, 1));
        assert_eq!(rotate(TileCoord::new(0, 0), Rotation::Deg180, 2), TileCoord::new(2, 2));
    }

    #[test]
    fn directions_rotate_without_translation() {
        let right = TileCoord::new(1, 0);
        assert_eq!(rotate_direction(right, Rotation::Deg0), right);
        assert_eq!(rotate_direction(right, Rotation::Deg90), TileCoord::new(0, -1));
        assert_eq!(rotate_direction(right, Rotation::Deg180), TileCoord::new(-1, 0));
        assert_eq!(rotate_direction(right, Rotation::Deg270), TileCoord::new(0, 1));
    }
}
