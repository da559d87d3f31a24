use derive_more::{Add, AddAssign, Deref, Display, From, Into, Sub, SubAssign, Sum};
use std::ops::{Div, Mul};

/// A length on the text surface. Surfaces, obstacles and word widths all share
/// this one unit, so it can equally be read as points or pixels.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    Sum,
    Deref,
    Display,
    From,
    Into,
)]
#[display("{_0}pt")]
pub struct Pt(pub f32);

impl Mul<f32> for Pt {
    type Output = Pt;

    fn mul(self, rhs: f32) -> Pt {
        Pt(self.0 * rhs)
    }
}

impl Div<f32> for Pt {
    type Output = Pt;

    fn div(self, rhs: f32) -> Pt {
        Pt(self.0 / rhs)
    }
}

/// Dividing one length by another yields a plain ratio
impl Div<Pt> for Pt {
    type Output = f32;

    fn div(self, rhs: Pt) -> f32 {
        self.0 / rhs.0
    }
}

impl Pt {
    pub const ZERO: Pt = Pt(0.0);

    pub fn max(self, other: Pt) -> Pt {
        Pt(self.0.max(other.0))
    }

    pub fn min(self, other: Pt) -> Pt {
        Pt(self.0.min(other.0))
    }

    pub fn abs(self) -> Pt {
        Pt(self.0.abs())
    }

    /// `true` for strictly positive, non-NaN lengths
    pub fn is_positive(self) -> bool {
        self.0 > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_stays_in_points() {
        let total: Pt = [Pt(1.0), Pt(2.5), Pt(0.5)].into_iter().sum();
        assert_eq!(total, Pt(4.0));
        assert_eq!(Pt(10.0) - Pt(4.0), Pt(6.0));
        assert_eq!(Pt(3.0) * 2.0, Pt(6.0));
        assert_eq!(Pt(12.0) / Pt(4.0), 3.0);
    }

    #[test]
    fn nan_is_not_positive() {
        assert!(!Pt(f32::NAN).is_positive());
        assert!(!Pt(0.0).is_positive());
        assert!(Pt(0.1).is_positive());
    }
}
