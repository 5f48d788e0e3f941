use derive_more::{Add, AddAssign, Display, Div, From, Into, Mul, Sub, SubAssign, Sum};

/// A distance in device pixels. Font metrics are rounded into this unit once, when a
/// [`SizedFont`](crate::SizedFont) is created or a glyph is loaded, so that all layout
/// arithmetic is integral and matches what ends up on the screen.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Add,
    Sub,
    AddAssign,
    SubAssign,
    Mul,
    Div,
    Sum,
    Display,
    From,
    Into,
)]
#[display("{_0}px")]
pub struct Px(pub i32);

impl Px {
    pub const ZERO: Px = Px(0);

    /// Round a fractional pixel distance to the nearest whole pixel
    pub fn round(value: f32) -> Px {
        Px(value.round() as i32)
    }

    /// Round a fractional pixel distance up to the next whole pixel
    pub fn ceil(value: f32) -> Px {
        Px(value.ceil() as i32)
    }

    /// Round a fractional pixel distance down to the previous whole pixel
    pub fn floor(value: f32) -> Px {
        Px(value.floor() as i32)
    }

    /// Add, clamping at the edges of the coordinate space instead of overflowing
    pub fn saturating_add(self, rhs: Px) -> Px {
        Px(self.0.saturating_add(rhs.0))
    }

    /// Subtract, clamping at the edges of the coordinate space instead of overflowing
    pub fn saturating_sub(self, rhs: Px) -> Px {
        Px(self.0.saturating_sub(rhs.0))
    }
}

impl From<Px> for f32 {
    fn from(px: Px) -> f32 {
        px.0 as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_stays_integral() {
        let total: Px = [Px(40), Px(10), Px(40)].into_iter().sum();
        assert_eq!(total, Px(90));
        assert_eq!(Px(101) / 2, Px(50));
        assert_eq!(Px(-7) / 2, Px(-3));
        assert_eq!(Px(3) * 4, Px(12));
    }

    #[test]
    fn rounding() {
        assert_eq!(Px::round(11.5), Px(12));
        assert_eq!(Px::ceil(11.1), Px(12));
        assert_eq!(Px::floor(-0.5), Px(-1));
        assert_eq!(Px(20).to_string(), "20px");
    }

    #[test]
    fn saturates_at_the_coordinate_limits() {
        assert_eq!(Px(5).saturating_add(Px(i32::MAX)), Px(i32::MAX));
        assert_eq!(Px(i32::MIN).saturating_sub(Px(1)), Px(i32::MIN));
        assert_eq!(Px(5).saturating_add(Px(-7)), Px(-2));
    }
}
