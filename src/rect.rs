use crate::units::Px;

/// The rectangular region, in surface pixels, that laid out lines may occupy. `x` and
/// `y` are the top-left corner; `y` grows downwards as it does on a framebuffer.
///
/// There is no clipping to the boundary: it only guides where words wrap and when lines
/// stop being produced. A single word wider than the boundary is still drawn in full.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Boundary {
    pub x: Px,
    pub y: Px,
    pub width: Px,
    pub height: Px,
}

impl Boundary {
    /// Create a boundary from its top-left corner and size
    pub fn new<X, Y, W, H>(x: X, y: Y, width: W, height: H) -> Boundary
    where
        X: Into<Px>,
        Y: Into<Px>,
        W: Into<Px>,
        H: Into<Px>,
    {
        Boundary {
            x: x.into(),
            y: y.into(),
            width: width.into(),
            height: height.into(),
        }
    }

    /// The x-coordinate one past the right-most column of the boundary, clamped to the
    /// largest representable coordinate
    pub fn right(&self) -> Px {
        self.x.saturating_add(self.width)
    }

    /// The y-coordinate one past the bottom-most row of the boundary, clamped to the
    /// largest representable coordinate
    pub fn bottom(&self) -> Px {
        self.y.saturating_add(self.height)
    }
}
