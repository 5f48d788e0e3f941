use image::{GrayImage, Luma, Rgb, RgbImage};

/// A surface that glyph coverage is written onto.
///
/// Coordinates are surface pixels with the origin at the top-left. Writes that fall
/// outside the surface must be silently discarded: text is allowed to overflow its
/// boundary, and whatever lands off-surface is simply not drawn.
pub trait PixelSink {
    /// Set the pixel at `(x, y)` to a grey of the given intensity (0 is black, 255 white)
    fn set_pixel(&mut self, x: i32, y: i32, intensity: u8);
}

impl<S: PixelSink + ?Sized> PixelSink for &mut S {
    fn set_pixel(&mut self, x: i32, y: i32, intensity: u8) {
        (**self).set_pixel(x, y, intensity)
    }
}

/// Map signed surface coordinates onto an image of the given size
fn in_bounds(x: i32, y: i32, (width, height): (u32, u32)) -> Option<(u32, u32)> {
    let x = u32::try_from(x).ok()?;
    let y = u32::try_from(y).ok()?;
    (x < width && y < height).then_some((x, y))
}

impl PixelSink for RgbImage {
    fn set_pixel(&mut self, x: i32, y: i32, intensity: u8) {
        if let Some((x, y)) = in_bounds(x, y, self.dimensions()) {
            self.put_pixel(x, y, Rgb([intensity, intensity, intensity]));
        }
    }
}

impl PixelSink for GrayImage {
    fn set_pixel(&mut self, x: i32, y: i32, intensity: u8) {
        if let Some((x, y)) = in_bounds(x, y, self.dimensions()) {
            self.put_pixel(x, y, Luma([intensity]));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_grey_to_all_channels() {
        let mut img = RgbImage::new(4, 4);
        img.set_pixel(0, 0, 200);
        img.set_pixel(3, 3, 7);
        assert_eq!(img.get_pixel(0, 0), &Rgb([200, 200, 200]));
        assert_eq!(img.get_pixel(3, 3), &Rgb([7, 7, 7]));
    }

    #[test]
    fn discards_out_of_bounds() {
        let mut img = GrayImage::new(4, 4);
        img.set_pixel(-1, 0, 255);
        img.set_pixel(0, -1, 255);
        img.set_pixel(4, 0, 255);
        img.set_pixel(0, 4, 255);
        assert!(img.pixels().all(|p| p.0[0] == 0));
    }
}
