use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{Read, Write};
use std::path::Path;
use std::str::FromStr;

use image::{Rgb, RgbImage};
use tracing::{debug, info};

use crate::sink::PixelSink;
use crate::{Error, Result};

/// The memory layout of a linear framebuffer, as a Linux framebuffer device reports it.
///
/// Rows are `stride` bytes apart. The stride is the device's line length or, if that is
/// smaller, the width times the bytes per pixel; any bytes in a row past the last pixel
/// are "slop" that doesn't map to pixels.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FrameBufferGeometry {
    /// Visible width in pixels
    pub width: u32,
    /// Visible height in pixels
    pub height: u32,
    /// Bytes per pixel: 3 (24-bit) or 4 (32-bit)
    pub bytes_per_pixel: u32,
    /// Bytes per row as reported by the device; 0 if rows are tightly packed
    pub line_length: u32,
}

impl FrameBufferGeometry {
    /// Describe a tightly packed framebuffer
    pub fn packed(width: u32, height: u32, bytes_per_pixel: u32) -> FrameBufferGeometry {
        FrameBufferGeometry {
            width,
            height,
            bytes_per_pixel,
            line_length: 0,
        }
    }

    pub fn stride(&self) -> usize {
        (self.line_length as usize).max(self.width as usize * self.bytes_per_pixel as usize)
    }

    /// Bytes at the end of each row that do not belong to any pixel
    pub fn slop(&self) -> usize {
        self.stride() - self.width as usize * self.bytes_per_pixel as usize
    }

    /// Total number of bytes backing the visible surface
    pub fn size(&self) -> Result<usize> {
        self.stride()
            .checked_mul(self.height as usize)
            .ok_or_else(|| Error::FrameBufferGeometry(format!("{self} is too large")))
    }

    fn validate(&self) -> Result<()> {
        if !matches!(self.bytes_per_pixel, 3 | 4) {
            return Err(Error::FrameBufferGeometry(format!(
                "only 24 and 32 bits per pixel are supported, got {}",
                self.bytes_per_pixel * 8
            )));
        }
        self.size().map(|_| ())
    }
}

impl fmt::Display for FrameBufferGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{}x{}",
            self.width,
            self.height,
            self.bytes_per_pixel * 8
        )?;
        if self.line_length != 0 {
            write!(f, ":{}", self.line_length)?;
        }
        Ok(())
    }
}

/// Parses `WIDTHxHEIGHTxBITS[:LINE_LENGTH]`, e.g. `1920x1080x32` or `1366x768x32:5504`
impl FromStr for FrameBufferGeometry {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::FrameBufferGeometry(format!("cannot parse `{s}`"));

        let (dims, line_length) = match s.split_once(':') {
            Some((dims, line_length)) => (
                dims,
                line_length
                    .trim()
                    .parse::<u32>()
                    .map_err(|_| invalid())?,
            ),
            None => (s, 0),
        };
        let parts: Vec<u32> = dims
            .split(['x', 'X'])
            .map(|part| part.trim().parse::<u32>())
            .collect::<std::result::Result<_, _>>()
            .map_err(|_| invalid())?;
        let &[width, height, bits] = parts.as_slice() else {
            return Err(invalid());
        };
        if bits % 8 != 0 {
            return Err(invalid());
        }

        let geometry = FrameBufferGeometry {
            width,
            height,
            bytes_per_pixel: bits / 8,
            line_length,
        };
        geometry.validate()?;
        Ok(geometry)
    }
}

/// An in-memory copy of a linear framebuffer, stored B, G, R (then a zero byte at 32
/// bits per pixel) as most Linux framebuffer devices expect.
///
/// Pixels are written to memory only; [FrameBuffer::write_to] pushes them to a device
/// or file.
pub struct FrameBuffer {
    geometry: FrameBufferGeometry,
    data: Vec<u8>,
}

impl FrameBuffer {
    /// Create a black framebuffer
    pub fn new(geometry: FrameBufferGeometry) -> Result<FrameBuffer> {
        geometry.validate()?;
        let size = geometry.size()?;
        let mut data = Vec::new();
        data.try_reserve_exact(size)
            .map_err(|source| Error::Allocation {
                what: "framebuffer",
                source,
            })?;
        data.resize(size, 0);
        debug!(
            %geometry,
            stride = geometry.stride(),
            slop = geometry.slop(),
            "created framebuffer"
        );
        Ok(FrameBuffer { geometry, data })
    }

    /// Read the current contents of a framebuffer device (or a dump of one), so that
    /// text is drawn over whatever is already on screen
    pub fn load<P: AsRef<Path>>(path: P, geometry: FrameBufferGeometry) -> Result<FrameBuffer> {
        let path = path.as_ref();
        let mut fb = FrameBuffer::new(geometry)?;
        File::open(path)?.read_exact(&mut fb.data)?;
        info!(path = %path.display(), %geometry, "loaded framebuffer contents");
        Ok(fb)
    }

    /// Write the framebuffer's bytes to a device or file, from its first byte
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)?;
        file.write_all(&self.data)?;
        file.flush()?;
        info!(path = %path.display(), bytes = self.data.len(), "wrote framebuffer");
        Ok(())
    }

    pub fn geometry(&self) -> FrameBufferGeometry {
        self.geometry
    }

    pub fn width(&self) -> u32 {
        self.geometry.width
    }

    pub fn height(&self) -> u32 {
        self.geometry.height
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Set every byte, pixels and slop alike, to zero
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let x = u32::try_from(x).ok()?;
        let y = u32::try_from(y).ok()?;
        if x >= self.geometry.width || y >= self.geometry.height {
            return None;
        }
        let bpp = self.geometry.bytes_per_pixel as usize;
        Some(y as usize * self.geometry.stride() + x as usize * bpp)
    }

    /// Write an RGB colour to `(x, y)`; off-surface writes are ignored
    pub fn set_rgb(&mut self, x: i32, y: i32, r: u8, g: u8, b: u8) {
        let Some(index) = self.index(x, y) else {
            return;
        };
        let bpp = self.geometry.bytes_per_pixel as usize;
        let pixel = &mut self.data[index..index + bpp];
        pixel[0] = b;
        pixel[1] = g;
        pixel[2] = r;
        if bpp == 4 {
            pixel[3] = 0;
        }
    }

    /// The RGB colour at `(x, y)`, or black if it is off-surface
    pub fn pixel(&self, x: i32, y: i32) -> (u8, u8, u8) {
        match self.index(x, y) {
            Some(index) => (self.data[index + 2], self.data[index + 1], self.data[index]),
            None => (0, 0, 0),
        }
    }

    /// Copy the visible surface into an image, dropping slop and padding bytes
    pub fn to_image(&self) -> RgbImage {
        RgbImage::from_fn(self.geometry.width, self.geometry.height, |x, y| {
            let (r, g, b) = self.pixel(x as i32, y as i32);
            Rgb([r, g, b])
        })
    }
}

impl PixelSink for FrameBuffer {
    fn set_pixel(&mut self, x: i32, y: i32, intensity: u8) {
        self.set_rgb(x, y, intensity, intensity, intensity);
    }
}
