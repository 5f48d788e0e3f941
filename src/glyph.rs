use crate::units::Px;

/// Metrics for a single glyph at a fixed pixel size
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct GlyphMetrics {
    /// Horizontal distance reserved for the glyph, which may exceed its ink width
    pub advance: Px,
    /// Distance from the baseline up to the top row of the glyph's bitmap
    pub bearing_y: Px,
    /// Width of the glyph's ink, in pixels
    pub width: Px,
    /// Height of the glyph's ink, in pixels
    pub height: Px,
}

/// A rendered glyph: its metrics plus a row-major 8-bit coverage buffer
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Glyph {
    pub metrics: GlyphMetrics,
    /// Coverage bytes, `pitch` bytes per row
    pub buffer: Vec<u8>,
    /// Number of visible columns in each row of `buffer`
    pub columns: usize,
    /// Number of rows in `buffer`
    pub rows: usize,
    /// Distance in bytes between the starts of consecutive rows; at least `columns`
    pub pitch: usize,
}

impl Glyph {
    /// Whether this glyph has no ink to draw (spaces, unmapped codepoints)
    pub fn is_blank(&self) -> bool {
        self.columns == 0 || self.rows == 0
    }

    /// A read-only view of the coverage bitmap
    pub fn coverage(&self) -> Coverage<'_> {
        Coverage::new(&self.buffer, self.columns, self.rows, self.pitch)
    }
}

/// A read-only 2D view over a contiguous coverage buffer whose rows may carry padding
/// past the visible width
#[derive(Debug, Copy, Clone)]
pub struct Coverage<'a> {
    buffer: &'a [u8],
    columns: usize,
    rows: usize,
    pitch: usize,
}

impl<'a> Coverage<'a> {
    /// Wrap `buffer`. Rows the buffer is too short to hold are treated as absent so a
    /// malformed glyph can never index past the end of its buffer.
    pub fn new(buffer: &'a [u8], columns: usize, rows: usize, pitch: usize) -> Coverage<'a> {
        let pitch = pitch.max(columns);
        let rows = if columns == 0 {
            0
        } else {
            // the last row only needs `columns` bytes, not a full pitch
            let available = buffer.len().saturating_sub(columns) / pitch.max(1)
                + usize::from(buffer.len() >= columns);
            rows.min(available)
        };
        Coverage {
            buffer,
            columns,
            rows,
            pitch,
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn pitch(&self) -> usize {
        self.pitch
    }

    /// The visible bytes of row `i`, without any trailing pitch padding
    pub fn row(&self, i: usize) -> Option<&'a [u8]> {
        if i >= self.rows {
            return None;
        }
        let start = i * self.pitch;
        self.buffer.get(start..start + self.columns)
    }

    /// The coverage value at row `i`, column `j`
    pub fn get(&self, i: usize, j: usize) -> Option<u8> {
        if j >= self.columns {
            return None;
        }
        self.row(i).map(|row| row[j])
    }

    /// Iterate over every visible cell as `(row, column, coverage)`
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, u8)> + 'a {
        let view = *self;
        (0..view.rows).flat_map(move |i| {
            view.row(i)
                .unwrap_or_default()
                .iter()
                .enumerate()
                .map(move |(j, &p)| (i, j, p))
        })
    }
}

/// Something that can report metrics for, and rasterize, the glyphs of a single font
/// face at a single size.
///
/// Asking for a codepoint the face has no glyph for is not an error: implementations
/// return zero metrics and an empty bitmap, so that character simply takes up no room.
pub trait GlyphSource {
    /// Load metrics and the coverage bitmap for `codepoint`
    fn glyph(&self, codepoint: char) -> Glyph;

    /// The horizontal advance of `codepoint`, without rasterizing it
    fn advance(&self, codepoint: char) -> Px {
        self.glyph(codepoint).metrics.advance
    }

    /// The nominal distance between the tops of vertically adjacent lines
    fn line_spacing(&self) -> Px;

    /// The height above the baseline of a box enclosing every glyph in the face
    fn bbox_y_max(&self) -> Px;
}

impl<G: GlyphSource + ?Sized> GlyphSource for &G {
    fn glyph(&self, codepoint: char) -> Glyph {
        (**self).glyph(codepoint)
    }

    fn advance(&self, codepoint: char) -> Px {
        (**self).advance(codepoint)
    }

    fn line_spacing(&self) -> Px {
        (**self).line_spacing()
    }

    fn bbox_y_max(&self) -> Px {
        (**self).bbox_y_max()
    }
}
