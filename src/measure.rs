use crate::{decode::decode, glyph::GlyphSource, Px};
use tracing::trace;

/// Calculate the extent of a run of codepoints in the given face: the sum of their
/// advances, and the face's line spacing. Codepoints the face has no glyph for add
/// nothing to the width.
pub fn measure<G: GlyphSource + ?Sized>(source: &G, codepoints: &[char]) -> (Px, Px) {
    let width = codepoints
        .iter()
        .map(|&c| source.advance(c))
        .fold(Px::ZERO, Px::saturating_add);
    (width, source.line_spacing())
}

/// A word together with the room it needs. Words are measured once, before layout, and
/// never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeasuredWord {
    codepoints: Vec<char>,
    width: Px,
    height: Px,
}

impl MeasuredWord {
    /// Measure a word given as codepoints
    pub fn new<G: GlyphSource + ?Sized>(source: &G, codepoints: Vec<char>) -> MeasuredWord {
        let (width, height) = measure(source, &codepoints);
        trace!(word = %codepoints.iter().collect::<String>(), %width, "measured word");
        MeasuredWord {
            codepoints,
            width,
            height,
        }
    }

    /// Decode a UTF-8 word and measure it
    pub fn from_utf8<G: GlyphSource + ?Sized>(source: &G, bytes: &[u8]) -> MeasuredWord {
        MeasuredWord::new(source, decode(bytes))
    }

    /// Build a word with an already-known extent
    pub fn with_extent(codepoints: Vec<char>, width: Px, height: Px) -> MeasuredWord {
        MeasuredWord {
            codepoints,
            width,
            height,
        }
    }

    pub fn codepoints(&self) -> &[char] {
        &self.codepoints
    }

    /// Total advance of the word, not counting any trailing space
    pub fn width(&self) -> Px {
        self.width
    }

    /// The line height this word requires. Every word measured in a face gets the face's
    /// line spacing here; line breaking takes that spacing once, as a face-wide value,
    /// rather than reading it back from each word.
    pub fn height(&self) -> Px {
        self.height
    }
}
