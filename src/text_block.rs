use crate::{
    decode::decode,
    draw::draw_layout,
    glyph::GlyphSource,
    layout::{break_lines, Alignment, Layout},
    measure::MeasuredWord,
    rect::Boundary,
    Error, Px, Result,
};
use tracing::{debug, info};

/// A block of words to be laid out within a boundary. This is the whole of a layout
/// request: where the text goes, how lines are aligned, and the words themselves, in
/// order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextBlock {
    pub boundary: Boundary,
    pub alignment: Alignment,
    pub words: Vec<Vec<char>>,
}

/// Words measured against a particular face, along with the face-wide values that
/// layout needs. Computed once per layout and passed along explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeasuredText {
    pub words: Vec<MeasuredWord>,
    /// The advance of a single space in the face
    pub space_width: Px,
    pub line_spacing: Px,
}

impl MeasuredText {
    /// Break the measured words into lines within `boundary`
    pub fn layout(&self, boundary: &Boundary) -> Result<Layout<'_>> {
        break_lines(boundary, self.space_width, self.line_spacing, &self.words)
    }
}

/// What a call to [TextBlock::render] ended up drawing
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RenderSummary {
    pub lines: usize,
    /// Words that were drawn
    pub placed: usize,
    /// Words that did not fit in the boundary's height
    pub dropped: usize,
}

impl TextBlock {
    pub fn new(boundary: Boundary, alignment: Alignment) -> TextBlock {
        TextBlock {
            boundary,
            alignment,
            words: Vec::new(),
        }
    }

    /// Append a word given as UTF-8 bytes; malformed bytes become U+FFFD
    pub fn push_word(&mut self, word: &[u8]) -> &mut Self {
        self.words.push(decode(word));
        self
    }

    /// Append every whitespace-separated word of `text`
    pub fn push_text(&mut self, text: &str) -> &mut Self {
        self.words
            .extend(text.split_whitespace().map(|word| word.chars().collect()));
        self
    }

    /// Builder-style [TextBlock::push_text]
    pub fn with_text(mut self, text: &str) -> TextBlock {
        self.push_text(text);
        self
    }

    /// Measure every word, and the width of a space, in the given face
    pub fn measure<G: GlyphSource + ?Sized>(&self, source: &G) -> Result<MeasuredText> {
        let mut words: Vec<MeasuredWord> = Vec::new();
        words
            .try_reserve_exact(self.words.len())
            .map_err(|err| Error::Allocation {
                what: "words",
                source: err,
            })?;
        words.extend(
            self.words
                .iter()
                .map(|word| MeasuredWord::new(source, word.clone())),
        );

        let space_width = source.advance(' ');
        let line_spacing = source.line_spacing();
        debug!(%space_width, %line_spacing, words = words.len(), "measured text");

        Ok(MeasuredText {
            words,
            space_width,
            line_spacing,
        })
    }

    /// Draw the block into `sink`. Measurement and line breaking both finish before the
    /// first pixel is written, so an error means nothing was drawn.
    pub fn render<G, S>(&self, source: &G, sink: &mut S) -> Result<RenderSummary>
    where
        G: GlyphSource + ?Sized,
        S: crate::PixelSink + ?Sized,
    {
        let measured = self.measure(source)?;
        let layout = measured.layout(&self.boundary)?;

        draw_layout(source, sink, &layout, &self.boundary, self.alignment);

        let summary = RenderSummary {
            lines: layout.lines.len(),
            placed: layout.placed,
            dropped: layout.dropped,
        };
        info!(
            lines = summary.lines,
            placed = summary.placed,
            dropped = summary.dropped,
            alignment = %self.alignment,
            "rendered text"
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::Glyph;

    /// Every glyph is 10px wide with no ink
    struct Mono;

    impl GlyphSource for Mono {
        fn glyph(&self, _codepoint: char) -> Glyph {
            let mut glyph = Glyph::default();
            glyph.metrics.advance = Px(10);
            glyph
        }

        fn line_spacing(&self) -> Px {
            Px(20)
        }

        fn bbox_y_max(&self) -> Px {
            Px(15)
        }
    }

    #[test]
    fn builds_words() {
        let mut block = TextBlock::new(Boundary::new(0, 0, 100, 100), Alignment::Left);
        block.push_word(b"ab").push_word(&[0xff]).push_text("  c \t d\n");
        assert_eq!(
            block.words,
            vec![vec!['a', 'b'], vec!['\u{FFFD}'], vec!['c'], vec!['d']]
        );
    }

    #[test]
    fn measures_against_the_face() {
        let block = TextBlock::default().with_text("one three");
        let measured = block.measure(&Mono).expect("can measure");
        assert_eq!(measured.space_width, Px(10));
        assert_eq!(measured.line_spacing, Px(20));
        let widths: Vec<Px> = measured.words.iter().map(MeasuredWord::width).collect();
        assert_eq!(widths, vec![Px(30), Px(50)]);
        assert!(measured
            .words
            .iter()
            .all(|word| word.height() == measured.line_spacing));
    }

    #[test]
    fn render_reports_what_fit() {
        // three 40px words, a 100px wide and 30px tall box: only the first line fits
        let block = TextBlock::new(Boundary::new(0, 0, 100, 30), Alignment::Center)
            .with_text("aaa bbb ccc");
        let mut sink = image::GrayImage::new(10, 10);
        let summary = block.render(&Mono, &mut sink).expect("can render");
        assert_eq!(
            summary,
            RenderSummary {
                lines: 1,
                placed: 2,
                dropped: 1,
            }
        );
    }
}
