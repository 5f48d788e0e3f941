use crate::glyph::GlyphSource;
use crate::layout::{Alignment, Layout};
use crate::rect::Boundary;
use crate::sink::PixelSink;
use crate::units::Px;
use tracing::trace;

/// Draw a single glyph with the top-left of its character cell at `(pen_x, pen_y)`,
/// returning the glyph's advance so the caller can move the pen.
///
/// Glyph bitmaps carry no padding. The top row of a bitmap is the top row of ink, and
/// the first column is the first column of ink, so each bitmap has to be placed within
/// the cell from the glyph's metrics:
///
/// * vertically, it is pushed down by the face's bounding-box height above the
///   baseline and back up by the glyph's own bearing, which puts every glyph of the face
///   on a common baseline;
/// * horizontally, the ink is centred within the glyph's advance.
///
/// Only non-zero coverage is written, as a grey of that intensity. Nothing is blended:
/// covered pixels overwrite what was there and uncovered pixels are left alone.
pub fn draw_glyph<G, S>(source: &G, sink: &mut S, codepoint: char, pen_x: Px, pen_y: Px) -> Px
where
    G: GlyphSource + ?Sized,
    S: PixelSink + ?Sized,
{
    let glyph = source.glyph(codepoint);
    let metrics = glyph.metrics;

    let y_off = source.bbox_y_max() - metrics.bearing_y;
    let x_off = (metrics.advance - metrics.width) / 2;
    let left = pen_x.saturating_add(x_off);
    let top = pen_y.saturating_add(y_off);

    for (i, j, p) in glyph.coverage().cells() {
        if p != 0 {
            let x = left.saturating_add(Px(j as i32));
            let y = top.saturating_add(Px(i as i32));
            sink.set_pixel(x.0, y.0, p);
        }
    }

    metrics.advance
}

/// Draw a run of codepoints starting at `(pen_x, pen_y)`, returning where the pen ends
/// up
pub fn draw_codepoints<G, S>(
    source: &G,
    sink: &mut S,
    codepoints: &[char],
    pen_x: Px,
    pen_y: Px,
) -> Px
where
    G: GlyphSource + ?Sized,
    S: PixelSink + ?Sized,
{
    codepoints.iter().fold(pen_x, |x, &c| {
        x.saturating_add(draw_glyph(source, &mut *sink, c, x, pen_y))
    })
}

/// Draw every line of a layout: each line starts where `alignment` puts it, and each
/// word is followed by the layout's space advance
pub fn draw_layout<G, S>(
    source: &G,
    sink: &mut S,
    layout: &Layout<'_>,
    boundary: &Boundary,
    alignment: Alignment,
) where
    G: GlyphSource + ?Sized,
    S: PixelSink + ?Sized,
{
    for line in layout.lines.iter() {
        let mut x = alignment.offset_x(line, boundary, layout.space_width);
        trace!(y = %line.y, %x, words = line.words.len(), "drawing line");
        for word in line.words {
            x = draw_codepoints(source, &mut *sink, word.codepoints(), x, line.y);
            x = x.saturating_add(layout.space_width);
        }
    }
}
