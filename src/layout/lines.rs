use std::ops::Range;

use crate::measure::MeasuredWord;
use crate::rect::Boundary;
use crate::units::Px;
use crate::{Error, Result};
use tracing::{debug, warn};

/// A run of consecutive words laid out on one line.
///
/// Lines borrow the words they hold; the [MeasuredWord]s must outlive the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'w> {
    /// The words on this line, in input order
    pub words: &'w [MeasuredWord],
    /// Index of `words[0]` within the full list of words that was laid out
    pub first_word: usize,
    /// The top of the line's cell; glyphs are offset down from here to their baseline
    pub y: Px,
}

impl Line<'_> {
    /// Indices, within the full list of laid out words, of the words on this line
    pub fn word_indices(&self) -> Range<usize> {
        self.first_word..self.first_word + self.words.len()
    }

    /// The width of the line's ink: every word, and a space between each pair of
    /// words. The trailing space after the last word is not counted.
    pub fn width(&self, space_width: Px) -> Px {
        if self.words.is_empty() {
            return Px::ZERO;
        }
        let gaps = self.words.len() - 1;
        self.words
            .iter()
            .map(MeasuredWord::width)
            .chain(std::iter::repeat_n(space_width, gaps))
            .fold(Px::ZERO, Px::saturating_add)
    }
}

/// The result of breaking words into lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout<'w> {
    pub lines: Vec<Line<'w>>,
    /// How many leading words made it onto a line
    pub placed: usize,
    /// How many trailing words were dropped because the boundary ran out of height
    pub dropped: usize,
    pub space_width: Px,
    pub line_spacing: Px,
}

impl Layout<'_> {
    /// The word partition as plain indices with each line's y-coordinate; handy for
    /// inspecting a layout without drawing it
    pub fn partition(&self) -> Vec<(Vec<usize>, Px)> {
        self.lines
            .iter()
            .map(|line| (line.word_indices().collect(), line.y))
            .collect()
    }

    pub fn is_truncated(&self) -> bool {
        self.dropped > 0
    }
}

/// Breaks measured words into lines within `boundary`, greedily and in a single pass.
///
/// # Wrapping Behavior
///
/// Every word reserves its own width plus a trailing `space_width`. When a word's
/// reservation would carry the pen strictly past the right edge of the boundary, and
/// the current line already holds at least one word, the line is closed and the word
/// starts the next one, `line_spacing` further down. A reservation that ends exactly on
/// the right edge still fits. Words are never split: a word wider than the boundary
/// sits alone on its line and overflows the right edge.
///
/// # Height Overflow
///
/// A line is only started if `y + line_spacing` stays strictly above the bottom of the
/// boundary. Once a line cannot start, it and every remaining word are dropped; this is
/// reported in [Layout::dropped] and is not an error.
///
/// # Errors
///
/// Only [Error::Allocation], if the line buffer cannot grow.
pub fn break_lines<'w>(
    boundary: &Boundary,
    space_width: Px,
    line_spacing: Px,
    words: &'w [MeasuredWord],
) -> Result<Layout<'w>> {
    let fits_vertically = |y: Px| y.saturating_add(line_spacing) < boundary.bottom();

    let mut lines: Vec<Line<'w>> = Vec::new();
    let mut x = boundary.x;
    let mut y = boundary.y;
    // index of the first word on the line being built
    let mut start = 0usize;
    let mut placed = words.len();

    for (i, word) in words.iter().enumerate() {
        if !fits_vertically(y) {
            placed = i;
            break;
        }

        let advance = word.width().saturating_add(space_width);
        debug!(word = i, width = %word.width(), %advance, "placing word");

        if x.saturating_add(advance) > boundary.right() && i > start {
            debug!(word = i, "word too wide for what is left of the line, wrapping");
            push_line(&mut lines, &words[start..i], start, y)?;
            start = i;
            x = boundary.x;
            y = y.saturating_add(line_spacing);

            if !fits_vertically(y) {
                placed = i;
                break;
            }
        }

        x = x.saturating_add(advance);
    }

    if placed > start {
        push_line(&mut lines, &words[start..placed], start, y)?;
    }

    let dropped = words.len() - placed;
    if dropped > 0 {
        warn!(dropped, placed, "text does not fit the boundary height, dropping words");
    }

    Ok(Layout {
        lines,
        placed,
        dropped,
        space_width,
        line_spacing,
    })
}

fn push_line<'w>(
    lines: &mut Vec<Line<'w>>,
    words: &'w [MeasuredWord],
    first_word: usize,
    y: Px,
) -> Result<()> {
    lines.try_reserve(1).map_err(|source| Error::Allocation {
        what: "lines",
        source,
    })?;
    lines.push(Line {
        words,
        first_word,
        y,
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn words(widths: &[i32]) -> Vec<MeasuredWord> {
        widths
            .iter()
            .map(|&w| MeasuredWord::with_extent(vec!['w'], Px(w), Px(20)))
            .collect()
    }

    #[test]
    fn wraps_when_the_next_word_overflows() {
        let words = words(&[40, 40, 40]);
        let layout = break_lines(&Boundary::new(0, 0, 100, 1000), Px(10), Px(20), &words)
            .expect("can layout");
        assert_eq!(
            layout.partition(),
            vec![(vec![0, 1], Px(0)), (vec![2], Px(20))]
        );
        assert_eq!(layout.dropped, 0);
    }

    #[test]
    fn exact_fit_stays_on_the_line() {
        // 45 + 5 + 45 + 5 == 100
        let words = words(&[45, 45, 10]);
        let layout = break_lines(&Boundary::new(0, 0, 100, 1000), Px(5), Px(20), &words)
            .expect("can layout");
        assert_eq!(
            layout.partition(),
            vec![(vec![0, 1], Px(0)), (vec![2], Px(20))]
        );
    }

    #[test]
    fn truncates_on_height() {
        let words = words(&[80, 80, 80]);
        let layout = break_lines(&Boundary::new(0, 0, 100, 30), Px(10), Px(20), &words)
            .expect("can layout");
        assert_eq!(layout.partition(), vec![(vec![0], Px(0))]);
        assert_eq!(layout.placed, 1);
        assert_eq!(layout.dropped, 2);
        assert!(layout.is_truncated());
    }

    #[test]
    fn boundary_shorter_than_a_line_drops_everything() {
        let words = words(&[10]);
        let layout = break_lines(&Boundary::new(0, 0, 100, 20), Px(10), Px(20), &words)
            .expect("can layout");
        assert!(layout.lines.is_empty());
        assert_eq!(layout.dropped, 1);
    }

    #[test]
    fn oversized_word_gets_its_own_line() {
        let words = words(&[200]);
        let layout = break_lines(&Boundary::new(0, 0, 100, 1000), Px(10), Px(20), &words)
            .expect("can layout");
        assert_eq!(layout.partition(), vec![(vec![0], Px(0))]);

        let words = self::words(&[30, 200, 30]);
        let layout = break_lines(&Boundary::new(0, 0, 100, 1000), Px(10), Px(20), &words)
            .expect("can layout");
        assert_eq!(
            layout.partition(),
            vec![(vec![0], Px(0)), (vec![1], Px(20)), (vec![2], Px(40))]
        );
    }

    #[test]
    fn honours_the_boundary_origin() {
        let words = words(&[40, 40, 40]);
        let layout = break_lines(&Boundary::new(5, 7, 100, 1000), Px(10), Px(20), &words)
            .expect("can layout");
        assert_eq!(
            layout.partition(),
            vec![(vec![0, 1], Px(7)), (vec![2], Px(27))]
        );
    }

    #[test]
    fn no_words_no_lines() {
        let layout = break_lines(&Boundary::new(0, 0, 100, 100), Px(10), Px(20), &[])
            .expect("can layout");
        assert!(layout.lines.is_empty());
        assert_eq!(layout.placed, 0);
        assert_eq!(layout.dropped, 0);
    }

    #[test]
    fn line_width_excludes_trailing_space() {
        let words = words(&[40, 30, 20]);
        let line = Line {
            words: &words,
            first_word: 0,
            y: Px(0),
        };
        assert_eq!(line.width(Px(10)), Px(110));
        assert_eq!(line.word_indices(), 0..3);
    }

    #[test]
    fn boundary_reaching_the_coordinate_limit() {
        let words = words(&[40, 40, 40]);

        // the right edge clamps to i32::MAX, so everything fits on one line
        let wide = Boundary::new(5, 0, i32::MAX, 100);
        let layout = break_lines(&wide, Px(10), Px(20), &words).expect("can layout");
        assert_eq!(layout.partition(), vec![(vec![0, 1, 2], Px(0))]);

        // a tall boundary never runs out of height
        let tall = Boundary::new(0, 5, 100, i32::MAX);
        let layout = break_lines(&tall, Px(10), Px(20), &words).expect("can layout");
        assert_eq!(
            layout.partition(),
            vec![(vec![0, 1], Px(5)), (vec![2], Px(25))]
        );
        assert_eq!(layout.dropped, 0);
    }

    #[test]
    fn lines_near_the_bottom_limit_stop_cleanly() {
        let words = words(&[80, 80, 80]);
        let low = Boundary::new(0, i32::MAX - 30, 100, 100);
        let layout = break_lines(&low, Px(10), Px(20), &words).expect("can layout");
        assert_eq!(layout.partition(), vec![(vec![0], Px(i32::MAX - 30))]);
        assert_eq!(layout.dropped, 2);
    }
}
