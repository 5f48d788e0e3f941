#![allow(dead_code)]

use fbtext::{Glyph, GlyphMetrics, GlyphSource, MeasuredWord, Px};

/// A fixed-metric face: every printable ASCII letter is a solid block `ink` pixels wide
/// and `BEARING` tall inside an `advance` cell, rows padded to a pitch of `ink + 3`.
/// Digits have no glyph at all. Space is blank.
pub struct BlockFace {
    pub advance: Px,
    pub ink: usize,
    pub space: Px,
}

pub const LINE_SPACING: Px = Px(20);
pub const BBOX_Y_MAX: Px = Px(15);
pub const BEARING: Px = Px(10);

impl Default for BlockFace {
    fn default() -> Self {
        BlockFace {
            advance: Px(10),
            ink: 6,
            space: Px(10),
        }
    }
}

impl GlyphSource for BlockFace {
    fn glyph(&self, codepoint: char) -> Glyph {
        if codepoint == ' ' {
            return Glyph {
                metrics: GlyphMetrics {
                    advance: self.space,
                    ..Default::default()
                },
                ..Default::default()
            };
        }
        if !codepoint.is_ascii_alphabetic() {
            return Glyph::default();
        }

        let rows = BEARING.0 as usize;
        let pitch = self.ink + 3;
        let mut buffer = vec![0u8; pitch * rows];
        for i in 0..rows {
            for j in 0..self.ink {
                buffer[i * pitch + j] = 255;
            }
            // padding that must never reach the sink
            for j in self.ink..pitch {
                buffer[i * pitch + j] = 1;
            }
        }

        Glyph {
            metrics: GlyphMetrics {
                advance: self.advance,
                bearing_y: BEARING,
                width: Px(self.ink as i32),
                height: BEARING,
            },
            buffer,
            columns: self.ink,
            rows,
            pitch,
        }
    }

    fn line_spacing(&self) -> Px {
        LINE_SPACING
    }

    fn bbox_y_max(&self) -> Px {
        BBOX_Y_MAX
    }
}

/// Words with the given widths, as if already measured
pub fn words(widths: &[i32]) -> Vec<MeasuredWord> {
    widths
        .iter()
        .enumerate()
        .map(|(i, &w)| {
            let label = char::from(b'a' + (i % 26) as u8);
            MeasuredWord::with_extent(vec![label], Px(w), LINE_SPACING)
        })
        .collect()
}

/// A tiny deterministic generator for sweeping layouts over many inputs
pub struct Lcg(pub u64);

impl Lcg {
    pub fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    pub fn range(&mut self, lo: i32, hi: i32) -> i32 {
        lo + (self.next() % (hi - lo) as u64) as i32
    }
}
