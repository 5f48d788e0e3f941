//! Lays words out into wrapped, optionally centred lines within a rectangle, and draws
//! their glyphs onto a pixel surface such as a Linux framebuffer or an image.
//!
//! The pipeline is: decode each word into codepoints, [measure](MeasuredWord) each word
//! against a [GlyphSource], [break](layout::break_lines) the words into lines, then for
//! each line find its starting x from its [Alignment](layout::Alignment) and
//! [draw](draw_glyph) each glyph into a [PixelSink]. [TextBlock] strings all of this
//! together.

mod decode;
pub use decode::*;

mod draw;
pub use draw::*;

mod error;
pub use error::*;

mod font;
pub use font::*;

mod framebuffer;
pub use framebuffer::*;

mod glyph;
pub use glyph::*;

/// Line breaking and alignment
pub mod layout;

mod measure;
pub use measure::*;

mod rect;
pub use rect::*;

mod sink;
pub use sink::*;

mod text_block;
pub use text_block::*;

mod units;
pub use units::*;

/// Re-export the font parser, mostly for inspecting a [Font]'s face directly
pub use owned_ttf_parser;
