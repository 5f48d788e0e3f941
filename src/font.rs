use crate::{
    glyph::{Glyph, GlyphMetrics, GlyphSource},
    Error, Px, Result,
};
use owned_ttf_parser::{AsFaceRef, Face, GlyphId, OutlineBuilder, OwnedFace};
use std::path::Path;
use tracing::{debug, info};

/// Rows of rendered coverage bitmaps are padded out to a multiple of this many bytes
const ROW_ALIGNMENT: usize = 4;

/// A parsed font object. Fonts can be TTF or OTF fonts.
///
/// A [Font] knows nothing about pixels; call [Font::sized] to fix a pixel size and get
/// a [SizedFont], which is what measurement and drawing work with.
pub struct Font {
    pub face: OwnedFace,
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font> {
        let face = OwnedFace::from_vec(bytes, 0)?;

        Ok(Font { face })
    }

    /// Read and parse a font file from disk
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Font> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let font = Font::load(bytes)?;
        info!(path = %path.display(), name = ?font.name(), "loaded font");
        Ok(font)
    }

    /// Obtain the full name of the font, if it has one
    pub fn name(&self) -> Option<String> {
        self.face
            .as_face_ref()
            .names()
            .into_iter()
            .find(|name| name.name_id == owned_ttf_parser::name_id::FULL_NAME && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    /// Obtain the family name of the font, if it has one
    pub fn family(&self) -> Option<String> {
        self.face
            .as_face_ref()
            .names()
            .into_iter()
            .find(|name| name.name_id == owned_ttf_parser::name_id::FAMILY && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    /// Fix the font at a pixel size (the em height, in pixels) for measuring and drawing.
    /// As with most rasterizers the size is a request: the resulting line spacing is
    /// derived from the font's own ascent, descent and line gap.
    pub fn sized(&self, pixel_size: u32) -> Result<SizedFont<'_>> {
        if pixel_size == 0 {
            return Err(Error::InvalidPixelSize(pixel_size));
        }

        let face = self.face.as_face_ref();
        let scale = pixel_size as f32 / face.units_per_em() as f32;
        let line_spacing = Px::round(
            (face.ascender() as f32 - face.descender() as f32 + face.line_gap() as f32) * scale,
        );
        let bbox_y_max = Px::ceil(face.global_bounding_box().y_max as f32 * scale);

        debug!(%pixel_size, %line_spacing, %bbox_y_max, "sized font");

        Ok(SizedFont {
            font: self,
            scale,
            line_spacing,
            bbox_y_max,
        })
    }
}

/// A [Font] at a fixed pixel size. This is the crate's [GlyphSource] for real fonts:
/// metrics are scaled from font units and rounded to whole pixels, and glyph outlines
/// are filled with anti-aliasing to produce coverage bitmaps.
pub struct SizedFont<'f> {
    font: &'f Font,
    scale: f32,
    line_spacing: Px,
    bbox_y_max: Px,
}

impl<'f> SizedFont<'f> {
    pub fn font(&self) -> &'f Font {
        self.font
    }

    /// Pixels per font unit
    pub fn scale(&self) -> f32 {
        self.scale
    }

    fn face(&self) -> &'f Face<'f> {
        self.font.face.as_face_ref()
    }

    fn advance_of(&self, gid: GlyphId) -> Px {
        Px::round(self.face().glyph_hor_advance(gid).unwrap_or_default() as f32 * self.scale)
    }

    fn rasterize(&self, gid: GlyphId, advance: Px) -> Option<Glyph> {
        let face = self.face();
        let bbox = face.glyph_bounding_box(gid)?;

        // pixel-aligned extents of the outline
        let left = (bbox.x_min as f32 * self.scale).floor();
        let right = (bbox.x_max as f32 * self.scale).ceil();
        let bottom = (bbox.y_min as f32 * self.scale).floor();
        let top = (bbox.y_max as f32 * self.scale).ceil();
        let columns = (right - left) as u32;
        let rows = (top - bottom) as u32;
        if columns == 0 || rows == 0 {
            return None;
        }

        let mut builder = PathBuilder::new(self.scale, left, top);
        face.outline_glyph(gid, &mut builder)?;
        let path = builder.finish()?;

        let mut pixmap = tiny_skia::Pixmap::new(columns, rows)?;
        let mut paint = tiny_skia::Paint::default();
        paint.set_color(tiny_skia::Color::WHITE);
        paint.anti_alias = true;
        pixmap.fill_path(
            &path,
            &paint,
            tiny_skia::FillRule::Winding,
            tiny_skia::Transform::identity(),
            None,
        );

        let columns = columns as usize;
        let rows = rows as usize;
        let pitch = columns.next_multiple_of(ROW_ALIGNMENT);
        let mut buffer = vec![0u8; pitch * rows];
        for (i, row) in pixmap.pixels().chunks_exact(columns).enumerate() {
            for (j, pixel) in row.iter().enumerate() {
                buffer[i * pitch + j] = pixel.alpha();
            }
        }

        Some(Glyph {
            metrics: GlyphMetrics {
                advance,
                bearing_y: Px(top as i32),
                width: Px(columns as i32),
                height: Px(rows as i32),
            },
            buffer,
            columns,
            rows,
            pitch,
        })
    }
}

impl GlyphSource for SizedFont<'_> {
    fn glyph(&self, codepoint: char) -> Glyph {
        let Some(gid) = self.face().glyph_index(codepoint) else {
            debug!(?codepoint, "no glyph for codepoint");
            return Glyph::default();
        };

        let advance = self.advance_of(gid);
        // glyphs without an outline (such as spaces) still take up room
        self.rasterize(gid, advance).unwrap_or_else(|| Glyph {
            metrics: GlyphMetrics {
                advance,
                ..Default::default()
            },
            ..Default::default()
        })
    }

    fn advance(&self, codepoint: char) -> Px {
        self.face()
            .glyph_index(codepoint)
            .map(|gid| self.advance_of(gid))
            .unwrap_or_default()
    }

    fn line_spacing(&self) -> Px {
        self.line_spacing
    }

    fn bbox_y_max(&self) -> Px {
        self.bbox_y_max
    }
}

/// Converts font-unit outlines into a tiny-skia path in bitmap space: scaled to pixels,
/// shifted so the bitmap's top-left is the origin and flipped so y grows downwards
struct PathBuilder {
    builder: tiny_skia::PathBuilder,
    scale: f32,
    left: f32,
    top: f32,
}

impl PathBuilder {
    fn new(scale: f32, left: f32, top: f32) -> Self {
        Self {
            builder: tiny_skia::PathBuilder::new(),
            scale,
            left,
            top,
        }
    }

    fn tx(&self, x: f32) -> f32 {
        x * self.scale - self.left
    }

    fn ty(&self, y: f32) -> f32 {
        self.top - y * self.scale
    }

    fn finish(self) -> Option<tiny_skia::Path> {
        self.builder.finish()
    }
}

impl OutlineBuilder for PathBuilder {
    fn move_to(&mut self, x: f32, y: f32) {
        self.builder.move_to(self.tx(x), self.ty(y));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.builder.line_to(self.tx(x), self.ty(y));
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.builder
            .quad_to(self.tx(x1), self.ty(y1), self.tx(x), self.ty(y));
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.builder.cubic_to(
            self.tx(x1),
            self.ty(y1),
            self.tx(x2),
            self.ty(y2),
            self.tx(x),
            self.ty(y),
        );
    }

    fn close(&mut self) {
        self.builder.close();
    }
}
