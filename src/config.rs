use std::ffi::OsString;
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use fbtext::{layout::Alignment, Boundary, FrameBufferGeometry, TextBlock};

/// Draw words, wrapped to fit a box, onto a framebuffer device or into a PNG.
///
/// All positions and sizes are in screen pixels.
#[derive(Parser, Debug)]
#[command(name = "fbtext", version, disable_help_flag = true, disable_version_flag = true)]
pub struct Config {
    /// Any TTF or OTF font file
    pub font_file: PathBuf,

    /// The words to draw, in order
    #[arg(required = true)]
    pub words: Vec<OsString>,

    /// Clear the surface before writing
    #[arg(short, long)]
    pub clear: bool,

    /// Framebuffer device to draw on, e.g. /dev/fb0; draws into --output if not given
    #[arg(short, long, requires = "fb_geometry")]
    pub dev: Option<PathBuf>,

    /// Framebuffer layout as WIDTHxHEIGHTxBITS[:LINE_LENGTH], e.g. 1920x1080x32
    #[arg(long, requires = "dev")]
    pub fb_geometry: Option<FrameBufferGeometry>,

    /// Font height in pixels
    #[arg(short, long, default_value_t = 20)]
    pub font_size: u32,

    /// Log verbosity, 0 (errors only) to 4 (trace); RUST_LOG takes precedence
    #[arg(short, long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=4))]
    pub log_level: u8,

    /// Width of the bounding box
    #[arg(short, long, default_value_t = 500, value_parser = clap::value_parser!(i32).range(0..))]
    pub width: i32,

    /// Height of the bounding box
    #[arg(short, long, default_value_t = 500, value_parser = clap::value_parser!(i32).range(0..))]
    pub height: i32,

    /// Initial X coordinate
    #[arg(short, long, default_value_t = 5, allow_negative_numbers = true)]
    pub x: i32,

    /// Initial Y coordinate
    #[arg(short, long, default_value_t = 5, allow_negative_numbers = true)]
    pub y: i32,

    /// Line alignment: left or center
    #[arg(short, long, default_value_t = Alignment::Left)]
    pub align: Alignment,

    /// PNG file to draw into when no framebuffer device is given
    #[arg(short, long, default_value = "fbtext.png")]
    pub output: PathBuf,

    /// Size of the PNG canvas, as WIDTHxHEIGHT
    #[arg(long, default_value = "800x600", value_parser = parse_canvas)]
    pub canvas: (u32, u32),

    /// Show help
    #[arg(short = '?', long, action = ArgAction::Help)]
    #[allow(dead_code)]
    help: Option<bool>,

    /// Show version
    #[arg(short = 'v', long, action = ArgAction::Version)]
    #[allow(dead_code)]
    version: Option<bool>,
}

impl Config {
    pub fn boundary(&self) -> Boundary {
        Boundary::new(self.x, self.y, self.width, self.height)
    }

    /// The layout request described by the command line. Words are decoded from their
    /// raw bytes, so arguments that are not valid UTF-8 still draw (with replacement
    /// characters).
    pub fn text_block(&self) -> TextBlock {
        let mut block = TextBlock::new(self.boundary(), self.align);
        for word in self.words.iter() {
            block.push_word(word.as_encoded_bytes());
        }
        block
    }

    /// An `EnvFilter` directive for the numeric log level
    pub fn log_directive(&self) -> String {
        let level = match self.log_level {
            0 => "error",
            1 => "warn",
            2 => "info",
            3 => "debug",
            _ => "trace",
        };
        format!("fbtext={level}")
    }
}

fn parse_canvas(s: &str) -> Result<(u32, u32), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got `{s}`"))?;
    let w = w.trim().parse::<u32>().map_err(|e| e.to_string())?;
    let h = h.trim().parse::<u32>().map_err(|e| e.to_string())?;
    if w == 0 || h == 0 {
        return Err("canvas dimensions must be greater than zero".into());
    }
    Ok((w, h))
}
