mod config;

use anyhow::{Context, Result};
use clap::Parser;
use fbtext::{Font, FrameBuffer, GlyphSource};
use image::RgbImage;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::config::Config;

fn main() -> Result<()> {
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_directive())),
        )
        .with_writer(std::io::stderr)
        .init();

    let font = Font::from_file(&config.font_file)
        .with_context(|| format!("can't load font file {}", config.font_file.display()))?;
    let face = font
        .sized(config.font_size)
        .with_context(|| format!("can't set font size to {}", config.font_size))?;
    debug!(
        space = %face.advance(' '),
        line_spacing = %face.line_spacing(),
        "font face initialized"
    );

    let block = config.text_block();
    debug!(boundary = ?block.boundary, words = block.words.len(), "starting layout");

    match (&config.dev, config.fb_geometry) {
        (Some(dev), Some(geometry)) => {
            let mut fb = if config.clear {
                FrameBuffer::new(geometry)?
            } else {
                FrameBuffer::load(dev, geometry)
                    .with_context(|| format!("can't read framebuffer {}", dev.display()))?
            };
            block.render(&face, &mut fb)?;
            fb.write_to(dev)
                .with_context(|| format!("can't write framebuffer {}", dev.display()))?;
        }
        _ => {
            // a fresh canvas is already clear
            let (width, height) = config.canvas;
            let mut img = RgbImage::new(width, height);
            block.render(&face, &mut img)?;
            img.save(&config.output)
                .with_context(|| format!("can't write {}", config.output.display()))?;
            info!(path = %config.output.display(), "wrote image");
        }
    }

    Ok(())
}
