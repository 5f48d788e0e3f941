use fbtext::layout::Alignment;
use fbtext::{Boundary, Font, TextBlock};
use image::RgbImage;

fn main() {
    // any TTF/OTF font will do
    let font_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf".to_string());
    let font = Font::from_file(&font_path).expect("can load font");
    let face = font.sized(18).expect("can size font");

    let mut img = RgbImage::new(640, 480);

    // a centred heading, then a left-aligned paragraph that runs out of room
    let heading = TextBlock::new(Boundary::new(20, 20, 600, 40), Alignment::Center)
        .with_text(&lipsum::lipsum_title());
    heading.render(&face, &mut img).expect("can render heading");

    let body = TextBlock::new(Boundary::new(20, 70, 600, 390), Alignment::Left)
        .with_text(&lipsum::lipsum(400));
    let summary = body.render(&face, &mut img).expect("can render body");
    println!(
        "{} lines, {} words drawn, {} words did not fit",
        summary.lines, summary.placed, summary.dropped
    );

    img.save("lorem-ipsum.png").unwrap();
}
