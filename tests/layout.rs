mod common;

use common::{words, Lcg, LINE_SPACING};
use fbtext::layout::{break_lines, Alignment};
use fbtext::{Boundary, Px};
use pretty_assertions::assert_eq;

#[test]
fn two_forty_pixel_words_share_a_line() {
    let words = words(&[40, 40, 40]);
    let boundary = Boundary::new(0, 0, 100, 1000);
    let layout = break_lines(&boundary, Px(10), LINE_SPACING, &words).expect("can layout");
    assert_eq!(
        layout.partition(),
        vec![(vec![0, 1], Px(0)), (vec![2], Px(20))]
    );
}

#[test]
fn short_boundary_keeps_only_the_first_line() {
    let words = words(&[60, 60, 60, 60]);
    let boundary = Boundary::new(0, 0, 100, 30);
    let layout = break_lines(&boundary, Px(10), LINE_SPACING, &words).expect("can layout");
    assert_eq!(layout.partition(), vec![(vec![0], Px(0))]);
    assert_eq!(layout.dropped, 3);
}

#[test]
fn oversized_word_overflows_alone() {
    let words = words(&[200]);
    let boundary = Boundary::new(0, 0, 100, 1000);
    let layout = break_lines(&boundary, Px(10), LINE_SPACING, &words).expect("can layout");
    assert_eq!(layout.partition(), vec![(vec![0], Px(0))]);
    assert_eq!(Alignment::Left.offset_x(&layout.lines[0], &boundary, Px(10)), Px(0));
}

#[test]
fn layout_invariants_hold_for_many_inputs() {
    let mut rng = Lcg(0x5eed);
    for _ in 0..500 {
        let boundary = Boundary::new(
            rng.range(-20, 50),
            rng.range(-20, 50),
            rng.range(1, 300),
            rng.range(1, 300),
        );
        let space = Px(rng.range(0, 15));
        let spacing = Px(rng.range(1, 40));
        let count = rng.range(0, 40) as usize;
        let widths: Vec<i32> = (0..count).map(|_| rng.range(0, 120)).collect();
        let words = words(&widths);

        let layout = break_lines(&boundary, space, spacing, &words).expect("can layout");

        // every word appears at most once, in input order, and the dropped words are
        // exactly the tail
        let flat: Vec<usize> = layout.lines.iter().flat_map(|l| l.word_indices()).collect();
        assert_eq!(flat, (0..layout.placed).collect::<Vec<_>>());
        assert_eq!(layout.placed + layout.dropped, words.len());

        for (n, line) in layout.lines.iter().enumerate() {
            assert!(!line.words.is_empty());
            assert_eq!(line.y, boundary.y + spacing * n as i32);
            assert!(line.y + spacing < boundary.bottom());

            if line.words.len() > 1 {
                let reserved: Px = line.words.iter().map(|w| w.width() + space).sum();
                assert!(reserved - space <= boundary.width);
            }

            let x = Alignment::Center.offset_x(line, &boundary, space);
            assert_eq!(Alignment::Center.offset_x(line, &boundary, space), x);
        }

        // a line is only closed when the next word genuinely did not fit
        for pair in layout.lines.windows(2) {
            let (line, next) = (&pair[0], &pair[1]);
            let reserved: Px = line.words.iter().map(|w| w.width() + space).sum();
            assert!(reserved + next.words[0].width() + space > boundary.width);
        }
    }
}
