//! Breaking measured words into lines and positioning those lines within a boundary.
//!
//! [`break_lines`](crate::layout::break_lines) is a greedy, single-pass word wrapper:
//! words are never split, never reordered, and once the boundary runs out of height the
//! remaining words are dropped. [`Alignment`](crate::layout::Alignment) then decides
//! where on the x-axis each line starts.
//!
//! # Example
//!
//! ```
//! use fbtext::layout::{break_lines, Alignment};
//! use fbtext::{Boundary, MeasuredWord, Px};
//!
//! let words: Vec<MeasuredWord> = [40, 40, 40]
//!     .into_iter()
//!     .map(|w| MeasuredWord::with_extent(vec!['x'], Px(w), Px(20)))
//!     .collect();
//! let boundary = Boundary::new(0, 0, 100, 1000);
//!
//! let layout = break_lines(&boundary, Px(10), Px(20), &words).expect("can layout");
//! assert_eq!(layout.partition(), vec![(vec![0, 1], Px(0)), (vec![2], Px(20))]);
//!
//! let x = Alignment::Center.offset_x(&layout.lines[1], &boundary, Px(10));
//! assert_eq!(x, Px(30));
//! ```

mod align;
mod lines;

pub use align::*;
pub use lines::*;
