// ABOUTME: Rectangle layout for drawing several fields on one line.
// ABOUTME: Splits rects by weight and fixed width, horizontally or vertically.

mod line;
mod rect;
mod split;

pub use line::{ArrayField, Field, Highlight, LineLayout, LineRects, Part, Placed, BUTTON_WIDTH};
pub use rect::Rect;
pub use split::{split, split_cells, split_even, split_v, split_v_even, Cell, DEFAULT_SPACING};
