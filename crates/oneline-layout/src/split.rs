// ABOUTME: Splits a rect into adjacent cells along one axis.
// ABOUTME: Cells take a fixed width plus a weighted share of what is left.

use serde::{Deserialize, Serialize};

use crate::Rect;

/// Gap between adjacent cells when the caller has no preference
pub const DEFAULT_SPACING: f32 = 5.0;

/// Sizing request for one cell of a split
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Cell {
    /// Share of the flexible width (0.0 = none)
    pub weight: f32,
    /// Width taken before the flexible share is handed out (0.0 = none)
    pub fixed_width: f32,
}

impl Cell {
    pub fn new(weight: f32, fixed_width: f32) -> Self {
        Self {
            weight,
            fixed_width,
        }
    }

    pub fn weighted(weight: f32) -> Self {
        Self::new(weight, 0.0)
    }

    pub fn fixed(fixed_width: f32) -> Self {
        Self::new(0.0, fixed_width)
    }

    /// Cells without width take no space and no spacing
    pub fn has_width(&self) -> bool {
        self.fixed_width > 0.0 || self.weight > 0.0
    }

    pub fn width(&self, weight_unit: f32) -> f32 {
        self.fixed_width + self.weight * weight_unit
    }
}

/// Split `rect` horizontally. `fixed_widths` pairs with `weights` by position;
/// entries without a partner are dropped.
pub fn split(
    rect: Rect,
    weights: &[f32],
    fixed_widths: Option<&[f32]>,
    spacing: f32,
) -> Vec<Rect> {
    let cells: Vec<Cell> = match fixed_widths {
        Some(fixed) => weights
            .iter()
            .zip(fixed)
            .map(|(&weight, &width)| Cell::new(weight, width))
            .collect(),
        None => weights.iter().map(|&weight| Cell::weighted(weight)).collect(),
    };
    split_cells(rect, &cells, spacing)
}

/// Split `rect` horizontally into `slices` equal cells
pub fn split_even(rect: Rect, slices: usize, spacing: f32) -> Vec<Rect> {
    split(rect, &vec![1.0; slices], None, spacing)
}

/// Split `rect` vertically; the same algorithm run on swapped axes.
///
/// `spacing` is honored here too. Older callers that relied on a vertical
/// gap of 5 regardless of the argument should pass [`DEFAULT_SPACING`].
pub fn split_v(
    rect: Rect,
    weights: &[f32],
    fixed_widths: Option<&[f32]>,
    spacing: f32,
) -> Vec<Rect> {
    split(rect.transpose(), weights, fixed_widths, spacing)
        .iter()
        .map(Rect::transpose)
        .collect()
}

pub fn split_v_even(rect: Rect, slices: usize, spacing: f32) -> Vec<Rect> {
    split_v(rect, &vec![1.0; slices], None, spacing)
}

/// Lay `cells` out left to right across `rect`, one rect per cell.
///
/// Widths are never clamped: fixed widths and spacing that overflow the
/// rect produce negative flexible shares.
pub fn split_cells(rect: Rect, cells: &[Cell], spacing: f32) -> Vec<Rect> {
    let unit = weight_unit(rect.width, cells, spacing);

    let mut next_x = rect.x;
    cells
        .iter()
        .map(|cell| {
            let width = cell.width(unit);
            let placed = Rect {
                x: next_x,
                y: rect.y,
                width,
                height: rect.height,
            };
            if cell.has_width() {
                next_x += width + spacing;
            }
            placed
        })
        .collect()
}

fn weight_unit(full_width: f32, cells: &[Cell], spacing: f32) -> f32 {
    let weights_sum: f32 = cells.iter().map(|c| c.weight).sum();
    // NaN sums fall back to fixed widths only
    if !(weights_sum > 0.0) {
        return 0.0;
    }

    let fixed_width: f32 = cells.iter().map(|c| c.fixed_width).sum();
    let with_width = cells.iter().filter(|c| c.has_width()).count() as f32;
    let spaces_width = (with_width - 1.0) * spacing;

    (full_width - fixed_width - spaces_width) / weights_sum
}
